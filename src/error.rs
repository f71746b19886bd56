use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "worker")]
    #[error("{0}")]
    WorkerSpawn(#[from] std::io::Error),
    #[cfg(feature = "worker")]
    #[error("selection worker is no longer running")]
    WorkerDisconnected,
    #[cfg(feature = "worker")]
    #[error("{0}")]
    WorkerResultRecv(#[from] oneshot::RecvError),
}
