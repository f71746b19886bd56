use std::{
    sync::{Arc, mpsc},
    thread::JoinHandle,
    time::{Duration, Instant},
};

use crate::{
    CameraTransform, Error, Polygon, SelectionMask, assert_projectable,
    batch_points_in_polygon_into, project_and_classify,
};

/// The sequence number of a worker request.
///
/// Numbers increase monotonically per [`SelectionWorker`], so a larger number is a newer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(pub u64);

/// A selection request to the worker.
///
/// The buffers are moved into the worker, never copied.
#[derive(Debug)]
pub enum WorkerRequest {
    /// Classify already projected screen positions.
    Select {
        screen_positions: Vec<f32>,
        polygon: Polygon,
    },

    /// Project world positions with the camera snapshot, then classify.
    ///
    /// `screen_positions` is the buffer to project into, pass back the one from a previous
    /// [`WorkerResponse`] to avoid reallocating it.
    ProjectAndSelect {
        positions: Arc<[f32]>,
        transform: CameraTransform,
        polygon: Polygon,
        screen_positions: Vec<f32>,
    },
}

impl WorkerRequest {
    /// Assert the buffer lengths and the camera transform.
    fn assert_valid(&self) {
        match self {
            Self::Select {
                screen_positions, ..
            } => assert!(
                screen_positions.len() % 2 == 0,
                "screen positions length {} is not a multiple of 2",
                screen_positions.len()
            ),
            Self::ProjectAndSelect {
                positions,
                transform,
                ..
            } => assert_projectable(positions, transform),
        }
    }
}

/// A selection result from the worker.
#[derive(Debug)]
pub struct WorkerResponse {
    /// The sequence number of the request.
    pub seq: RequestSeq,
    /// The selection mask.
    pub mask: SelectionMask,
    /// The number of selected points.
    pub selected_count: usize,
    /// The time spent in the worker.
    pub processing_time: Duration,
    /// The screen positions, 2 values per mask entry, handed back so the caller can reuse the
    /// buffer.
    pub screen_positions: Vec<f32>,
}

/// A request in the worker queue.
struct Envelope {
    seq: RequestSeq,
    request: WorkerRequest,
    reply: oneshot::Sender<WorkerResponse>,
}

/// A submitted selection that has not been received yet.
pub struct PendingSelection {
    seq: RequestSeq,
    rx: oneshot::Receiver<WorkerResponse>,
}

impl std::fmt::Debug for PendingSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingSelection")
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}

impl PendingSelection {
    /// Get the sequence number.
    pub fn seq(&self) -> RequestSeq {
        self.seq
    }

    /// Block until the result arrives.
    pub fn wait(self) -> Result<WorkerResponse, Error> {
        Ok(self.rx.recv()?)
    }

    /// Wait for the result asynchronously.
    pub async fn wait_async(self) -> Result<WorkerResponse, Error> {
        Ok(self.rx.await?)
    }

    /// Take the result if it has arrived.
    pub fn try_take(&self) -> Result<Option<WorkerResponse>, Error> {
        match self.rx.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(oneshot::TryRecvError::Empty) => Ok(None),
            Err(oneshot::TryRecvError::Disconnected) => Err(Error::WorkerDisconnected),
        }
    }
}

/// A background thread that runs selections off the interactive thread.
///
/// This requires the `worker` feature.
#[derive(Debug)]
pub struct SelectionWorker {
    /// The request sender, `None` once shut down.
    tx: Option<mpsc::Sender<Envelope>>,
    /// The worker thread.
    handle: Option<JoinHandle<()>>,
    /// The next sequence number.
    next_seq: u64,
}

impl SelectionWorker {
    /// Spawn a new selection worker.
    pub fn new() -> Result<Self, Error> {
        let (tx, rx) = mpsc::channel::<Envelope>();

        log::debug!("Spawning selection worker");
        let handle = std::thread::Builder::new()
            .name("lasso-select-worker".to_string())
            .spawn(move || Self::run(rx))?;

        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
            next_seq: 0,
        })
    }

    /// Submit a request.
    ///
    /// # Panics
    ///
    /// Panics on the calling thread if the request buffers have the wrong length or the camera
    /// transform is not valid, the worker keeps running.
    pub fn submit(&mut self, request: WorkerRequest) -> Result<PendingSelection, Error> {
        request.assert_valid();

        let tx = self.tx.as_ref().ok_or(Error::WorkerDisconnected)?;

        let seq = RequestSeq(self.next_seq);
        self.next_seq += 1;

        let (reply, rx) = oneshot::channel();
        tx.send(Envelope {
            seq,
            request,
            reply,
        })
        .map_err(|_| Error::WorkerDisconnected)?;

        log::debug!("Submitted selection request {}", seq.0);

        Ok(PendingSelection { seq, rx })
    }

    /// Stop accepting requests and wait for the queued ones to finish.
    pub fn shutdown(&mut self) {
        self.tx = None;
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Selection worker panicked");
            }
        }
    }

    /// The worker loop.
    fn run(rx: mpsc::Receiver<Envelope>) {
        for Envelope {
            seq,
            request,
            reply,
        } in rx
        {
            let start = Instant::now();

            let (mask, screen_positions) = match request {
                WorkerRequest::Select {
                    screen_positions,
                    polygon,
                } => {
                    let mut mask = SelectionMask::default();
                    batch_points_in_polygon_into(&screen_positions, &polygon, &mut mask);
                    (mask, screen_positions)
                }
                WorkerRequest::ProjectAndSelect {
                    positions,
                    transform,
                    polygon,
                    mut screen_positions,
                } => {
                    let mask = project_and_classify(
                        &positions,
                        &transform,
                        &polygon,
                        &mut screen_positions,
                    );
                    (mask, screen_positions)
                }
            };

            let response = WorkerResponse {
                seq,
                selected_count: mask.selected_count(),
                mask,
                processing_time: start.elapsed(),
                screen_positions,
            };

            if let Err(e) = reply.send(response) {
                log::debug!("Selection request {} was abandoned: {e:?}", seq.0);
            }
        }

        log::debug!("Selection worker stopped");
    }
}

impl Drop for SelectionWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Tracks the newest submitted request so that older results are never applied over it.
#[derive(Debug, Default)]
pub struct LatestSelection {
    latest: Option<RequestSeq>,
}

impl LatestSelection {
    /// Create a new tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted request as the newest.
    pub fn track(&mut self, pending: &PendingSelection) {
        self.latest = self.latest.max(Some(pending.seq()));
    }

    /// Get the newest submitted request.
    pub fn latest(&self) -> Option<RequestSeq> {
        self.latest
    }

    /// Accept `response` if it belongs to the newest request, otherwise drop it.
    pub fn accept(&self, response: WorkerResponse) -> Option<WorkerResponse> {
        match self.latest {
            Some(latest) if response.seq == latest => Some(response),
            _ => {
                log::warn!(
                    "Discarding stale selection result {} (latest is {:?})",
                    response.seq.0,
                    self.latest.map(|seq| seq.0)
                );
                None
            }
        }
    }
}
