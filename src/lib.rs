mod camera;
mod classifier;
mod error;
mod highlight;
mod lasso;
mod mask;
mod polygon;
mod projector;

#[cfg(feature = "worker")]
mod worker;

use std::time::{Duration, Instant};

pub use camera::*;
pub use classifier::*;
pub use error::*;
pub use highlight::*;
pub use lasso::*;
pub use mask::*;
pub use polygon::*;
pub use projector::*;

#[cfg(feature = "worker")]
pub use worker::*;

pub use glam;

/// The result of a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    /// The selection mask.
    pub mask: SelectionMask,
    /// The number of selected points.
    pub selected_count: usize,
    /// The wall-clock time of projection and classification.
    pub elapsed: Duration,
}

impl SelectionResult {
    /// Get the elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// The lasso point selector.
///
/// It projects the point cloud with a camera snapshot and classifies the projected points
/// against a lasso polygon, all on the calling thread. The screen position buffer is kept
/// between selections.
#[derive(Debug, Default)]
pub struct Selector {
    screen_positions: Vec<f32>,
}

impl Selector {
    /// Create a new selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the points of `positions` inside `polygon`.
    ///
    /// `positions` is a flat `[x0, y0, z0, x1, ..]` world position buffer.
    ///
    /// # Panics
    ///
    /// Panics if `positions` length is not a multiple of 3 or `transform` is not valid.
    pub fn select(
        &mut self,
        positions: &[f32],
        transform: &CameraTransform,
        polygon: &Polygon,
    ) -> SelectionResult {
        let start = Instant::now();
        let mask = project_and_classify(positions, transform, polygon, &mut self.screen_positions);
        let elapsed = start.elapsed();
        let point_count = mask.len();
        let selected_count = mask.selected_count();

        log::info!(
            "Selected {selected_count} of {point_count} points in {:.3} ms",
            elapsed.as_secs_f64() * 1000.0
        );

        SelectionResult {
            mask,
            selected_count,
            elapsed,
        }
    }

    /// Select with the outcome of a lasso gesture.
    ///
    /// Returns `None` if the gesture was discarded.
    pub fn select_with_lasso(
        &mut self,
        event: &LassoEvent,
        positions: &[f32],
        transform: &CameraTransform,
    ) -> Option<SelectionResult> {
        match event {
            LassoEvent::Completed(polygon) => Some(self.select(positions, transform, polygon)),
            LassoEvent::Discarded => None,
        }
    }

    /// Get the screen positions of the last selection.
    ///
    /// A degenerate polygon skips projection, every point is then [`UNPROJECTABLE`].
    pub fn screen_positions(&self) -> &[f32] {
        &self.screen_positions
    }
}

/// Assert the inputs of a projection pass.
fn assert_projectable(positions: &[f32], transform: &CameraTransform) {
    assert!(
        positions.len() % 3 == 0,
        "positions length {} is not a multiple of 3",
        positions.len()
    );
    assert!(
        transform.is_valid(),
        "camera transform is not finite or viewport is empty: {transform:?}"
    );
}

/// Project `positions` into `screen_positions` and classify them against `polygon`.
///
/// A degenerate polygon skips projection and fills `screen_positions` with [`UNPROJECTABLE`],
/// so the buffer always holds 2 values per point.
fn project_and_classify(
    positions: &[f32],
    transform: &CameraTransform,
    polygon: &Polygon,
    screen_positions: &mut Vec<f32>,
) -> SelectionMask {
    assert_projectable(positions, transform);
    let point_count = positions.len() / 3;

    if polygon.is_degenerate() {
        screen_positions.clear();
        screen_positions.resize(point_count * 2, UNPROJECTABLE.x);
        return SelectionMask::new(point_count);
    }

    log::debug!("Projecting {point_count} points");
    project_points_to_screen_into(positions, transform, screen_positions);

    log::debug!("Classifying {point_count} points");
    batch_points_in_polygon(screen_positions, polygon)
}
