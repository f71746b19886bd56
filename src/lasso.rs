use std::time::{Duration, Instant};

use glam::*;

use crate::Polygon;

bitflags::bitflags! {
    /// The pointer buttons held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        const PRIMARY = 1 << 0;
        const SECONDARY = 1 << 1;
        const AUXILIARY = 1 << 2;
    }
}

/// The lasso capture configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LassoConfig {
    /// The squared distance in pixels a pointer must travel from the last vertex before a new
    /// vertex is recorded.
    pub min_distance_sq: f32,
    /// The minimum vertex count for a gesture to produce a polygon.
    pub min_vertices: usize,
    /// How long the closed path stays visible after completion.
    pub linger: Duration,
    /// The buttons that start a gesture.
    pub trigger: PointerButtons,
}

impl Default for LassoConfig {
    fn default() -> Self {
        Self {
            min_distance_sq: 16.0,
            min_vertices: 3,
            linger: Duration::from_millis(300),
            trigger: PointerButtons::PRIMARY,
        }
    }
}

/// The overlay drawing of the lasso path.
///
/// This is purely cosmetic, the host implements it with whatever renders its viewport.
pub trait LassoPreview {
    /// Draw the path, `closed` connects the last vertex back to the first.
    fn draw(&mut self, path: &[Vec2], closed: bool);

    /// Clear the drawing.
    fn clear(&mut self);
}

impl LassoPreview for () {
    fn draw(&mut self, _path: &[Vec2], _closed: bool) {}

    fn clear(&mut self) {}
}

/// The lasso capture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LassoState {
    /// No gesture.
    Idle,

    /// The pointer is held down and the path is being recorded.
    Drawing,

    /// The gesture is completed and the closed path is still shown until `until`.
    Lingering { until: Instant },
}

/// The outcome of a gesture ending.
#[derive(Debug, Clone, PartialEq)]
pub enum LassoEvent {
    /// The gesture produced a polygon to select with.
    Completed(Polygon),

    /// The gesture had too few vertices and was dropped.
    Discarded,
}

/// Captures a freehand lasso polygon from pointer events.
///
/// Vertices closer than [`LassoConfig::min_distance_sq`] to the last recorded one are skipped,
/// which bounds the polygon size without visibly changing its shape.
#[derive(Debug)]
pub struct LassoCapture<P: LassoPreview = ()> {
    /// The configuration.
    config: LassoConfig,
    /// The state.
    state: LassoState,
    /// The recorded path.
    path: Vec<Vec2>,
    /// The preview.
    preview: P,
}

impl LassoCapture {
    /// Create a new lasso capture without a preview.
    pub fn new(config: LassoConfig) -> Self {
        Self::new_with_preview(config, ())
    }
}

impl<P: LassoPreview> LassoCapture<P> {
    /// Create a new lasso capture drawing to `preview`.
    pub fn new_with_preview(config: LassoConfig, preview: P) -> Self {
        Self {
            config,
            state: LassoState::Idle,
            path: Vec::new(),
            preview,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &LassoConfig {
        &self.config
    }

    /// Get the state.
    pub fn state(&self) -> LassoState {
        self.state
    }

    /// Get the path recorded so far.
    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Get the preview.
    pub fn preview(&self) -> &P {
        &self.preview
    }

    /// Check if a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        self.state == LassoState::Drawing
    }

    /// Handle a pointer press.
    ///
    /// A press with a trigger button starts a new gesture at `pos`, replacing any lingering path.
    pub fn pointer_down(&mut self, pos: Vec2, buttons: PointerButtons) {
        if !buttons.intersects(self.config.trigger) {
            return;
        }

        log::trace!("Lasso started at {pos}");

        self.path.clear();
        self.path.push(pos);
        self.state = LassoState::Drawing;
        self.preview.draw(&self.path, false);
    }

    /// Handle a pointer move.
    ///
    /// Returns whether a vertex was recorded.
    pub fn pointer_move(&mut self, pos: Vec2) -> bool {
        if self.state != LassoState::Drawing {
            return false;
        }

        match self.path.last() {
            Some(last) if last.distance_squared(pos) <= self.config.min_distance_sq => false,
            _ => {
                log::trace!("Lasso vertex {} at {pos}", self.path.len());

                self.path.push(pos);
                self.preview.draw(&self.path, false);
                true
            }
        }
    }

    /// Handle a pointer release at `now`.
    ///
    /// Returns `None` if no gesture was in progress.
    pub fn pointer_up(&mut self, now: Instant) -> Option<LassoEvent> {
        if self.state != LassoState::Drawing {
            return None;
        }

        if self.path.len() < self.config.min_vertices.max(3) {
            log::debug!("Discarding lasso with {} vertices", self.path.len());

            self.path.clear();
            self.state = LassoState::Idle;
            self.preview.clear();
            return Some(LassoEvent::Discarded);
        }

        log::debug!("Lasso completed with {} vertices", self.path.len());

        self.preview.draw(&self.path, true);
        self.state = LassoState::Lingering {
            until: now + self.config.linger,
        };

        Some(LassoEvent::Completed(Polygon::new(self.path.clone())))
    }

    /// Handle the pointer leaving the drawing surface, same as [`LassoCapture::pointer_up`].
    pub fn pointer_leave(&mut self, now: Instant) -> Option<LassoEvent> {
        self.pointer_up(now)
    }

    /// Clear the lingering closed path once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if let LassoState::Lingering { until } = self.state {
            if now >= until {
                self.path.clear();
                self.state = LassoState::Idle;
                self.preview.clear();
            }
        }
    }
}

impl Default for LassoCapture {
    fn default() -> Self {
        Self::new(LassoConfig::default())
    }
}
