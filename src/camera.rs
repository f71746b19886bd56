use std::ops::Range;

use glam::*;

/// A camera that can produce view and projection matrices.
pub trait CameraTrait {
    /// Get the view matrix.
    fn view(&self) -> Mat4;

    /// Get the projection matrix.
    fn projection(&self, aspect_ratio: f32) -> Mat4;
}

/// A camera.
#[derive(Debug, Clone)]
pub struct Camera {
    /// The position of the camera.
    pub pos: Vec3,
    /// The z range of the camera.
    pub z: Range<f32>,
    /// The vertical FOV.
    pub vertical_fov: f32,
    /// The pitch.
    pub pitch: f32,
    /// The yaw.
    pub yaw: f32,
}

impl Camera {
    /// Up direction.
    pub const UP: Vec3 = Vec3::Y;

    /// The pitch limit.
    pub const PITCH_LIMIT: Range<f32> =
        -std::f32::consts::FRAC_PI_2 + 1e-6..std::f32::consts::FRAC_PI_2 - 1e-6;

    /// Create a new camera.
    pub fn new(z: Range<f32>, vertical_fov: f32) -> Self {
        Self {
            pos: Vec3::ZERO,
            z,
            vertical_fov,
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    /// Place the camera at `pos` facing `target`.
    pub fn look_at(&mut self, pos: Vec3, target: Vec3) {
        let dir = (target - pos).normalize();
        self.pos = pos;
        self.pitch = dir
            .y
            .asin()
            .clamp(Self::PITCH_LIMIT.start, Self::PITCH_LIMIT.end);
        self.yaw = dir.x.atan2(dir.z).rem_euclid(2.0 * std::f32::consts::PI);
    }

    /// Get the forward vector.
    pub fn get_forward(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }
}

impl CameraTrait for Camera {
    fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.pos, self.get_forward(), Self::UP)
    }

    fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.vertical_fov, aspect_ratio, self.z.start, self.z.end)
    }
}

/// A snapshot of the camera at the instant of selection.
///
/// This holds the combined view-projection matrix and the viewport size in pixels. It is taken
/// by value, so moving the camera afterwards does not affect a selection already in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// The combined view-projection matrix.
    pub view_proj: Mat4,
    /// The viewport size in pixels.
    pub size: Vec2,
}

impl CameraTransform {
    /// Create a new camera transform.
    pub fn new(camera: &impl CameraTrait, size: UVec2) -> Self {
        Self::from_view_proj(
            camera.projection(size.x as f32 / size.y as f32) * camera.view(),
            size,
        )
    }

    /// Create a new camera transform from an already combined view-projection matrix.
    pub fn from_view_proj(view_proj: Mat4, size: UVec2) -> Self {
        Self {
            view_proj,
            size: size.as_vec2(),
        }
    }

    /// Get the viewport width in pixels.
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Get the viewport height in pixels.
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Check whether the matrix and viewport are usable for projection.
    pub fn is_valid(&self) -> bool {
        self.view_proj.is_finite() && self.size.x > 0.0 && self.size.y > 0.0
    }
}
