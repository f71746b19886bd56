#![allow(dead_code)]

use lasso_select::{Camera, CameraTransform, Polygon, glam::*};

pub const VIEWPORT: UVec2 = UVec2::new(800, 600);

pub fn square(min: f32, max: f32) -> Polygon {
    Polygon::new(vec![
        vec2(min, min),
        vec2(max, min),
        vec2(max, max),
        vec2(min, max),
    ])
}

pub fn camera() -> Camera {
    let mut camera = Camera::new(0.1..100.0, 60f32.to_radians());
    camera.look_at(vec3(0.0, 0.0, 5.0), Vec3::ZERO);
    camera
}

pub fn camera_transform() -> CameraTransform {
    CameraTransform::new(&camera(), VIEWPORT)
}

/// A transform that maps `(x, y, z)` straight to pixel coordinates `(x, y)` of [`VIEWPORT`].
pub fn pixel_transform() -> CameraTransform {
    let size = VIEWPORT.as_vec2();
    let to_ndc = Mat4::from_cols(
        vec4(2.0 / size.x, 0.0, 0.0, 0.0),
        vec4(0.0, -2.0 / size.y, 0.0, 0.0),
        vec4(0.0, 0.0, 1.0, 0.0),
        vec4(-1.0, 1.0, 0.0, 1.0),
    );
    CameraTransform::from_view_proj(to_ndc, VIEWPORT)
}

/// Flat screen positions along a horizontal line at `y`, one per `x`.
pub fn screen_row(xs: impl IntoIterator<Item = f32>, y: f32) -> Vec<f32> {
    xs.into_iter().flat_map(|x| [x, y]).collect()
}
