use glam::*;

use crate::CameraTransform;

/// The screen position written for points with a zero homogeneous `w`.
///
/// It can never fall inside any polygon bounds, so such points are never selected.
pub const UNPROJECTABLE: Vec2 = Vec2::NEG_INFINITY;

/// Project a flat `[x0, y0, z0, x1, ..]` world position buffer to screen pixels.
///
/// The output is a flat `[sx0, sy0, sx1, ..]` buffer with the origin at the top left and y
/// pointing down. See [`project_points_to_screen_into`].
///
/// # Panics
///
/// Panics if `positions` length is not a multiple of 3 or `transform` is not valid.
pub fn project_points_to_screen(positions: &[f32], transform: &CameraTransform) -> Vec<f32> {
    let mut screen_positions = Vec::new();
    project_points_to_screen_into(positions, transform, &mut screen_positions);
    screen_positions
}

/// Same as [`project_points_to_screen`], but reuses the storage of `screen_positions`.
///
/// The buffer is resized to `2N` once, then every point is written in place. Points whose
/// clip-space `w` is exactly zero are written as [`UNPROJECTABLE`].
///
/// # Panics
///
/// Panics if `positions` length is not a multiple of 3 or `transform` is not valid.
pub fn project_points_to_screen_into(
    positions: &[f32],
    transform: &CameraTransform,
    screen_positions: &mut Vec<f32>,
) {
    assert!(
        positions.len() % 3 == 0,
        "positions length {} is not a multiple of 3",
        positions.len()
    );
    assert!(
        transform.is_valid(),
        "camera transform is not finite or viewport is empty: {transform:?}"
    );

    let point_count = positions.len() / 3;
    screen_positions.clear();
    screen_positions.resize(point_count * 2, 0.0);

    let m = &transform.view_proj;
    let (r0, r1, r3) = (m.row(0), m.row(1), m.row(3));
    let half_width = transform.width() * 0.5;
    let half_height = transform.height() * 0.5;

    for (out, pos) in screen_positions
        .chunks_exact_mut(2)
        .zip(positions.chunks_exact(3))
    {
        let (x, y, z) = (pos[0], pos[1], pos[2]);

        let w = r3.x * x + r3.y * y + r3.z * z + r3.w;
        if w == 0.0 {
            out[0] = UNPROJECTABLE.x;
            out[1] = UNPROJECTABLE.y;
            continue;
        }

        let ndc_x = (r0.x * x + r0.y * y + r0.z * z + r0.w) / w;
        let ndc_y = (r1.x * x + r1.y * y + r1.z * z + r1.w) / w;

        out[0] = (ndc_x + 1.0) * half_width;
        out[1] = (1.0 - ndc_y) * half_height;
    }
}

/// View a flat screen position buffer as [`Vec2`]s.
///
/// # Panics
///
/// Panics if `screen_positions` has an odd length.
pub fn screen_positions_as_vec2(screen_positions: &[f32]) -> &[Vec2] {
    bytemuck::cast_slice(screen_positions)
}
