use crate::{Polygon, SelectionMask};

/// Classify every screen point against the lasso polygon.
///
/// `screen_positions` is a flat `[x0, y0, x1, y1, ..]` buffer of `N` points, the returned mask
/// has `N` flags in the same order.
///
/// Points outside the polygon bounds are rejected with four comparisons, only the rest go
/// through the even-odd test. A degenerate polygon yields an all-zero mask.
///
/// # Panics
///
/// Panics if `screen_positions` has an odd length.
pub fn batch_points_in_polygon(screen_positions: &[f32], polygon: &Polygon) -> SelectionMask {
    let mut mask = SelectionMask::default();
    batch_points_in_polygon_into(screen_positions, polygon, &mut mask);
    mask
}

/// Same as [`batch_points_in_polygon`], but reuses the storage of `mask`.
///
/// The previous content of `mask` is discarded.
///
/// # Panics
///
/// Panics if `screen_positions` has an odd length.
pub fn batch_points_in_polygon_into(
    screen_positions: &[f32],
    polygon: &Polygon,
    mask: &mut SelectionMask,
) {
    assert!(
        screen_positions.len() % 2 == 0,
        "screen positions length {} is not a multiple of 2",
        screen_positions.len()
    );

    let point_count = screen_positions.len() / 2;
    mask.reset(point_count);

    if polygon.is_degenerate() {
        log::debug!("Skipping classification of {point_count} points, degenerate polygon");
        return;
    }

    let bounds = polygon.bounds();

    // Flat vertex arrays keep the inner loop off the structured vertices.
    let (xs, ys): (Vec<f32>, Vec<f32>) = polygon.vertices().iter().map(|v| (v.x, v.y)).unzip();
    let vertex_count = xs.len();

    for (flag, pos) in mask
        .as_bytes_mut()
        .iter_mut()
        .zip(screen_positions.chunks_exact(2))
    {
        let (x, y) = (pos[0], pos[1]);

        if !bounds.contains(x, y) {
            continue;
        }

        let mut inside = false;
        let mut j = vertex_count - 1;
        for i in 0..vertex_count {
            let (xi, yi, xj, yj) = (xs[i], ys[i], xs[j], ys[j]);
            if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }

        *flag = inside as u8;
    }
}
