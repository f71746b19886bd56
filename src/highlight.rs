use glam::*;

use crate::SelectionMask;

/// Colors the selected points of a point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionHighlight {
    /// The RGB color of selected points.
    pub color: Vec3,
}

impl SelectionHighlight {
    /// Create a new highlight.
    pub fn new(color: Vec3) -> Self {
        Self { color }
    }

    /// Write the highlight into a flat RGB `colors` buffer.
    ///
    /// Selected points get [`SelectionHighlight::color`], the others are restored from
    /// `base_colors`, so the previous selection never lingers.
    ///
    /// # Panics
    ///
    /// Panics if `colors` or `base_colors` do not hold exactly 3 values per mask entry.
    pub fn apply(&self, colors: &mut [f32], base_colors: &[f32], mask: &SelectionMask) {
        assert_eq!(colors.len(), mask.len() * 3, "colors length mismatch");
        assert_eq!(base_colors.len(), mask.len() * 3, "base colors length mismatch");

        let highlight = self.color.to_array();
        for ((color, base), &flag) in colors
            .chunks_exact_mut(3)
            .zip(base_colors.chunks_exact(3))
            .zip(mask.as_bytes())
        {
            if flag != 0 {
                color.copy_from_slice(&highlight);
            } else {
                color.copy_from_slice(base);
            }
        }
    }
}

impl Default for SelectionHighlight {
    fn default() -> Self {
        Self::new(vec3(1.0, 0.2, 0.2))
    }
}
