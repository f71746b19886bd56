use glam::*;

/// The axis-aligned bounding box of a polygon in screen space.
///
/// The bounds of an empty polygon are inverted (`min > max`), so [`PolygonBounds::contains`]
/// rejects every point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl PolygonBounds {
    /// The empty bounds.
    pub const EMPTY: Self = Self {
        min_x: f32::INFINITY,
        max_x: f32::NEG_INFINITY,
        min_y: f32::INFINITY,
        max_y: f32::NEG_INFINITY,
    };

    /// Check if the bounds contain the point, edges included.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Check if the bounds are empty.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

/// Get the tightest axis-aligned bounds around `vertices`.
pub fn polygon_bounds(vertices: &[Vec2]) -> PolygonBounds {
    vertices
        .iter()
        .fold(PolygonBounds::EMPTY, |bounds, v| PolygonBounds {
            min_x: bounds.min_x.min(v.x),
            max_x: bounds.max_x.max(v.x),
            min_y: bounds.min_y.min(v.y),
            max_y: bounds.max_y.max(v.y),
        })
}

/// Check if `point` is inside the polygon formed by `vertices` with the even-odd rule.
///
/// The last vertex connects back to the first. Polygons with fewer than 3 vertices have no
/// interior and always return `false`. Points exactly on an edge or vertex may go either way.
pub fn is_point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (vi, vj) = (vertices[i], vertices[j]);

        // The straddle check guarantees `vi.y != vj.y` for the division.
        if (vi.y > point.y) != (vj.y > point.y)
            && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }

        j = i;
    }

    inside
}

/// A lasso polygon in screen pixels.
///
/// It is immutable once built, a new gesture produces a new polygon. Duplicate and collinear
/// vertices are kept as is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Create a new polygon.
    pub fn new(vertices: impl Into<Vec<Vec2>>) -> Self {
        Self {
            vertices: vertices.into(),
        }
    }

    /// Get the vertices.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Get the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check if the polygon has no interior, i.e. fewer than 3 vertices.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Get the bounds.
    pub fn bounds(&self) -> PolygonBounds {
        polygon_bounds(&self.vertices)
    }

    /// Check if the point is inside.
    pub fn contains(&self, point: Vec2) -> bool {
        is_point_in_polygon(point, &self.vertices)
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(vertices: Vec<Vec2>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Vec2> for Polygon {
    fn from_iter<T: IntoIterator<Item = Vec2>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}
