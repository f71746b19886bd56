/// A per-point selection mask.
///
/// Each byte is `1` if the point with the same index is selected, `0` otherwise. A mask is
/// derived output, every new selection replaces the previous mask rather than merging into it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionMask(Vec<u8>);

impl SelectionMask {
    /// Create a new mask with nothing selected.
    pub fn new(point_count: usize) -> Self {
        Self(vec![0; point_count])
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if the point at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.0[index] != 0
    }

    /// Count the selected points.
    pub fn selected_count(&self) -> usize {
        self.0.iter().filter(|&&flag| flag != 0).count()
    }

    /// Iterate the indices of the selected points in ascending order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, flag)| **flag != 0)
            .map(|(i, _)| i)
    }

    /// Get the raw flags.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Get the raw flags mutably.
    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Resize to `point_count` and clear every flag.
    pub(crate) fn reset(&mut self, point_count: usize) {
        self.0.clear();
        self.0.resize(point_count, 0);
    }

    /// Take the raw flags.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for SelectionMask {
    fn from(flags: Vec<u8>) -> Self {
        Self(flags)
    }
}

impl From<SelectionMask> for Vec<u8> {
    fn from(mask: SelectionMask) -> Self {
        mask.0
    }
}
