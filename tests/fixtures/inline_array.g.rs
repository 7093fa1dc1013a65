// @generated by arraygen. Do not edit.

/// Fixed-length storage for `T`, laid out as one contiguous run of elements.
pub trait InlineArray<T: Copy> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// The elements as one flat slice.
    fn as_slice(&self) -> &[T];

    /// The elements as one flat mutable slice.
    fn as_mut_slice(&mut self) -> &mut [T];

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`. Panics if `index >= self.len()`.
    fn element_at(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }

    /// Element at `index`. Panics if `index >= self.len()`.
    fn element_at_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}
