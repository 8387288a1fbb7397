//! Filtering traits.

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
pub trait Filter<T>: Default {
    fn detect(&self, item: T) -> bool;
}

/// mutable filter (that holds state).
/// Detecting an item may change the outcome of later detections.
pub trait FilterMut<T>: Default {
    fn detect_mut(&mut self, item: T) -> bool;
}
