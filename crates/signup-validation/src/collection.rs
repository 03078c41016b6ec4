//! Collection validation functions

/// True when the collection holds at least `min` items
pub fn has_min_items<T>(items: &[T], min: usize) -> bool {
    items.len() >= min
}
