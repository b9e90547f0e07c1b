//! Predicate-based filtering with positional context

/// Filter a slice with a predicate that also sees each element's index.
///
/// Returns a new `Vec` containing clones of the elements for which
/// `predicate(item, index)` returns `true`, in their original relative
/// order. The input slice is never mutated. `index` is the element's
/// zero-based position in `items`, and the predicate is invoked exactly
/// once per element, left to right.
pub fn filter_array<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize) -> bool,
{
    let mut kept = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if predicate(item, index) {
            kept.push(item.clone());
        }
    }
    kept
}
