use crate::sequence::Sortable;

/// Returns `false` at the first element that is less than its predecessor.
pub fn is_sorted<S: Sortable + ?Sized>(a: &S) -> bool {
    (1..a.len()).all(|i| !a.less(i, i - 1))
}
