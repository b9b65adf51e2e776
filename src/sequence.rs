use std::fmt;

/// The capabilities a sorting algorithm needs from a collection.
///
/// Every index passed to these methods must be in `0..self.len()`.
/// Implementations are free to panic otherwise.
pub trait Sortable {
    type Item: fmt::Display;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strict less-than between the elements at `i` and `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Swap the elements at `i` and `j` in place.
    fn exch(&mut self, i: usize, j: usize);

    /// Read-only access, for display. Algorithms never call this.
    fn get(&self, i: usize) -> &Self::Item;
}

/// An owned buffer of comparable elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence<T>(Vec<T>);

/// Strings in lexicographic order.
pub type Words = Sequence<String>;

/// Doubles in numeric order.
pub type Floats = Sequence<f64>;

impl<T> Sequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self(items)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: PartialOrd + fmt::Display> Sortable for Sequence<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0[i] < self.0[j]
    }

    fn exch(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    fn get(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
