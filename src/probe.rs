use std::cell::Cell;

use crate::sequence::Sortable;

/// Wraps a [`Sortable`] and counts the comparisons and exchanges made
/// through it.
#[derive(Debug)]
pub struct OpCounter<S> {
    inner: S,
    comparisons: Cell<u64>,
    exchanges: u64,
}

impl<S> OpCounter<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            comparisons: Cell::new(0),
            exchanges: 0,
        }
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons.get()
    }

    pub fn exchanges(&self) -> u64 {
        self.exchanges
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Zero both counters, e.g. after a verification pass.
    pub fn reset(&mut self) {
        self.comparisons.set(0);
        self.exchanges = 0;
    }
}

impl<S: Sortable> Sortable for OpCounter<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.comparisons.set(self.comparisons.get() + 1);
        self.inner.less(i, j)
    }

    fn exch(&mut self, i: usize, j: usize) {
        self.exchanges += 1;
        self.inner.exch(i, j);
    }

    fn get(&self, i: usize) -> &S::Item {
        self.inner.get(i)
    }
}
