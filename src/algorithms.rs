use std::{fmt, str::FromStr};

use clap::ValueEnum;

use crate::{error::BenchError, sequence::Sortable};

/// The closed set of sorting algorithms the driver can run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[value(rename_all = "PascalCase")]
pub enum Algorithm {
    SelectionSort,
    InsertionSort,
    BubbleSort,
    ShellSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::BubbleSort,
        Algorithm::ShellSort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::SelectionSort => "SelectionSort",
            Algorithm::InsertionSort => "InsertionSort",
            Algorithm::BubbleSort => "BubbleSort",
            Algorithm::ShellSort => "ShellSort",
        }
    }

    /// The sorting procedure for this identifier, instantiated for `S`.
    pub fn sort_fn<S: Sortable + ?Sized>(self) -> fn(&mut S) {
        match self {
            Algorithm::SelectionSort => selection_sort::<S>,
            Algorithm::InsertionSort => insertion_sort::<S>,
            Algorithm::BubbleSort => bubble_sort::<S>,
            Algorithm::ShellSort => shell_sort::<S>,
        }
    }

    pub fn sort<S: Sortable + ?Sized>(self, a: &mut S) {
        (self.sort_fn::<S>())(a)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| BenchError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Exactly `n - 1` exchanges, whatever the input order.
pub fn selection_sort<S: Sortable + ?Sized>(a: &mut S) {
    let n = a.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if a.less(j, min) {
                min = j;
            }
        }
        a.exch(i, min);
    }
}

pub fn insertion_sort<S: Sortable + ?Sized>(a: &mut S) {
    let n = a.len();
    for i in 1..n {
        let mut j = i;
        while j > 0 && a.less(j, j - 1) {
            a.exch(j, j - 1);
            j -= 1;
        }
    }
}

/// Stops after the first pass that moves nothing.
pub fn bubble_sort<S: Sortable + ?Sized>(a: &mut S) {
    let n = a.len();
    for i in (2..=n).rev() {
        let mut exchanged = false;
        for j in 0..i - 1 {
            if a.less(j + 1, j) {
                a.exch(j + 1, j);
                exchanged = true;
            }
        }
        if !exchanged {
            break;
        }
    }
}

pub fn shell_sort<S: Sortable + ?Sized>(a: &mut S) {
    let n = a.len();
    for h in shell_gaps(n) {
        for i in h..n {
            let mut j = i;
            while j >= h && a.less(j, j - h) {
                a.exch(j, j - h);
                j -= h;
            }
        }
    }
}

/// Decreasing gaps of the `3h + 1` sequence, ending with 1.
#[derive(Debug, Clone)]
pub struct ShellGaps {
    h: usize,
}

impl Iterator for ShellGaps {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.h == 0 {
            return None;
        }
        let h = self.h;
        self.h /= 3;
        Some(h)
    }
}

/// Gap sequence used by [`shell_sort`] for a sequence of length `n`.
///
/// The first gap is the first term of 1, 4, 13, 40, ... that is not below
/// `n / 3` (integer division), so `shell_gaps(10)` yields 4 then 1.
pub fn shell_gaps(n: usize) -> ShellGaps {
    let mut h = 1;
    while h < n / 3 {
        h = 3 * h + 1;
    }
    ShellGaps { h }
}
