use thiserror::Error;

use crate::algorithms::Algorithm;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchError {
    #[error("unknown sorting algorithm `{0}`, expected one of SelectionSort, InsertionSort, BubbleSort, ShellSort")]
    UnknownAlgorithm(String),
    #[error("{0} did not sort its input")]
    NotSorted(Algorithm),
    #[error("{what} must be a positive integer, got {value}")]
    InvalidCount { what: &'static str, value: usize },
}
