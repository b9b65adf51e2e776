mod algorithms;
mod bencher;
mod checks;
pub mod cli;
pub mod config;
mod error;
pub mod probe;
mod record;
mod sequence;
pub mod words;

pub use algorithms::{
    bubble_sort, insertion_sort, selection_sort, shell_gaps, shell_sort, Algorithm, ShellGaps,
};
pub use bencher::{measure_time, Bencher, Comparison, Trial};
pub use checks::is_sorted;
pub use error::BenchError;
pub use record::{Record, StatPrintFormat};
pub use sequence::{Floats, Sequence, Sortable, Words};
