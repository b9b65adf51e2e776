//! Sorting whitespace-delimited words, the lexicographic counterpart of the
//! random-float benchmark.

use std::{io::BufRead, time::Duration};

use crate::{algorithms::Algorithm, bencher::time_sort, checks::is_sorted, sequence::Words};

/// Collect every whitespace-separated word from `reader`, in order.
pub fn read_words(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut words = vec![];
    for line in reader.lines() {
        words.extend(line?.split_whitespace().map(|w| w.to_owned()));
    }
    Ok(words)
}

/// Timing of one algorithm over a private copy of the input words.
#[derive(Debug, Clone)]
pub struct WordTiming {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub sorted: bool,
    pub output: Words,
}

pub fn measure_words(words: &Words, alg: Algorithm) -> WordTiming {
    let mut output = words.clone();
    let elapsed = time_sort(alg, &mut output);
    WordTiming {
        algorithm: alg,
        elapsed,
        sorted: is_sorted(&output),
        output,
    }
}
