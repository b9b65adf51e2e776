use std::{
    io::{self, BufRead, Write},
    num::NonZeroUsize,
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::{
    algorithms::Algorithm,
    bencher::Bencher,
    config::{Config, Profile},
    record::{Record, StatPrintFormat},
    sequence::Words,
    words::{measure_words, read_words},
};

/// Compare two sorting algorithms by total wall-clock time over random floats
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
pub struct CompareArgs {
    /// Baseline algorithm
    #[arg(value_enum)]
    pub alg1: Algorithm,
    /// Algorithm timed against the baseline
    #[arg(value_enum)]
    pub alg2: Algorithm,
    /// Number of random floats per trial
    #[arg(value_name = "N")]
    pub n: NonZeroUsize,
    /// Number of trials per algorithm
    #[arg(value_name = "T")]
    pub trials: NonZeroUsize,
    #[arg(long)]
    /// Number of untimed warmup trials per algorithm
    pub warmup: Option<usize>,
    #[arg(long)]
    /// Seed for the random float generator
    pub seed: Option<u64>,
    #[arg(long, default_value = "false")]
    /// Print per-algorithm statistics to stderr
    pub stats: bool,
    #[arg(long, value_enum)]
    /// Statistics format
    pub stat_format: Option<StatPrintFormat>,
    #[arg(long, default_value = "false")]
    /// Count comparisons and exchanges. Implies --stats and slows down every trial
    pub count_ops: bool,
    #[arg(long)]
    /// TOML file with named profiles
    pub config: Option<PathBuf>,
    #[arg(long, default_value = "default")]
    /// Profile to use
    pub profile: String,
}

impl CompareArgs {
    /// Load the selected profile and apply command-line overrides on top of it.
    pub fn resolve_profile(&self) -> anyhow::Result<Profile> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let mut profile = config.profile(&self.profile)?;
        if let Some(warmup) = self.warmup {
            profile.warmup = warmup;
        }
        if let Some(seed) = self.seed {
            profile.seed = Some(seed);
        }
        if let Some(format) = self.stat_format {
            profile.stat_format = format;
        }
        profile.stats |= self.stats;
        profile.count_ops |= self.count_ops;
        Ok(profile)
    }

    fn generate_runid(&self) -> String {
        let time = chrono::Local::now()
            .format("%Y-%m-%d-%a-%H%M%S")
            .to_string();
        format!("compare-{}", time)
    }

    pub fn run_with(&self, out: &mut impl Write, err: &mut impl Write) -> anyhow::Result<()> {
        let profile = self.resolve_profile()?;
        info!("profile `{}`: {:?}", self.profile, profile);
        let bencher = match profile.seed {
            Some(seed) => Bencher::with_seed(seed),
            None => Bencher::new(),
        };
        let mut bencher = bencher
            .with_warmup(profile.warmup)
            .with_op_counts(profile.count_ops);
        let comparison = bencher.compare(self.alg1, self.alg2, self.n.get(), self.trials.get())?;
        writeln!(out, "{}", comparison)?;
        if profile.stats || profile.count_ops {
            let run_id = self.generate_runid();
            for trial in [&comparison.first, &comparison.second] {
                Record {
                    run_id: &run_id,
                    trial,
                    format: profile.stat_format,
                }
                .dump(err)?;
            }
        }
        Ok(())
    }

    pub fn run(&self) -> anyhow::Result<()> {
        self.run_with(&mut io::stdout().lock(), &mut io::stderr().lock())
    }
}

/// Time sorting algorithms over whitespace-delimited words read from stdin
#[derive(Parser, Debug)]
#[command(name = "sortwords")]
pub struct WordsArgs {
    /// Algorithms to run. All of them when omitted
    #[arg(value_enum)]
    pub algorithms: Vec<Algorithm>,
    #[arg(long, default_value = "false")]
    /// Print every sorted sequence
    pub show: bool,
}

impl WordsArgs {
    pub fn run_with(&self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        let words = Words::from(read_words(input).context("Failed to read words")?);
        writeln!(out, "Len: {}", words.as_slice().len())?;
        let algorithms = if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        };
        for alg in algorithms {
            let timing = measure_words(&words, alg);
            writeln!(out, "{}: {:?}", alg, timing.elapsed)?;
            if !timing.sorted {
                writeln!(out, "Error: not sorted")?;
            }
            if self.show {
                writeln!(out, "{}", timing.output)?;
            }
        }
        Ok(())
    }

    pub fn run(&self) -> anyhow::Result<()> {
        self.run_with(io::stdin().lock(), &mut io::stdout().lock())
    }
}
