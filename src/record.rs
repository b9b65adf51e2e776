use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::bencher::Trial;

const BANNER_START: &str =
    "============================ Sortbench Statistics Totals ============================";
const BANNER_END: &str =
    "------------------------------ End Sortbench Statistics -----------------------------";

#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[value(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StatPrintFormat {
    #[default]
    Table,
    Yaml,
}

impl StatPrintFormat {
    /// `SORTBENCH_LOG_STAT_FORMAT=table` wins over any configured format.
    pub fn resolve(self) -> Self {
        if std::env::var("SORTBENCH_LOG_STAT_FORMAT").as_deref() == Ok("table") {
            StatPrintFormat::Table
        } else {
            self
        }
    }
}

/// Statistics of one algorithm's timed trials, ready for printing.
pub struct Record<'a> {
    pub run_id: &'a str,
    pub trial: &'a Trial,
    pub format: StatPrintFormat,
}

impl<'a> Record<'a> {
    fn stats(&self) -> Vec<(&'static str, String)> {
        let trial = self.trial;
        let mut stats = vec![
            ("time", format!("{:.3}", trial.elapsed.as_secs_f64() * 1000.0)),
            ("mean", format!("{:.3}", trial.mean().as_secs_f64() * 1000.0)),
            ("n", trial.n.to_string()),
            ("trials", trial.trials.to_string()),
        ];
        if let Some(comparisons) = trial.comparisons {
            stats.push(("comparisons", comparisons.to_string()));
        }
        if let Some(exchanges) = trial.exchanges {
            stats.push(("exchanges", exchanges.to_string()));
        }
        stats
    }

    fn dump_table(&self, f: &mut impl Write, stats: &[(&str, String)]) -> io::Result<()> {
        for (name, _) in stats {
            write!(f, "{}\t", name)?;
        }
        writeln!(f)?;
        for (_, value) in stats {
            write!(f, "{}\t", value)?;
        }
        writeln!(f)
    }

    fn dump_yaml(&self, f: &mut impl Write, stats: &[(&str, String)]) -> io::Result<()> {
        for (name, value) in stats {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }

    pub fn dump(&self, f: &mut impl Write) -> io::Result<()> {
        let stats = self.stats();
        writeln!(f, "{}", BANNER_START)?;
        writeln!(f, "# {} {}", self.run_id, self.trial.algorithm)?;
        match self.format.resolve() {
            StatPrintFormat::Table => self.dump_table(f, &stats)?,
            StatPrintFormat::Yaml => self.dump_yaml(f, &stats)?,
        }
        writeln!(f, "{}", BANNER_END)
    }
}
