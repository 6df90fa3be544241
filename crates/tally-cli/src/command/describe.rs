use std::fmt::Write as _;

use clap::Args;
use serde::Serialize;
use tally_stats::{Dataset, FiveNumberSummary, StatsError};

use crate::{command::IoArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct DescribeArg {
    #[clap(flatten)]
    pub io: IoArg,
}

/// Every statistic of a dataset. Quartile based entries are absent when the
/// dataset is too small for them.
#[derive(Debug, Serialize)]
struct Description {
    count: usize,
    sum: f64,
    mean: f64,
    range: f64,
    mode: f64,
    median: f64,
    stdev: f64,
    quartiles: Option<(f64, f64)>,
    iqr: Option<f64>,
    summary: Option<FiveNumberSummary>,
}

impl Description {
    fn new(dataset: &Dataset) -> Result<Self, StatsError> {
        Ok(Self {
            count: dataset.len(),
            sum: dataset.sum()?,
            mean: dataset.mean()?,
            range: dataset.range()?,
            mode: dataset.mode()?,
            median: dataset.median()?,
            stdev: dataset.stdev()?,
            quartiles: unless_insufficient(dataset.quartiles())?,
            iqr: unless_insufficient(dataset.iqr())?,
            summary: unless_insufficient(dataset.summary())?,
        })
    }

    fn to_text(&self) -> String {
        let mut text = String::new();
        let rows = [
            ("Sum", self.sum),
            ("Mean", self.mean),
            ("Range", self.range),
            ("Mode", self.mode),
            ("Median", self.median),
            ("Stdev", self.stdev),
        ];
        let _ = write!(text, "Count: {}", self.count);
        for (label, value) in rows {
            let _ = write!(text, "\n{label}: {value:.4}");
        }
        if let Some(iqr) = self.iqr {
            let _ = write!(text, "\nIQR: {iqr:.4}");
        }
        if let Some(summary) = &self.summary {
            let _ = write!(text, "\n\n{summary}");
        }
        text
    }
}

fn unless_insufficient<T>(result: Result<T, StatsError>) -> Result<Option<T>, StatsError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StatsError::InsufficientData { required, actual }) => {
            tracing::info!(required, actual, "skipping quartile statistics");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let dataset = util::read_dataset(arg.io.input.as_deref())?;
    let description = Description::new(&dataset)?;

    let mut output = util::Output::from_output_path(arg.io.output.clone())?;
    if arg.io.json {
        output.write_json(&description)
    } else {
        output.write_text(&description.to_text())
    }
}
