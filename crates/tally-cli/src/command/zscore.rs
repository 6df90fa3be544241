use clap::Args;
use serde::Serialize;

use crate::{command::IoArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct ZScoreArg {
    /// Value to score
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
    /// Mean of the reference distribution [default: mean of the samples]
    #[arg(long, requires = "stdev", allow_negative_numbers = true)]
    pub mean: Option<f64>,
    /// Standard deviation of the reference distribution [default: population
    /// standard deviation of the samples]
    #[arg(long, requires = "mean")]
    pub stdev: Option<f64>,
    #[clap(flatten)]
    pub io: IoArg,
}

#[derive(Debug, Serialize)]
struct ZScoreReport {
    value: f64,
    mean: f64,
    stdev: f64,
    z_score: f64,
}

pub(crate) fn run(arg: &ZScoreArg) -> anyhow::Result<()> {
    let (mean, stdev) = match (arg.mean, arg.stdev) {
        (Some(mean), Some(stdev)) => (mean, stdev),
        _ => {
            let dataset = util::read_dataset(arg.io.input.as_deref())?;
            (dataset.mean()?, dataset.stdev()?)
        }
    };
    if stdev == 0.0 {
        tracing::warn!("standard deviation is zero, z-score is not finite");
    }
    let report = ZScoreReport {
        value: arg.value,
        mean,
        stdev,
        z_score: tally_stats::z_score(mean, stdev, arg.value),
    };

    let mut output = util::Output::from_output_path(arg.io.output.clone())?;
    if arg.io.json {
        output.write_json(&report)
    } else {
        output.write_text(&report.z_score.to_string())
    }
}
