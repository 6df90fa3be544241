use clap::Args;
use serde::Serialize;
use tally_stats::OutlierPolicy;

use crate::{command::IoArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct OutliersArg {
    /// Outlier policy: `sd` (3 standard deviations) or `iqr` (1.5 IQR fences)
    #[arg(long, default_value = "iqr")]
    pub policy: OutlierPolicy,
    #[clap(flatten)]
    pub io: IoArg,
}

#[derive(Debug, Serialize)]
struct OutliersReport {
    policy: OutlierPolicy,
    outliers: Vec<f64>,
}

pub(crate) fn run(arg: &OutliersArg) -> anyhow::Result<()> {
    let dataset = util::read_dataset(arg.io.input.as_deref())?;
    let outliers = dataset.find_outliers(arg.policy)?;
    tracing::info!(policy = %arg.policy, count = outliers.len(), "found outliers");

    let mut output = util::Output::from_output_path(arg.io.output.clone())?;
    if arg.io.json {
        return output.write_json(&OutliersReport {
            policy: arg.policy,
            outliers,
        });
    }

    let text = outliers
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    output.write_text(&text)
}
