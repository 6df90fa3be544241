use clap::Args;
use serde::Serialize;
use tally_stats::ConfidenceLevel;

use crate::{command::IoArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct CiArg {
    /// Confidence level: 90, 95 or 99 [default: all three]
    #[arg(long)]
    pub level: Option<ConfidenceLevel>,
    #[clap(flatten)]
    pub io: IoArg,
}

#[derive(Debug, Serialize)]
struct IntervalRow {
    level: ConfidenceLevel,
    lower: f64,
    upper: f64,
}

pub(crate) fn run(arg: &CiArg) -> anyhow::Result<()> {
    let dataset = util::read_dataset(arg.io.input.as_deref())?;
    let levels = match arg.level {
        Some(level) => vec![level],
        None => ConfidenceLevel::ALL.to_vec(),
    };

    let rows = levels
        .into_iter()
        .map(|level| -> anyhow::Result<IntervalRow> {
            let (lower, upper) = dataset.confidence_interval(level)?;
            Ok(IntervalRow {
                level,
                lower,
                upper,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut output = util::Output::from_output_path(arg.io.output.clone())?;
    if arg.io.json {
        return output.write_json(&rows);
    }

    let text = rows
        .iter()
        .map(|row| format!("{}: ({:.3}, {:.3})", row.level, row.lower, row.upper))
        .collect::<Vec<_>>()
        .join("\n");
    output.write_text(&text)
}
