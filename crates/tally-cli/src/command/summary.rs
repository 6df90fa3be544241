use clap::Args;

use crate::{command::IoArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub io: IoArg,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let dataset = util::read_dataset(arg.io.input.as_deref())?;
    let summary = dataset.summary()?;

    let mut output = util::Output::from_output_path(arg.io.output.clone())?;
    if arg.io.json {
        output.write_json(&summary)
    } else {
        output.write_text(&summary.to_string())
    }
}
