use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{
    ci::CiArg, describe::DescribeArg, outliers::OutliersArg, summary::SummaryArg,
    zscore::ZScoreArg,
};

mod ci;
mod describe;
mod outliers;
mod summary;
mod zscore;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "TALLY_LOG";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print every statistic the samples support
    Describe(#[clap(flatten)] DescribeArg),
    /// Print the five-number summary
    Summary(#[clap(flatten)] SummaryArg),
    /// List outliers under the chosen policy
    Outliers(#[clap(flatten)] OutliersArg),
    /// Print confidence intervals of the mean
    Ci(#[clap(flatten)] CiArg),
    /// Compute the z-score of a value
    Zscore(#[clap(flatten)] ZScoreArg),
}

/// Input and output options shared by all commands.
#[derive(Debug, Clone, Args)]
pub(crate) struct IoArg {
    /// File with samples separated by whitespace or commas [default: stdin]
    pub input: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
    /// Output file path [default: stdout]
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    init_logging();

    let args = CommandArgs::parse();
    tracing::debug!(?args, "parsed command line");
    match args.mode {
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Outliers(arg) => outliers::run(&arg)?,
        Mode::Ci(arg) => ci::run(&arg)?,
        Mode::Zscore(arg) => zscore::run(&arg)?,
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_outliers_policy() {
        let args = CommandArgs::try_parse_from(["tally", "outliers", "--policy", "sd", "data.txt"])
            .unwrap();
        let Mode::Outliers(arg) = args.mode else {
            panic!("expected outliers mode");
        };
        assert_eq!(arg.policy, tally_stats::OutlierPolicy::StdDev);
        assert_eq!(arg.io.input, Some(PathBuf::from("data.txt")));
    }

    #[test]
    fn test_reject_unknown_level() {
        let err = CommandArgs::try_parse_from(["tally", "ci", "--level", "80"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_zscore_accepts_negative_value() {
        let args = CommandArgs::try_parse_from([
            "tally", "zscore", "-1.5", "--mean", "0", "--stdev", "2",
        ])
        .unwrap();
        let Mode::Zscore(arg) = args.mode else {
            panic!("expected zscore mode");
        };
        assert_eq!(arg.value, -1.5);
        assert_eq!(arg.mean, Some(0.0));
    }
}
