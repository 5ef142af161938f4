//! CLI argument definitions for the table converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabcast",
    version,
    about = "Convert a delimited table into a JSON record document",
    long_about = "Convert a CSV table into an array of JSON objects keyed by\n\
                  lowercased column headers, with per-row progress reporting.\n\
                  Without --output the table is parsed and timed but nothing\n\
                  is written."
)]
pub struct Cli {
    /// Path to the input delimited-text file.
    #[arg(long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Path to write the JSON document (omit to skip writing).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_missing_file_flag_is_rejected() {
        let parsed = Cli::try_parse_from(["tabcast"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_output_flag_is_optional() {
        let cli = Cli::try_parse_from(["tabcast", "--file", "in.csv"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("in.csv"));
        assert!(cli.output.is_none());
    }
}
