//! CLI argument definitions for colnorm.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colnorm_core::MAX_LENGTH;
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colnorm",
    version,
    about = "Normalize column labels into safe SQL identifiers",
    long_about = "Normalize arbitrary column labels into SQL identifiers.\n\n\
                  Output names are lowercase, at most 63 characters, never a\n\
                  reserved word and unique within one invocation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize labels into unique identifiers.
    Normalize(NormalizeArgs),

    /// Check whether names are already valid identifiers.
    Check(CheckArgs),

    /// List reserved words.
    Reserved,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Labels to normalize (read one per line from stdin when omitted).
    #[arg(value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Read a JSON array of labels from stdin.
    ///
    /// Numbers, booleans and nulls are accepted alongside strings, so a
    /// header row exported as JSON can be piped in unchanged.
    #[arg(long = "json", conflicts_with = "labels")]
    pub json: bool,

    /// Existing name that output identifiers must avoid (repeatable).
    #[arg(long = "forbid", value_name = "NAME")]
    pub forbid: Vec<String>,

    /// Maximum identifier length.
    #[arg(long = "max-length", value_name = "N", default_value_t = MAX_LENGTH)]
    pub max_length: usize,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "plain")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Names to check.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

/// Output format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// One identifier per line.
    Plain,
    /// Table of original label, identifier and change flag.
    Table,
    /// JSON rename list.
    Json,
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
