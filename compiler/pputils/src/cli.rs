//! Defines the pputils command line interface

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use pputils_gen::ArityBound;
use tracing::level_filters::LevelFilter;

/// Generate the PP_UTILS variadic macro header
#[derive(Debug, Parser)]
#[command(version=None)]
pub struct Cli {
    /// See what version of pputils you are using
    #[arg(short, long)]
    pub version: bool,

    /// The largest number of variadic arguments the generated macros accept
    #[arg(value_name = "COUNT", required_unless_present = "version")]
    pub count: Option<ArityBound>,

    /// The path of the header to write, truncating any existing file
    /// Use `-` to write to stdout
    #[arg(value_name = "OUTPUT", required_unless_present = "version")]
    pub output: Option<PathBuf>,

    /// Log generation steps to stderr. Repeat for more detail
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,
}
impl Cli {
    /// The most detailed log level to print
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
