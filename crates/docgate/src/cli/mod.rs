use clap::Args;

use crate::cli::logging::{LogFormat, LogLevel};
use crate::cli::output::OutputFormat;

pub mod exit;
pub mod logging;
pub mod markdown;
pub mod output;
pub mod yaml;

/// Flags shared by every docgate binary.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Report format (stdout).
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "DOCGATE_LOG_LEVEL"
    )]
    pub log_level: LogLevel,
}

impl CommonArgs {
    /// Initialize logging and resolve the report format.
    pub fn init(&self) -> OutputFormat {
        logging::init_logging(self.log_format, self.log_level);
        self.format.unwrap_or_else(OutputFormat::default_for_stdout)
    }
}

/// Run a command result to completion and exit the process.
pub fn finish(result: exit::CliResult<i32>) -> ! {
    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
