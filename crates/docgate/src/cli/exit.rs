use std::fmt;

use docgate_schema::SchemaError;

// Conformance failures and unreadable inputs share code 1 so pipelines only
// need to test for non-zero. Usage errors exit 2 through clap.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Map an aborted schema run to a failure, naming malformed input explicitly
/// so it cannot be mistaken for a conformance report.
pub fn schema_error(err: SchemaError) -> CliError {
    let context = if err.is_decode() {
        "malformed input"
    } else {
        "cannot validate"
    };
    CliError::new(FAILURE, format!("{context}: {err}"))
}
