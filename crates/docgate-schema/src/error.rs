use std::path::PathBuf;

/// Errors raised before any conformance check can run.
///
/// None of these is a schema violation: violations are reported as data in
/// [`crate::SchemaVerdict`].
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exceeds the configured size limit.
    #[error("{} exceeds the {max} byte limit", path.display())]
    FileTooLarge { path: PathBuf, max: usize },

    /// The instance file is not well-formed YAML.
    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The instance holds `.nan` or `.inf`, which JSON cannot represent.
    #[error("non-finite number at {location} in {}", path.display())]
    NonFiniteNumber { path: PathBuf, location: String },

    /// The schema file is not well-formed JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The schema document is not a valid JSON Schema.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),
}

impl SchemaError {
    /// True when the input was readable but not well-formed.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            SchemaError::Yaml { .. } | SchemaError::NonFiniteNumber { .. } | SchemaError::Json { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
