/// Default cap on bytes read from an instance or schema file (8 MiB).
pub const DEFAULT_MAX_FILE_SIZE: usize = 8 * 1024 * 1024;

/// Controls schema validation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// When true, object schemas reject properties they do not declare.
    pub strict_mode: bool,
    /// Maximum bytes read from either input file.
    pub max_file_size: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}
