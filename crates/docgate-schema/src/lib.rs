//! Validate YAML documents against JSON Schema.
//!
//! Schema evaluation is delegated to the `jsonschema` crate. This crate
//! collects every violation it reports and renders them as sorted
//! `path: message` lines so output is stable across runs.
//!
//! Decode failures (unreadable files, malformed YAML or JSON) are returned
//! as [`SchemaError`] and never folded into a [`SchemaVerdict`].

use std::path::Path;

pub mod config;
pub mod error;
pub mod loader;
pub mod validator;
pub mod violation;

pub use config::{ValidatorConfig, DEFAULT_MAX_FILE_SIZE};
pub use error::{Result, SchemaError};
pub use loader::{read_json, read_yaml};
pub use validator::{validate_instance, SchemaValidator, SchemaVerdict};
pub use violation::{format_errors, render_path, PathSegment, Violation, ROOT_PATH};

/// Validate a YAML file against a JSON Schema file with default config.
pub fn validate_yaml_against_schema(yaml_path: &Path, schema_path: &Path) -> Result<SchemaVerdict> {
    validate_yaml_against_schema_with_config(yaml_path, schema_path, ValidatorConfig::default())
}

/// Validate a YAML file against a JSON Schema file.
pub fn validate_yaml_against_schema_with_config(
    yaml_path: &Path,
    schema_path: &Path,
    config: ValidatorConfig,
) -> Result<SchemaVerdict> {
    let instance = loader::read_yaml_limited(yaml_path, config.max_file_size)?;
    let validator = SchemaValidator::from_file(schema_path, config)?;
    Ok(validator.validate(&instance))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const SCHEMA: &str = r#"{
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": { "type": "string" },
            "age": { "type": "integer" }
        },
        "additionalProperties": false
    }"#;

    #[test]
    fn yaml_against_schema_ok_and_fail() {
        let dir = make_temp_dir("end-to-end");
        let schema = write_file(&dir, "schema.json", SCHEMA);
        let good = write_file(&dir, "data.yaml", "name: Jane\nage: 30\n");
        let bad = write_file(&dir, "bad.yaml", "name: 5\n");

        let verdict = validate_yaml_against_schema(&good, &schema).unwrap();
        assert!(verdict.is_valid());

        let verdict = validate_yaml_against_schema(&bad, &schema).unwrap();
        assert!(!verdict.is_valid());
        assert!(verdict.errors[0].starts_with("name: "));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn decode_failures_propagate() {
        let dir = make_temp_dir("decode");
        let schema = write_file(&dir, "schema.json", SCHEMA);
        let broken_schema = write_file(&dir, "broken.json", "{\n");
        let good = write_file(&dir, "data.yaml", "name: Jane\n");
        let broken_yaml = write_file(&dir, "broken.yaml", "name: [1, 2");

        assert!(matches!(
            validate_yaml_against_schema(&broken_yaml, &schema),
            Err(SchemaError::Yaml { .. })
        ));
        assert!(matches!(
            validate_yaml_against_schema(&good, &broken_schema),
            Err(SchemaError::Json { .. })
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }

    fn make_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "docgate-schema-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}
