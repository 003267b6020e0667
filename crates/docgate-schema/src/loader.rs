use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::config::DEFAULT_MAX_FILE_SIZE;
use crate::error::{Result, SchemaError};
use crate::violation::{render_path, PathSegment};

/// Read and decode a YAML document into a JSON value.
pub fn read_yaml(path: &Path) -> Result<Value> {
    read_yaml_limited(path, DEFAULT_MAX_FILE_SIZE)
}

/// Read and decode a JSON document.
pub fn read_json(path: &Path) -> Result<Value> {
    read_json_limited(path, DEFAULT_MAX_FILE_SIZE)
}

/// Read a YAML document, rejecting `.nan` and `.inf` instead of letting them
/// collapse to `null` in the JSON value.
pub fn read_yaml_limited(path: &Path, max_bytes: usize) -> Result<Value> {
    let content = read_text(path, max_bytes)?;
    let yaml_error = |source| SchemaError::Yaml {
        path: path.to_path_buf(),
        source,
    };

    let document: serde_yaml::Value = serde_yaml::from_str(&content).map_err(yaml_error)?;
    if let Some(location) = non_finite_location(&document) {
        return Err(SchemaError::NonFiniteNumber {
            path: path.to_path_buf(),
            location: render_path(&location),
        });
    }
    serde_yaml::from_value(document).map_err(yaml_error)
}

pub fn read_json_limited(path: &Path, max_bytes: usize) -> Result<Value> {
    let content = read_text(path, max_bytes)?;
    serde_json::from_str(&content).map_err(|source| SchemaError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn non_finite_location(value: &serde_yaml::Value) -> Option<Vec<PathSegment>> {
    let nested = |segment: PathSegment, child: &serde_yaml::Value| {
        non_finite_location(child).map(|mut rest| {
            rest.insert(0, segment);
            rest
        })
    };

    match value {
        serde_yaml::Value::Number(number) if number.is_nan() || number.is_infinite() => {
            Some(Vec::new())
        }
        serde_yaml::Value::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(index, item)| nested(PathSegment::Index(index), item)),
        serde_yaml::Value::Mapping(map) => map.iter().find_map(|(key, child)| {
            let key = match key {
                serde_yaml::Value::String(key) => key.clone(),
                other => serde_yaml::to_string(other)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default(),
            };
            nested(PathSegment::Key(key), child)
        }),
        serde_yaml::Value::Tagged(tagged) => non_finite_location(&tagged.value),
        _ => None,
    }
}

fn read_text(path: &Path, max_bytes: usize) -> Result<String> {
    let read_error = |source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(read_error)?;
    let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut content = String::new();
    file.take(read_limit)
        .read_to_string(&mut content)
        .map_err(read_error)?;

    if content.len() > max_bytes {
        return Err(SchemaError::FileTooLarge {
            path: path.to_path_buf(),
            max: max_bytes,
        });
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "read input file");
    Ok(content)
}
