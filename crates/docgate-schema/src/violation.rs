use std::fmt;

use serde_json::Value;

/// Rendered in place of an empty instance path.
pub const ROOT_PATH: &str = "<root>";

/// One accessor step from the instance root to the offending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// A single structural violation reported by the schema evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl Violation {
    pub fn new(path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }

    /// Build a violation from a JSON Pointer into `instance`.
    ///
    /// The instance is walked alongside the pointer so that a key like `"0"`
    /// on an object stays a key while the same token on an array becomes an
    /// index.
    pub fn from_pointer(pointer: &str, instance: &Value, message: impl Into<String>) -> Self {
        let mut path = Vec::new();
        let mut current = Some(instance);

        for token in pointer.split('/').skip(1) {
            let token = token.replace("~1", "/").replace("~0", "~");
            let segment = match (current, token.parse::<usize>()) {
                (Some(Value::Array(_)), Ok(index)) => PathSegment::Index(index),
                _ => PathSegment::Key(token),
            };
            current = match (&segment, current) {
                (PathSegment::Index(index), Some(Value::Array(items))) => items.get(*index),
                (PathSegment::Key(key), Some(Value::Object(map))) => map.get(key),
                _ => None,
            };
            path.push(segment);
        }

        Self::new(path, message)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", render_path(&self.path), self.message)
    }
}

/// Join a path as `a.b[0].c`, or `<root>` when empty.
pub fn render_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return ROOT_PATH.to_string();
    }

    let mut out = String::new();
    for segment in path {
        match segment {
            PathSegment::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            PathSegment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

/// Render every violation as `path: message`, sorted lexicographically.
pub fn format_errors(violations: &[Violation]) -> Vec<String> {
    let mut lines: Vec<String> = violations.iter().map(Violation::to_string).collect();
    lines.sort();
    lines
}
