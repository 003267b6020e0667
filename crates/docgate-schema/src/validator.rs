use std::path::Path;

use jsonschema::Validator;
use serde_json::{Map, Value};

use crate::config::ValidatorConfig;
use crate::error::{Result, SchemaError};
use crate::loader::read_json_limited;
use crate::violation::{format_errors, Violation};

/// Outcome of checking one instance against a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaVerdict {
    /// Formatted `path: message` lines, sorted.
    pub errors: Vec<String>,
}

impl SchemaVerdict {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A compiled JSON Schema ready to check any number of instances.
///
/// The dialect follows the schema's `$schema` keyword; schemas without one
/// are evaluated as draft 2020-12.
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Compile a schema with default config.
    pub fn new(schema: &Value) -> Result<Self> {
        Self::with_config(schema, ValidatorConfig::default())
    }

    /// Compile a schema with explicit config.
    pub fn with_config(schema: &Value, config: ValidatorConfig) -> Result<Self> {
        let validator = if config.strict_mode {
            let mut strict = schema.clone();
            close_object_schemas(&mut strict);
            compile(&strict)?
        } else {
            compile(schema)?
        };

        Ok(Self { validator })
    }

    /// Load and compile a JSON schema file.
    pub fn from_file(path: &Path, config: ValidatorConfig) -> Result<Self> {
        let schema = read_json_limited(path, config.max_file_size)?;
        Self::with_config(&schema, config)
    }

    /// Every violation the evaluator reports for `instance`, in its native order.
    pub fn violations(&self, instance: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(instance)
            .map(|err| {
                let pointer = err.instance_path().to_string();
                Violation::from_pointer(&pointer, instance, err.to_string())
            })
            .collect()
    }

    /// Check `instance` and return sorted diagnostics.
    pub fn validate(&self, instance: &Value) -> SchemaVerdict {
        let violations = self.violations(instance);
        tracing::debug!(violations = violations.len(), "evaluated instance");
        SchemaVerdict {
            errors: format_errors(&violations),
        }
    }
}

/// Validate a decoded instance against a decoded schema document.
///
/// Fails only when the schema itself cannot be compiled; violations are
/// returned in the verdict.
pub fn validate_instance(instance: &Value, schema: &Value) -> Result<SchemaVerdict> {
    Ok(SchemaValidator::new(schema)?.validate(instance))
}

fn compile(schema: &Value) -> Result<Validator> {
    jsonschema::validator_for(schema).map_err(|err| SchemaError::CompileFailed(err.to_string()))
}

/// How a keyword holds nested subschemas.
enum Nesting {
    /// `{"name": schema, ...}`
    Named,
    /// A single schema; older drafts also allow an array of them (`items`).
    Single,
    /// `[schema, ...]`
    List,
}

fn nesting(keyword: &str) -> Option<Nesting> {
    match keyword {
        "properties" | "patternProperties" | "dependentSchemas" | "$defs" | "definitions" => {
            Some(Nesting::Named)
        }
        "propertyNames" | "additionalProperties" | "unevaluatedProperties" | "items"
        | "contains" | "additionalItems" | "unevaluatedItems" | "not" | "if" | "then"
        | "else" => Some(Nesting::Single),
        "prefixItems" | "allOf" | "anyOf" | "oneOf" => Some(Nesting::List),
        _ => None,
    }
}

/// Close every object schema that leaves extra properties open.
///
/// Schemas that already say something about extra properties, through
/// `additionalProperties` or `unevaluatedProperties`, are left as written.
fn close_object_schemas(schema: &mut Value) {
    let Value::Object(map) = schema else {
        return;
    };

    if describes_object(map)
        && !map.contains_key("additionalProperties")
        && !map.contains_key("unevaluatedProperties")
    {
        map.insert("additionalProperties".to_string(), Value::Bool(false));
    }

    for (keyword, child) in map.iter_mut() {
        match (nesting(keyword), child) {
            (Some(Nesting::Named), Value::Object(children)) => {
                children.values_mut().for_each(close_object_schemas);
            }
            (Some(Nesting::Single | Nesting::List), Value::Array(children)) => {
                children.iter_mut().for_each(close_object_schemas);
            }
            (Some(Nesting::Single), child) => close_object_schemas(child),
            _ => {}
        }
    }
}

fn describes_object(map: &Map<String, Value>) -> bool {
    match map.get("type") {
        Some(Value::String(kind)) => kind == "object",
        Some(Value::Array(kinds)) => kinds.iter().any(|kind| kind == "object"),
        _ => map.keys().any(|keyword| {
            matches!(
                keyword.as_str(),
                "properties"
                    | "patternProperties"
                    | "required"
                    | "dependentRequired"
                    | "dependentSchemas"
                    | "propertyNames"
            )
        }),
    }
}
