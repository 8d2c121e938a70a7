//! Payload validator for record schemas
//!
//! Validation semantics:
//! - Payload must be a JSON object
//! - All required fields are present and non-null
//! - Field types match exactly (integers are accepted as numbers)
//! - Constraints hold (enum membership, inclusive ranges, email, URL)
//! - Every violation is collected before the payload is rejected
//!
//! Undeclared fields are dropped from the normalized output. Absent or null
//! optional fields take their declared default.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use url::Url;

use super::errors::{ValidationDetails, ValidationError, ValidationResult};
use super::types::{Constraint, FieldDef, FieldType, Schema};

const MAX_EMAIL_LEN: usize = 254;
const MAX_EMAIL_LOCAL_LEN: usize = 64;

const EMAIL_LOCAL_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+$";
const EMAIL_DOMAIN_PATTERN: &str =
    r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

/// Schema validator that checks payloads against one record schema.
///
/// The validator is pure and does not mutate its input.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator for the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a payload and returns the normalized field map.
    ///
    /// The returned map holds only declared fields, with defaults applied
    /// and URLs normalized.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every violated field.
    pub fn validate(&self, payload: &Value) -> ValidationResult<Map<String, Value>> {
        let obj = payload.as_object().ok_or_else(|| {
            ValidationError::single(
                self.schema.title,
                ValidationDetails::type_mismatch("$root", "object", json_type_name(payload)),
            )
        })?;

        let mut normalized = Map::new();
        let mut violations = Vec::new();

        for field in &self.schema.fields {
            match obj.get(field.name) {
                Some(value) if !value.is_null() => {
                    match validate_value(field, value) {
                        Ok(value) => {
                            normalized.insert(field.name.to_string(), value);
                        }
                        Err(mut details) => violations.append(&mut details),
                    }
                }
                // Explicit null is treated like absence: optional fields get
                // their default rather than storing null, so enum-typed
                // fields such as `gender` or `urgency` always hold a value.
                _ => {
                    if field.required {
                        violations.push(ValidationDetails::missing_field(field.name));
                    } else if let Some(default) = &field.default {
                        normalized.insert(field.name.to_string(), default.clone());
                    }
                }
            }
        }

        if violations.is_empty() {
            Ok(normalized)
        } else {
            Err(ValidationError::new(self.schema.title, violations))
        }
    }
}

/// Validates a single non-null value, returning its normalized form.
fn validate_value(field: &FieldDef, value: &Value) -> Result<Value, Vec<ValidationDetails>> {
    match field.field_type {
        FieldType::String => {
            let text = value.as_str().ok_or_else(|| vec![type_error(field.name, "string", value)])?;
            match &field.constraint {
                Some(constraint) => check_text(field.name, constraint, text).map_err(|d| vec![d]),
                None => Ok(value.clone()),
            }
        }
        FieldType::Number => {
            let number = value.as_f64().ok_or_else(|| vec![type_error(field.name, "number", value)])?;
            if let Some(constraint) = &field.constraint {
                check_number(field.name, constraint, number).map_err(|d| vec![d])?;
            }
            Ok(value.clone())
        }
        FieldType::StringArray => {
            let items = value.as_array().ok_or_else(|| vec![type_error(field.name, "array", value)])?;

            // Report every bad element, not just the first
            let violations: Vec<_> = items
                .iter()
                .enumerate()
                .filter(|(_, item)| !item.is_string())
                .map(|(i, item)| type_error(&format!("{}[{}]", field.name, i), "string", item))
                .collect();

            if violations.is_empty() {
                Ok(value.clone())
            } else {
                Err(violations)
            }
        }
    }
}

fn check_text(field: &str, constraint: &Constraint, text: &str) -> Result<Value, ValidationDetails> {
    let accepted = match constraint {
        Constraint::OneOf(values) => values.iter().any(|v| *v == text).then(|| Value::String(text.to_string())),
        Constraint::Email => is_valid_email(text).then(|| Value::String(text.to_string())),
        Constraint::HttpUrl => normalize_http_url(text).map(Value::String),
        Constraint::Range { .. } => None,
    };

    accepted.ok_or_else(|| ValidationDetails::new(field, constraint.expectation(), format!("{:?}", text)))
}

fn check_number(field: &str, constraint: &Constraint, number: f64) -> Result<(), ValidationDetails> {
    let in_range = match constraint {
        Constraint::Range { min, max } => {
            min.map_or(true, |min| number >= min) && max.map_or(true, |max| number <= max)
        }
        _ => false,
    };

    if in_range {
        Ok(())
    } else {
        Err(ValidationDetails::new(field, constraint.expectation(), number.to_string()))
    }
}

/// Checks `local@domain` shape with a dotted domain.
pub fn is_valid_email(text: &str) -> bool {
    static LOCAL: OnceLock<Option<Regex>> = OnceLock::new();
    static DOMAIN: OnceLock<Option<Regex>> = OnceLock::new();

    if text.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some((local, domain)) = text.rsplit_once('@') else {
        return false;
    };
    if local.is_empty()
        || local.len() > MAX_EMAIL_LOCAL_LEN
        || local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
    {
        return false;
    }

    let local_re = LOCAL.get_or_init(|| Regex::new(EMAIL_LOCAL_PATTERN).ok());
    let domain_re = DOMAIN.get_or_init(|| Regex::new(EMAIL_DOMAIN_PATTERN).ok());
    match (local_re, domain_re) {
        (Some(local_re), Some(domain_re)) => local_re.is_match(local) && domain_re.is_match(domain),
        _ => false,
    }
}

/// Parses an absolute http(s) URL with a host, returning its normalized form.
pub fn normalize_http_url(text: &str) -> Option<String> {
    let url = Url::parse(text).ok()?;
    let web_scheme = matches!(url.scheme(), "http" | "https");
    let has_host = url.host_str().map_or(false, |h| !h.is_empty());
    (web_scheme && has_host).then(|| url.to_string())
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a type mismatch violation.
fn type_error(field_path: &str, expected: &str, actual: &Value) -> ValidationDetails {
    ValidationDetails::type_mismatch(field_path, expected, json_type_name(actual))
}
