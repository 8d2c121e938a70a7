//! Schema type definitions for record kinds
//!
//! Supported field types:
//! - string: UTF-8 text
//! - number: 64-bit floating point (integers widen)
//! - array: ordered list of strings
//!
//! Constraints are checked after the type check and never coerce values,
//! apart from URL normalization.

use serde_json::{json, Map, Value};

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit floating point
    Number,
    /// Ordered list of strings
    StringArray,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::StringArray => "array of strings",
        }
    }
}

/// Value constraint applied once the type matches
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Value must be one of the listed strings
    OneOf(&'static [&'static str]),
    /// Inclusive numeric bounds
    Range { min: Option<f64>, max: Option<f64> },
    /// Well-formed email address
    Email,
    /// Absolute http or https URL with a host
    HttpUrl,
}

impl Constraint {
    /// Human-readable description used as the `expected` part of a violation
    pub fn expectation(&self) -> String {
        match self {
            Constraint::OneOf(values) => format!("one of [{}]", values.join(", ")),
            Constraint::Range { min: Some(min), max: Some(max) } => {
                format!("a number between {} and {}", min, max)
            }
            Constraint::Range { min: Some(min), max: None } => {
                format!("a number greater than or equal to {}", min)
            }
            Constraint::Range { min: None, max: Some(max) } => {
                format!("a number less than or equal to {}", max)
            }
            Constraint::Range { min: None, max: None } => "a number".to_string(),
            Constraint::Email => "a valid email address".to_string(),
            Constraint::HttpUrl => "a valid http or https URL".to_string(),
        }
    }
}

/// Field definition
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name as it appears in payloads and documents
    pub name: &'static str,
    /// Field data type
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
    /// Optional value constraint
    pub constraint: Option<Constraint>,
    /// Value applied when the field is absent or null
    pub default: Option<Value>,
    /// Free-text description for client tooling
    pub description: Option<&'static str>,
}

impl FieldDef {
    fn new(name: &'static str, field_type: FieldType, required: bool) -> Self {
        Self {
            name,
            field_type,
            required,
            constraint: None,
            default: None,
            description: None,
        }
    }

    /// Create a required string field
    pub fn required_string(name: &'static str) -> Self {
        Self::new(name, FieldType::String, true)
    }

    /// Create an optional string field
    pub fn optional_string(name: &'static str) -> Self {
        Self::new(name, FieldType::String, false)
    }

    /// Create an optional number field
    pub fn optional_number(name: &'static str) -> Self {
        Self::new(name, FieldType::Number, false)
    }

    /// Create an optional string array field
    pub fn optional_string_array(name: &'static str) -> Self {
        Self::new(name, FieldType::StringArray, false)
    }

    /// Restrict the value to a fixed set of strings
    pub fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.constraint = Some(Constraint::OneOf(values));
        self
    }

    /// Restrict the value to an inclusive range
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.constraint = Some(Constraint::Range {
            min: Some(min),
            max: Some(max),
        });
        self
    }

    /// Restrict the value to a lower bound
    pub fn at_least(mut self, min: f64) -> Self {
        self.constraint = Some(Constraint::Range {
            min: Some(min),
            max: None,
        });
        self
    }

    /// Require a well-formed email address
    pub fn email(mut self) -> Self {
        self.constraint = Some(Constraint::Email);
        self
    }

    /// Require an http or https URL
    pub fn http_url(mut self) -> Self {
        self.constraint = Some(Constraint::HttpUrl);
        self
    }

    /// Value applied when the field is missing
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Attach a description
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Renders this field as a JSON Schema property
    pub fn to_json_schema(&self) -> Value {
        let mut property = Map::new();
        property.insert("title".into(), Value::String(field_title(self.name)));

        match self.field_type {
            FieldType::String => {
                property.insert("type".into(), json!("string"));
            }
            FieldType::Number => {
                property.insert("type".into(), json!("number"));
            }
            FieldType::StringArray => {
                property.insert("type".into(), json!("array"));
                property.insert("items".into(), json!({ "type": "string" }));
            }
        }

        match &self.constraint {
            Some(Constraint::OneOf(values)) => {
                property.insert("enum".into(), json!(values));
            }
            Some(Constraint::Range { min, max }) => {
                if let Some(min) = min {
                    property.insert("minimum".into(), json!(min));
                }
                if let Some(max) = max {
                    property.insert("maximum".into(), json!(max));
                }
            }
            Some(Constraint::Email) => {
                property.insert("format".into(), json!("email"));
            }
            Some(Constraint::HttpUrl) => {
                property.insert("format".into(), json!("uri"));
                property.insert("minLength".into(), json!(1));
            }
            None => {}
        }

        if let Some(default) = &self.default {
            property.insert("default".into(), default.clone());
        }
        if let Some(description) = self.description {
            property.insert("description".into(), json!(description));
        }

        Value::Object(property)
    }
}

/// Complete schema of one record kind
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Record kind name, e.g. "Animal"
    pub title: &'static str,
    /// Collection the records are stored in
    pub collection: &'static str,
    /// Optional description
    pub description: Option<&'static str>,
    /// Field definitions in declaration order
    pub fields: Vec<FieldDef>,
}

impl Schema {
    /// Create a new schema
    pub fn new(title: &'static str, collection: &'static str, fields: Vec<FieldDef>) -> Self {
        Self {
            title,
            collection,
            description: None,
            fields,
        }
    }

    /// Attach a description
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Names of the required fields, in declaration order
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }

    /// Validates the schema structure itself (not a payload)
    pub fn validate_structure(&self) -> Result<(), String> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(format!("Field '{}' declared twice", field.name));
            }
            if field.required && field.default.is_some() {
                return Err(format!(
                    "Required field '{}' cannot declare a default",
                    field.name
                ));
            }
        }
        Ok(())
    }

    /// Renders the schema as a JSON Schema object
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.to_json_schema()))
            .collect();

        let mut schema = Map::new();
        schema.insert("title".into(), json!(self.title));
        if let Some(description) = self.description {
            schema.insert("description".into(), json!(description));
        }
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), json!(self.required_fields()));
        Value::Object(schema)
    }
}

/// "location_text" -> "Location Text"
fn field_title(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema::new(
            "Pet",
            "pet",
            vec![
                FieldDef::required_string("name"),
                FieldDef::optional_string("kind")
                    .one_of(&["dog", "cat"])
                    .with_default(json!("dog")),
                FieldDef::optional_number("weight").at_least(0.0),
            ],
        )
    }

    #[test]
    fn test_schema_structure_valid() {
        assert!(sample_schema().validate_structure().is_ok());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let schema = Schema::new(
            "Pet",
            "pet",
            vec![
                FieldDef::required_string("name"),
                FieldDef::optional_string("name"),
            ],
        );
        let result = schema.validate_structure();
        assert!(result.unwrap_err().contains("twice"));
    }

    #[test]
    fn test_required_field_cannot_default() {
        let schema = Schema::new(
            "Pet",
            "pet",
            vec![FieldDef::required_string("name").with_default(json!("Rex"))],
        );
        assert!(schema.validate_structure().is_err());
    }

    #[test]
    fn test_required_fields_in_order() {
        let schema = Schema::new(
            "Pet",
            "pet",
            vec![
                FieldDef::required_string("b"),
                FieldDef::optional_string("c"),
                FieldDef::required_string("a"),
            ],
        );
        assert_eq!(schema.required_fields(), vec!["b", "a"]);
    }

    #[test]
    fn test_json_schema_rendering() {
        let rendered = sample_schema().to_json_schema();
        assert_eq!(rendered["title"], "Pet");
        assert_eq!(rendered["type"], "object");
        assert_eq!(rendered["required"], json!(["name"]));
        assert_eq!(rendered["properties"]["kind"]["enum"], json!(["dog", "cat"]));
        assert_eq!(rendered["properties"]["kind"]["default"], "dog");
        assert_eq!(rendered["properties"]["weight"]["minimum"], json!(0.0));
        assert!(rendered["properties"]["weight"].get("maximum").is_none());
    }

    #[test]
    fn test_field_title() {
        assert_eq!(field_title("location_text"), "Location Text");
        assert_eq!(field_title("name"), "Name");
        assert_eq!(field_title("photo_url"), "Photo Url");
    }

    #[test]
    fn test_constraint_expectation() {
        assert_eq!(
            Constraint::OneOf(&["low", "high"]).expectation(),
            "one of [low, high]"
        );
        assert_eq!(
            Constraint::Range {
                min: Some(-90.0),
                max: Some(90.0)
            }
            .expectation(),
            "a number between -90 and 90"
        );
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Number.type_name(), "number");
        assert_eq!(FieldType::StringArray.type_name(), "array of strings");
    }
}
