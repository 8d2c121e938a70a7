//! Record kinds stored by the service
//!
//! Each record kind owns a schema (field types, constraints, defaults) and
//! a typed struct produced from a validated payload. Record kinds are
//! independent: there are no references between collections.

/// Declares a closed set of stored string values as an enum.
///
/// The serde names, `as_str` and the `VALUES` slice handed to the schema
/// all come from the same `Variant => "value"` list.
macro_rules! value_enum {
    ($(#[$meta:meta])* pub enum $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $value)] $variant,)+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stored form of every variant, in declaration order
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Stored form of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }
    };
}

mod animal;
mod donation;
mod sighting;
mod volunteer;

pub use animal::{Animal, AnimalStatus, Gender};
pub use donation::Donation;
pub use sighting::{Sighting, SightingStatus, Urgency};
pub use volunteer::Volunteer;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::{Schema, SchemaValidator, ValidationDetails, ValidationError, ValidationResult};

value_enum! {
    /// Species accepted on animals and sightings
    pub enum Species {
        Dog => "dog",
        Cat => "cat",
        Bird => "bird",
        Other => "other",
    }
}

/// The four record kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Animal,
    Sighting,
    Volunteer,
    Donation,
}

impl RecordKind {
    /// Every record kind, in catalog order
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Animal,
        RecordKind::Sighting,
        RecordKind::Volunteer,
        RecordKind::Donation,
    ];

    /// Collection name: the lowercase kind name
    pub fn collection(&self) -> &'static str {
        match self {
            RecordKind::Animal => "animal",
            RecordKind::Sighting => "sighting",
            RecordKind::Volunteer => "volunteer",
            RecordKind::Donation => "donation",
        }
    }

    /// Returns the schema for this kind
    pub fn schema(&self) -> &'static Schema {
        match self {
            RecordKind::Animal => animal::schema(),
            RecordKind::Sighting => sighting::schema(),
            RecordKind::Volunteer => volunteer::schema(),
            RecordKind::Donation => donation::schema(),
        }
    }

    /// Confirmation returned to the caller after a successful create
    pub fn created_message(&self) -> &'static str {
        match self {
            RecordKind::Animal => "Animal added",
            RecordKind::Sighting => "Sighting reported",
            RecordKind::Volunteer => "Thanks for volunteering!",
            RecordKind::Donation => "Thank you for your pledge!",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.schema().title)
    }
}

/// A typed record built from a validated payload.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Kind of this record
    const KIND: RecordKind;

    /// Validates a raw payload and builds the typed record.
    ///
    /// # Errors
    ///
    /// Returns every field violation found in the payload.
    fn from_payload(payload: &Value) -> ValidationResult<Self> {
        let schema = Self::KIND.schema();
        let normalized = SchemaValidator::new(schema).validate(payload)?;

        serde_json::from_value(Value::Object(normalized)).map_err(|e| {
            ValidationError::single(
                schema.title,
                ValidationDetails::new("$root", format!("a valid {}", schema.title), e.to_string()),
            )
        })
    }
}

/// Schemas of every record kind, keyed by collection name
pub fn schema_catalog() -> Map<String, Value> {
    RecordKind::ALL
        .iter()
        .map(|kind| (kind.collection().to_string(), kind.schema().to_json_schema()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_names_are_lowercase_kind_names() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.collection(), kind.to_string().to_lowercase());
            assert_eq!(kind.schema().collection, kind.collection());
        }
    }

    #[test]
    fn test_builtin_schemas_are_well_formed() {
        for kind in RecordKind::ALL {
            assert!(kind.schema().validate_structure().is_ok(), "{}", kind);
        }
    }

    #[test]
    fn test_catalog_lists_every_kind() {
        let catalog = schema_catalog();
        assert_eq!(catalog.len(), 4);
        for key in ["animal", "sighting", "volunteer", "donation"] {
            assert_eq!(catalog[key]["type"], "object");
        }
        assert_eq!(
            catalog["animal"]["properties"]["species"]["enum"],
            serde_json::json!(Species::VALUES)
        );
    }

    #[test]
    fn test_value_enums_serialize_as_their_values() {
        fn check<T: Serialize>(all: &[T], values: &[&str], as_str: fn(&T) -> &'static str) {
            assert_eq!(all.len(), values.len());
            for (variant, value) in all.iter().zip(values) {
                assert_eq!(serde_json::to_value(variant).unwrap(), *value);
                assert_eq!(as_str(variant), *value);
            }
        }

        check(Species::ALL, Species::VALUES, Species::as_str);
        check(Gender::ALL, Gender::VALUES, Gender::as_str);
        check(AnimalStatus::ALL, AnimalStatus::VALUES, AnimalStatus::as_str);
        check(SightingStatus::ALL, SightingStatus::VALUES, SightingStatus::as_str);
        check(Urgency::ALL, Urgency::VALUES, Urgency::as_str);
    }

    #[test]
    fn test_schema_enums_come_from_value_enums() {
        let catalog = schema_catalog();
        let enum_of = |kind: &str, field: &str| catalog[kind]["properties"][field]["enum"].clone();

        assert_eq!(enum_of("animal", "gender"), serde_json::json!(Gender::VALUES));
        assert_eq!(enum_of("animal", "status"), serde_json::json!(AnimalStatus::VALUES));
        assert_eq!(enum_of("sighting", "species"), serde_json::json!(Species::VALUES));
        assert_eq!(enum_of("sighting", "status"), serde_json::json!(SightingStatus::VALUES));
        assert_eq!(enum_of("sighting", "urgency"), serde_json::json!(Urgency::VALUES));
    }

    #[test]
    fn test_species_serialization() {
        assert_eq!(serde_json::to_value(Species::Bird).unwrap(), "bird");
        let parsed: Species = serde_json::from_value(serde_json::json!("other")).unwrap();
        assert_eq!(parsed, Species::Other);
    }
}
