//! Animals available for adoption or in shelter care

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use super::{Record, RecordKind, Species};
use crate::schema::{FieldDef, Schema};

value_enum! {
    pub enum Gender {
        Male => "male",
        Female => "female",
        Unknown => "unknown",
    }
}

value_enum! {
    pub enum AnimalStatus {
        Adoptable => "adoptable",
        Rescued => "rescued",
        Fostered => "fostered",
        Medical => "medical",
        Other => "other",
    }
}

/// Animal record, stored in the `animal` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    pub species: Species,
    pub age: Option<String>,
    pub gender: Gender,
    pub description: Option<String>,
    pub status: AnimalStatus,
    pub location: Option<String>,
    pub photo_url: Option<Url>,
}

impl Record for Animal {
    const KIND: RecordKind = RecordKind::Animal;
}

pub(super) fn schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new(
            "Animal",
            "animal",
            vec![
                FieldDef::required_string("name").describe("Animal name (if known)"),
                FieldDef::required_string("species")
                    .one_of(Species::VALUES)
                    .describe("Species"),
                FieldDef::optional_string("age")
                    .describe("Approximate age, e.g., '2 years' or '6 months'"),
                FieldDef::optional_string("gender")
                    .one_of(Gender::VALUES)
                    .with_default(json!(Gender::Unknown.as_str()))
                    .describe("Gender if known"),
                FieldDef::optional_string("description").describe("Temperament, health, etc."),
                FieldDef::optional_string("status")
                    .one_of(AnimalStatus::VALUES)
                    .with_default(json!(AnimalStatus::Adoptable.as_str()))
                    .describe("Current status"),
                FieldDef::optional_string("location").describe("City/Area"),
                FieldDef::optional_string("photo_url")
                    .http_url()
                    .describe("Public link to animal photo"),
            ],
        )
        .describe("Animals available for adoption or in shelter care")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_animal_gets_defaults() {
        let animal = Animal::from_payload(&json!({ "name": "Rex", "species": "dog" })).unwrap();
        assert_eq!(animal.name, "Rex");
        assert_eq!(animal.species, Species::Dog);
        assert_eq!(animal.gender, Gender::Unknown);
        assert_eq!(animal.status, AnimalStatus::Adoptable);
        assert_eq!(animal.age, None);
        assert_eq!(animal.photo_url, None);
    }

    #[test]
    fn test_full_animal() {
        let animal = Animal::from_payload(&json!({
            "name": "Mittens",
            "species": "cat",
            "age": "6 months",
            "gender": "female",
            "description": "Shy but friendly",
            "status": "fostered",
            "location": "Riverside",
            "photo_url": "https://example.com/mittens.jpg"
        }))
        .unwrap();
        assert_eq!(animal.gender, Gender::Female);
        assert_eq!(animal.status, AnimalStatus::Fostered);
        assert_eq!(
            animal.photo_url.map(|u| u.to_string()),
            Some("https://example.com/mittens.jpg".to_string())
        );
    }

    #[test]
    fn test_unknown_species_rejected() {
        let err = Animal::from_payload(&json!({ "name": "Nemo", "species": "fish" })).unwrap_err();
        assert!(err.has_field("species"));
    }

    #[test]
    fn test_missing_name_and_bad_status_both_reported() {
        let err = Animal::from_payload(&json!({ "species": "dog", "status": "lost" })).unwrap_err();
        assert!(err.has_field("name"));
        assert!(err.has_field("status"));
    }

    #[test]
    fn test_numeric_age_rejected() {
        let err = Animal::from_payload(&json!({ "name": "Rex", "species": "dog", "age": 2 })).unwrap_err();
        assert!(err.has_field("age"));
    }

    #[test]
    fn test_bad_photo_url_rejected() {
        let err = Animal::from_payload(&json!({
            "name": "Rex",
            "species": "dog",
            "photo_url": "not a url"
        }))
        .unwrap_err();
        assert!(err.has_field("photo_url"));
    }

    #[test]
    fn test_serializes_every_field() {
        let animal = Animal::from_payload(&json!({ "name": "Rex", "species": "dog" })).unwrap();
        let value = serde_json::to_value(&animal).unwrap();
        assert_eq!(value["gender"], "unknown");
        assert_eq!(value["status"], "adoptable");
        assert!(value["location"].is_null());
    }
}
