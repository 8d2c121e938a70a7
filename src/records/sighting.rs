//! Citizen-reported stray animal sightings

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use super::{Record, RecordKind, Species};
use crate::schema::{FieldDef, Schema};

value_enum! {
    pub enum SightingStatus {
        New => "new",
        InProgress => "in_progress",
        Resolved => "resolved",
    }
}

value_enum! {
    pub enum Urgency {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

/// Sighting record, stored in the `sighting` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub species: Species,
    pub location_text: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub notes: Option<String>,
    pub reporter_name: Option<String>,
    pub reporter_contact: Option<String>,
    pub photo_url: Option<Url>,
    pub status: SightingStatus,
    pub urgency: Urgency,
}

impl Record for Sighting {
    const KIND: RecordKind = RecordKind::Sighting;
}

pub(super) fn schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new(
            "Sighting",
            "sighting",
            vec![
                FieldDef::required_string("species")
                    .one_of(Species::VALUES)
                    .describe("Species seen"),
                FieldDef::required_string("location_text").describe("Street/landmark/city"),
                FieldDef::optional_number("latitude").range(-90.0, 90.0),
                FieldDef::optional_number("longitude").range(-180.0, 180.0),
                FieldDef::optional_string("notes")
                    .describe("Behavior, condition, collar, etc."),
                FieldDef::optional_string("reporter_name").describe("Your name"),
                FieldDef::optional_string("reporter_contact").describe("Phone or email"),
                FieldDef::optional_string("photo_url")
                    .http_url()
                    .describe("Photo link if available"),
                FieldDef::optional_string("status")
                    .one_of(SightingStatus::VALUES)
                    .with_default(json!(SightingStatus::New.as_str())),
                FieldDef::optional_string("urgency")
                    .one_of(Urgency::VALUES)
                    .with_default(json!(Urgency::Medium.as_str())),
            ],
        )
        .describe("Citizen-reported stray animal sightings")
    })
}
