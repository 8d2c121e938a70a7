//! Volunteer sign-ups

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Record, RecordKind};
use crate::schema::{FieldDef, Schema};

/// Volunteer record, stored in the `volunteer` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub areas_of_interest: Vec<String>,
    pub availability: Option<String>,
    pub notes: Option<String>,
}

impl Record for Volunteer {
    const KIND: RecordKind = RecordKind::Volunteer;
}

pub(super) fn schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new(
            "Volunteer",
            "volunteer",
            vec![
                FieldDef::required_string("name"),
                FieldDef::required_string("email").email(),
                FieldDef::optional_string("phone"),
                FieldDef::optional_string_array("areas_of_interest")
                    .with_default(json!([]))
                    .describe("e.g., rescue, foster, transport, outreach"),
                FieldDef::optional_string("availability").describe("Days/times available"),
                FieldDef::optional_string("notes"),
            ],
        )
        .describe("Volunteer sign-ups")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volunteer_defaults_to_no_interests() {
        let volunteer =
            Volunteer::from_payload(&json!({ "name": "Ann", "email": "ann@example.org" })).unwrap();
        assert!(volunteer.areas_of_interest.is_empty());
        assert_eq!(volunteer.phone, None);
    }

    #[test]
    fn test_malformed_email_rejected() {
        let err =
            Volunteer::from_payload(&json!({ "name": "Ann", "email": "not-an-email" })).unwrap_err();
        assert!(err.has_field("email"));
    }

    #[test]
    fn test_email_required() {
        let err = Volunteer::from_payload(&json!({ "name": "Ann" })).unwrap_err();
        assert!(err.has_field("email"));
    }

    #[test]
    fn test_interests_keep_order() {
        let volunteer = Volunteer::from_payload(&json!({
            "name": "Ann",
            "email": "ann@example.org",
            "areas_of_interest": ["transport", "rescue", "outreach"]
        }))
        .unwrap();
        assert_eq!(volunteer.areas_of_interest, vec!["transport", "rescue", "outreach"]);
    }

    #[test]
    fn test_non_string_interest_rejected() {
        let err = Volunteer::from_payload(&json!({
            "name": "Ann",
            "email": "ann@example.org",
            "areas_of_interest": ["rescue", 7]
        }))
        .unwrap_err();
        assert!(err.has_field("areas_of_interest[1]"));
    }
}
