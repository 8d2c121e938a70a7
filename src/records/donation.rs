//! Donation pledges or contact

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::{Record, RecordKind};
use crate::schema::{FieldDef, Schema};

/// Donation record, stored in the `donation` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub name: String,
    pub email: Option<String>,
    pub amount: Option<f64>,
    pub message: Option<String>,
}

impl Record for Donation {
    const KIND: RecordKind = RecordKind::Donation;
}

pub(super) fn schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new(
            "Donation",
            "donation",
            vec![
                FieldDef::required_string("name"),
                FieldDef::optional_string("email").email(),
                FieldDef::optional_number("amount").at_least(0.0),
                FieldDef::optional_string("message"),
            ],
        )
        .describe("Donation pledges or contact")
    })
}
