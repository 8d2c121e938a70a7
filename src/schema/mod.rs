//! Schema subsystem
//!
//! Declares the shape of each record kind and checks inbound payloads
//! against it before anything reaches storage.
//!
//! # Design Principles
//!
//! - Validation is pure and deterministic
//! - Every violated field is reported, not only the first
//! - Defaults are applied by the schema, not by the storage layer
//! - Undeclared fields are dropped

mod errors;
mod types;
mod validator;

pub use errors::{ValidationDetails, ValidationError, ValidationResult};
pub use types::{Constraint, FieldDef, FieldType, Schema};
pub use validator::{is_valid_email, normalize_http_url, SchemaValidator};
