//! stray_api - REST backend for a stray-animal welfare service
//!
//! Records animals, public sightings, volunteer sign-ups and donation
//! pledges in a document store, validating every payload against a
//! declared schema before it is written.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod records;
pub mod schema;
pub mod storage;
