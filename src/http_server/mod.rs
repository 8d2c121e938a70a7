//! # HTTP Server Module
//!
//! Axum server exposing the welfare API.
//!
//! # Endpoints
//!
//! - `GET /` - Liveness message
//! - `GET /schema` - Field-level schemas of every record kind
//! - `GET /test` - Database diagnostic
//! - `GET|POST /api/animals` - List / create animals
//! - `GET|POST /api/sightings` - List / report sightings
//! - `POST /api/volunteers` - Volunteer sign-up
//! - `POST /api/donations` - Donation pledge

pub mod config;
pub mod errors;
pub mod record_routes;
pub mod server;
pub mod service_routes;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_router, HttpServer};
pub use state::AppState;
