//! CLI module
//!
//! Parses flags and boots the HTTP service.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::serve;
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and run the service
pub async fn run() -> CliResult<()> {
    serve(Cli::parse_args()).await
}
