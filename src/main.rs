//! stray-api entry point
//!
//! Parses arguments and hands off to the CLI module. Errors are printed to
//! stderr and exit non-zero.

use stray_api::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
