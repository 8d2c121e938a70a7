//! CLI argument definitions using clap
//!
//! - stray-api [--host H] [--port P] [--in-memory] [--log-format pretty|json]
//!
//! Flags override the matching environment variables.

use clap::Parser;

use crate::observability::LogFormat;

/// Stray animal welfare REST API
#[derive(Parser, Debug)]
#[command(name = "stray-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Listen host (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Serve from a process-local store instead of MongoDB
    #[arg(long)]
    pub in_memory: bool,

    /// Log output format
    #[arg(long, value_enum, env = "LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["stray-api"]).unwrap();
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(!cli.in_memory);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "stray-api",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--in-memory",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(9000));
        assert!(cli.in_memory);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["stray-api", "--port", "not-a-port"]).is_err());
        assert!(Cli::try_parse_from(["stray-api", "--port", "70000"]).is_err());
    }
}
