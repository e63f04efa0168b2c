//! CLI argument definitions for the helpdesk server.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = "helpdesk.toml";

/// Helpdesk - rule-based FAQ support chat server.
#[derive(Parser, Debug)]
#[command(name = "helpdesk", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Interface to bind the API server to.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > HELPDESK_CONFIG env var > ./helpdesk.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("HELPDESK_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > HELPDESK_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("HELPDESK_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        config_port
    }

    /// Resolve the bind host. Priority: --host flag > config file value.
    pub fn resolve_host(&self, config_host: &str) -> String {
        self.host
            .clone()
            .unwrap_or_else(|| config_host.to_string())
    }

    /// Resolve the log level. Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "helpdesk",
            "-c",
            "/etc/helpdesk.toml",
            "--host",
            "0.0.0.0",
            "-p",
            "8080",
            "-l",
            "debug",
        ]);
        assert_eq!(args.resolve_config_path(), PathBuf::from("/etc/helpdesk.toml"));
        assert_eq!(args.resolve_host("127.0.0.1"), "0.0.0.0");
        assert_eq!(args.resolve_port(3000), 8080);
        assert_eq!(args.resolve_log_level("info"), "debug");
    }

    #[test]
    fn test_config_values_used_without_flags() {
        let args = CliArgs::parse_from(["helpdesk"]);
        assert_eq!(args.resolve_host("10.0.0.1"), "10.0.0.1");
        assert_eq!(args.resolve_log_level("warn"), "warn");
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(CliArgs::try_parse_from(["helpdesk", "--port", "not-a-port"]).is_err());
    }
}
