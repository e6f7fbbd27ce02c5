//! Command-line arguments for the cinerec-rs server
//!
//! Each flag also reads an environment variable, giving the CLI > ENV part of
//! the configuration priority; TOML and defaults are merged afterwards by
//! [`cinerec_common::config::ServiceConfig::resolve`].

use std::path::PathBuf;

use cinerec_common::config::Overrides;
use clap::Parser;

/// Command-line arguments for cinerec-rs
#[derive(Parser, Debug)]
#[command(name = "cinerec-rs")]
#[command(about = "Genre recommendation service with baseline and optimized strategies")]
#[command(version)]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "CINEREC_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "CINEREC_PORT")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CINEREC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// TOML config file (default: <config_dir>/cinerec/cinerec-rs.toml)
    #[arg(short, long, env = "CINEREC_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for var in ["CINEREC_HOST", "CINEREC_PORT", "CINEREC_LOG_LEVEL", "CINEREC_CONFIG"] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_no_arguments() {
        clear_env();
        let args = Args::try_parse_from(["cinerec-rs"]).unwrap();
        let overrides = args.overrides();
        assert!(overrides.host.is_none());
        assert!(overrides.port.is_none());
        assert!(overrides.log_level.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    #[serial]
    fn test_flags() {
        clear_env();
        let args = Args::try_parse_from([
            "cinerec-rs",
            "--host",
            "0.0.0.0",
            "-p",
            "9001",
            "--log-level",
            "debug",
            "--config",
            "/tmp/cinerec.toml",
        ])
        .unwrap();

        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(9001));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/cinerec.toml")));
    }

    #[test]
    #[serial]
    fn test_environment_fills_missing_flags() {
        clear_env();
        env::set_var("CINEREC_PORT", "9300");
        env::set_var("CINEREC_LOG_LEVEL", "trace");

        let args = Args::try_parse_from(["cinerec-rs"]).unwrap();
        assert_eq!(args.port, Some(9300));
        assert_eq!(args.log_level.as_deref(), Some("trace"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_flag_beats_environment() {
        clear_env();
        env::set_var("CINEREC_PORT", "9300");

        let args = Args::try_parse_from(["cinerec-rs", "--port", "9400"]).unwrap();
        assert_eq!(args.port, Some(9400));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_rejected() {
        clear_env();
        assert!(Args::try_parse_from(["cinerec-rs", "--port", "not-a-port"]).is_err());
    }
}
