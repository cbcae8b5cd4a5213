// src/cli.rs
//! Command-line options for the `hmtl-config` binary

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::{HmtlError, Result};
use crate::session::{RecordFailurePolicy, SessionConfig};
use crate::util::io::DEFAULT_BAUD_RATE;

/// Send a JSON configuration to an HMTL module over serial
#[derive(Parser, Debug, Clone)]
#[command(name = "hmtl-config", version)]
pub struct Args {
    /// HMTL configuration file
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Serial device the module is attached to
    #[arg(short = 'd', long = "device")]
    pub device: Option<String>,

    /// Set the module address (overrides the file's header address)
    #[arg(short = 'a', long = "address")]
    pub address: Option<u64>,

    /// Validate and sequence the transfer without touching a device
    #[arg(short = 'n', long = "dryrun")]
    pub dry_run: bool,

    /// Write the configuration to EEPROM after sending it
    #[arg(short = 'w', long = "write")]
    pub write_config: bool,

    /// Read and print the module's current configuration
    #[arg(short = 'p', long = "print")]
    pub print_config: bool,

    /// Verbose output; also prints the configuration after a transfer
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Serial baud rate
    #[arg(long = "baud", default_value_t = DEFAULT_BAUD_RATE)]
    pub baud_rate: u32,

    /// Seconds to wait for each line from the module
    #[arg(long = "timeout", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Keep sending when the module rejects an output record
    #[arg(long = "continue-on-record-failure")]
    pub continue_on_record_failure: bool,
}

impl Args {
    /// Reject option combinations that have nothing to do
    pub fn check(&self) -> Result<()> {
        if self.file.is_none() && !self.print_config && self.address.is_none() {
            return Err(HmtlError::Usage(
                "must specify a mode: --file, --print or --address".to_string(),
            ));
        }
        if !self.dry_run && self.device.is_none() {
            return Err(HmtlError::Usage(
                "must specify --device if not in dry-run mode".to_string(),
            ));
        }
        Ok(())
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            device: self.device.clone(),
            baud_rate: self.baud_rate,
            timeout: Duration::from_secs(self.timeout_secs),
            dry_run: self.dry_run,
            record_failure_policy: if self.continue_on_record_failure {
                RecordFailurePolicy::Continue
            } else {
                RecordFailurePolicy::Abort
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["hmtl-config", "-f", "cfg.json", "-d", "/dev/ttyUSB0", "-w", "-v"]);

        assert_eq!(args.file, Some(PathBuf::from("cfg.json")));
        assert_eq!(args.device.as_deref(), Some("/dev/ttyUSB0"));
        assert!(args.write_config);
        assert!(args.verbose);
        assert!(args.check().is_ok());

        let config = args.session_config();
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.record_failure_policy, RecordFailurePolicy::Abort);
    }

    #[test]
    fn test_mode_required() {
        let args = Args::parse_from(["hmtl-config", "-d", "/dev/ttyUSB0"]);
        assert!(args.check().is_err());
    }

    #[test]
    fn test_device_required_unless_dry_run() {
        let args = Args::parse_from(["hmtl-config", "-a", "12"]);
        assert!(args.check().is_err());

        let args = Args::parse_from(["hmtl-config", "-a", "12", "-n"]);
        assert!(args.check().is_ok());
        assert!(args.session_config().dry_run);
    }

    #[test]
    fn test_continue_policy() {
        let args = Args::parse_from([
            "hmtl-config",
            "-n",
            "-f",
            "x.json",
            "--continue-on-record-failure",
            "--timeout",
            "2",
        ]);
        let config = args.session_config();

        assert_eq!(config.record_failure_policy, RecordFailurePolicy::Continue);
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
