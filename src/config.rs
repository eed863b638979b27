//! Runtime configuration for the key generator.

use std::str::FromStr;

use clap::Parser;

use crate::output::{OutputFormat, OutputOptions};
use crate::worker::MAX_BATCH_SIZE;

/// Default number of keypairs in batch mode.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Which result layout to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Generate a batch and print all addresses, then all private keys
    #[default]
    Batch,
    /// Generate one keypair and print its address and private key
    Single,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "batch" | "many" => Ok(Mode::Batch),
            "single" | "one" => Ok(Mode::Single),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Batch => write!(f, "batch"),
            Mode::Single => write!(f, "single"),
        }
    }
}

/// Ethereum Key Pair Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Output layout: batch or single
    #[arg(short, long, default_value = "batch")]
    pub mode: Mode,

    /// Number of keypairs to generate in batch mode
    #[arg(short = 'n', long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub count: usize,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Derive the address of this hex private key instead of generating one
    #[arg(short = 'k', long)]
    pub private_key: Option<String>,

    /// Output format: text or json
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Print addresses with EIP-55 checksum casing
    #[arg(short = 'c', long, default_value = "false")]
    pub checksum: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Batch,
            count: DEFAULT_BATCH_SIZE,
            workers: None,
            private_key: None,
            format: OutputFormat::Text,
            checksum: false,
        }
    }
}

impl Config {
    /// Returns the number of workers, defaulting to CPU count
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount);
        }

        if self.count > MAX_BATCH_SIZE {
            return Err(ConfigError::CountTooLarge(self.count));
        }

        if self.workers == Some(0) {
            return Err(ConfigError::InvalidWorkers);
        }

        Ok(())
    }

    /// Returns the rendering options selected on the command line.
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            format: self.format,
            checksum: self.checksum,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Count must be at least 1")]
    InvalidCount,

    #[error("Count {0} exceeds the maximum batch size of {max}", max = MAX_BATCH_SIZE)]
    CountTooLarge(usize),

    #[error("Worker count must be at least 1")]
    InvalidWorkers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_batch_of_ten() {
        let config = Config::try_parse_from(["eth_keygen"]).unwrap();
        assert_eq!(config.mode, Mode::Batch);
        assert_eq!(config.count, 10);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.checksum);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "eth_keygen", "--mode", "single", "-f", "json", "-c", "-w", "2",
        ])
        .unwrap();
        assert_eq!(config.mode, Mode::Single);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.checksum);
        assert_eq!(config.worker_count(), 2);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Config::try_parse_from(["eth_keygen", "--mode", "vanity"]).is_err());
    }

    #[test]
    fn test_zero_count_invalid() {
        let config = Config {
            count: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCount)));
    }

    #[test]
    fn test_huge_count_invalid() {
        let config = Config {
            count: usize::MAX,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CountTooLarge(usize::MAX))
        ));

        let config = Config {
            count: MAX_BATCH_SIZE,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_workers_invalid() {
        let config = Config {
            workers: Some(0),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWorkers)));
    }
}
