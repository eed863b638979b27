//! Rendering of generated keypairs.
//!
//! Text output keeps results on stdout in a plain layout:
//! - single: address line, then private key line
//! - batch: all addresses, a blank line, then all private keys
//!
//! JSON output carries the same data with the same pairing by index.

use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::crypto::{Address, Keypair};
use crate::error::Result;
use crate::worker::Batch;

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// How results are written.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Use EIP-55 casing instead of lowercase for addresses
    pub checksum: bool,
}

impl OutputOptions {
    fn address(&self, address: &Address) -> String {
        if self.checksum {
            address.to_checksum()
        } else {
            address.to_hex_prefixed()
        }
    }
}

#[derive(Serialize)]
struct SingleJson {
    address: String,
    private_key: String,
}

#[derive(Serialize)]
struct BatchJson {
    addresses: Vec<String>,
    private_keys: Vec<String>,
}

/// Writes one keypair.
pub fn render_single<W: Write>(
    keypair: &Keypair,
    options: &OutputOptions,
    out: &mut W,
) -> Result<()> {
    let address = options.address(keypair.address());
    let private_key = keypair.private_key_hex();

    match options.format {
        OutputFormat::Text => {
            writeln!(out, "{}", address)?;
            writeln!(out, "{}", private_key)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &SingleJson { address, private_key })?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Writes a batch as two index-aligned collections.
pub fn render_batch<W: Write>(
    batch: &Batch,
    options: &OutputOptions,
    out: &mut W,
) -> Result<()> {
    let addresses: Vec<String> = batch.addresses().map(|a| options.address(a)).collect();
    let private_keys: Vec<String> = batch.private_keys().map(|k| k.to_hex()).collect();

    match options.format {
        OutputFormat::Text => {
            writeln!(out, "Addresses:")?;
            for address in &addresses {
                writeln!(out, "{}", address)?;
            }
            writeln!(out)?;
            writeln!(out, "Private keys:")?;
            for private_key in &private_keys {
                writeln!(out, "{}", private_key)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(
                &mut *out,
                &BatchJson {
                    addresses,
                    private_keys,
                },
            )?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
