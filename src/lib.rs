//! # eth_keygen
//!
//! Ethereum key pair generator: random secp256k1 private keys and their
//! Keccak-256 derived addresses.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation and address derivation
//! - `worker`: Parallel, order-preserving batch generation
//! - `output`: Text and JSON rendering
//! - `config`: Runtime configuration
//! - `runner`: Ties configuration, generation and output together

pub mod config;
pub mod crypto;
pub mod error;
pub mod output;
pub mod runner;
pub mod worker;

pub use config::{Config, Mode};
pub use crypto::{derive_address, Address, KeyError, Keypair, PrivateKey, PublicKey};
pub use error::{Error, Result};
pub use output::{OutputFormat, OutputOptions};
pub use runner::run;
pub use worker::{Batch, BatchGenerator};
