//! Parallel batch generation of keypairs.
//!
//! This module provides:
//! - CPU workers, each owning its own random source
//! - An order-preserving collector that fills results by index
//! - Throughput statistics

mod cpu;
mod pool;

pub use cpu::WorkerStats;
pub use pool::{Batch, BatchGenerator, MAX_BATCH_SIZE};
