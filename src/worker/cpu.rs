//! CPU worker for batch keypair generation.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;
use rand::{CryptoRng, RngCore};

use crate::crypto::{KeyError, Keypair};

/// A generated keypair tagged with its position in the batch.
pub(crate) type IndexedKeypair = (usize, Keypair);

/// Statistics shared by all workers of a batch.
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Total keys generated
    pub keys_generated: AtomicU64,
}

impl WorkerStats {
    /// Creates new worker stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total keys generated.
    pub fn total_keys(&self) -> u64 {
        self.keys_generated.load(Ordering::Relaxed)
    }
}

/// A CPU worker that generates its share of a batch.
///
/// Worker `id` of `stride` workers produces indices `id, id + stride, ...`
/// below `count`.
pub struct CpuWorker {
    /// Worker ID
    id: usize,
    /// Total number of workers
    stride: usize,
    /// Batch size
    count: usize,
    /// Channel to send results
    result_tx: Sender<Result<IndexedKeypair, KeyError>>,
    /// Shared stop flag
    stop_flag: Arc<AtomicBool>,
    /// Worker statistics
    stats: Arc<WorkerStats>,
}

impl CpuWorker {
    /// Creates a new CPU worker.
    pub(crate) fn new(
        id: usize,
        stride: usize,
        count: usize,
        result_tx: Sender<Result<IndexedKeypair, KeyError>>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<WorkerStats>,
    ) -> Self {
        Self {
            id,
            stride,
            count,
            result_tx,
            stop_flag,
            stats,
        }
    }

    /// Runs the worker loop.
    ///
    /// Generates keypairs for this worker's indices until:
    /// - Its share of the batch is done
    /// - Generation fails (the error is sent through the channel)
    /// - Stop flag is set
    /// - Channel is closed
    pub fn run<R>(&self, mut rng: R)
    where
        R: RngCore + CryptoRng,
    {
        let mut index = self.id;

        while index < self.count {
            if self.stop_flag.load(Ordering::Relaxed) {
                log::debug!("Worker {} stopped early at index {}", self.id, index);
                break;
            }

            let result = Keypair::generate_with(&mut rng).map(|keypair| (index, keypair));
            let failed = result.is_err();

            if !failed {
                self.stats.keys_generated.fetch_add(1, Ordering::Relaxed);
            }

            if self.result_tx.send(result).is_err() || failed {
                break;
            }

            index += self.stride;
        }
    }

    /// Returns the worker ID.
    pub fn id(&self) -> usize {
        self.id
    }
}
