//! Worker pool management for batch generation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::unbounded;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::crypto::{Address, Keypair, PrivateKey};
use crate::error::{Error, Result};

use super::cpu::{CpuWorker, WorkerStats};

/// Largest batch a single run may request.
pub const MAX_BATCH_SIZE: usize = 1_000_000;

/// An ordered batch of generated keypairs.
#[derive(Debug, Clone)]
pub struct Batch {
    keypairs: Vec<Keypair>,
    workers: usize,
    elapsed: Duration,
}

impl Batch {
    /// Returns the keypairs in generation order.
    pub fn keypairs(&self) -> &[Keypair] {
        &self.keypairs
    }

    /// Consumes the batch, returning its keypairs.
    pub fn into_keypairs(self) -> Vec<Keypair> {
        self.keypairs
    }

    /// Returns the addresses, index-aligned with [`Batch::private_keys`].
    pub fn addresses(&self) -> impl Iterator<Item = &Address> + '_ {
        self.keypairs.iter().map(Keypair::address)
    }

    /// Returns the private keys, index-aligned with [`Batch::addresses`].
    pub fn private_keys(&self) -> impl Iterator<Item = &PrivateKey> + '_ {
        self.keypairs.iter().map(Keypair::private_key)
    }

    /// Returns the number of keypairs.
    pub fn len(&self) -> usize {
        self.keypairs.len()
    }

    /// Returns true if the batch holds no keypairs.
    pub fn is_empty(&self) -> bool {
        self.keypairs.is_empty()
    }

    /// Returns the number of workers that produced the batch.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the wall-clock generation time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the generation rate (keys per second).
    pub fn keys_per_second(&self) -> f64 {
        let elapsed = self.elapsed.as_secs_f64();
        if elapsed > 0.0 {
            self.keypairs.len() as f64 / elapsed
        } else {
            0.0
        }
    }
}

/// Generates batches of keypairs across a pool of scoped worker threads.
#[derive(Debug, Clone, Copy)]
pub struct BatchGenerator {
    num_workers: usize,
}

impl BatchGenerator {
    /// Creates a generator that uses up to `num_workers` threads.
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers: num_workers.max(1),
        }
    }

    /// Returns the configured number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Generates `count` keypairs from OS entropy.
    pub fn generate(&self, count: usize) -> Result<Batch> {
        self.generate_with(count, |_| OsRng)
    }

    /// Generates `count` keypairs, giving worker `id` the random source
    /// `make_rng(id)`.
    ///
    /// Keypairs are returned in index order regardless of which worker
    /// finished first. The first generation error stops the remaining
    /// workers and is returned. Batches above [`MAX_BATCH_SIZE`] are
    /// rejected before any allocation.
    pub fn generate_with<F, R>(&self, count: usize, make_rng: F) -> Result<Batch>
    where
        F: Fn(usize) -> R + Sync,
        R: RngCore + CryptoRng,
    {
        if count > MAX_BATCH_SIZE {
            return Err(Error::BatchTooLarge {
                requested: count,
                max: MAX_BATCH_SIZE,
            });
        }

        let start_time = Instant::now();
        let workers = self.num_workers.min(count).max(1);

        log::debug!("Generating {} keypairs on {} worker(s)", count, workers);

        let (result_tx, result_rx) = unbounded();
        let stop_flag = Arc::new(AtomicBool::new(false));
        let stats = Arc::new(WorkerStats::new());

        let mut slots: Vec<Option<Keypair>> = (0..count).map(|_| None).collect();
        let mut failure = None;
        let make_rng = &make_rng;

        thread::scope(|scope| -> Result<()> {
            for id in 0..workers {
                let worker = CpuWorker::new(
                    id,
                    workers,
                    count,
                    result_tx.clone(),
                    stop_flag.clone(),
                    stats.clone(),
                );

                thread::Builder::new()
                    .name(format!("keygen-worker-{}", id))
                    .spawn_scoped(scope, move || {
                        worker.run(make_rng(id));
                        log::debug!("Worker {} finished", worker.id());
                    })?;
            }

            // Drop the original sender so the channel closes when all workers finish
            drop(result_tx);

            // Single insertion point: slots are filled by index
            for message in result_rx.iter() {
                match message {
                    Ok((index, keypair)) => slots[index] = Some(keypair),
                    Err(e) => {
                        stop_flag.store(true, Ordering::Relaxed);
                        if failure.is_none() {
                            failure = Some(e);
                        }
                    }
                }
            }

            Ok(())
        })?;

        if let Some(e) = failure {
            return Err(e.into());
        }

        let received = slots.iter().filter(|slot| slot.is_some()).count();
        let keypairs: Vec<Keypair> = slots
            .into_iter()
            .collect::<Option<Vec<Keypair>>>()
            .ok_or(Error::IncompleteBatch {
                expected: count,
                received,
            })?;

        let batch = Batch {
            keypairs,
            workers,
            elapsed: start_time.elapsed(),
        };

        log::info!(
            "Generated {} keypairs in {:.3}s ({:.0} keys/s, {} total counted)",
            batch.len(),
            batch.elapsed().as_secs_f64(),
            batch.keys_per_second(),
            stats.total_keys()
        );

        Ok(batch)
    }
}
