//! Program driver: configuration in, rendered keypairs out.

use std::io::Write;

use crate::config::{Config, Mode};
use crate::crypto::{Keypair, PrivateKey};
use crate::error::Result;
use crate::output::{render_batch, render_single};
use crate::worker::BatchGenerator;

/// Runs one invocation of the generator, writing results to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    config.validate()?;
    let options = config.output_options();

    if let Some(ref hex_key) = config.private_key {
        let keypair = Keypair::from_private_key(PrivateKey::from_hex(hex_key)?);
        log::debug!("Derived address {} from supplied key", keypair.address());
        return render_single(&keypair, &options, out);
    }

    match config.mode {
        Mode::Single => {
            let keypair = Keypair::generate()?;
            render_single(&keypair, &options, out)
        }
        Mode::Batch => {
            let generator = BatchGenerator::new(config.worker_count());
            let batch = generator.generate(config.count)?;
            render_batch(&batch, &options, out)
        }
    }
}
