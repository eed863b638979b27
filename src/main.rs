//! Ethereum Key Pair Generator CLI
//!
//! Usage:
//!   eth_keygen                      # 10 addresses, then their 10 private keys
//!   eth_keygen --mode single        # one address and its private key
//!   eth_keygen -k <hex> -c          # checksummed address of an existing key
//!   eth_keygen -n 100 -f json       # batch of 100 as JSON

use std::io;
use std::process;

use clap::Parser;

use eth_keygen::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = eth_keygen::run(&config, &mut out) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
