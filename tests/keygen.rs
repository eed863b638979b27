use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use eth_keygen::{derive_address, BatchGenerator, Config, Keypair, Mode, PrivateKey};

#[test]
fn known_vectors() {
    let vectors = [
        (
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf",
        ),
        (
            "4c0883a69102937d6231471b5dbb6204fe512961708279f8b9f0629fbd2b6f72",
            "0x4fa9eef32a1e34e6f6384f30719feb18ea9563bc",
        ),
    ];

    for (private_key, address) in vectors {
        let private_key = PrivateKey::from_hex(private_key).unwrap();
        assert_eq!(derive_address(&private_key).to_string(), address);
    }
}

#[test]
fn seeded_batches_are_reproducible() {
    let generator = BatchGenerator::new(4);
    let a = generator
        .generate_with(12, |id| StdRng::seed_from_u64(1000 + id as u64))
        .unwrap();
    let b = generator
        .generate_with(12, |id| StdRng::seed_from_u64(1000 + id as u64))
        .unwrap();

    let a: Vec<_> = a.addresses().copied().collect();
    let b: Vec<_> = b
        .into_keypairs()
        .iter()
        .map(|keypair| *keypair.address())
        .collect();
    assert_eq!(a, b);
}

#[test]
fn generated_keys_do_not_repeat() {
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let keypair = Keypair::generate().unwrap();
        assert!(seen.insert(keypair.private_key_hex()));
    }
}

#[test]
fn batch_run_writes_index_aligned_collections() {
    let config = Config {
        mode: Mode::Batch,
        workers: Some(3),
        ..Config::default()
    };

    let mut out = Vec::new();
    eth_keygen::run(&config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let (addresses, private_keys) = text.split_once("\n\n").unwrap();
    let addresses: Vec<&str> = addresses.lines().skip(1).collect();
    let private_keys: Vec<&str> = private_keys.lines().skip(1).collect();

    assert_eq!(addresses.len(), 10);
    assert_eq!(private_keys.len(), 10);
    for (address, private_key) in addresses.into_iter().zip(private_keys) {
        let private_key = PrivateKey::from_hex(private_key).unwrap();
        assert_eq!(address, derive_address(&private_key).to_string());
    }
}
