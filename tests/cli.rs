use std::process::{Command, Output};

fn eth_keygen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_eth_keygen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run eth_keygen")
}

#[test]
fn default_run_succeeds_with_ten_pairs() {
    let output = eth_keygen(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    // header + 10 addresses + blank + header + 10 keys
    assert_eq!(lines.len(), 23);
    assert_eq!(lines[0], "Addresses:");
    assert_eq!(lines[12], "Private keys:");
    assert!(lines[1..11].iter().all(|l| l.len() == 42 && l.starts_with("0x")));
    assert!(lines[13..23].iter().all(|l| l.len() == 64));
}

#[test]
fn supplied_key_prints_its_address() {
    let output = eth_keygen(&[
        "-k",
        "0000000000000000000000000000000000000000000000000000000000000001",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().next(),
        Some("0x7e5f4552091a69125d5dfcb7b8c2659029395bdf")
    );
}

#[test]
fn zero_key_exits_with_error() {
    let zero_key = "00".repeat(32);
    let output = eth_keygen(&["-k", &zero_key]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Invalid private key"));
}

#[test]
fn oversized_count_exits_with_error() {
    let output = eth_keygen(&["-n", &usize::MAX.to_string()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("exceeds the maximum batch size"));
}
