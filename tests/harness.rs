#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn pack(args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_pack"), args)
}

fn unpack(args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_unpack"), args)
}

#[test]
fn test_pack_one() {
    let output = pack(&["1"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\t0x1\t0x0\t0x0\t0x0\t0x0\t0x0\t0x0\t0x0\n"
    );
}

#[test]
fn test_pack_zero() {
    let output = pack(&["0"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\t0x0".repeat(8) + "\n"
    );
}

#[test]
fn test_pack_max() {
    let output = pack(&["18446744073709551615"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\t0xff".repeat(8) + "\n"
    );
}

#[test]
fn test_unpack_one() {
    let output = unpack(&["1", "0", "0", "0", "0", "0", "0", "0"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1\n");
}

#[test]
fn test_unpack_hex_arguments() {
    let output = unpack(&["0x08", "0x07", "0x06", "0x05", "0x04", "0x03", "0x02", "0x01"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "72623859790382856\n"
    );
}

#[test]
fn test_pack_then_unpack() {
    let packed = pack(&["-12345"]);
    assert!(packed.status.success());

    let stdout = String::from_utf8(packed.stdout).unwrap();
    let bytes: Vec<&str> = stdout.split_whitespace().collect();
    assert_eq!(bytes.len(), 8);

    let unpacked = unpack(&bytes);
    assert!(unpacked.status.success());
    assert_eq!(String::from_utf8(unpacked.stdout).unwrap(), "-12345\n");
}

#[test]
fn test_unpack_rejects_out_of_range_byte() {
    let output = unpack(&["1", "0", "0", "256", "0", "0", "0", "0"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_pack_rejects_garbage() {
    let output = pack(&["twelve"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_wrong_argument_count_is_usage_error() {
    let output = pack(&[]);
    assert_eq!(output.status.code(), Some(2));

    let output = unpack(&["1", "2", "3"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unpack_leading_zero_is_octal() {
    let output = unpack(&["010", "0", "0", "0", "0", "0", "0", "0"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "8\n");
}
