//! Integration tests for the nostress-keys CLI

use assert_cmd::Command;
use libnostress::keys::Keypair;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper providing an isolated config environment per test
struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("nostress-keys").unwrap();
        // Point at a config file that does not exist so defaults apply
        cmd.env("NOSTRESS_CONFIG", self.path("config.toml"));
        cmd
    }
}

#[test]
fn test_generate_default_hex() {
    let env = TestEnv::new();

    env.cmd()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Private Key: [0-9a-f]{64}\n").unwrap())
        .stdout(predicate::str::is_match(r"Public Key:  [0-9a-f]{64}\n").unwrap());
}

#[test]
fn test_generate_bech32() {
    let env = TestEnv::new();

    env.cmd()
        .args(["generate", "--format", "bech32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Private Key: nsec"))
        .stdout(predicate::str::contains("Public Key:  npub"));
}

#[test]
fn test_generate_both_formats() {
    let env = TestEnv::new();

    env.cmd()
        .args(["generate", "--format", "both"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HEX Format:"))
        .stdout(predicate::str::contains("Bech32 Format:"))
        .stdout(predicate::str::contains("nsec"))
        .stdout(predicate::str::contains("npub"));
}

#[test]
fn test_generate_json_output() {
    let env = TestEnv::new();

    let output = env
        .cmd()
        .args(["generate", "--format", "hex", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["format"], "hex");
    assert_eq!(value["private_key"].as_str().unwrap().len(), 64);
    assert_eq!(value["public_key"].as_str().unwrap().len(), 64);
}

#[test]
fn test_generate_rejects_unknown_format() {
    let env = TestEnv::new();

    env.cmd()
        .args(["generate", "--format", "base64"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_generate_to_file() {
    let env = TestEnv::new();
    let out = env.path("keypair.txt");

    env.cmd()
        .args(["generate", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keypair written to"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("Private Key: "));
    assert!(content.contains("Public Key:  "));
}

#[test]
fn test_generate_refuses_overwrite_non_interactive() {
    let env = TestEnv::new();
    let out = env.path("keypair.txt");
    std::fs::write(&out, "existing").unwrap();

    env.cmd()
        .args(["generate", "--output", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing to overwrite"));

    // The existing file is untouched
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "existing");
}

#[test]
fn test_generate_obfuscate_requires_output() {
    let env = TestEnv::new();

    env.cmd()
        .args(["generate", "--obfuscate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--obfuscate requires --output"));
}

#[test]
fn test_generate_obfuscated_file() {
    let env = TestEnv::new();
    let out = env.path("obfuscated.txt");

    env.cmd()
        .args(["generate", "--obfuscate", "--output", out.to_str().unwrap()])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("# Obfuscated Nostress Keypair"));
    assert!(content.contains("NOT encryption"));
    assert!(!content.contains("Private Key: "));
}

#[test]
fn test_generate_honors_config_default_output_dir() {
    let env = TestEnv::new();
    let out_dir = env.path("keys-dir");
    std::fs::create_dir_all(&out_dir).unwrap();
    std::fs::write(
        env.path("config.toml"),
        format!("default_output_dir = \"{}\"\n", out_dir.display()),
    )
    .unwrap();

    env.cmd()
        .args(["generate", "--output", "keypair.txt"])
        .assert()
        .success();

    assert!(out_dir.join("keypair.txt").exists());
}

#[test]
fn test_generate_honors_config_default_format() {
    let env = TestEnv::new();
    std::fs::write(env.path("config.toml"), "default_key_format = \"bech32\"\n").unwrap();

    env.cmd()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("nsec"));
}

#[test]
fn test_validate_hex_key() {
    let env = TestEnv::new();
    let keypair = Keypair::generate().unwrap();

    let hex = keypair.private_key().to_hex();

    env.cmd()
        .args(["validate", hex.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid hex key (private or public)"));
}

#[test]
fn test_validate_nsec_and_npub() {
    let env = TestEnv::new();
    let keypair = Keypair::generate().unwrap();

    let nsec = keypair.private_key().to_bech32();
    let npub = keypair.public_key().to_bech32();

    env.cmd()
        .args(["validate", nsec.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid nsec key (private)"));

    env.cmd()
        .args(["validate", npub.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid npub key (public)"));
}

#[test]
fn test_validate_type_mismatch() {
    let env = TestEnv::new();
    let keypair = Keypair::generate().unwrap();

    let npub = keypair.public_key().to_bech32();

    env.cmd()
        .args(["validate", npub.as_str(), "--type", "nsec"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("expected nsec key, got npub"));
}

#[test]
fn test_validate_undetectable_key() {
    let env = TestEnv::new();

    env.cmd()
        .args(["validate", "definitely-not-a-key"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("could not detect key type"));
}

#[test]
fn test_convert_nsec_to_hex() {
    let env = TestEnv::new();
    let keypair = Keypair::generate().unwrap();

    let nsec = keypair.private_key().to_bech32();

    env.cmd()
        .args(["convert", nsec.as_str(), "--to", "hex"])
        .assert()
        .success()
        .stdout(predicate::str::contains(keypair.private_key().to_hex()));
}

#[test]
fn test_convert_hex_requires_type() {
    let env = TestEnv::new();
    let keypair = Keypair::generate().unwrap();

    let hex = keypair.public_key().to_hex();

    env.cmd()
        .args(["convert", hex.as_str(), "--to", "bech32"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("require --type"));
}

#[test]
fn test_convert_hex_to_bech32_with_type() {
    let env = TestEnv::new();
    let keypair = Keypair::generate().unwrap();

    let hex = keypair.public_key().to_hex();

    env.cmd()
        .args(["convert", hex.as_str(), "--to", "bech32", "--type", "public"])
        .assert()
        .success()
        .stdout(predicate::str::contains(keypair.public_key().to_bech32()));
}

#[test]
fn test_convert_rejects_both_target() {
    let env = TestEnv::new();
    let keypair = Keypair::generate().unwrap();

    let hex = keypair.private_key().to_hex();

    env.cmd()
        .args(["convert", hex.as_str(), "--to", "both"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Valid targets: hex, bech32"));
}

#[test]
fn test_convert_json_output() {
    let env = TestEnv::new();
    let keypair = Keypair::generate().unwrap();
    let npub = keypair.public_key().to_bech32();

    let output = env
        .cmd()
        .args(["convert", npub.as_str(), "--to", "hex", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["original_key"], npub.as_str());
    assert_eq!(value["original_format"], "bech32");
    assert_eq!(value["original_type"], "public");
    assert_eq!(value["target_format"], "hex");
    assert_eq!(value["converted_key"], keypair.public_key().to_hex());
}

#[test]
fn test_convert_to_file_writes_bare_key() {
    let env = TestEnv::new();
    let keypair = Keypair::generate().unwrap();
    let nsec = keypair.private_key().to_bech32();
    let out = env.path("converted.txt");

    env.cmd()
        .args([
            "convert",
            nsec.as_str(),
            "--to",
            "hex",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted key written to"));

    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        keypair.private_key().to_hex()
    );
}

#[test]
fn test_convert_invalid_nsec_payload() {
    let env = TestEnv::new();

    // '0' is outside the base58 alphabet
    env.cmd()
        .args(["convert", "nsec000", "--to", "hex"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid key format"));
}
