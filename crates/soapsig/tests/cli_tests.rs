#![allow(deprecated)]
//! Exit codes and output of the `soapsig` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use soapsig::{extract_signature, load_public_key, verify_message};

const DATA: &str = "../../test-data";

fn data(path: &str) -> String {
    format!("{DATA}/{path}")
}

fn soapsig() -> Command {
    let mut cmd = Command::cargo_bin("soapsig").unwrap();
    cmd.env_remove("SOAPSIG_PUBLIC_KEY")
        .env_remove("SOAPSIG_PRIVATE_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn verify_valid_exits_zero() {
    soapsig()
        .args(["verify", &data("messages/simple-signed.xml")])
        .args(["--key", &data("keys/rsa-2048-pubkey.pem")])
        .assert()
        .code(0)
        .stdout("Signature is valid: true\n");
}

#[test]
fn verify_wrong_key_exits_one() {
    soapsig()
        .args(["verify", &data("messages/declaration-signed.xml")])
        .args(["--key", &data("keys/other-rsa-2048-pubkey.pem")])
        .assert()
        .code(1)
        .stdout("Signature is valid: false\n");
}

#[test]
fn verify_reads_message_from_stdin() {
    let xml = std::fs::read_to_string(data("messages/declaration-signed.xml")).unwrap();
    soapsig()
        .args(["verify", "-", "--key", &data("keys/rsa-2048-pubkey.pem")])
        .write_stdin(xml)
        .assert()
        .code(0)
        .stdout("Signature is valid: true\n");
}

#[test]
fn verify_takes_public_key_from_env() {
    soapsig()
        .args(["verify", &data("messages/simple-signed.xml")])
        .env("SOAPSIG_PUBLIC_KEY", data("keys/rsa-2048-pubkey.pem"))
        .env("SOAPSIG_PRIVATE_KEY", data("keys/rsa-2048-key.pem"))
        .assert()
        .code(0);
}

#[test]
fn malformed_message_exits_two() {
    soapsig()
        .args(["verify", "-", "--key", &data("keys/rsa-2048-pubkey.pem")])
        .write_stdin("this is not xml")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: malformed XML"));
}

#[test]
fn bad_key_exits_two() {
    soapsig()
        .args(["verify", &data("messages/simple-signed.xml")])
        .args(["--key", &data("keys/ec-p256-pubkey.pem")])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn canonicalize_writes_signed_bytes() {
    let expected = std::fs::read(data("messages/declaration-c14n.bin")).unwrap();
    let output = soapsig()
        .args(["canonicalize", &data("messages/declaration-signed.xml")])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();
    assert_eq!(output, expected);
}

#[test]
fn canonicalize_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("body.c14n");
    soapsig()
        .args(["canonicalize", &data("messages/simple-signed.xml"), "-o"])
        .arg(&out)
        .assert()
        .code(0)
        .stdout("");
    assert_eq!(std::fs::read(&out).unwrap(), br#"<Foo a="1">x</Foo>"#);
}

#[test]
fn extract_signature_prints_trimmed_value() {
    let xml = std::fs::read_to_string(data("messages/declaration-signed.xml")).unwrap();
    let expected = format!("{}\n", extract_signature(&xml).unwrap());
    soapsig()
        .args(["extract-signature", &data("messages/declaration-signed.xml")])
        .assert()
        .code(0)
        .stdout(expected);
}

#[test]
fn sign_template_from_stdin_with_env_key() {
    let template = concat!(
        "<e:Envelope xmlns:e=\"http://www.w3.org/2001/06/soap-envelope\">",
        "<e:Header><Signature/></e:Header>",
        "<e:Body><Foo a=\"1\">x</Foo></e:Body>",
        "</e:Envelope>"
    );
    let output = soapsig()
        .args(["sign", "-"])
        .env("SOAPSIG_PRIVATE_KEY", data("keys/rsa-2048-key.pem"))
        .env("SOAPSIG_PUBLIC_KEY", data("keys/rsa-2048-pubkey.pem"))
        .write_stdin(template)
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let signed = String::from_utf8(output).unwrap();
    let key = load_public_key(&std::fs::read(data("keys/rsa-2048-pubkey.pem")).unwrap()).unwrap();
    assert!(verify_message(&signed, &key).unwrap());
}

#[test]
fn sign_with_public_key_fails() {
    soapsig()
        .args(["sign", &data("messages/simple-signed.xml")])
        .args(["--key", &data("keys/rsa-2048-pubkey.pem")])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn info_lists_profile() {
    soapsig()
        .arg("info")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("http://www.w3.org/2001/06/soap-envelope"))
        .stdout(predicate::str::contains("SHA512withRSA"));
}
