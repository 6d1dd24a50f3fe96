//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    // --version exits before any network or terminal setup
    let output = Command::new(env!("CARGO_BIN_EXE_rmdex"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn binary_rejects_unsupported_page_size() {
    let output = Command::new(env!("CARGO_BIN_EXE_rmdex"))
        .args(["--page-size", "7"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("10, 20 or 50"), "unexpected stderr: {stderr}");
}
