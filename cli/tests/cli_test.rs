use std::process::Command;

#[test]
fn test_cli_help_flag() {
    let output = Command::new("cargo")
        .args(["run", "-p", "outloud-cli", "--", "--help"])
        .output()
        .expect("Failed to execute");

    assert!(output.status.success(), "Help flag should exit with code 0");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Convert text to MP3 speech and play it"),
        "Help output should contain description"
    );
    assert!(
        stdout.contains("Usage:"),
        "Help output should contain usage information"
    );
    assert!(
        stdout.contains("--provider"),
        "Help output should document the provider flag"
    );
}

#[test]
fn test_cli_version_flag() {
    let output = Command::new("cargo")
        .args(["run", "-p", "outloud-cli", "--", "--version"])
        .output()
        .expect("Failed to execute");

    assert!(
        output.status.success(),
        "Version flag should exit with code 0"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("outloud"),
        "Version output should contain binary name"
    );
}

#[test]
fn test_cli_rejects_unknown_provider() {
    let output = Command::new("cargo")
        .args(["run", "-p", "outloud-cli", "--", "--provider", "polly", "hi"])
        .output()
        .expect("Failed to execute");

    assert!(
        !output.status.success(),
        "Unknown provider should exit with an error"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value"),
        "Error output should mention the invalid value"
    );
}
