//! Integration tests that run the CLI binary.

fn bin() -> std::process::Command {
    let bin = env!("CARGO_BIN_EXE_luitchat");
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty());
    assert!(
        stdout.contains("luitchat") || stdout.contains("prompt"),
        "expected usage text in output"
    );
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("luitchat"));
}

#[test]
fn cli_prompt_without_api_key_exits_with_error() {
    // Run from a temp HOME so neither .env nor a stored key file is picked up
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("-p")
        .arg("hello")
        .current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env_remove("XDG_CONFIG_HOME")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        !output.status.success(),
        "expected failure when GEMINI_API_KEY is not set"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("GEMINI_API_KEY"),
        "expected API key error message, got: {}",
        stderr
    );
}

#[test]
fn cli_history_show_succeeds_without_api_key() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("history")
        .arg("show")
        .current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env_remove("XDG_DATA_HOME")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    // A fresh store starts with the bilingual welcome greeting
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("নমস্কাৰ"), "got: {}", stdout);
}
