//! Integration tests for retroizer-cli.
//!
//! Covers binary invocation, parameter listing, and end-to-end
//! generate-then-process workflows on real WAV files.

use retroizer_io::read_wav_stereo;
use std::process::Command;
use tempfile::TempDir;

/// Helper to get the path to the `retroizer` binary built by cargo.
fn retroizer_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_retroizer"))
}

// ---------------------------------------------------------------------------
// CLI binary tests -- help and version
// ---------------------------------------------------------------------------

#[test]
fn cli_help_works() {
    let output = retroizer_bin()
        .arg("--help")
        .output()
        .expect("failed to run retroizer --help");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Retroizer lo-fi effects processor"));
    assert!(stdout.contains("process"));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("params"));
}

#[test]
fn cli_version_works() {
    let output = retroizer_bin()
        .arg("--version")
        .output()
        .expect("failed to run retroizer --version");

    assert!(output.status.success());
}

// ---------------------------------------------------------------------------
// CLI binary tests -- `retroizer params`
// ---------------------------------------------------------------------------

#[test]
fn cli_params_lists_preset_keys() {
    let output = retroizer_bin()
        .arg("params")
        .output()
        .expect("failed to run retroizer params");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for key in ["bitDepth", "sampleRate", "radioMix1", "radioMix2"] {
        assert!(stdout.contains(key), "params listing should contain '{key}'");
    }
}

#[test]
fn cli_params_native_shows_effects() {
    let output = retroizer_bin()
        .args(["params", "--native"])
        .output()
        .expect("failed to run retroizer params --native");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BitCrusher"));
    assert!(stdout.contains("RadioEffect"));
    assert!(stdout.contains("Downsample"));
}

// ---------------------------------------------------------------------------
// End-to-end: generate then process
// ---------------------------------------------------------------------------

fn generate_sine(dir: &TempDir) -> std::path::PathBuf {
    let input = dir.path().join("input.wav");
    let output = retroizer_bin()
        .args([
            "generate",
            input.to_str().unwrap(),
            "--duration",
            "0.1",
            "--frequency",
            "440",
        ])
        .output()
        .expect("failed to run retroizer generate");
    assert!(output.status.success(), "generate failed: {output:?}");
    input
}

#[test]
fn cli_process_transparent_controls_preserves_signal() {
    let dir = TempDir::new().unwrap();
    let input = generate_sine(&dir);
    let processed = dir.path().join("output.wav");

    // Full bit depth, no decimation, radio off: near-transparent.
    let output = retroizer_bin()
        .args([
            "process",
            input.to_str().unwrap(),
            processed.to_str().unwrap(),
            "--bit-depth",
            "1.0",
        ])
        .output()
        .expect("failed to run retroizer process");
    assert!(output.status.success(), "process failed: {output:?}");

    let (original, _) = read_wav_stereo(&input).unwrap();
    let (result, spec) = read_wav_stereo(&processed).unwrap();
    assert_eq!(spec.channels, 2);
    assert_eq!(result.len(), original.len());

    for (a, b) in original.left.iter().zip(result.left.iter()) {
        assert!((a - b).abs() < 2e-5, "16-bit pass should be near-transparent");
    }
}

#[test]
fn cli_process_default_controls_crush_to_one_bit() {
    let dir = TempDir::new().unwrap();
    let input = generate_sine(&dir);
    let processed = dir.path().join("output.wav");

    let output = retroizer_bin()
        .args([
            "process",
            input.to_str().unwrap(),
            processed.to_str().unwrap(),
        ])
        .output()
        .expect("failed to run retroizer process");
    assert!(output.status.success(), "process failed: {output:?}");

    // 1-bit quantization leaves only multiples of 0.5.
    let (result, _) = read_wav_stereo(&processed).unwrap();
    for &s in result.left.iter().chain(result.right.iter()) {
        let nearest = (s * 2.0).round() / 2.0;
        assert!(
            (s - nearest).abs() < 1e-6,
            "sample {s} is not on the 1-bit grid"
        );
    }
}

#[test]
fn cli_process_with_preset_and_save() {
    let dir = TempDir::new().unwrap();
    let input = generate_sine(&dir);
    let processed = dir.path().join("output.wav");
    let preset = dir.path().join("session.toml");
    let saved = dir.path().join("saved.toml");

    std::fs::write(&preset, "bitDepth = 1.0\nradioMix1 = 0.5\n").unwrap();

    let output = retroizer_bin()
        .args([
            "process",
            input.to_str().unwrap(),
            processed.to_str().unwrap(),
            "--preset",
            preset.to_str().unwrap(),
            "--radio-mix2",
            "0.25",
            "--save-preset",
            saved.to_str().unwrap(),
        ])
        .output()
        .expect("failed to run retroizer process");
    assert!(output.status.success(), "process failed: {output:?}");
    assert!(processed.exists());

    // Saved preset merges the file values with the flag override.
    let saved_toml = std::fs::read_to_string(&saved).unwrap();
    assert!(saved_toml.contains("bitDepth = 1.0"), "got: {saved_toml}");
    assert!(saved_toml.contains("radioMix2 = 0.25"), "got: {saved_toml}");
}

#[test]
fn cli_process_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = retroizer_bin()
        .args([
            "process",
            "/definitely/not/here.wav",
            dir.path().join("out.wav").to_str().unwrap(),
        ])
        .output()
        .expect("failed to run retroizer");

    assert!(!output.status.success(), "should fail for missing input");
}
