//! Integration tests for the `ledbulb` binary.
//!
//! Exercises the CLI via `assert_cmd`: rendered PNGs are decoded back with
//! the `image` crate to verify geometry and that the bulb actually got drawn.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cli() -> assert_cmd::Command {
    cargo_bin_cmd!("ledbulb")
}

#[test]
fn cli_help_succeeds() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ledbulb"));
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── render ──

#[test]
fn render_writes_decodable_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("led.png");

    cli()
        .args(["render", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let img = image::open(&out).unwrap().into_rgba8();
    assert_eq!(img.dimensions(), (32, 32));
    // Bulb center is opaque; far corner transparent
    assert_eq!(img.get_pixel(15, 15).0[3], 255);
    assert_eq!(img.get_pixel(31, 31).0[3], 0);
}

#[test]
fn render_honors_size_and_color() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("red.png");

    cli()
        .args(["render", "--color", "red", "--width", "64", "--height", "48", "--out"])
        .arg(&out)
        .assert()
        .success();

    let img = image::open(&out).unwrap().into_rgba8();
    assert_eq!(img.dimensions(), (64, 48));
    // Diameter 47, bulb at origin → center ~(23, 23) is strongly red
    let p = img.get_pixel(23, 23).0;
    assert!(p[0] > 150, "expected red center, got {p:?}");
    assert!(p[1] < 150, "expected little green, got {p:?}");
}

#[test]
fn render_off_is_darker_than_on() {
    let dir = tempfile::tempdir().unwrap();
    let on = dir.path().join("on.png");
    let off = dir.path().join("off.png");

    cli().args(["render", "--out"]).arg(&on).assert().success();
    cli()
        .args(["render", "--off", "--out"])
        .arg(&off)
        .assert()
        .success();

    let on_px = image::open(&on).unwrap().into_rgba8().get_pixel(15, 15).0;
    let off_px = image::open(&off).unwrap().into_rgba8().get_pixel(15, 15).0;
    assert!(off_px[1] < on_px[1], "off {off_px:?} vs on {on_px:?}");
}

#[test]
fn render_rejects_invalid_color() {
    cli()
        .args(["render", "--color", "chartreuse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Color error"));
}

// ── blink ──

#[test]
fn blink_writes_requested_frames() {
    let dir = tempfile::tempdir().unwrap();

    cli()
        .args(["blink", "--interval", "10", "--frames", "4", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("4 frames"));

    for i in 0..4 {
        let path = dir.path().join(format!("frame_{i:02}.png"));
        assert!(path.exists(), "missing {}", path.display());
    }
    // Frames alternate on/off: 0 and 1 differ, 0 and 2 match
    let f0 = image::open(dir.path().join("frame_00.png")).unwrap().into_rgba8();
    let f1 = image::open(dir.path().join("frame_01.png")).unwrap().into_rgba8();
    let f2 = image::open(dir.path().join("frame_02.png")).unwrap().into_rgba8();
    assert_ne!(f0.as_raw(), f1.as_raw());
    assert_eq!(f0.as_raw(), f2.as_raw());
}

// ── palette ──

#[test]
fn palette_prints_derived_shades() {
    cli()
        .arg("palette")
        .assert()
        .success()
        .stdout(predicate::str::contains("#99FF36"))
        .stdout(predicate::str::contains("#66AA24"))
        .stdout(predicate::str::contains("#447118"));
}

#[test]
fn palette_json_produces_valid_json() {
    let output = cli()
        .args(["--json", "palette", "red"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("palette --json should produce valid JSON");
    assert_eq!(json["color"], "#FF0000");
    assert_eq!(json["dark"], "#AA0000");
    assert_eq!(json["dark_dark"], "#710000");
}

// ── config ──

#[test]
fn config_file_drives_render() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("led.toml");
    std::fs::write(&config, "color = \"blue\"\nwidth = 16\nheight = 16\n").unwrap();
    let out = dir.path().join("blue.png");

    cli()
        .arg("--config")
        .arg(&config)
        .args(["render", "--out"])
        .arg(&out)
        .assert()
        .success();

    let img = image::open(&out).unwrap().into_rgba8();
    assert_eq!(img.dimensions(), (16, 16));
    let p = img.get_pixel(7, 7).0;
    assert!(p[2] > 150, "expected blue center, got {p:?}");
}

#[test]
fn bad_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("led.toml");
    std::fs::write(&config, "color = \"nope\"\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .arg("palette")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}
