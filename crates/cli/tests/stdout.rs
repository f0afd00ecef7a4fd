//! Runs the built binary and checks what lands on stdout.

use serde_json::Value;
use std::process::{Command, Output};

fn polywalk(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_polywalk"))
        .args(args)
        .output()
        .expect("spawn polywalk")
}

#[test]
fn draw_stdout_is_pure_json() {
    let out = polywalk(&["draw", "--seed", "1"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let doc: Value = serde_json::from_slice(&out.stdout).expect("stdout parses as JSON");
    assert_eq!(doc["points"].as_array().unwrap().len(), 4);
    assert_eq!(doc["params"]["sides"], 3);
    // Tracing output still exists, just not on stdout.
    assert!(String::from_utf8_lossy(&out.stderr).contains("draw"));
}

#[test]
fn angles_stdout_is_a_json_array() {
    let out = polywalk(&["angles", "--sides", "4", "--min-angle", "60", "--max-angle", "120", "--common-diff", "20"]);
    assert!(out.status.success());
    let angles: Vec<f64> = serde_json::from_slice(&out.stdout).expect("stdout parses as JSON");
    assert_eq!(angles, vec![60.0, 80.0, 100.0, 120.0]);
}

#[test]
fn angle_failures_share_the_render_message() {
    let args = ["--sides", "4", "--common-diff", "10"];
    let angles = polywalk(&[&["angles"][..], &args[..]].concat());
    let draw = polywalk(&[&["draw"][..], &args[..]].concat());
    assert_eq!(angles.status.code(), Some(2));
    assert_eq!(draw.status.code(), Some(2));
    let text = String::from_utf8_lossy(&angles.stdout);
    assert!(text.contains("must sum to 360 degrees"), "{text}");
    assert_eq!(angles.stdout, draw.stdout);
}

#[test]
fn huge_side_count_fails_without_panicking() {
    let out = polywalk(&["draw", "--sides", "1000000000000000000"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stdout).contains("could not generate valid angles"));
}
