use std::process::Command;

fn shadewire(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_shadewire"))
        .args(args)
        .output()
        .expect("shadewire should run")
}

#[test]
fn encode_raw_then_decode_round_trips() {
    // cmd 145 so the action byte survives the peer's header accounting.
    let output = shadewire(&[
        "--format",
        "json",
        "encode",
        "raw",
        "--cmd",
        "145",
        "--action",
        "2",
        "--frame-type",
        "290",
        "--field",
        "DEVICE_CMD=10",
        "--field",
        "DEVICE_ADDR_CHANNEL=0102",
    ]);
    assert!(output.status.success(), "encode failed: {output:?}");
    let encoded: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("encode output should be JSON");
    let hex = encoded["hex"].as_str().expect("hex field");

    let output = shadewire(&["--format", "json", "decode", hex]);
    assert!(output.status.success(), "decode failed: {output:?}");
    let frame: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("decode output should be JSON");

    assert_eq!(frame["cmd"], 145);
    assert_eq!(frame["action"], 2);
    assert_eq!(frame["frame_type"], 290);
    assert_eq!(frame["frame_type_name"], "DEVICE_EXECUTE_REQ");
    assert_eq!(frame["data"][0]["key"], "DEVICE_CMD");
    assert_eq!(frame["data"][0]["value"], "16");
    assert_eq!(frame["data"][1]["key"], "DEVICE_ADDR_CHANNEL");
    assert_eq!(frame["data"][1]["value"], "0102");
}

#[test]
fn decode_bad_marker_exits_data_invalid() {
    // Valid header declaring a body, then junk where the marker belongs.
    let output = shadewire(&["decode", "00000003140000200011223344556677 8899aabb"]);
    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid body marker"), "stderr: {stderr}");
}

#[test]
fn decode_odd_hex_exits_usage() {
    let output = shadewire(&["decode", "abc"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn decode_non_ascii_hex_exits_usage() {
    let output = shadewire(&["decode", "\u{20AC}\u{20AC}"]);
    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid hex digits"), "stderr: {stderr}");
}

#[test]
fn encode_rejects_unsendable_key_type() {
    let output = shadewire(&[
        "encode",
        "raw",
        "--frame-type",
        "290",
        "--field",
        "HOST_PORT=1f40",
    ]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn encode_position_rejects_out_of_range_percent() {
    let output = shadewire(&[
        "encode",
        "position",
        "--channel",
        "01",
        "--percent",
        "101",
    ]);
    assert!(!output.status.success());
}

#[test]
fn keys_lists_the_registry() {
    let output = shadewire(&["--format", "json", "keys"]);
    assert!(output.status.success());
    let keys: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("keys output should be JSON");
    let list = keys.as_array().expect("keys should be an array");
    assert_eq!(list.len(), 58);
    assert!(list
        .iter()
        .any(|key| key["name"] == "DEVICE_CMD" && key["id"] == 259));
}

#[test]
fn keys_filter_narrows_the_listing() {
    let output = shadewire(&["--format", "json", "keys", "--filter", "wifi"]);
    assert!(output.status.success());
    let keys: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("keys output should be JSON");
    let list = keys.as_array().expect("keys should be an array");
    assert!(!list.is_empty());
    assert!(list
        .iter()
        .all(|key| key["name"].as_str().unwrap().contains("WIFI")));
}

#[test]
fn version_prints_crate_version() {
    let output = shadewire(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("shadewire "));
}
