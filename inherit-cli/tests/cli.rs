use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "inherit-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

const SAMPLE_ARGS: [&str; 18] = [
    "--mother-eye",
    "Brown",
    "--father-eye",
    "Blue",
    "--mother-hair",
    "Black",
    "--father-hair",
    "Blonde",
    "--mother-skin",
    "Medium",
    "--father-skin",
    "Medium",
    "--mother-height",
    "165",
    "--father-height",
    "180",
    "--child-sex",
    "male",
];

#[test]
fn cli_writes_json_estimate() {
    let exe = env!("CARGO_BIN_EXE_inherit");
    let output_path = temp_path("estimate");
    let status = Command::new(exe)
        .args(SAMPLE_ARGS)
        .args(["--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(value["result"]["height"]["expected_cm"], 179);
    assert_eq!(value["result"]["eye"]["outcomes"][1]["per_mille"], 375);
    assert_eq!(
        value["rendered"]["eye"],
        "Brown 50% — Green 37.5% — Blue 12.5%  (NIH)"
    );
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_renders_arabic_markdown() {
    let exe = env!("CARGO_BIN_EXE_inherit");
    let output = Command::new(exe)
        .args(SAMPLE_ARGS)
        .args(["--lang", "ar", "--report", "markdown"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# الصفات المتوقعة"));
    assert!(stdout.contains("179 سم (متوقع) — نطاق تقريبي: 171 - 187 سم  (Johns Hopkins)"));
}

#[test]
fn cli_names_invalid_field() {
    let exe = env!("CARGO_BIN_EXE_inherit");
    let mut args: Vec<&str> = SAMPLE_ARGS.to_vec();
    args[1] = "Purple";
    let output = Command::new(exe).args(&args).output().expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mother.eye"), "stderr: {stderr}");
}

#[test]
fn cli_lists_sources() {
    let exe = env!("CARGO_BIN_EXE_inherit");
    let output = Command::new(exe)
        .args(["--list-sources", "--report", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json sources");
    let entries = value.as_array().expect("array of references");
    assert_eq!(entries.len(), 7);
    assert!(entries.iter().any(|r| r["id"] == "johns_hopkins"));
}

#[test]
fn cli_audit_passes_for_embedded_rules() {
    let exe = env!("CARGO_BIN_EXE_inherit");
    let output = Command::new(exe)
        .args(["--audit", "--report", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json audit");
    assert_eq!(value["categories"].as_array().map(Vec::len), Some(3));
}

#[test]
fn cli_rejects_invalid_rule_book() {
    let exe = env!("CARGO_BIN_EXE_inherit");
    let rules_path = temp_path("rules");
    std::fs::write(
        &rules_path,
        r#"{"eye":[{"pair":["blue","blue"],"outcomes":[{"outcome":"blue","per_mille":900}]}]}"#,
    )
    .expect("write rules");
    let output = Command::new(exe)
        .args(["--audit", "--rules"])
        .arg(&rules_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("900"), "stderr: {stderr}");
    let _ = std::fs::remove_file(rules_path);
}

#[test]
fn cli_custom_rules_change_results() {
    let exe = env!("CARGO_BIN_EXE_inherit");
    let rules_path = temp_path("custom");
    std::fs::write(
        &rules_path,
        r#"{"eye":[{"pair":["brown","blue"],"outcomes":[{"outcome":"hazel","per_mille":1000}]}]}"#,
    )
    .expect("write rules");
    let output = Command::new(exe)
        .args(SAMPLE_ARGS)
        .args(["--report", "json", "--rules"])
        .arg(&rules_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(value["rendered"]["eye"], "Hazel 100%");
    assert_eq!(value["rendered"]["hair"], "Insufficient data");
    let _ = std::fs::remove_file(rules_path);
}
