use std::fs;
use std::process::Command;

use tempfile::tempdir;

#[test]
fn test_json_mode_emits_ndjson_events() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("site.css"), "a { color: red; }").unwrap();
    let config_path = dir.path().join("compilerconfig.json");
    fs::write(
        &config_path,
        r#"[{ "outputFile": "dist/site.css", "inputFile": "site.css" }]"#,
    )
    .unwrap();
    let bin = env!("CARGO_BIN_EXE_webforge");

    let output = Command::new(bin)
        .args([config_path.to_str().unwrap(), "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("every line must be valid JSON"))
        .collect();

    assert!(events
        .iter()
        .any(|e| e["event"] == "before_process" && e["input"] == "site.css"));
    assert!(events.iter().any(|e| e["event"] == "compiled"));
    assert!(events.iter().any(|e| e["event"] == "min_file_written"));
    assert!(events
        .iter()
        .any(|e| e["event"] == "config_processed" && e["has_changes"] == true));
}
