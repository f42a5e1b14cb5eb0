use std::fs;
use std::process::Command;

use tempfile::tempdir;

#[test]
fn test_missing_input_fails_with_exit_one() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("compilerconfig.json");
    fs::write(
        &config_path,
        r#"[{ "outputFile": "dist/site.css", "inputFile": "absent.css" }]"#,
    )
    .unwrap();
    let bin = env!("CARGO_BIN_EXE_webforge");

    let output = Command::new(bin).arg(&config_path).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("compile error"), "got:\n{}", stderr);
}

#[test]
fn test_one_bad_config_does_not_stop_the_batch() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.css"), "a { color: blue; }").unwrap();
    let config_path = dir.path().join("compilerconfig.json");
    fs::write(
        &config_path,
        r#"[
            { "outputFile": "dist/bad.css", "inputFile": "absent.css", "minify": { "enabled": false } },
            { "outputFile": "dist/good.css", "inputFile": "good.css", "minify": { "enabled": false } }
        ]"#,
    )
    .unwrap();
    let bin = env!("CARGO_BIN_EXE_webforge");

    let output = Command::new(bin).arg(&config_path).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(dir.path().join("dist").join("good.css").exists());
    assert!(!dir.path().join("dist").join("bad.css").exists());
}

#[test]
fn test_malformed_config_fails_with_exit_two() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("compilerconfig.json");
    fs::write(&config_path, "{ not an array").unwrap();
    let bin = env!("CARGO_BIN_EXE_webforge");

    let output = Command::new(bin).arg(&config_path).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_config_file_fails_with_exit_two() {
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_webforge");

    let output = Command::new(bin)
        .arg(dir.path().join("no-such-config.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "got:\n{}", stderr);
}
