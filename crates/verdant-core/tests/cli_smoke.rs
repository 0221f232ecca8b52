use std::fs;
use std::process::Command;

#[test]
fn estimate_offline_smoke() {
    let input_path =
        std::env::temp_dir().join(format!("verdant-estimate-{}.json", std::process::id()));
    fs::write(
        &input_path,
        r#"{"projectType":"residential","size":"medium","materials":["wood"],"energySources":["solar"]}"#,
    )
    .expect("failed to write input file");

    let output = Command::new(env!("CARGO_BIN_EXE_verdant"))
        .args(["estimate", input_path.to_string_lossy().as_ref()])
        .env_remove("VERDANT_API_KEY")
        .env("VERDANT_LOG", "verdant=info")
        .output()
        .expect("failed to run verdant binary");

    let _ = fs::remove_file(&input_path);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "verdant estimate failed.\nstdout:\n{stdout}\nstderr:\n{stderr}"
    );

    let result: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout is not a single JSON document");
    assert_eq!(result["co2Footprint"], 65.0);
    assert_eq!(result["energyUse"], 18.0);
    assert_eq!(result["sustainabilityRisk"], "low");
}

#[test]
fn sample_emits_parseable_project_input() {
    let output = Command::new(env!("CARGO_BIN_EXE_verdant"))
        .arg("sample")
        .output()
        .expect("failed to run verdant binary");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("sample output is not JSON");
    assert_eq!(value["projectType"], "residential");
    assert!(value["materials"].is_array());
}
