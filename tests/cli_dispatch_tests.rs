use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_defense-indicators")
}

fn command() -> Command {
    let mut cmd = Command::new(bin());
    cmd.env_remove("DEFENSE_INDICATORS_OVERLAY");
    cmd
}

fn unique_temp_path(name: &str, ext: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("defense-indicators-{name}-{stamp}.{ext}"))
}

#[test]
fn simulate_command_emits_dataset_json() {
    let output = command()
        .args(["simulate", "Programme Missilistique"])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("simulate should emit json");
    assert_eq!(payload["table"]["Annee"].as_array().map(Vec::len), Some(28));
    assert_eq!(payload["table"]["Budget_Defense_Mds"][0], 3.5);
    assert_eq!(payload["config"]["kind"], "programme_strategique");
}

#[test]
fn simulate_table_flag_prints_header_and_rows() {
    let output = command()
        .args(["simulate", "--table", "Unknown Unit"])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 29);
    assert!(lines[0].starts_with("Annee\tBudget_Defense_Mds"));
    assert!(lines[1].starts_with("2000\t12.000\t"));
}

#[test]
fn first_match_flag_changes_late_budget_windows() {
    let budget_2020 = |extra: &[&str]| -> f64 {
        let output = command()
            .arg("simulate")
            .args(extra)
            .output()
            .expect("simulate should run");
        assert_eq!(output.status.code(), Some(0));
        let payload: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("simulate should emit json");
        assert_eq!(payload["table"]["Annee"][20], 2020);
        payload["table"]["Budget_Defense_Mds"][20]
            .as_f64()
            .expect("budget should be numeric")
    };

    let last_match = budget_2020(&[]);
    let first_match = budget_2020(&["--first-match"]);
    assert!((last_match - 15.0 * 1.9 * 1.20).abs() < 1e-9, "got {last_match}");
    assert!((first_match - 15.0 * 1.9 * 1.15).abs() < 1e-9, "got {first_match}");
}

#[test]
fn summary_command_emits_headline_metrics() {
    let output = command()
        .args(["summary", "Forces Armées de la RII"])
        .output()
        .expect("summary should run");

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("summary should emit json");
    assert_eq!(payload["first_year"], 2000);
    assert_eq!(payload["latest_year"], 2027);
    assert_eq!(payload["missile_stock"], 1960.0);
    assert_eq!(payload["max_range_km"], 2000.0);
    let personnel = payload["personnel"].as_f64().expect("personnel should be numeric");
    assert!((personnel - 807.64).abs() < 1e-9, "got {personnel}");
}

#[test]
fn entities_command_lists_branches_then_programs() {
    let output = command()
        .arg("entities")
        .output()
        .expect("entities should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 17);
    assert_eq!(lines[0], "branches:");
    assert_eq!(lines[1], "  Forces Armées de la RII");
    assert_eq!(lines[9], "programs:");
    assert!(lines.contains(&"  Programme Missilistique"));
}

#[test]
fn resolve_command_falls_back_for_unknown_selector() {
    let output = command()
        .args(["resolve", "Nowhere"])
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("resolve should emit json");
    assert_eq!(payload["kind"], "branche");
    assert_eq!(payload["personnel_base"], 50.0);
    assert_eq!(payload["priorities"], serde_json::json!(["defense_generique"]));
}

#[test]
fn catalog_command_requires_known_name() {
    let ok = command()
        .args(["catalog", "missiles"])
        .output()
        .expect("catalog should run");
    assert_eq!(ok.status.code(), Some(0));
    let payload: serde_json::Value = serde_json::from_slice(&ok.stdout).expect("json");
    assert_eq!(payload.as_array().map(Vec::len), Some(6));

    let modernization = command()
        .args(["catalog", "modernization"])
        .output()
        .expect("catalog should run");
    assert_eq!(modernization.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&modernization.stdout).expect("json");
    assert_eq!(payload.as_array().map(Vec::len), Some(5));
    assert_eq!(payload[0]["domain"], "Missiles Balistiques");
    assert_eq!(payload[0]["level_2027"], 85);

    let bad = command()
        .args(["catalog", "tanks"])
        .output()
        .expect("catalog should run");
    assert_eq!(bad.status.code(), Some(2));
}

#[test]
fn export_command_writes_csv() {
    let path = unique_temp_path("cli-export", "csv");
    let output = command()
        .args(["export", "Forces Armées de la RII", path.to_string_lossy().as_ref()])
        .output()
        .expect("export should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("export complete: rows=28"));
    let written = fs::read_to_string(&path).expect("csv should exist");
    assert_eq!(written.lines().count(), 29);

    let _ = fs::remove_file(path);
}

#[test]
fn export_command_returns_usage_without_path() {
    let output = command()
        .args(["export", "Basij"])
        .output()
        .expect("export should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: defense-indicators export"));
}

#[test]
fn broken_overlay_is_reported() {
    let path = unique_temp_path("bad-overlay", "yaml");
    fs::write(&path, "not: [valid").expect("fixture should be written");

    let output = Command::new(bin())
        .env("DEFENSE_INDICATORS_OVERLAY", &path)
        .args(["resolve", "Basij"])
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration overlay error"));

    let _ = fs::remove_file(path);
}

#[test]
fn overlay_with_negative_seed_is_reported() {
    let path = unique_temp_path("negative-overlay", "yaml");
    fs::write(&path, "\"Basij\":\n  kind: branche\n  personnel_base: -40\n")
        .expect("fixture should be written");

    let output = Command::new(bin())
        .env("DEFENSE_INDICATORS_OVERLAY", &path)
        .args(["simulate", "Basij"])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("personnel_base must be finite and non-negative"));

    let _ = fs::remove_file(path);
}

#[test]
fn unknown_command_prints_usage() {
    let output = command().arg("serve").output().expect("binary should run");
    assert_eq!(output.status.code(), Some(2));
}
