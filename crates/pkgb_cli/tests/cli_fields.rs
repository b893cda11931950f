use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use pkgb_core::core_api::{Engine, StorageId, template};
use pkgb_core::version::GameVersion;
use serde_json::Value;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pkgb-se"))
        .args(args)
        .output()
        .expect("failed to run pkgb-se CLI")
}

fn temp_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{}_{}.sav", std::process::id(), nanos))
}

/// A Red/Blue save with trainer RED (id 12345) and a level 12 Pikachu
/// leading the party, written to a temp file.
fn gen1_save_file(prefix: &str) -> PathBuf {
    let mut bytes = vec![0u8; 0x8000];
    bytes[0x25C9 + 1] = 0xFF; // empty bag
    bytes[0x2F2C + 1] = 0xFF; // empty party
    bytes[0x30C0 + 1] = 0xFF; // empty live box

    let engine = Engine::new();
    let mut session = engine
        .open_bytes(bytes, None)
        .expect("fixture should parse");
    session.set_trainer_name("RED");
    session.set_trainer_id(12345);
    let mut member = template(GameVersion::RedBlue);
    member.species_id = 25;
    member.nickname = "SPARKY".to_string();
    member.level = 12;
    session
        .import_pokemon(StorageId::Party, 0, &member)
        .expect("party import failed");

    let path = temp_path(prefix);
    fs::write(&path, session.export_to_bytes()).expect("failed to write fixture");
    path
}

#[test]
fn cli_prints_trainer_fields() {
    let path = gen1_save_file("trainer_fields");
    let path_arg = path.to_string_lossy().to_string();
    let output = run_cli(&["--trainer", &path_arg]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "trainer_name=RED",
            "trainer_id=12345",
            "trainer_gender=Male"
        ]
    );
    fs::remove_file(&path).ok();
}

#[test]
fn cli_prints_fields_in_fixed_order() {
    let path = gen1_save_file("field_order");
    let path_arg = path.to_string_lossy().to_string();
    let output = run_cli(&["--dex", "--game-version", &path_arg]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["game=Red/Blue", "dex_owned=0", "dex_seen=0"]);
    fs::remove_file(&path).ok();
}

#[test]
fn cli_prints_party_lines() {
    let path = gen1_save_file("party_lines");
    let path_arg = path.to_string_lossy().to_string();
    let output = run_cli(&["--party", &path_arg]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("party=1: #025 SPARKY"));
    assert!(lines[0].contains("Lv 12"));
    fs::remove_file(&path).ok();
}

#[test]
fn cli_renders_selected_fields_as_json() {
    let path = gen1_save_file("json_fields");
    let path_arg = path.to_string_lossy().to_string();
    let output = run_cli(&["--trainer", "--party", "--json", &path_arg]);
    assert!(output.status.success());

    let json: Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(json["trainer"]["name"], "RED");
    assert_eq!(json["trainer"]["visible_id"], 12345);
    assert_eq!(json["party"][0]["species_id"], 25);
    assert_eq!(json["party"][0]["nickname"], "SPARKY");
    fs::remove_file(&path).ok();
}

#[test]
fn cli_default_output_is_a_trainer_card() {
    let path = gen1_save_file("trainer_card");
    let path_arg = path.to_string_lossy().to_string();
    let output = run_cli(&[&path_arg]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TRAINER CARD"));
    assert!(stdout.contains("Name: RED"));
    assert!(stdout.contains("#025 SPARKY"));
    fs::remove_file(&path).ok();
}

#[test]
fn cli_refuses_edits_without_an_output_path() {
    let path = gen1_save_file("edit_gating");
    let path_arg = path.to_string_lossy().to_string();

    let output = run_cli(&["--set-trainer-id", "7", &path_arg]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_cli(&["--slot", "1", "--set-level", "50", &path_arg]);
    assert_eq!(output.status.code(), Some(2));
    fs::remove_file(&path).ok();
}

#[test]
fn cli_refuses_creature_edits_without_a_slot() {
    let path = gen1_save_file("slot_gating");
    let path_arg = path.to_string_lossy().to_string();
    let out_path = temp_path("slot_gating_out");
    let out_arg = out_path.to_string_lossy().to_string();

    let output = run_cli(&["--set-level", "50", "--output", &out_arg, &path_arg]);
    assert_eq!(output.status.code(), Some(2));
    fs::remove_file(&path).ok();
}

#[test]
fn cli_edits_produce_a_reloadable_save() {
    let path = gen1_save_file("edit_roundtrip");
    let path_arg = path.to_string_lossy().to_string();
    let out_path = temp_path("edit_roundtrip_out");
    let out_arg = out_path.to_string_lossy().to_string();

    let output = run_cli(&[
        "--slot",
        "1",
        "--set-level",
        "50",
        "--set-nickname",
        "ZAPPY",
        "--output",
        &out_arg,
        &path_arg,
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote edited save"));

    let engine = Engine::new();
    let bytes = fs::read(&out_path).expect("edited save should exist");
    let session = engine
        .open_bytes(bytes, None)
        .expect("edited save should reopen");
    let member = session
        .pokemon(StorageId::Party, 0)
        .expect("party read failed");
    assert_eq!(member.level, 50);
    assert_eq!(member.nickname, "ZAPPY");

    fs::remove_file(&path).ok();
    fs::remove_file(&out_path).ok();
}

#[test]
fn cli_rejects_out_of_range_boxes() {
    let path = gen1_save_file("box_range");
    let path_arg = path.to_string_lossy().to_string();
    let output = run_cli(&["--box", "99", &path_arg]);
    assert_eq!(output.status.code(), Some(2));
    fs::remove_file(&path).ok();
}

#[test]
fn cli_reports_unsupported_files() {
    let path = temp_path("garbage");
    fs::write(&path, vec![0xABu8; 64]).expect("failed to write garbage file");
    let path_arg = path.to_string_lossy().to_string();

    let output = run_cli(&["--trainer", &path_arg]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error parsing save file"));
    fs::remove_file(&path).ok();
}
