use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn varman(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("varman").unwrap();
    cmd.current_dir(dir)
        .env("VARMAN_HOME", dir.join("global"))
        .env("NO_COLOR", "1")
        .env_remove("VARMAN_LOG");
    cmd
}

fn stored(dir: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(dir.join(".varman").join("productStates.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn first_run_shows_default_board() {
    let temp = tempfile::tempdir().unwrap();

    varman(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Filter"))
        .stdout(predicate::str::contains("Primary Variant"))
        .stdout(predicate::str::contains("Filter 1"))
        .stdout(predicate::str::contains("Filter 2"))
        .stdout(predicate::str::contains("+ Add Design"));

    // Showing never writes
    assert!(!temp.path().join(".varman").join("productStates.json").exists());
}

#[test]
fn add_column_and_pick_are_persisted() {
    let temp = tempfile::tempdir().unwrap();

    varman(temp.path())
        .args(["add", "Frame", "Color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter 3 added successfully"))
        .stdout(predicate::str::contains("Frame Color"));

    varman(temp.path())
        .arg("column")
        .assert()
        .success()
        .stdout(predicate::str::contains("Variant 3"));

    varman(temp.path())
        .args(["pick", "1", "2", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Image added/edited successfully"))
        .stdout(predicate::str::contains("Image 5"));

    let value = stored(temp.path());
    let filters = value.as_array().unwrap();
    assert_eq!(filters.len(), 3);
    assert_eq!(filters[2]["productFilter"], "Frame Color");
    for filter in filters {
        assert_eq!(filter["variants"].as_array().unwrap().len(), 3);
    }
    assert_eq!(filters[0]["variants"][1]["image"], "https://picsum.photos/id/5/200");
    assert_eq!(filters[0]["variants"][1]["name"], "Image 5");
}

#[test]
fn move_and_delete_by_id() {
    let temp = tempfile::tempdir().unwrap();

    varman(temp.path()).arg("add").assert().success();

    varman(temp.path())
        .args(["move", "3", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter 3 moved to position 1"));

    varman(temp.path())
        .args(["delete", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter 2 deleted successfully"));

    let ids: Vec<String> = stored(temp.path())
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["3", "1"]);

    varman(temp.path())
        .args(["delete", "42", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter 42 not found"));
}

#[test]
fn delete_without_terminal_needs_yes() {
    let temp = tempfile::tempdir().unwrap();

    varman(temp.path())
        .args(["delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn out_of_range_slot_fails_without_saving() {
    let temp = tempfile::tempdir().unwrap();

    varman(temp.path())
        .args(["pick", "9", "1", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));

    varman(temp.path())
        .args(["pick", "0", "1", "5"])
        .assert()
        .failure();

    varman(temp.path())
        .args(["pick", "1", "1", "99"])
        .assert()
        .failure();

    assert!(!temp.path().join(".varman").join("productStates.json").exists());
}

#[test]
fn corrupt_board_falls_back_to_default() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path().join(".varman");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("productStates.json"), "{oops").unwrap();

    varman(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter 1"))
        .stdout(predicate::str::contains("Filter 2"))
        .stderr(predicate::str::contains("unreadable"));
}

#[test]
fn set_and_clear_image() {
    let temp = tempfile::tempdir().unwrap();

    varman(temp.path())
        .args(["set", "2", "1", "https://cdn.test/red.png", "Red", "Frame"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Red Frame"));

    varman(temp.path())
        .args(["clear", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Image removed"));

    assert_eq!(stored(temp.path())[1]["variants"][0]["image"], "");
}

#[test]
fn rename_and_export() {
    let temp = tempfile::tempdir().unwrap();

    varman(temp.path())
        .args(["rename", "1", "Size"])
        .assert()
        .success();

    varman(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"productFilter\": \"Size\""));

    varman(temp.path())
        .args(["show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn reset_restores_default() {
    let temp = tempfile::tempdir().unwrap();

    varman(temp.path()).args(["delete", "1", "-y"]).assert().success();
    varman(temp.path()).args(["reset", "--yes"]).assert().success();

    varman(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter 1"));
}

#[test]
fn images_search_and_config() {
    let temp = tempfile::tempdir().unwrap();

    varman(temp.path())
        .args(["images", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Image 2"))
        .stdout(predicate::str::contains("Image 20"))
        .stdout(predicate::str::contains("Image 3").not());

    varman(temp.path())
        .args(["config", "catalog-size", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog-size set to 3"));

    varman(temp.path())
        .args(["config", "catalog-size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));

    varman(temp.path())
        .arg("images")
        .assert()
        .success()
        .stdout(predicate::str::contains("Image 3"))
        .stdout(predicate::str::contains("Image 4").not());

    varman(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key = productStates"));
}

#[test]
fn global_scope_is_separate() {
    let temp = tempfile::tempdir().unwrap();

    varman(temp.path())
        .args(["--global", "add", "Material"])
        .assert()
        .success();

    assert!(temp.path().join("global").join("productStates.json").exists());
    assert!(!temp.path().join(".varman").join("productStates.json").exists());
}

#[test]
fn oversized_catalog_is_refused() {
    let temp = tempfile::tempdir().unwrap();

    varman(temp.path())
        .args(["config", "catalog-size", "4294967295"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from 1 to 1000"));

    varman(temp.path())
        .arg("images")
        .assert()
        .success()
        .stdout(predicate::str::contains("Image 20"))
        .stdout(predicate::str::contains("Image 21").not());
}

#[test]
fn repeated_columns_keep_the_board() {
    let temp = tempfile::tempdir().unwrap();

    for _ in 0..3 {
        varman(temp.path()).arg("column").assert().success();
    }

    varman(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Variant 5"));
}
