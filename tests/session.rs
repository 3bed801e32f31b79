use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn session(config_dir: &TempDir, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("cardz")
        .unwrap()
        .arg("--config")
        .arg(config_dir.path())
        .arg("--no-color")
        .env_remove("RUST_LOG")
        .write_stdin(input)
        .assert()
}

#[test]
fn session_is_the_default_command() {
    let dir = TempDir::new().unwrap();
    session(&dir, "quit\n")
        .success()
        .stdout(predicate::str::contains("Ma Bibliothèque"))
        .stdout(predicate::str::contains("[0 all]"))
        .stdout(predicate::str::contains("9 cards · 0 favorites"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    session(&dir, "").success();
}

#[test]
fn search_narrows_the_list() {
    let dir = TempDir::new().unwrap();
    session(&dir, "search rust\nquit\n")
        .success()
        .stdout(predicate::str::contains("search: rust"))
        .stdout(predicate::str::contains("1 card · 0 favorites"));
}

#[test]
fn favorites_count_stays_global_across_filters() {
    let dir = TempDir::new().unwrap();
    session(&dir, "fav 1 2\ncat Langage\nquit\n")
        .success()
        .stdout(predicate::str::contains("Added to favorites: React"))
        .stdout(predicate::str::contains("Added to favorites: Vue.js"))
        .stdout(predicate::str::contains("2 cards · 2 favorites"));
}

#[test]
fn delete_updates_counts() {
    let dir = TempDir::new().unwrap();
    session(&dir, "fav 1\nrm 1\nquit\n")
        .success()
        .stdout(predicate::str::contains("Card deleted: React"))
        .stdout(predicate::str::contains("8 cards · 0 favorites"));
}

#[test]
fn add_creates_a_card_on_top() {
    let dir = TempDir::new().unwrap();
    let input = "add\nSvelte\nA reactive framework\n\n\n\nquit\n";
    session(&dir, input)
        .success()
        .stdout(predicate::str::contains("Card created: Svelte"))
        .stdout(predicate::str::contains("  1.   Svelte"))
        .stdout(predicate::str::contains("10 cards · 0 favorites"));
}

#[test]
fn add_without_description_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = "add\nSvelte\n\n\n\n:cancel\nquit\n";
    session(&dir, input)
        .success()
        .stdout(predicate::str::contains(
            "Please fill in at least the title and the description",
        ))
        .stdout(predicate::str::contains("Creation cancelled"))
        .stdout(predicate::str::contains("Card created").not());
}

#[test]
fn bad_commands_do_not_end_the_session() {
    let dir = TempDir::new().unwrap();
    session(&dir, "rm 42\nfav\nshow #5\nquit\n")
        .success()
        .stdout(predicate::str::contains("Index 42 not found"))
        .stdout(predicate::str::contains("Langage système"));
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    session(&dir, "help\nquit\n")
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("Leave the session"));
}

#[test]
fn search_keeps_spacing_as_typed() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("cards.json");
    std::fs::write(
        &seed,
        r#"[
            {"id": "1", "title": "One", "description": "a b", "category": "Outil"},
            {"id": "2", "title": "Two", "description": "a  b", "category": "Outil"}
        ]"#,
    )
    .unwrap();

    Command::cargo_bin("cardz")
        .unwrap()
        .arg("--config")
        .arg(dir.path())
        .arg("--no-color")
        .arg("--seed")
        .arg(&seed)
        .env_remove("RUST_LOG")
        .write_stdin("search a  b\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("search: a  b"))
        .stdout(predicate::str::contains("1 card · 0 favorites"));
}
