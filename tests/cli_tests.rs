//! CLI integration tests for the `cardart` binary.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run cardart in `dir` with the given arguments and return (stdout, stderr, success).
fn run_cardart(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_cardart"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute cardart");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn write_registry(dir: &Path, contents: &str) {
    let path = dir.join("backend/internal/repository/card_repository.go");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

const REGISTRY: &str = r#"
var cards = []domain.Card{
	{ID: "red_pawn_goblin", Color: domain.CardColorRed, Abilities: []string{"Haste"}},
	{ID: "blue_knight_sprite", Color: domain.CardColorBlue},
}
"#;

#[test]
fn test_generates_with_no_arguments() {
    let temp = TempDir::new().unwrap();
    write_registry(temp.path(), REGISTRY);

    let (stdout, stderr, success) = run_cardart(temp.path(), &[]);
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout.trim(), "Generated art for 2 cards.");
    assert!(temp.path().join("assets/cards/art/blue_knight_sprite_standard_low.webp").exists());
    assert!(temp.path().join("assets/images/placeholder_card_art.jpg").exists());
}

#[test]
fn test_empty_catalog_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    write_registry(temp.path(), "package repository\n");

    let (stdout, stderr, success) = run_cardart(temp.path(), &[]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("no cards found"), "stderr: {}", stderr);
    assert!(!temp.path().join("assets").exists());
}

#[test]
fn test_missing_registry_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let (_, stderr, success) = run_cardart(temp.path(), &[]);
    assert!(!success);
    assert!(stderr.contains("card_repository.go"), "stderr: {}", stderr);
}

#[test]
fn test_config_file_is_discovered() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cards.json"), r#"[{"id": "elf", "color": "green"}]"#).unwrap();
    fs::write(
        temp.path().join("cardart.toml"),
        "[project]\nregistry = \"cards.json\"\nassets = \"public\"\n\n[render]\njobs = 1\n",
    )
    .unwrap();
    let nested = temp.path().join("tools");
    fs::create_dir_all(&nested).unwrap();

    let (stdout, stderr, success) = run_cardart(&nested, &[]);
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout.trim(), "Generated art for 1 cards.");
    assert!(temp.path().join("public/cards/art/elf_standard_high.webp").exists());
}

#[test]
fn test_flags_override_paths() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("list.toml"), "[[cards]]\nid = \"imp\"\ncolor = \"orange\"\n")
        .unwrap();

    let (stdout, stderr, success) =
        run_cardart(temp.path(), &["--registry", "list.toml", "--assets", "out", "-j", "2"]);
    assert!(success, "stderr: {}", stderr);
    assert!(stdout.contains("1 cards"));
    assert!(temp.path().join("out/cards/art/imp_standard_medium.webp").exists());
}

#[test]
fn test_dry_run() {
    let temp = TempDir::new().unwrap();
    write_registry(temp.path(), REGISTRY);

    let (stdout, _, success) = run_cardart(temp.path(), &["--dry-run"]);
    assert!(success);
    assert!(stdout.contains("would generate art for 2 cards"));
    assert!(!temp.path().join("assets").exists());
}

#[test]
fn test_require_font_without_font_fails() {
    let temp = TempDir::new().unwrap();
    write_registry(temp.path(), REGISTRY);
    fs::write(temp.path().join("cardart.toml"), "[render]\nfonts = [\"nope.ttf\"]\n").unwrap();

    let (_, stderr, success) = run_cardart(temp.path(), &["--require-font"]);
    assert!(!success);
    assert!(stderr.contains("fonts-dejavu-core"), "stderr: {}", stderr);
    assert!(!temp.path().join("assets").exists());
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    write_registry(temp.path(), REGISTRY);
    fs::write(temp.path().join("cardart.toml"), "[render]\njobs = \"lots\"\n").unwrap();

    let (_, stderr, success) = run_cardart(temp.path(), &[]);
    assert!(!success);
    assert!(stderr.contains("Error loading config"), "stderr: {}", stderr);
}

#[test]
fn test_verbose_lists_targets() {
    let temp = TempDir::new().unwrap();
    write_registry(temp.path(), REGISTRY);

    let (_, stderr, success) = run_cardart(temp.path(), &["--verbose"]);
    assert!(success);
    assert!(stderr.contains("art:red_pawn_goblin:high"), "stderr: {}", stderr);
    assert!(stderr.contains("overlay:promo_stamp"));
    assert!(stderr.contains("Assets:"), "stderr: {}", stderr);
}
