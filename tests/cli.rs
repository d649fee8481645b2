//! Integration tests driving the mushaf-index binary end to end.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Relative index from the layout source: Al-Fatiha, then Al-Baqarah
/// numbered from 1 again on the second page
const RELATIVE_PAGES: &str = r#"[
  [[{"surah": 1, "start": 1, "end": 7}]],
  [[{"surah": 1, "start": 8, "end": 10}], [{"surah": 2, "start": 1, "end": 5}]]
]"#;

/// Create an isolated fixture directory with a config pointing into it
fn fixture_dir(name: &str, corpus_lines: usize) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("mushaf_index_tests")
        .join(format!("{}_{}", name, std::process::id()));

    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create fixture dir");

    // Lines carry sukoon marks so cleanup has something to do
    let mut source = String::new();
    for i in 1..=corpus_lines {
        source.push_str(&format!("\u{0642}\u{064F}\u{0644}\u{0652} {}\n", i));
        if i % 4 == 0 {
            source.push('\n');
        }
    }
    fs::write(dir.join("quran-uthmani.txt"), source).unwrap();
    fs::write(dir.join("pages.json"), RELATIVE_PAGES).unwrap();

    let config = serde_json::json!({
        "pages_path": dir.join("pages.json"),
        "output_path": dir.join("pages_absolute.json"),
        "source_path": dir.join("quran-uthmani.txt"),
        "text_path": dir.join("quran_text.txt"),
        "color": false,
    });
    fs::write(dir.join("config.json"), config.to_string()).unwrap();

    dir
}

/// Run the binary with the fixture config
fn run(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_mushaf-index"))
        .arg("--config")
        .arg(dir.join("config.json"))
        .args(args)
        .output()
        .expect("Failed to run mushaf-index");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_convert_mismatch_is_not_fatal() {
    let dir = fixture_dir("mismatch", 12);
    let (stdout, stderr, success) = run(&dir, &["convert"]);

    assert!(success, "convert failed: {}", stderr);
    assert!(stdout.contains("Total Quran lines: 12"));
    assert!(stdout.contains("Final line number: 15 (should match total lines: 12)"));
    assert!(stdout.contains("differ by 3 lines"));

    let absolute = read_json(&dir.join("pages_absolute.json"));
    assert_eq!(
        absolute,
        serde_json::json!([
            [[{"surah": 1, "start": 1, "end": 7}]],
            [[{"surah": 1, "start": 8, "end": 10}], [{"surah": 2, "start": 11, "end": 15}]]
        ])
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_default_command_is_convert() {
    let dir = fixture_dir("default", 15);
    let (stdout, _, success) = run(&dir, &[]);

    assert!(success);
    assert!(stdout.contains("Final line number: 15 (should match total lines: 15)"));
    assert!(!stdout.contains("warning"));
    assert!(dir.join("pages_absolute.json").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_convert_writes_cleaned_text() {
    let dir = fixture_dir("cleaned", 15);
    let (_, _, success) = run(&dir, &["convert", "--quiet"]);
    assert!(success);

    let text = fs::read_to_string(dir.join("quran_text.txt")).unwrap();
    assert!(!text.contains('\u{0652}'));
    assert!(text.contains("\u{0642}\u{064F}\u{0644} 1"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_output_formatting_is_stable() {
    let dir = fixture_dir("format", 15);
    run(&dir, &["convert", "--quiet"]);

    let written = fs::read_to_string(dir.join("pages_absolute.json")).unwrap();
    assert!(written.starts_with("[\n  [\n    [\n      {\n        \"surah\": 1,\n        \"start\": 1,"));
    assert!(!written.ends_with('\n'));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_convert_missing_index_fails() {
    let dir = fixture_dir("missing", 12);
    fs::remove_file(dir.join("pages.json")).unwrap();

    let (_, stderr, success) = run(&dir, &["convert"]);
    assert!(!success);
    assert!(stderr.contains("pages.json"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_convert_malformed_index_fails() {
    let dir = fixture_dir("malformed", 12);
    fs::write(dir.join("pages.json"), r#"[[[{"surah": 1, "end": 7}]]]"#).unwrap();

    let (_, stderr, success) = run(&dir, &["convert"]);
    assert!(!success);
    assert!(stderr.contains("missing field"));
    assert!(!dir.join("pages_absolute.json").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_verify_after_convert() {
    let dir = fixture_dir("verify", 15);
    run(&dir, &["convert", "--quiet"]);

    let text = dir.join("quran_text.txt");
    let (stdout, _, success) = run(&dir, &["verify", "--text", text.to_str().unwrap()]);
    assert!(success);
    assert_eq!(stdout, "OK\n");

    // The relative input is not contiguous in absolute terms
    let pages = dir.join("pages.json");
    let (stdout, _, success) = run(&dir, &["verify", pages.to_str().unwrap()]);
    assert!(!success);
    assert!(stdout.contains("expected start 11, found 1"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_locate_across_page_break() {
    let dir = fixture_dir("locate", 15);
    run(&dir, &["convert", "--quiet"]);

    let (stdout, _, success) = run(&dir, &["locate", "--surah", "1", "--ayah", "9"]);
    assert!(success);
    assert!(stdout.starts_with("1:9 page 2 line 9\n"));
    assert!(stdout.contains("\u{0642}\u{064F}\u{0644} 9"));

    let (_, stderr, success) = run(&dir, &["locate", "--surah", "3"]);
    assert!(!success);
    assert!(stderr.contains("3:1"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_locate_line_and_page() {
    let dir = fixture_dir("locate_line", 15);
    run(&dir, &["convert", "--quiet"]);

    let (stdout, _, success) = run(&dir, &["locate", "--line", "12"]);
    assert!(success);
    assert!(stdout.starts_with("2:2 page 2 line 12\n"));
    assert!(stdout.contains("\u{0642}\u{064F}\u{0644} 12"));

    let (stdout, _, success) = run(&dir, &["locate", "--page", "2"]);
    assert!(success);
    assert_eq!(stdout, "page 2 surah 1 lines 8-15\n");

    let (_, stderr, success) = run(&dir, &["locate", "--page", "3"]);
    assert!(!success);
    assert!(stderr.contains("Page 3"));

    // One target at a time
    let (_, _, success) = run(&dir, &["locate", "--line", "1", "--page", "1"]);
    assert!(!success);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_convert_overflowing_index_fails() {
    let dir = fixture_dir("overflow", 12);
    fs::write(
        dir.join("pages.json"),
        r#"[[[{"surah": 1, "start": 1, "end": 9223372036854775807}]], [[{"surah": 2, "start": 1, "end": 1}]]]"#,
    )
    .unwrap();

    let (_, stderr, success) = run(&dir, &["convert"]);
    assert!(!success);
    assert!(stderr.contains("overflows the line numbering"));
    assert!(!dir.join("pages_absolute.json").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_stats() {
    let dir = fixture_dir("stats", 15);
    run(&dir, &["convert", "--quiet"]);

    let (stdout, _, success) = run(&dir, &["stats"]);
    assert!(success);
    assert!(stdout.contains("Pages:            2"));
    assert!(stdout.contains("Ranges:           3"));
    assert!(stdout.contains("Last line:        15"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_clean_only() {
    let dir = fixture_dir("clean", 6);
    let (stdout, _, success) = run(&dir, &["clean"]);
    assert!(success);
    assert!(stdout.contains("Total Quran lines: 6"));
    assert!(!dir.join("pages_absolute.json").exists());

    let _ = fs::remove_dir_all(&dir);
}
