mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_first_page_of_lines() {
    let fixture = TestFixture::new();
    let file = fixture.write_rows("rows.txt", 25);

    let stdout = fixture.stdout(&["show", file.to_str().unwrap(), "--page-size", "10"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "row 1");
    assert_eq!(lines[9], "row 10");
    assert_eq!(lines[10], "");
    assert_eq!(lines[11], "[1] 2 3  Next ›");
    assert_eq!(lines[12], "Showing 1-10 of 25 · page 1 of 3");
    assert_eq!(lines.len(), 13);
}

#[test]
fn test_page_past_the_end_is_clamped() {
    let fixture = TestFixture::new();
    let file = fixture.write_rows("rows.txt", 25);

    let stdout = fixture.stdout(&[
        "show",
        file.to_str().unwrap(),
        "--page-size",
        "10",
        "--page",
        "5",
    ]);

    assert!(stdout.starts_with("row 21\n"));
    assert!(stdout.contains("‹ Prev  1 2 [3]\n"));
    assert!(stdout.contains("Showing 21-25 of 25 · page 3 of 3"));
}

#[test]
fn test_negative_page_is_first_page() {
    let fixture = TestFixture::new();
    let file = fixture.write_rows("rows.txt", 25);

    let stdout = fixture.stdout(&[
        "show",
        file.to_str().unwrap(),
        "--page-size",
        "10",
        "--page",
        "-4",
    ]);
    assert!(stdout.contains("page 1 of 3"));
}

#[test]
fn test_zero_page_size_is_one() {
    let fixture = TestFixture::new();
    let file = fixture.write_rows("rows.txt", 3);

    let stdout = fixture.stdout(&["show", file.to_str().unwrap(), "--page-size", "0"]);
    assert!(stdout.contains("Showing 1-1 of 3 · page 1 of 3"));
}

#[test]
fn test_empty_file_renders_no_bar() {
    let fixture = TestFixture::new();
    let file = fixture.write_file("empty.txt", "");

    let stdout = fixture.stdout(&["show", file.to_str().unwrap()]);
    assert_eq!(stdout, "No items\n");
}

#[test]
fn test_json_output() {
    let fixture = TestFixture::new();
    let file = fixture.write_rows("rows.txt", 25);

    let report = fixture.json(&[
        "show",
        file.to_str().unwrap(),
        "--page-size",
        "10",
        "--page",
        "99",
    ]);

    assert_eq!(report["state"]["current_page"], 3);
    assert_eq!(report["state"]["total_pages"], 3);
    assert_eq!(report["state"]["total_items"], 25);
    assert_eq!(report["range"]["start"], 20);
    assert_eq!(report["range"]["end"], 25);
    assert_eq!(report["items"].as_array().unwrap().len(), 5);
    assert_eq!(report["items"][0], "row 21");
    assert_eq!(
        report["window"],
        serde_json::json!([{"page_number": 1}, {"page_number": 2}, {"page_number": 3}])
    );
    assert!(report["bar"]["next"].is_null());
}

#[test]
fn test_json_array_input_with_filter() {
    let fixture = TestFixture::new();
    let file = fixture.write_file(
        "people.json",
        r#"[{"name": "Ada"}, {"name": "Grace"}, {"name": "Adele"}, {"name": "Linus"}]"#,
    );

    let report = fixture.json(&["show", file.to_str().unwrap(), "--filter", "ad"]);

    let items = report["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Ada");
    assert_eq!(items[1]["name"], "Adele");
    assert_eq!(report["state"]["total_items"], 2);
    assert!(report["bar"].is_null());
}

#[test]
fn test_regex_filter() {
    let fixture = TestFixture::new();
    let file = fixture.write_rows("rows.txt", 30);

    let report = fixture.json(&[
        "show",
        file.to_str().unwrap(),
        "--filter",
        r"^row 1\d?$",
        "--regex",
    ]);
    // row 1, row 10..=19
    assert_eq!(report["state"]["total_items"], 11);
}

#[test]
fn test_invalid_regex_fails() {
    let fixture = TestFixture::new();
    let file = fixture.write_rows("rows.txt", 3);

    fixture
        .command()
        .args(["show", file.to_str().unwrap(), "--filter", "(", "--regex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filter pattern"));
}

#[test]
fn test_reads_stdin() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["show", "-", "--page-size", "2", "--page", "2"])
        .write_stdin("{\"id\": 1}\n{\"id\": 2}\n{\"id\": 3}\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"id\":3}\n"))
        .stdout(predicate::str::contains("‹ Prev  1 [2]"));
}

#[test]
fn test_missing_file_fails() {
    let fixture = TestFixture::new();
    let missing = fixture.root().join("missing.txt");

    fixture
        .command()
        .args(["show", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_invalid_jsonl_in_explicit_mode_fails() {
    let fixture = TestFixture::new();
    let file = fixture.write_file("events.jsonl", "{}\nnope\n");

    fixture
        .command()
        .args(["show", file.to_str().unwrap(), "--input", "jsonl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_debug_log_reports_clamping() {
    let fixture = TestFixture::new();
    let file = fixture.write_rows("rows.txt", 25);

    fixture
        .command()
        .args(["--log-level", "debug", "show", file.to_str().unwrap()])
        .args(["--page-size", "10", "--page", "7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("page request clamped"));
}
