use std::path::Path;
use std::sync::Mutex;

use actions_allowlist::events::{EventSink, NullSink};
use actions_allowlist::usage::{discover_workflows, extract_usages, scan_document, ActionUsage};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse(yaml: &str) -> serde_yaml::Value {
    serde_yaml::from_str(yaml).expect("test YAML should parse")
}

fn extract(yaml: &str) -> Vec<ActionUsage> {
    extract_usages(&parse(yaml), "test.yml", &NullSink)
}

#[derive(Default)]
struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn debug(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("debug: {message}"));
    }
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("info: {message}"));
    }
    fn warning(&self, title: &str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("warning[{title}]: {message}"));
    }
    fn error(&self, title: &str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("error[{title}]: {message}"));
    }
}

// ── basic extraction ──────────────────────────────────────────────────────────

#[test]
fn extracts_pinned_actions_from_simple_workflow() {
    let usages = extract(
        r#"
name: Test Workflow
jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-python@v5
"#,
    );

    assert_eq!(
        usages,
        vec![
            ActionUsage {
                action: "actions/checkout".to_string(),
                version: "v4".to_string(),
                workflow: "test.yml".to_string(),
            },
            ActionUsage {
                action: "actions/setup-python".to_string(),
                version: "v5".to_string(),
                workflow: "test.yml".to_string(),
            },
        ]
    );
}

#[test]
fn extracts_across_multiple_jobs_in_job_then_step_order() {
    let usages = extract(
        r#"
jobs:
  build:
    steps:
      - uses: actions/checkout@v4
  test:
    steps:
      - uses: actions/setup-node@v4
      - uses: github/super-linter@v7
"#,
    );

    let refs: Vec<&str> = usages.iter().map(|u| u.action.as_str()).collect();
    assert_eq!(
        refs,
        vec![
            "actions/checkout",
            "actions/setup-node",
            "github/super-linter"
        ]
    );
    // All records carry the same document identity.
    assert!(usages.iter().all(|u| u.workflow == "test.yml"));
}

#[test]
fn extracts_subpath_references() {
    let usages = extract(
        r#"
jobs:
  analyze:
    steps:
      - uses: github/codeql-action/init@v3
      - uses: github/codeql-action/analyze@v3
"#,
    );

    assert_eq!(usages.len(), 2);
    assert_eq!(usages[0].action, "github/codeql-action/init");
    assert_eq!(usages[0].version, "v3");
}

// ── permissive traversal ──────────────────────────────────────────────────────

#[test]
fn no_jobs_key_yields_empty() {
    assert!(extract("name: No Jobs\non: [push]\n").is_empty());
}

#[test]
fn job_without_steps_yields_empty() {
    assert!(extract("jobs:\n  test:\n    runs-on: ubuntu-latest\n").is_empty());
}

#[test]
fn steps_without_uses_yield_empty() {
    let usages = extract(
        r#"
jobs:
  test:
    steps:
      - name: Run command
        run: echo hello
      - run: ls -la
"#,
    );
    assert!(usages.is_empty());
}

#[test]
fn jobs_key_with_non_mapping_value_yields_empty() {
    assert!(extract("jobs: not-a-mapping\n").is_empty());
}

// ── malformed uses values ─────────────────────────────────────────────────────

#[test]
fn unpinned_reference_is_skipped() {
    let usages = extract(
        r#"
jobs:
  test:
    steps:
      - uses: actions/checkout
      - uses: actions/setup-python@v5
"#,
    );

    // Only the pinned reference survives.
    assert_eq!(usages.len(), 1);
    assert_eq!(usages[0].action, "actions/setup-python");
    assert_eq!(usages[0].version, "v5");
}

#[test]
fn reference_with_multiple_at_signs_is_skipped() {
    assert!(extract("jobs:\n  t:\n    steps:\n      - uses: a/b@v1@v2\n").is_empty());
}

#[test]
fn empty_reference_part_is_skipped() {
    assert!(extract("jobs:\n  t:\n    steps:\n      - uses: \"@v4\"\n").is_empty());
}

#[test]
fn empty_version_part_is_skipped() {
    assert!(extract("jobs:\n  t:\n    steps:\n      - uses: \"actions/checkout@\"\n").is_empty());
}

#[test]
fn non_string_uses_value_is_skipped() {
    assert!(extract("jobs:\n  t:\n    steps:\n      - uses: 42\n").is_empty());
}

// ── diagnostic events ─────────────────────────────────────────────────────────

#[test]
fn emits_one_event_per_job_and_per_usage() {
    let sink = RecordingSink::default();
    let usages = extract_usages(
        &parse(
            r#"
jobs:
  build:
    steps:
      - uses: actions/checkout@v4
  lint:
    steps:
      - run: make lint
"#,
        ),
        "ci.yml",
        &sink,
    );

    assert_eq!(usages.len(), 1);
    let messages = sink.messages();
    assert!(messages.contains(&"info:   Job found: [build] in ci.yml".to_string()));
    assert!(messages.contains(&"info:   Job found: [lint] in ci.yml".to_string()));
    assert!(messages
        .iter()
        .any(|m| m.contains("Found action used: [actions/checkout@v4]")));
}

#[test]
fn return_value_does_not_depend_on_sink() {
    let doc = parse("jobs:\n  t:\n    steps:\n      - uses: a/b@v1\n");
    let with_null = extract_usages(&doc, "x.yml", &NullSink);
    let with_recording = extract_usages(&doc, "x.yml", &RecordingSink::default());
    assert_eq!(with_null, with_recording);
}

// ── scan_document ─────────────────────────────────────────────────────────────

#[test]
fn scan_document_labels_records_with_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deploy.yml");
    std::fs::write(&path, "jobs:\n  d:\n    steps:\n      - uses: a/b@v1\n").unwrap();

    let usages = scan_document(&path, &NullSink).unwrap();
    assert_eq!(usages.len(), 1);
    assert_eq!(usages[0].workflow, "deploy.yml");
}

#[test]
fn scan_document_reports_unreadable_file() {
    let err = scan_document(Path::new("does/not/exist.yml"), &NullSink).unwrap_err();
    assert!(err.contains("does/not/exist.yml"));
}

#[test]
fn scan_document_reports_invalid_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yml");
    std::fs::write(&path, "jobs: [unterminated\n").unwrap();

    let err = scan_document(&path, &NullSink).unwrap_err();
    assert!(err.contains("bad.yml"));
}

// ── discovery ─────────────────────────────────────────────────────────────────

#[test]
fn discovers_yml_files_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let workflows = dir.path().join(".github").join("workflows");
    std::fs::create_dir_all(&workflows).unwrap();
    std::fs::write(workflows.join("b.yml"), "").unwrap();
    std::fs::write(workflows.join("a.yml"), "").unwrap();
    std::fs::write(workflows.join("notes.txt"), "").unwrap();

    let files = discover_workflows(dir.path());
    let names: Vec<String> = files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.yml", "b.yml"]);
}

#[test]
fn falls_back_to_testing_repo_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir
        .path()
        .join("testing-repo")
        .join(".github")
        .join("workflows");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("legacy.yml"), "").unwrap();

    let files = discover_workflows(dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("legacy.yml"));
}

#[test]
fn primary_directory_takes_precedence_over_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let primary = dir.path().join(".github").join("workflows");
    let nested = dir
        .path()
        .join("testing-repo")
        .join(".github")
        .join("workflows");
    std::fs::create_dir_all(&primary).unwrap();
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(primary.join("main.yml"), "").unwrap();
    std::fs::write(nested.join("ignored.yml"), "").unwrap();

    let files = discover_workflows(dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("main.yml"));
}

#[test]
fn no_workflow_directory_yields_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(discover_workflows(dir.path()).is_empty());
}
