use autoroute::cli::{execute, inspect_file, synthesize_file, Cli};
use clap::Parser;
use std::io::Write;
use std::path::Path;

fn descriptor_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    write!(
        file,
        r#"
- source: /srv/app/users/handlers.py
  name: lookup
  params:
    - name: id
      type_tag: int
    - name: verbose
      type_tag: bool
      has_default: true
    - name: _raw
      has_default: true
- source: /srv/app/status/probe.py
  name: ping
"#
    )
    .unwrap();
    file
}

#[test]
fn test_synthesize_file_end_to_end() {
    let file = descriptor_file();
    let out = synthesize_file(file.path(), Some(Path::new("/srv/app")), None).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].0, "lookup");
    assert_eq!(out[0].1.len(), 2);
    assert_eq!(out[0].1[0].as_path(), "/users/handlers/lookup/<int:id>");
    assert_eq!(out[1].0, "ping");
    assert_eq!(out[1].1[0].as_path(), "/status/probe/ping");
}

#[test]
fn test_synthesize_file_reports_bad_root() {
    let file = descriptor_file();
    let err = synthesize_file(file.path(), Some(Path::new("/elsewhere")), None).unwrap_err();
    assert!(err.to_string().contains("lookup"), "error was: {err}");
}

#[test]
fn test_inspect_file_partitions() {
    let file = descriptor_file();
    let summaries = inspect_file(file.path()).unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].required, vec!["id"]);
    assert_eq!(summaries[0].optional, vec!["verbose"]);
    assert_eq!(summaries[0].hidden, vec!["_raw"]);
    assert!(summaries[1].required.is_empty());
}

#[test]
fn test_inspect_file_validates_type_tags() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    write!(
        file,
        r#"
- source: /srv/app/events.py
  name: upcoming
  params:
    - name: since
      type_tag: datetime
"#
    )
    .unwrap();

    let err = inspect_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("upcoming"), "error was: {err}");
    let root = err.root_cause().to_string();
    assert!(root.contains("since"), "root cause was: {root}");
    assert!(root.contains("datetime"), "root cause was: {root}");
}

#[test]
fn test_execute_synthesize_command() {
    let file = descriptor_file();
    let cli = Cli::try_parse_from([
        "autoroute-gen",
        "synthesize",
        "--descriptors",
        file.path().to_str().unwrap(),
        "--root",
        "/srv/app",
    ])
    .unwrap();
    assert!(execute(cli).is_ok());
}

#[test]
fn test_execute_missing_file_fails() {
    let cli = Cli::try_parse_from([
        "autoroute-gen",
        "inspect",
        "--descriptors",
        "/definitely/not/here.yaml",
    ])
    .unwrap();
    assert!(execute(cli).is_err());
}
