//! Integration tests for commandflow-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete workflows end-to-end.

use commandflow_core::{
    action::{Action, ActionOptions},
    builder::CommandBuilder,
    command::Command,
    config::{get_config_path, get_history_path},
    error::{Error, Result},
    file_handling::{append_records, find_flow, get_flow_definitions, get_records},
    value::Value,
};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

/// A hand-written wrapper around a `help` program.
struct Help;

impl CommandBuilder for Help {
    type Params = Value;

    fn build(&self, arg1: &Value) -> Result<Vec<Action>> {
        Ok(vec![Action::from_value(
            Some("a"),
            Some("apple"),
            arg1.clone(),
            &ActionOptions::default(),
        )])
    }
}

/// Test the documented rendering scenarios of a command
#[test]
fn test_command_rendering_scenarios() {
    let mut command = Command::new("help");
    command.set_action(Some("a"), Some("apple"), 10);
    assert_eq!(command.command(), "help --apple 10");

    let mut command = Command::with_dashes("help", "@", "@@");
    command
        .set_action(Some("a"), Some("apple"), 100)
        .set_action(Some("b"), None, 100);
    assert_eq!(command.command(), "help @@apple 100 @b 100");

    let mut command = Command::new("help");
    command.stdout("test.out");
    command.set_action(Some("a"), Some("apple"), 100);
    command.set_action_with(None, None, vec![1, 2, 3], &ActionOptions::positional());
    assert_eq!(command.command(), "help --apple 100 1 2 3 > test.out");
}

/// Test that records are snapshots, not a live view
#[test]
fn test_record_snapshots_workflow() {
    let mut command = Command::new("help");

    command.input(&Help, &Value::from(1)).unwrap();
    command.record();
    command.set_action(Some("v"), None, true);
    command.record();
    command.clear();
    command.record();

    assert_eq!(
        command.records(),
        &[
            "help --apple 1".to_string(),
            "help --apple 1 -v".to_string(),
            "help".to_string()
        ]
    );
    assert_eq!(command.command(), "help");
}

/// Test loading flows from disk, rendering one and persisting its history
#[test]
fn test_flow_file_workflow() {
    let yaml_content = r#"
- id: "grep"
  description: "Search recursively"
  exe: "grep"
  parameters:
    - id: "pattern"
    - id: "dir"
      default: "."
  actions:
    - short: "r"
      value: true
    - short: "i"
      value: false
    - long: "include"
      value: ["*.rs", "*.toml"]
      sep: ","
    - positional: true
      value: ["{pattern}", "{dir}"]
  stdout: "{pattern}.txt"

- id: "dir"
  exe: "dir"
  short_dash: "/"
  long_dash: "/"
  actions:
    - short: "b"
      value: true
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let flows = get_flow_definitions(&temp_path).unwrap();
    assert_eq!(flows.len(), 2);

    let grep = find_flow(&flows, "grep").unwrap();
    let variables: Vec<String> = grep
        .get_ordered_context_variables()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(variables, vec!["pattern", "dir"]);

    let mut params = HashMap::new();
    params.insert("pattern".to_string(), "todo".to_string());

    let mut command = grep.command();
    command.input(grep, &params).unwrap();
    assert_eq!(
        command.command(),
        "grep -r --include *.rs,*.toml todo . > todo.txt"
    );
    command.record();

    let dir = find_flow(&flows, "1").unwrap();
    let mut dir_command = dir.command();
    dir_command.input(dir, &HashMap::new()).unwrap();
    assert_eq!(dir_command.command(), "dir /b");

    let temp_dir = tempfile::tempdir().unwrap();
    let history_path = temp_dir.path().join("history.yml");
    let history_path = history_path.to_str().unwrap();

    append_records(history_path, command.records()).unwrap();
    let history = get_records(history_path).unwrap().unwrap();
    assert_eq!(history, command.records());
}

/// Test that a flow missing a required parameter fails cleanly
#[test]
fn test_flow_missing_parameter() {
    let yaml_content = r#"
- id: "echo"
  exe: "echo"
  actions:
    - positional: true
      value: ["{message}"]
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let flows = get_flow_definitions(temp_file.path().to_str().unwrap()).unwrap();

    let result = flows[0].build(&HashMap::new());
    assert!(matches!(result, Err(Error::Render(_))));
}

/// Test path resolution for the default files
#[test]
fn test_default_paths() {
    assert!(get_config_path(&None).ends_with("flows.yml"));
    assert!(get_history_path(&None).ends_with("history.yml"));
    assert_eq!(
        get_history_path(&Some("/tmp/h.yml".to_string())),
        "/tmp/h.yml"
    );
}
