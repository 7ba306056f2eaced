use {
  pretty_assertions::assert_eq,
  std::{
    io::Write,
    process::{Command, Output, Stdio},
  },
};

fn command() -> Command {
  let mut command = Command::new(env!("CARGO_BIN_EXE_feedbasket-extract"));

  command
    .env_remove("FEEDBASKET_BASE_URL")
    .env_remove("FEEDBASKET_CHAR_THRESHOLD")
    .env_remove("FEEDBASKET_MAX_ELEMENTS")
    .env_remove("FEEDBASKET_LOG");

  command
}

fn run(args: &[&str]) -> Output {
  command().args(args).output().expect("failed to run binary")
}

fn stdout_json(output: &Output) -> serde_json::Value {
  serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn missing_argument_fails_without_output() {
  let output = run(&[]);

  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());
  assert!(
    String::from_utf8_lossy(&output.stderr)
      .contains("error: missing HTML argument")
  );
}

#[test]
fn empty_argument_fails_without_output() {
  let output = run(&[""]);

  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());
  assert!(
    String::from_utf8_lossy(&output.stderr)
      .contains("error: missing HTML argument")
  );
}

#[test]
fn successful_runs_leave_stderr_empty() {
  for html in [
    "<p>hi</p>",
    include_str!("fixtures/news-article/source.html"),
  ] {
    let output = run(&[html]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
  }
}

#[test]
fn unreadable_stdin_is_an_error() {
  let mut child = command()
    .arg("-")
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .expect("failed to spawn binary");

  child
    .stdin
    .take()
    .unwrap()
    .write_all(&[0xff, 0xfe, 0x3c, 0x70, 0x3e])
    .unwrap();

  let output = child.wait_with_output().unwrap();

  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());
  assert!(
    String::from_utf8_lossy(&output.stderr).contains("failed to read input")
  );
}

#[test]
fn extracts_minimal_document_to_one_json_value() {
  let output = run(&["<html><body><p>hello</p></body></html>"]);

  assert_eq!(output.status.code(), Some(0));
  assert!(matches!(
    stdout_json(&output),
    serde_json::Value::Null | serde_json::Value::Object(_)
  ));
  assert!(!output.stdout.ends_with(b"\n"));
}

#[test]
fn extracts_article_fields() {
  let html = include_str!("fixtures/news-article/source.html");

  let output = run(&[html]);

  assert_eq!(output.status.code(), Some(0));

  let json = stdout_json(&output);

  assert_eq!(json["title"], "Rust 2024 Edition Released");
  assert!(json["textContent"].is_string());
  assert!(json["content"].as_str().unwrap().contains("<p>"));
}

#[test]
fn reads_html_from_stdin() {
  let mut child = command()
    .arg("-")
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .expect("failed to spawn binary");

  child
    .stdin
    .take()
    .unwrap()
    .write_all(include_str!("fixtures/news-article/source.html").as_bytes())
    .unwrap();

  let output = child.wait_with_output().unwrap();

  assert_eq!(output.status.code(), Some(0));
  assert_eq!(stdout_json(&output)["title"], "Rust 2024 Edition Released");
}

#[test]
fn text_flag_prints_a_json_string() {
  let output = run(&["--text", include_str!("fixtures/news-article/source.html")]);

  assert_eq!(output.status.code(), Some(0));
  assert!(
    stdout_json(&output)
      .as_str()
      .unwrap()
      .contains("reserves the gen keyword")
  );
}

#[test]
fn element_limit_is_an_error() {
  let output = run(&["--max-elements", "2", "<p>hello</p>"]);

  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());
  assert!(
    String::from_utf8_lossy(&output.stderr)
      .contains("4 elements found (limit: 2)")
  );
}

#[test]
fn invalid_base_url_is_an_error() {
  let output = run(&["--url", "not a url", "<p>hello</p>"]);

  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());
  assert!(String::from_utf8_lossy(&output.stderr).contains("invalid base url"));
}

#[test]
fn base_url_can_come_from_the_environment() {
  let output = command()
    .env("FEEDBASKET_BASE_URL", "not a url")
    .arg("<p>hello</p>")
    .output()
    .unwrap();

  assert_eq!(output.status.code(), Some(1));
}
