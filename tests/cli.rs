use assert_cmd::Command;
use chrono::DateTime;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("devops-assessment").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

fn render_stdout(node_env: Option<&str>) -> String {
    let mut c = cmd();
    match node_env {
        Some(v) => c.env("NODE_ENV", v),
        None => c.env_remove("NODE_ENV"),
    };
    let out = c.arg("render").assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

fn build_time_of(doc: &str) -> String {
    let marker = "<strong>Build Time:</strong> ";
    let start = doc.find(marker).expect("build time present") + marker.len();
    let len = doc[start..].find("</p>").unwrap();
    doc[start..start + len].to_string()
}

#[test]
fn render_without_node_env_uses_development() {
    let doc = render_stdout(None);
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<strong>Environment:</strong> development"));
    assert!(doc.contains("<strong>Next.js Version:</strong> 15.x"));
}

#[test]
fn render_with_empty_node_env_uses_development() {
    let doc = render_stdout(Some(""));
    assert!(doc.contains("<strong>Environment:</strong> development"));
}

#[test]
fn render_with_node_env_shows_it() {
    let doc = render_stdout(Some("production"));
    assert!(doc.contains("<strong>Environment:</strong> production"));
    assert!(!doc.contains("<strong>Environment:</strong> development"));
}

#[test]
fn render_has_fixed_title_and_four_cards() {
    let doc = render_stdout(Some("staging"));
    assert!(doc.contains("<title>DevOps Assessment - Next.js App</title>"));
    assert_eq!(doc.matches("<h2").count(), 4);
    for title in ["🐳 Docker", "⚙️ GitHub Actions", "☸️ Kubernetes", "📚 Documentation"] {
        assert!(doc.contains(title), "missing card {title}");
    }
}

#[test]
fn build_time_is_iso8601_and_ordered_across_runs() {
    let t1 = DateTime::parse_from_rfc3339(&build_time_of(&render_stdout(None))).unwrap();
    let t2 = DateTime::parse_from_rfc3339(&build_time_of(&render_stdout(None))).unwrap();
    assert!(t1 <= t2);
}

#[test]
fn render_to_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("index.html");

    cmd()
        .env("NODE_ENV", "production")
        .args(["render", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    let doc = std::fs::read_to_string(&path).unwrap();
    assert!(doc.contains("<strong>Environment:</strong> production"));
}

#[test]
fn render_to_missing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing").join("index.html");

    cmd()
        .args(["render", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("failed to write"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("serve"))
        .stdout(contains("render"));
}
