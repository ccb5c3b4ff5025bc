//! Integration tests for the scheme CLI binary.
//!
//! These tests exercise the compiled binary using assert_cmd against
//! temporary theme roots.

use assert_cmd::Command;
use predicates::prelude::*;
use scheme_test_utils::TestThemeRoot;

/// Get a Command for the scheme binary with no inherited session env.
fn scheme_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("scheme"));
    cmd.env_remove("SCHEME_ROOT")
        .env_remove("SCHEME_THEME")
        .env_remove("RUST_LOG");
    cmd
}

/// base <- child, with a few files in each.
fn fixture() -> TestThemeRoot {
    let root = TestThemeRoot::new();
    root.write_config("base", "layout = narrow\ncolumns = 2\n");
    root.write_config("child", "parent_theme = base\ncolumns = 3\n");
    root.write_file("base", "assets/css/style.css", "body {}");
    root.write_file("base", "header.php", "");
    root.write_file("child", "config/menus.toml", "");
    root
}

fn session(cmd: &mut Command, root: &TestThemeRoot) {
    cmd.arg("--root").arg(root.root()).args(["--theme", "child"]);
}

// ============================================================================
// Help and session errors
// ============================================================================

#[test]
fn test_help_output() {
    scheme_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("theme inheritance"));
}

#[test]
fn test_missing_root_fails() {
    scheme_cmd()
        .args(["--theme", "child", "stack"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("SCHEME_ROOT"));
}

#[test]
fn test_env_vars_supply_session() {
    let root = fixture();
    scheme_cmd()
        .env("SCHEME_ROOT", root.root())
        .env("SCHEME_THEME", "child")
        .arg("stack")
        .assert()
        .success()
        .stdout(predicate::str::contains("child").and(predicate::str::contains("base")));
}

#[test]
fn test_cyclic_chain_reports_error() {
    let root = TestThemeRoot::new();
    root.write_config("a", "parent_theme = \"b\"\n");
    root.write_config("b", "parent_theme = \"a\"\n");

    let mut cmd = scheme_cmd();
    cmd.arg("--root").arg(root.root()).args(["--theme", "a", "stack"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("a -> b -> a"));
}

// ============================================================================
// Stack and directives
// ============================================================================

#[test]
fn test_stack_json_is_most_specific_first() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    let output = cmd.args(["stack", "--json"]).output().unwrap();
    assert!(output.status.success());

    let themes: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(themes, vec!["child", "base"]);
}

#[test]
fn test_stack_marks_only_the_active_theme() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.env("NO_COLOR", "1")
        .arg("stack")
        .assert()
        .success()
        .stdout(predicate::str::contains("child (active)"))
        .stdout(predicate::str::contains("base (active)").not());
}

#[test]
fn test_get_resolves_most_specific() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.args(["get", "columns"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_get_inherited() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.args(["get", "layout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("narrow"));
}

#[test]
fn test_get_missing_directive_fails() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.args(["get", "sidebar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not set by any theme"));
}

#[test]
fn test_get_all_json() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    let output = cmd.args(["get", "--json"]).output().unwrap();
    assert!(output.status.success());

    let resolved: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(resolved["columns"], 3);
    assert_eq!(resolved["layout"], "narrow");
    assert_eq!(resolved["parent_theme"], "base");
}

// ============================================================================
// Lookups
// ============================================================================

#[test]
fn test_locate_split_parts() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.args(["locate", "assets/css", "style.css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base/assets/css/style.css"));
}

#[test]
fn test_locate_miss_fails() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.args(["locate", "missing.php"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in any theme"));
}

#[test]
fn test_locate_config() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.args(["locate-config", "menus.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("child/config/menus.toml"));
}

#[test]
fn test_template_falls_through_candidates() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.args(["template", "header-wide.php", "header.php"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base/header.php"));
}

#[test]
fn test_template_default_when_missing() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.args(["template", "footer.php", "--default", "/host/footer.php"])
        .assert()
        .success()
        .stdout("/host/footer.php\n");
}

#[test]
fn test_dirs_docs() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.args(["dirs", "--kind", "docs"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("child/config/docs")
                .and(predicate::str::contains("base/config/docs")),
        );
}

#[test]
fn test_urls_use_root_url() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.args(["--url", "https://example.com/themes", "urls"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://example.com/themes/child/assets/css",
        ));
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_options_merge_json() {
    let root = fixture();
    root.write_options("base", "[layout]\ntitle = \"Layout\"\ndefault = \"narrow\"\n");
    root.write_options("child", "[layout]\ndefault = \"wide\"\n");

    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    let output = cmd.args(["options", "--json"]).output().unwrap();
    assert!(output.status.success());

    let options: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(options[0]["name"], "layout");
    assert_eq!(options[0]["theme"], "child");
    assert_eq!(options[0]["fields"]["title"], "Layout");
    assert_eq!(options[0]["fields"]["default"], "wide");
}

#[test]
fn test_options_empty() {
    let root = fixture();
    let mut cmd = scheme_cmd();
    session(&mut cmd, &root);
    cmd.arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("No options defined"));
}
