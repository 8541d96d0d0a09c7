//! Behavioral specs for the lint run and its exit status.
//!
//! - zero findings exit 0
//! - findings exit 1, whatever the tool's own code
//! - tool output passes through untouched
//! - runs never modify the project

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > A directory with zero lint findings yields exit code 0
#[test]
fn clean_project_passes() {
    let temp = Project::with_venv();
    temp.tool("flake8", "exit 0");

    lint().pwd(temp.path()).passes();
}

/// > A directory with at least one finding yields exit code 1
#[test]
fn findings_fail_with_exit_one() {
    let temp = Project::with_venv();
    temp.tool(
        "flake8",
        "echo './app.py:1:1: F401 os imported but unused'\nexit 1",
    );

    lint().pwd(temp.path()).fails();
}

/// > Any non-zero tool status maps to exit code 1
#[test]
fn tool_exit_codes_collapse_to_one() {
    let temp = Project::with_venv();
    temp.tool("flake8", "exit 42");

    lint().pwd(temp.path()).fails();
}

/// > A tool killed by a signal counts as findings
#[test]
fn signalled_tool_fails() {
    let temp = Project::with_venv();
    temp.tool("flake8", "kill -9 $$");

    lint().pwd(temp.path()).fails();
}

/// > Raw tool output is shown as-is
#[test]
fn tool_output_passes_through() {
    let temp = Project::with_venv();
    temp.tool(
        "flake8",
        "echo './app.py:3:80: E501 line too long'\necho 'summary on stderr' >&2\nexit 1",
    );

    lint()
        .pwd(temp.path())
        .fails()
        .stdout_eq("./app.py:3:80: E501 line too long\n")
        .stderr_has("summary on stderr");
}

/// > The tool runs from the project directory with `.` as its argument
#[test]
fn tool_runs_in_project_directory() {
    let temp = Project::with_venv();
    temp.file("src/api/main.py", "print('hi')\n");
    temp.tool(
        "flake8",
        r#"[ "$#" = 1 ] && [ "$1" = "." ] && [ -f src/api/main.py ] || exit 9"#,
    );

    lint().pwd(temp.path()).passes();
}

/// > Arguments after `--` replace the default tool arguments
#[test]
fn trailing_args_replace_defaults() {
    let temp = Project::with_venv();
    temp.tool(
        "flake8",
        r#"[ "$1" = "--max-line-length" ] && [ "$2" = "100" ] && [ "$#" = 2 ] || exit 9"#,
    );

    lint()
        .pwd(temp.path())
        .args(&["--", "--max-line-length", "100"])
        .passes();
}

/// > Running twice on an unchanged directory gives the same result and
/// > leaves every file as it was
#[test]
fn runs_are_read_only_and_repeatable() {
    let temp = Project::with_venv();
    temp.file("app.py", "import os\n");
    temp.tool("flake8", "grep -q 'import os' app.py && exit 1\nexit 0");

    let before = temp.snapshot();
    lint().pwd(temp.path()).fails();
    lint().pwd(temp.path()).fails();
    assert_eq!(temp.snapshot(), before);
}

/// > A tool exceeding its timeout is killed; the run exits 3
#[test]
fn timeout_kills_tool() {
    let temp = Project::with_venv();
    temp.tool("flake8", "exec sleep 30");

    let start = std::time::Instant::now();
    lint()
        .pwd(temp.path())
        .args(&["--timeout", "300ms"])
        .exits(3)
        .stderr_has("timed out");
    assert!(start.elapsed() < std::time::Duration::from_secs(20));
}

/// > --dry-run prints the resolved invocation without running the tool
#[test]
fn dry_run_does_not_run_tool() {
    let temp = Project::with_venv();
    let tool = temp.tool("flake8", "exit 1");

    lint()
        .pwd(temp.path())
        .args(&["--dry-run"])
        .passes()
        .stdout_has(format!("tool: {}", tool.display()).as_str())
        .stdout_has("args: .");
}

/// > --verbose reports the resolved invocation and verdict on stderr only
#[test]
fn verbose_reports_on_stderr() {
    let temp = Project::with_venv();
    temp.tool("flake8", "exit 1");

    lint()
        .pwd(temp.path())
        .args(&["--verbose"])
        .fails()
        .stdout_eq("")
        .stderr_has("[verbose] config: none")
        .stderr_has("[verbose] flake8: failed (exit 1)");
}

/// > VENVLINT_DEBUG=1 enables verbose output
#[test]
fn debug_env_enables_verbose() {
    let temp = Project::with_venv();
    temp.tool("flake8", "exit 0");

    lint()
        .pwd(temp.path())
        .env("VENVLINT_DEBUG", "1")
        .passes()
        .stderr_has("[verbose]");
}
