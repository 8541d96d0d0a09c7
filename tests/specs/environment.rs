//! Behavioral specs for environment activation.
//!
//! - the environment's executables win over the inherited PATH
//! - the tool sees VIRTUAL_ENV and no PYTHONHOME
//! - a missing environment falls back to PATH unless required

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > A tool inside the environment shadows one of the same name on PATH
#[test]
fn environment_tool_shadows_path_tool() {
    let temp = Project::with_venv();
    temp.tool("flake8", "exit 0");
    let system = temp.script("system/flake8", "exit 1");

    lint()
        .pwd(temp.path())
        .env("PATH", path_with(system.parent().unwrap()))
        .passes();
}

/// > The tool runs with VIRTUAL_ENV pointing at the environment
#[test]
fn tool_sees_virtual_env() {
    let temp = Project::with_venv();
    temp.tool(
        "flake8",
        &format!(
            r#"[ "$VIRTUAL_ENV" = "{}" ] || exit 9"#,
            temp.venv().display()
        ),
    );

    lint().pwd(temp.path()).passes();
}

/// > The environment's bin directory comes first on the tool's PATH
#[test]
fn tool_sees_activated_path() {
    let temp = Project::with_venv();
    temp.tool(
        "flake8",
        &format!(
            r#"case "$PATH" in "{}/bin"*) exit 0 ;; esac
exit 9"#,
            temp.venv().display()
        ),
    );

    lint().pwd(temp.path()).passes();
}

/// > PYTHONHOME from the caller is cleared on activation
#[test]
fn pythonhome_is_cleared() {
    let temp = Project::with_venv();
    temp.tool("flake8", r#"[ -z "${PYTHONHOME+set}" ] || exit 9"#);

    lint()
        .pwd(temp.path())
        .env("PYTHONHOME", "/opt/bogus-python")
        .passes();
}

/// > A missing environment is not checked: the tool is taken from PATH
#[test]
fn missing_environment_falls_back_to_path() {
    let temp = Project::empty();
    let system = temp.script("system/flake8", "exit 1");

    lint()
        .pwd(temp.path())
        .env("PATH", path_with(system.parent().unwrap()))
        .fails();
}

/// > Without activation the tool does not see VIRTUAL_ENV
#[test]
fn missing_environment_sets_no_virtual_env() {
    let temp = Project::empty();
    let system = temp.script("system/flake8", r#"[ -z "$VIRTUAL_ENV" ] || exit 9"#);

    lint()
        .pwd(temp.path())
        .env("PATH", path_with(system.parent().unwrap()))
        .passes();
}

/// > With environment.required a missing environment exits 2
#[test]
fn required_environment_must_exist() {
    let temp = Project::empty();
    temp.config("[environment]\nrequired = true\n");
    let system = temp.script("system/flake8", "exit 0");

    lint()
        .pwd(temp.path())
        .env("PATH", path_with(system.parent().unwrap()))
        .exits(2)
        .stderr_has("environment not found");
}

/// > --venv selects a different environment directory
#[test]
fn venv_flag_selects_environment() {
    let temp = Project::with_venv();
    temp.tool("flake8", "exit 1");
    temp.script("env-ci/bin/flake8", "exit 0");

    lint()
        .pwd(temp.path())
        .args(&["--venv", "env-ci"])
        .passes();
}
