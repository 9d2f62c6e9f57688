//! CLI surface tests.
//!
//! Configuration failures abort before any external command runs, so these
//! exercises stay hermetic: no scaffolding or proxy tool is ever reached.

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn help_lists_config_only_flag_in_both_spellings() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config-only"))
        .stdout(predicate::str::contains("-c,"));
}

#[test]
fn unknown_flag_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn zero_port_fails_before_any_tool_runs() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid frontend port"));

    // Aborted during config resolution: nothing was scaffolded or rendered.
    assert!(!ctx.backend_env().exists());
    assert!(!ctx.frontend_env().exists());
}

#[test]
fn non_numeric_port_fails_with_configuration_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid frontend port"));
}

#[test]
fn empty_domain_override_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--domain", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Base domain must not be empty"));
}

#[test]
fn short_config_only_spelling_is_accepted() {
    let ctx = TestContext::new();

    // A port error after flag parsing proves `-c` was accepted by the parser.
    ctx.cli()
        .args(["-c", "--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid frontend port"));
}
