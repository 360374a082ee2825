//! Config file specs
//!
//! Settings come from `--config` or CMDL_CONFIG; flags override them.

use crate::prelude::*;

#[test]
fn config_flag() {
    let project = Project::empty();
    let path = project.file("cmdl.toml", "output = \"json\"\n");
    cli()
        .args(&["--config", path.to_str().unwrap(), "-c", "type 1"])
        .passes()
        .stdout_eq("{\"command\":\"type\",\"result\":\"int\"}\n");
}

#[test]
fn config_env() {
    let project = Project::empty();
    let path = project.file("cmdl.toml", "case_insensitive = true\n");
    cli()
        .env("CMDL_CONFIG", &path)
        .args(&["-c", "TYPE 1"])
        .passes()
        .stdout_eq("int\n");
}

#[test]
fn flag_overrides_config() {
    let project = Project::empty();
    let path = project.file("cmdl.toml", "output = \"json\"\nmax_depth = 1\n");
    cli()
        .args(&[
            "--config",
            path.to_str().unwrap(),
            "-o",
            "text",
            "--max-depth",
            "3",
            "-c",
            "type [[1]]",
        ])
        .passes()
        .stdout_eq("list\n");
}

#[test]
fn missing_config_fails() {
    let project = Project::empty();
    let path = project.path().join("absent.toml");
    cli()
        .args(&["--config", path.to_str().unwrap(), "-c", "type 1"])
        .fails()
        .stderr_has("Error: failed to read config")
        .stdout_eq("");
}

#[test]
fn invalid_config_fails() {
    let project = Project::empty();
    let path = project.file("cmdl.toml", "prompt = 3\n");
    cli()
        .args(&["--config", path.to_str().unwrap(), "-c", "type 1"])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn log_level_from_config() {
    let project = Project::empty();
    let path = project.file("cmdl.toml", "log_level = \"debug\"\n");
    cli()
        .args(&["--config", path.to_str().unwrap(), "-c", "type 1"])
        .passes()
        .stdout_eq("int\n")
        .stderr_has("dispatching");
}
