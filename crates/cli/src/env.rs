// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Config ---

/// Config file path from CMDL_CONFIG, ignored when empty.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("CMDL_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

// --- Logging ---

/// Tracing filter directives from CMDL_LOG, e.g. `debug` or `cmdl_syntax=trace`.
pub fn log_filter() -> Option<String> {
    std::env::var("CMDL_LOG").ok().filter(|s| !s.is_empty())
}
