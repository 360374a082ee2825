// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cmdl - parse and dispatch command lines

mod commands;
mod config;
mod env;
mod exit_error;
mod logging;
mod output;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cmdl_syntax::ParserConfig;
use config::Config;
use output::OutputFormat;
use session::{Flow, Session};
use std::io::IsTerminal;
use std::path::PathBuf;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

#[derive(Parser)]
#[command(
    name = "cmdl",
    version,
    about = "cmdl - parse and dispatch command lines"
)]
struct Cli {
    /// Config file (TOML). Defaults to $CMDL_CONFIG
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum)]
    output: Option<OutputFormat>,

    /// Maximum nesting depth of list, tuple and dict literals
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    max_depth: Option<u32>,

    /// Print the token stream instead of running commands
    #[arg(long)]
    tokens: bool,

    /// Run a single line and exit
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    command: Option<String>,
}

impl Cli {
    /// Merge flags over the config file; flags win.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = depth as usize;
        }
        config
    }
}

fn main() {
    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise we render the full chain so context
/// isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(env::config_path);
    let config = cli.apply(Config::load(config_path.as_deref())?);

    logging::setup_logging(&config.log_level);
    tracing::debug!(?config_path, ?config, "starting");

    let registry =
        commands::registry(config.case_insensitive).context("failed to register commands")?;
    let parser = ParserConfig {
        max_depth: config.max_depth,
    };
    let session = Session::new(registry, parser, config.output).show_tokens(cli.tokens);

    let mut stdout = std::io::stdout().lock();

    if let Some(line) = &cli.command {
        return match session.run_line(line, &mut stdout)? {
            Flow::Failed => Err(exit_error::ExitError::silent(1).into()),
            Flow::Ok | Flow::Exit => Ok(()),
        };
    }

    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal().then_some(config.prompt.as_str());
    session.run(stdin.lock(), &mut stdout, prompt)?;
    Ok(())
}
