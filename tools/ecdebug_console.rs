// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Raw Debug Console

Reads hex sentences from stdin, one per line, sends each through a loopback
mailbox and prints the resulting hex dump.

Usage:
  cargo run --bin ecdebug_console -- [--config <path>] [--log-level <level>]
      [--log-format text|json] [--no-offsets] [--no-ascii] [--debug-{crate}]

Example:
  echo "00 f0 38 00 03 00" | cargo run --bin ecdebug_console
*/

use std::collections::HashMap;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use ecdebug::config::load_config;
use ecdebug::observability::{debug_flags_help, init_logging, parse_debug_flags};
use ecdebug::prelude::*;

struct Options {
    config_path: Option<PathBuf>,
    overrides: HashMap<String, String>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} [--config <path>] [--log-level <level>] [--log-format text|json] \
         [--no-offsets] [--no-ascii]\n\n{}",
        program,
        debug_flags_help()
    )
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        config_path: None,
        overrides: HashMap::new(),
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--log-level" => {
                let level = iter.next().context("--log-level needs a level")?;
                options.overrides.insert("log_level".to_string(), level.clone());
            }
            "--log-format" => {
                let format = iter.next().context("--log-format needs text or json")?;
                options.overrides.insert("log_format".to_string(), format.clone());
            }
            "--no-offsets" => {
                options.overrides.insert("dump_offsets".to_string(), "false".to_string());
            }
            "--no-ascii" => {
                options.overrides.insert("dump_ascii".to_string(), "false".to_string());
            }
            // Handled by parse_debug_flags
            flag if flag.starts_with("--debug-") => {}
            other => anyhow::bail!("unknown argument '{}'", other),
        }
    }

    Ok(options)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("ecdebug_console");

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", usage(program));
        return Ok(());
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, usage(program));
            process::exit(2);
        }
    };

    let config = load_config(options.config_path.as_deref(), Some(&options.overrides))
        .context("Failed to load configuration")?;
    init_logging(&config.logging, &parse_debug_flags())?;

    let session = ecdebug::open_session(LoopbackMailbox::new(), &config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match session.write(&line) {
            Ok(_) => out.write_all(session.read().as_bytes())?,
            Err(e) => writeln!(out, "error: {}", e)?,
        }
        out.flush()?;
    }

    let served = session.into_mailbox().served();
    tracing::info!(served, "console closed");
    Ok(())
}
