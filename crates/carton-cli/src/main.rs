// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Carton CLI entrypoint.
//!
//! # Usage
//! ```text
//! carton show "1 m × 2 m × 3 m" --unit cm
//! carton combine "1 m × 5 m × 2 m" "3 m × 1 m × 4 m"
//! carton compare "1 m × 2 m × 3 m" "3000 mm × 1000 mm × 2000 mm"
//! carton prefs --unit mm --policy trailing
//! ```
//!
//! Exit codes: `0` on success, `1` when `compare` finds the cartons differ,
//! `2` on any error. Logs go to stderr; `-v`/`-vv` or `RUST_LOG` raise verbosity.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use carton_app_core::{CliPrefs, ConfigService};
use carton_config_fs::FsConfigStore;
use carton_geom::{UnitOfMeasure, UnitPolicy};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect, combine, and compare rectangular cartons")]
struct Args {
    #[command(subcommand)]
    command: Command,
    /// Directory holding stored preferences (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    /// Unit for printed cartons: m, cm, or mm
    #[arg(long, global = true)]
    unit: Option<UnitOfMeasure>,
    /// How unit tokens in input apply: per-term or trailing
    #[arg(long, global = true)]
    policy: Option<UnitPolicy>,
    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a carton with its volume and surface area
    Show {
        /// Carton text, e.g. "1 m × 2 m × 3 m"
        carton: String,
    },
    /// Print the bounding combination of two or more cartons
    Combine {
        /// Cartons to combine, left to right
        #[arg(required = true, num_args = 2..)]
        cartons: Vec<String>,
    },
    /// Report whether two cartons are the same box in any orientation
    Compare {
        /// First carton
        first: String,
        /// Second carton
        second: String,
    },
    /// Print stored preferences; with --unit/--policy, update them first
    Prefs,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_service(dir: Option<PathBuf>) -> Option<ConfigService<FsConfigStore>> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir),
        None => match FsConfigStore::new() {
            Ok(store) => store,
            Err(err) => {
                warn!(%err, "no config directory; using built-in defaults");
                return None;
            }
        },
    };
    debug!(base = %store.base().display(), "config store");
    Some(ConfigService::new(store))
}

fn run(args: Args) -> Result<ExitCode> {
    let config = config_service(args.config_dir);
    let stored: CliPrefs = config
        .as_ref()
        .map(|svc| svc.load_or_default(CliPrefs::KEY))
        .unwrap_or_default();
    let prefs = stored.with_overrides(args.unit, args.policy);

    match args.command {
        Command::Show { carton } => println!("{}", commands::show(&carton, &prefs)?),
        Command::Combine { cartons } => println!("{}", commands::combine(&cartons, &prefs)?),
        Command::Compare { first, second } => {
            let equal = commands::compare(&first, &second, &prefs)?;
            println!("{}", if equal { "equal" } else { "different" });
            if !equal {
                return Ok(ExitCode::from(1));
            }
        }
        Command::Prefs => {
            if prefs != stored {
                let svc = config.context("no config directory available to save preferences")?;
                svc.save(CliPrefs::KEY, &prefs)
                    .context("failed to save preferences")?;
                info!(unit = %prefs.unit, policy = %prefs.parse_policy, "saved preferences");
            }
            println!("{}", commands::describe_prefs(&prefs));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
