//! Santa - Secret Santa cycle drawing
//!
//! CLI entry point: loads the exchange, asks for a seed and which
//! administrator is running it, and shows only that administrator's list.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use santa::cli::{self, display, SeedChoice};
use santa::{diagnose, DrawError, Exchange, Roster, SantaConfig};

/// Exit status when a draw ends without a list (no valid cycle found)
const EXIT_SOFT_FAILURE: i32 = 2;

/// Config file looked up in the working directory when `--config` is omitted
const DEFAULT_CONFIG: &str = "santa.toml";

/// Secret Santa drawer
///
/// Finds a single gift cycle that respects the banlist and prints the
/// pairings the selected administrator should hand out.
#[derive(Parser, Debug)]
#[command(name = "santa", version, about)]
struct Cli {
    /// Path to the santa.toml configuration file [default: santa.toml, if present]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the draw (prompted for when omitted)
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<String>,

    /// Your number in the admin list, starting at 1 (prompted for when omitted)
    #[arg(long)]
    admin: Option<String>,

    /// Check the roster and banlist for problems instead of drawing
    #[arg(long)]
    check: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Directory roster files are resolved against
fn config_dir(config_path: &Path) -> &Path {
    config_path.parent().unwrap_or_else(|| Path::new("."))
}

/// Load the config and the directory roster files are resolved against.
///
/// Without `--config`, a missing santa.toml means every setting takes its
/// default and the name files are read from the working directory.
fn load_config(path: Option<&Path>) -> Result<(SantaConfig, PathBuf)> {
    let (path, explicit) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG), false),
    };

    if !explicit && !path.exists() {
        tracing::debug!("{DEFAULT_CONFIG} not found, using default settings");
        return Ok((SantaConfig::default(), PathBuf::from(".")));
    }

    let config = SantaConfig::from_path(path)
        .with_context(|| format!("Failed to load config from '{}'", path.display()))?;
    Ok((config, config_dir(path).to_path_buf()))
}

/// Resolve the seed from the flag or an interactive prompt
fn resolve_seed(flag: Option<&str>, default_seed: i64) -> Result<SeedChoice> {
    match flag {
        Some(input) => Ok(cli::parse_seed(input, default_seed)),
        None => cli::ask_seed(&mut io::stdin().lock(), &mut io::stderr(), default_seed),
    }
}

/// Resolve which administrator is running the draw
fn resolve_admin<'a>(flag: Option<&str>, admins: &'a [String]) -> Result<&'a str> {
    match flag {
        Some(input) => {
            let index = cli::parse_admin_choice(input, admins)?;
            Ok(admins[index].as_str())
        }
        None => cli::ask_admin(&mut io::stdin().lock(), &mut io::stderr(), admins),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let (config, base_dir) = load_config(cli.config.as_deref())?;
    let roster = Roster::load(&config.roster, &base_dir)?;

    if cli.check {
        let report = diagnose(&roster, &config.banlist());
        display::render_diagnostic_report(&report);
        if report.error_count() > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    let admins = roster.admins.clone();
    let exchange = Exchange::from_config(&config, roster)?;

    let seed = resolve_seed(cli.seed.as_deref(), config.search.default_seed)?;
    if let SeedChoice::Defaulted { input, seed } = &seed {
        display::print_seed_defaulted(input, *seed);
    }

    let selected = resolve_admin(cli.admin.as_deref(), &admins)?;

    let draw = exchange.draw(seed.seed()).or_else(soft_exit)?;
    let list = draw.assignments_for(selected).or_else(soft_exit)?;

    if draw.distributes(selected) {
        display::print_withheld(draw.partition().withheld.len(), draw.reserve_admin());
    }
    display::print_assignments(selected, list);
    display::print_own_assignments(&draw.own_withheld(selected));

    Ok(())
}

/// Report a soft draw failure and exit; pass anything else on
fn soft_exit<T>(err: DrawError) -> Result<T> {
    if err.is_soft() {
        display::print_soft_failure(&err);
        std::process::exit(EXIT_SOFT_FAILURE);
    }
    Err(err.into())
}
