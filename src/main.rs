//! Nerf Fleet - Entry Point
//!
//! Builds a random fleet, fires every gun, then reloads every gun.
//! Usage: `nerf-fleet <guns> <fire count> <reload amount>`

use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nerf_fleet::core::FleetConfig;
use nerf_fleet::fleet::{self, FleetPlan, GunRegistry, RandomSource};

const USAGE: &str = "Usage: [guns amount: INT] [fire guns: INT] [reload guns: INT]";

/// Toy dart gun fleet simulation
#[derive(Parser, Debug)]
#[command(name = "nerf-fleet", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Number of guns to create
    #[arg(allow_negative_numbers = true)]
    guns: i64,

    /// Times to fire each gun
    #[arg(allow_negative_numbers = true)]
    fire: i64,

    /// Amount to reload each gun by
    #[arg(allow_negative_numbers = true)]
    reload: i64,
}

/// Argument count is checked before any value is parsed.
fn parse_args() -> Result<Args, ExitCode> {
    if std::env::args_os().len() != 4 {
        println!("{}", USAGE);
        return Err(ExitCode::FAILURE);
    }

    Args::try_parse().map_err(|e| {
        match e.kind() {
            ErrorKind::InvalidValue | ErrorKind::ValueValidation => eprintln!("{}", e),
            _ => println!("{}", USAGE),
        }
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nerf_fleet=warn")),
        )
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };

    let plan = FleetPlan {
        guns: args.guns,
        fire_count: args.fire,
        reload_amount: args.reload,
    };
    tracing::info!(?plan, "Nerf Fleet starting...");

    let config = FleetConfig::default();
    let mut registry = GunRegistry::new();
    let mut rng = RandomSource::from_entropy();

    let result = fleet::run(
        plan,
        &mut registry,
        &mut rng,
        &config,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    match result {
        Ok(run) => {
            tracing::info!(
                created = run.created,
                shots = run.fired.shots,
                dry_fires = run.fired.dry_fires,
                reloaded = run.reloaded.reloaded,
                already_loaded = run.reloaded.already_loaded,
                rejected = run.reloaded.rejected,
                "run complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
