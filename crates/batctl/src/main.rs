//! batctl - ThinkPad battery charge control CLI
//!
//! Thin composition root over `thinkbat-control`: wires the
//! `acpi_call`-backed invoker into an explicitly constructed controller and
//! exposes get/set/reset as subcommands. Requires the `acpi_call` kernel
//! module (or an alternate interface file via `--interface`).

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use thinkbat_acpi::AcpiCallEc;
use thinkbat_control::{BatteryController, Field};

#[derive(Parser)]
#[command(name = "batctl")]
#[command(about = "Control ThinkPad battery charge thresholds and forced discharge")]
#[command(version)]
struct Cli {
    /// Output in JSON format for machine parsing
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Management interface file (for testing)
    #[arg(long, global = true, env = "BATCTL_INTERFACE", hide = true)]
    interface: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a control value
    Get {
        /// Which control value to read
        field: FieldArg,
    },
    /// Write a control value
    Set {
        /// Which control value to write
        field: FieldArg,
        /// New value (0-100 for thresholds, 0-3 for force-discharge)
        value: i64,
    },
    /// Reset all controls to firmware defaults (0)
    Reset,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FieldArg {
    /// Charge start threshold
    ChargeStart,
    /// Charge stop threshold
    ChargeStop,
    /// Forced-discharge mode
    ForceDischarge,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::ChargeStart => Field::ChargeStart,
            FieldArg::ChargeStop => Field::ChargeStop,
            FieldArg::ForceDischarge => Field::ForceDischarge,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ec = match &cli.interface {
        Some(path) => AcpiCallEc::with_interface(path),
        None => AcpiCallEc::new(),
    };
    let mut controller = BatteryController::probe(ec)
        .context("no EC battery control object found (is the acpi_call module loaded?)")?;

    match cli.command {
        Commands::Get { field } => {
            let field = Field::from(field);
            let value = controller
                .get(field)
                .with_context(|| format!("failed to read {field}"))?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "field": field.as_str(), "value": value })
                );
            } else {
                println!("{value}");
            }
        }
        Commands::Set { field, value } => {
            let field = Field::from(field);
            controller
                .set(field, value)
                .with_context(|| format!("failed to set {field} to {value}"))?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "field": field.as_str(), "value": value, "ok": true })
                );
            } else {
                println!("{field} = {value}");
            }
        }
        Commands::Reset => {
            controller
                .reset_to_defaults()
                .context("failed to reset battery controls")?;
            if cli.json {
                println!("{}", serde_json::json!({ "reset": true }));
            } else {
                println!("battery controls reset to defaults");
            }
        }
    }

    Ok(())
}
