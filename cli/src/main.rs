//! CLI entry point for levguard.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::debug;

use levguard::{
    MetricsRequest, Side, SizeMode, calculate_leverage_metrics, leverage_table,
    stop_price_from_percent,
};
use levguard_cli::config::Config;
use levguard_cli::error::{Error, Result};
use levguard_cli::render;

#[derive(Parser)]
#[command(name = "levguard")]
#[command(about = "Safe leverage, liquidation price and risk for a leveraged position")]
#[command(version)]
struct Cli {
    /// Path to levguard.toml
    #[arg(long, default_value = "levguard.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check one position
    Calc {
        #[arg(long)]
        entry: f64,
        #[arg(long)]
        stop: f64,
        /// long or short
        #[arg(long)]
        side: Side,
        /// Leverage you want to use
        #[arg(long)]
        leverage: Option<f64>,
        /// Position size, in units given by --mode
        #[arg(long)]
        size: Option<f64>,
        /// quote or base
        #[arg(long, default_value = "quote")]
        mode: SizeMode,
        /// Liquidation buffer in percent
        #[arg(long)]
        buffer: Option<f64>,
        /// Leverage cap
        #[arg(long)]
        cap: Option<f64>,
        #[arg(long)]
        json: bool,
    },

    /// Stop price a given percentage away from entry
    StopPrice {
        #[arg(long)]
        entry: f64,
        #[arg(long)]
        percent: f64,
        #[arg(long)]
        side: Side,
    },

    /// Safe leverage over a range of stop distances
    Table {
        #[arg(long)]
        entry: f64,
        #[arg(long)]
        side: Side,
        #[arg(long, default_value_t = 0.25)]
        from: f64,
        #[arg(long, default_value_t = 10.0)]
        to: f64,
        #[arg(long, default_value_t = 0.25)]
        step: f64,
        #[arg(long)]
        buffer: Option<f64>,
        #[arg(long)]
        cap: Option<f64>,
        #[arg(long)]
        json: bool,
    },

    /// List the supported leverage tiers
    Tiers {
        #[arg(long)]
        json: bool,
    },
}

/// Printed output and whether the calculation it describes was valid.
struct Outcome {
    output: String,
    valid: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            process::exit(1);
        }
    };

    match run(&config, cli.command) {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if !outcome.valid {
                process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run(config: &Config, command: Command) -> Result<Outcome> {
    match command {
        Command::Calc {
            entry,
            stop,
            side,
            leverage,
            size,
            mode,
            buffer,
            cap,
            json,
        } => {
            let params = config.risk_params(buffer, cap)?;
            let req = MetricsRequest {
                entry,
                stop,
                side,
                desired_leverage: leverage,
                params,
                size,
                size_mode: mode,
            };
            debug!("calc {req:?}");
            let result = calculate_leverage_metrics(&req);
            render::log_warnings(&result);
            Ok(Outcome {
                output: render::result(&result, config.format(json))?,
                valid: result.is_valid,
            })
        }
        Command::StopPrice {
            entry,
            percent,
            side,
        } => {
            if !(entry.is_finite() && entry > 0.0) {
                return Err(Error::Argument(format!("entry must be > 0, got {entry}")));
            }
            let stop = stop_price_from_percent(entry, percent, side);
            Ok(Outcome {
                output: format!("{stop}"),
                valid: true,
            })
        }
        Command::Table {
            entry,
            side,
            from,
            to,
            step,
            buffer,
            cap,
            json,
        } => {
            let params = config.risk_params(buffer, cap)?;
            let pcts = render::percent_range(from, to, step)?;
            debug!("table entry={entry} side={side} rows={}", pcts.len());
            let rows = leverage_table(entry, side, params, &pcts);
            Ok(Outcome {
                output: render::table(&rows, config.format(json))?,
                valid: true,
            })
        }
        Command::Tiers { json } => Ok(Outcome {
            output: render::tiers(config.format(json))?,
            valid: true,
        }),
    }
}
