//! Surfs Up CLI
//!
//! Runs the climate queries directly against the SQLite file:
//! - Precipitation over the last year
//! - Station ranking (with station names)
//! - Temperatures at the busiest station
//! - Temperature stats for a date range

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use surfsup::config::{generate_default_config, Config};
use surfsup::query::QueryService;
use surfsup::store::WeatherStore;

#[derive(Parser)]
#[command(name = "surfsup-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query daily weather observations from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SQLite database (default: from config)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Precipitation over the most recent year
    Precipitation,

    /// Stations ranked by observation count
    Stations,

    /// Last year of temperatures at the most active station
    Tobs,

    /// TMIN/TAVG/TMAX from START (to END, inclusive)
    Stats {
        /// Start date, YYYY-MM-DD
        start: String,
        /// End date, YYYY-MM-DD
        end: Option<String>,
    },

    /// Print a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct RankedStation {
    station: String,
    name: Option<String>,
    count: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_default();
    surfsup::logging::init(&config.logging);

    let database = cli.database.unwrap_or(config.store.database_path);
    let store = WeatherStore::new(&database);
    let service = QueryService::new(store.clone());

    match cli.command {
        Commands::Precipitation => {
            let readings = service.precipitation().await?;
            match cli.format {
                Format::Json => print_json(&readings)?,
                Format::Table => {
                    println!("{:<12} {:>8}", "DATE", "PRCP");
                    for r in &readings {
                        println!("{:<12} {:>8.2}", r.date, r.prcp);
                    }
                    println!("\n{} readings", readings.len());
                }
            }
        }

        Commands::Stations => {
            let ranking = service.stations().await?;
            let names: HashMap<String, Option<String>> = store
                .run(|session| session.stations())
                .await?
                .into_iter()
                .map(|s| (s.station, s.name))
                .collect();

            let rows: Vec<RankedStation> = ranking
                .into_iter()
                .map(|a| RankedStation {
                    name: names.get(&a.station).cloned().flatten(),
                    station: a.station,
                    count: a.count,
                })
                .collect();

            match cli.format {
                Format::Json => print_json(&rows)?,
                Format::Table => {
                    println!("{:<14} {:>7}  {}", "STATION", "COUNT", "NAME");
                    for r in &rows {
                        println!(
                            "{:<14} {:>7}  {}",
                            r.station,
                            r.count,
                            r.name.as_deref().unwrap_or("-")
                        );
                    }
                }
            }
        }

        Commands::Tobs => {
            let readings = service.tobs().await?;
            match cli.format {
                Format::Json => print_json(&readings)?,
                Format::Table => {
                    println!("{:<12} {:>6}", "DATE", "TEMP");
                    for r in &readings {
                        println!("{:<12} {:>6.1}", r.date, r.temp);
                    }
                    println!("\n{} readings", readings.len());
                }
            }
        }

        Commands::Stats { start, end } => {
            let stats = service.temperature_stats(&start, end.as_deref()).await?;
            match (cli.format, stats) {
                (Format::Json, stats) => print_json(&serde_json::json!({
                    "TMIN": stats.map(|s| s.min),
                    "TAVG": stats.map(|s| s.avg),
                    "TMAX": stats.map(|s| s.max),
                }))?,
                (Format::Table, Some(s)) => {
                    println!("TMIN  {:.1}", s.min);
                    println!("TAVG  {:.1}", s.avg);
                    println!("TMAX  {:.1}", s.max);
                    println!("\nover {} readings", s.samples);
                }
                (Format::Table, None) => println!("No observations in range"),
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("Wrote config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
