use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use leslie_projection::{
    analyze_growth,
    io::{save_or_display, write_json, ChartOutput},
    visualization::{
        format_population_chart, print_growth_summary, print_leslie_matrix,
        print_population_table, render_svg_chart,
    },
    LeslieMatrix, SimulationConfig,
};

#[derive(Parser)]
#[command(
    name = "leslie-sim",
    about = "Leslie Matrix Population Model - age-structured growth projection",
    version,
    author
)]
struct Cli {
    /// Log progress at info level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the matrix, analyze growth, project the population, and chart it
    Run {
        /// TOML file with fecundity, survival, years, and chart_path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of years to project (overrides the config)
        #[arg(short, long)]
        years: Option<u32>,

        /// Chart output path (overrides the config)
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Skip rendering the chart
        #[arg(long)]
        no_chart: bool,

        /// Also write the full result as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Print the population history table
        #[arg(long)]
        history: bool,
    },

    /// Print the Leslie matrix and its growth analysis only
    Analyze {
        /// TOML file with fecundity and survival
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default configuration as TOML
    DefaultConfig,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "leslie_projection=info"
    } else {
        "leslie_projection=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<SimulationConfig> {
    match path {
        Some(path) => Ok(SimulationConfig::from_file(path)?),
        None => Ok(SimulationConfig::default()),
    }
}

fn print_parameters(config: &SimulationConfig) {
    println!("\n{}", "Parameters".bold().cyan());
    println!("{}", "=".repeat(40));
    println!("  Age Classes:    {}", config.fecundity.len());
    println!("  Birth Rates:    {:?}", config.fecundity);
    println!("  Survival Rates: {:?}", config.survival);
    println!("  Years:          {}", config.years);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            years,
            chart,
            no_chart,
            json,
            pretty,
            history,
        } => {
            let mut config = load_config(config.as_ref())?;
            if let Some(years) = years {
                config.years = years;
            }
            if let Some(chart) = chart {
                config.chart_path = chart;
            }

            println!(
                "\n{}",
                format!("Leslie Matrix Simulation: {} years", config.years)
                    .bold()
                    .cyan()
            );
            print_parameters(&config);

            let simulation = config.simulate()?;
            print_leslie_matrix(&simulation.matrix);
            print_growth_summary(&simulation.growth);

            if history {
                print_population_table(&simulation.history);
            }

            if !no_chart {
                let svg = render_svg_chart(&simulation.history, simulation.growth_rate());
                let terminal =
                    format_population_chart(&simulation.history, simulation.growth_rate());
                match save_or_display(&svg, &terminal, &config.chart_path) {
                    ChartOutput::Saved(path) => {
                        println!("\n{} Graph saved to: {}", "Success:".green().bold(), path.display());
                    }
                    ChartOutput::Displayed => {
                        eprintln!(
                            "{}: could not save chart to {}",
                            "Warning".yellow(),
                            config.chart_path.display()
                        );
                    }
                }
            }

            if let Some(json_path) = json {
                write_json(&simulation, &json_path, pretty)?;
                println!(
                    "{} Results written to: {}",
                    "Success:".green().bold(),
                    json_path.display()
                );
            }

            println!("\nSimulation Finished.");
        }

        Commands::Analyze { config } => {
            let config = load_config(config.as_ref())?;
            config.validate()?;

            let matrix = LeslieMatrix::new(&config.fecundity, &config.survival)?;
            print_leslie_matrix(&matrix);
            print_growth_summary(&analyze_growth(&matrix)?);
        }

        Commands::DefaultConfig => {
            print!("{}", SimulationConfig::default().to_toml()?);
        }
    }

    Ok(())
}
