use adv_passing_scraper::config::{
    DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR, DEFAULT_YEAR, FIRST_ADVANCED_SEASON,
};
use adv_passing_scraper::{save_table, scrape_season, OutputFormat, ScrapeConfig};
use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use log::warn;
use reqwest::blocking::Client;
use std::path::PathBuf;

/// Scrape the Pro-Football-Reference advanced passing table for one season
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Season to fetch
    #[arg(long, short, default_value_t = DEFAULT_YEAR)]
    year: u32,

    /// Directory the table is written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Output format: csv or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Site root the season page is fetched from
    #[arg(long, env = "ADV_PASSING_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Number of records to print after saving
    #[arg(long, default_value_t = 5)]
    preview: usize,
}

fn run(cli: Cli) -> Result<()> {
    let current_year = chrono::Local::now().year();
    if cli.year < FIRST_ADVANCED_SEASON {
        warn!(
            "Advanced passing is only published from {} on; {} will likely have no table",
            FIRST_ADVANCED_SEASON, cli.year
        );
    } else if i64::from(cli.year) > i64::from(current_year) {
        warn!("{} is after the current season ({})", cli.year, current_year);
    }

    let config = ScrapeConfig {
        base_url: cli.base_url,
        output_dir: cli.output_dir,
    };

    let client = Client::new();
    let table = scrape_season(&client, &config, cli.year)
        .with_context(|| format!("Failed to scrape advanced passing for {}", cli.year))?;

    let (rows, columns) = table.shape();
    println!("Extracted table with shape: ({}, {})", rows, columns);

    let path = save_table(&table, &config.output_dir, cli.year, cli.format)?;

    if cli.preview > 0 {
        print!("{}", table.head(cli.preview));
    }
    println!(
        "Saved {} to: {}",
        cli.format.extension().to_uppercase(),
        path.display()
    );

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("ERROR: {:#}", e);
        std::process::exit(1);
    }
}
