pub mod config;
pub mod error;
pub mod normalize;
pub mod output;
pub mod scraper;
pub mod table;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::config::ScrapeConfig;
pub use crate::error::ScrapeError;
pub use crate::normalize::normalize_rows;
pub use crate::output::{save_table, write_csv, write_json, OutputFormat};
pub use crate::scraper::{fetch_html, passing_url, scrape_season, PassingPage};
pub use crate::table::NormalizedTable;
