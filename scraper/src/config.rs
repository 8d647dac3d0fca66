use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://www.pro-football-reference.com";
pub const DEFAULT_OUTPUT_DIR: &str = "./tables/adv_passing";
pub const DEFAULT_YEAR: u32 = 2024;

/// First season Pro-Football-Reference publishes advanced passing numbers for.
pub const FIRST_ADVANCED_SEASON: u32 = 2018;

/// Where pages are fetched from and where extracted tables are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub output_dir: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
