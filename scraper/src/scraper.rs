use log::{debug, info};
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::normalize::normalize_rows;
use crate::table::NormalizedTable;

pub const TABLE_ID: &str = "passing_advanced";

/// Row classes marking header repeats, section dividers and unranked rows.
pub const EXCLUDED_ROW_CLASSES: [&str; 3] = ["thead", "norank", "over_header"];

pub fn passing_url(base_url: &str, year: u32) -> String {
    format!(
        "{}/years/{}/{}.htm",
        base_url.trim_end_matches('/'),
        year,
        TABLE_ID
    )
}

/// Single GET with the client's defaults. Non-success statuses are errors.
pub fn fetch_html(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let transport = |source: reqwest::Error| ScrapeError::Transport {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(transport)
}

/// A parsed season page. Row handles borrow from it.
pub struct PassingPage {
    year: u32,
    document: Html,
}

impl PassingPage {
    pub fn fetch(client: &Client, config: &ScrapeConfig, year: u32) -> Result<Self, ScrapeError> {
        let url = passing_url(&config.base_url, year);
        info!("Fetching advanced passing for {} from {}", year, url);

        let html = fetch_html(client, &url)?;
        Ok(Self::parse(year, &html))
    }

    pub fn parse(year: u32, html: &str) -> Self {
        PassingPage {
            year,
            document: Html::parse_document(html),
        }
    }

    /// Data rows of the table body in document order, with header,
    /// divider and unranked rows filtered out.
    pub fn data_rows(&self) -> Result<Vec<ElementRef<'_>>, ScrapeError> {
        let table_selector = Selector::parse(&format!("table#{}", TABLE_ID)).unwrap();
        let tbody_selector = Selector::parse("tbody").unwrap();

        let table = self
            .document
            .select(&table_selector)
            .next()
            .ok_or(ScrapeError::TableNotFound { year: self.year })?;

        // html5ever inserts a tbody around bare rows, so this only fails for
        // tables without any body rows at all.
        let tbody = table
            .select(&tbody_selector)
            .next()
            .ok_or(ScrapeError::TableBodyNotFound { year: self.year })?;

        let rows: Vec<ElementRef> = tbody
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "tr")
            .collect();
        let total = rows.len();

        let data_rows: Vec<ElementRef> = rows.into_iter().filter(is_data_row).collect();
        debug!(
            "Kept {} of {} rows in '{}' for {}",
            data_rows.len(),
            total,
            TABLE_ID,
            self.year
        );

        Ok(data_rows)
    }
}

pub fn is_data_row(row: &ElementRef) -> bool {
    !row
        .value()
        .classes()
        .any(|class| EXCLUDED_ROW_CLASSES.contains(&class))
}

/// Fetches one season's page and normalizes its data rows.
pub fn scrape_season(
    client: &Client,
    config: &ScrapeConfig,
    year: u32,
) -> Result<NormalizedTable, ScrapeError> {
    let page = PassingPage::fetch(client, config, year)?;
    let rows = page.data_rows()?;
    Ok(normalize_rows(&rows))
}
