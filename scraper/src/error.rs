use reqwest::StatusCode;
use thiserror::Error;

/// Failures raised while fetching and locating the advanced passing table.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("Advanced passing table could not be found for year {year}")]
    TableNotFound { year: u32 },

    #[error("No tbody found in 'passing_advanced' table for year {year}")]
    TableBodyNotFound { year: u32 },
}
