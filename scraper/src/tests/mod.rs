pub mod fixtures;
pub mod scraper_tests;
