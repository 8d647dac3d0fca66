use super::fixtures::{load_html_fixture, page_with_body};
use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::scraper::{fetch_html, passing_url, scrape_season, PassingPage};
use reqwest::blocking::Client;
use reqwest::StatusCode;

fn players(page: &PassingPage) -> Vec<String> {
    page.data_rows()
        .unwrap()
        .iter()
        .map(|row| row.text().collect::<String>())
        .collect()
}

#[test]
fn test_passing_url() {
    assert_eq!(
        passing_url("https://www.pro-football-reference.com", 2024),
        "https://www.pro-football-reference.com/years/2024/passing_advanced.htm"
    );
    assert_eq!(
        passing_url("http://localhost:8080/", 2019),
        "http://localhost:8080/years/2019/passing_advanced.htm"
    );
}

#[test]
fn test_sample_page_rows() {
    let html = load_html_fixture("passing_advanced_2024");
    let page = PassingPage::parse(2024, &html);

    let rows = page.data_rows().unwrap();
    assert_eq!(rows.len(), 3);

    let texts = players(&page);
    assert!(texts[0].contains("Joe Burrow"));
    assert!(texts[1].contains("Jared Goff"));
    assert!(texts[2].contains("Zach Wilson"));
    assert!(texts.iter().all(|t| !t.contains("Myles Garrett")));
}

#[test]
fn test_excluded_classes_dropped_anywhere() {
    let html = page_with_body(
        r#"
        <tr class="over_header"><td data-stat="player">over</td></tr>
        <tr><td data-stat="player">first</td></tr>
        <tr class="right norank"><td data-stat="player">unranked</td></tr>
        <tr class=""><td data-stat="player">second</td></tr>
        <tr class="thead"><td data-stat="player">Player</td></tr>
        <tr class="partial_table"><td data-stat="player">third</td></tr>
        "#,
    );
    let page = PassingPage::parse(2022, &html);

    assert_eq!(players(&page), vec!["first", "second", "third"]);
}

#[test]
fn test_empty_body_yields_no_rows() {
    let html = page_with_body("");
    let page = PassingPage::parse(2020, &html);
    assert!(page.data_rows().unwrap().is_empty());
}

#[test]
fn test_missing_table() {
    let html = r#"
    <html>
    <body><table id="passing"><tbody><tr><td data-stat="player">x</td></tr></tbody></table></body>
    </html>
    "#;
    let page = PassingPage::parse(2017, html);

    let err = page.data_rows().unwrap_err();
    assert!(matches!(err, ScrapeError::TableNotFound { year: 2017 }));
    assert!(err.to_string().contains("2017"));
}

#[test]
fn test_missing_tbody() {
    let html = r#"
    <html>
    <body>
        <table id="passing_advanced">
            <thead><tr><th data-stat="player">Player</th></tr></thead>
        </table>
    </body>
    </html>
    "#;
    let page = PassingPage::parse(2021, html);

    let err = page.data_rows().unwrap_err();
    assert!(matches!(err, ScrapeError::TableBodyNotFound { year: 2021 }));
    assert!(err.to_string().contains("2021"));
}

#[test]
fn test_fetch_rejects_error_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/years/2024/passing_advanced.htm")
        .with_status(404)
        .with_body("missing")
        .create();
    let url = passing_url(&server.url(), 2024);

    let err = fetch_html(&Client::new(), &url).unwrap_err();
    match err {
        ScrapeError::Status { status, url: failed } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(failed, url);
        }
        other => panic!("expected status error, got {:?}", other),
    }
    mock.assert();
}

#[test]
fn test_fetch_transport_failure() {
    // Bind then drop so nothing is listening on the port.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let url = passing_url(&format!("http://{}", addr), 2024);

    let err = fetch_html(&Client::new(), &url).unwrap_err();
    assert!(matches!(err, ScrapeError::Transport { .. }));
}

#[test]
fn test_scrape_season_end_to_end() {
    let html = load_html_fixture("passing_advanced_2024");
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/years/2024/passing_advanced.htm")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create();
    let config = ScrapeConfig {
        base_url: server.url(),
        ..ScrapeConfig::default()
    };

    let table = scrape_season(&Client::new(), &config, 2024).unwrap();
    mock.assert();

    assert_eq!(table.shape(), (3, 5));
    assert_eq!(
        table.columns(),
        ["player", "team", "pass_cmp", "pass_att", "pass_target_yds"]
    );
    assert_eq!(table.get(0, "player"), Some("Joe Burrow*"));
    assert_eq!(table.get(1, "team"), Some("DET"));
    assert_eq!(table.get(2, "pass_cmp"), Some("0"));
    assert_eq!(table.get(2, "pass_att"), None);
    assert_eq!(table.get(2, "pass_target_yds"), None);
}

#[test]
fn test_bare_rows_get_implicit_tbody() {
    let html = r#"
    <html>
    <body>
        <table id="passing_advanced">
            <tr><td data-stat="player">D. Prescott</td></tr>
            <tr class="thead"><td data-stat="player">Player</td></tr>
        </table>
    </body>
    </html>
    "#;
    let page = PassingPage::parse(2024, html);

    assert_eq!(players(&page), vec!["D. Prescott"]);
}
