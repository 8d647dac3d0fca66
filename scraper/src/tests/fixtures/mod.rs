use std::fs;
use std::path::Path;

/// Load test HTML fixture by name
pub fn load_html_fixture(fixture_name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src/tests/fixtures")
        .join(format!("{}.html", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

/// Wrap row markup in a minimal page holding the advanced passing table.
pub fn page_with_body(rows: &str) -> String {
    format!(
        r#"<html><body><table id="passing_advanced"><tbody>{}</tbody></table></body></html>"#,
        rows
    )
}
