//! End-to-end scan runs: input file in, CSV out.

use std::path::PathBuf;

use httptest::{matchers::*, responders::*, Expectation, Server};
use tempfile::TempDir;

use webpack_scan::{run_scan, Config};

const WEBPACK_PAGE: &str = concat!(
    "<html><head><title>Bundled</title></head><body>",
    "<script src=\"/js/site.js\"></script>",
    "<script>window.__webpack_require__ = function(id) {};</script>",
    "</body></html>"
);

const PLAIN_PAGE: &str =
    "<html><head><title>Plain</title></head><body><p>static site</p></body></html>";

struct ScanFixture {
    _dir: TempDir,
    targets: PathBuf,
    output: PathBuf,
}

fn fixture(target_lines: &str) -> ScanFixture {
    let dir = TempDir::new().expect("tempdir");
    let targets = dir.path().join("targets.txt");
    let output = dir.path().join("results.csv");
    std::fs::write(&targets, target_lines).expect("write targets");
    ScanFixture {
        _dir: dir,
        targets,
        output,
    }
}

fn config_for(fixture: &ScanFixture) -> Config {
    Config {
        file: fixture.targets.clone(),
        output: fixture.output.clone(),
        ..Default::default()
    }
}

fn read_csv(path: &PathBuf) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("open csv");
    let header = reader
        .headers()
        .expect("read header")
        .iter()
        .map(String::from)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("read row")
                .iter()
                .map(String::from)
                .collect()
        })
        .collect();
    (header, rows)
}

#[tokio::test]
async fn test_scan_exports_one_row_per_match() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/bundled"))
            .times(1)
            .respond_with(status_code(200).body(WEBPACK_PAGE)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/plain"))
            .times(1)
            .respond_with(status_code(200).body(PLAIN_PAGE)),
    );

    let bundled_url = server.url("/bundled").to_string();
    let plain_url = server.url("/plain").to_string();
    let fixture = fixture(&format!("{bundled_url}\n{plain_url}\n"));

    let report = run_scan(config_for(&fixture)).await.expect("scan runs");

    assert_eq!(report.total_targets, 2);
    assert_eq!(report.failed_targets, 0);
    assert_eq!(report.verdicts.len(), 1);
    assert!(report.exported);

    let (header, rows) = read_csv(&fixture.output);
    assert_eq!(header, vec!["URL", "Content Length", "Title", "JSNum"]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], bundled_url);
    assert_eq!(rows[0][1], WEBPACK_PAGE.len().to_string());
    assert_eq!(rows[0][2], "Bundled");
    assert_eq!(rows[0][3], "1");
}

#[tokio::test]
async fn test_empty_target_list_skips_export() {
    let fixture = fixture("");

    let report = run_scan(config_for(&fixture)).await.expect("scan runs");

    assert_eq!(report.total_targets, 0);
    assert!(report.verdicts.is_empty());
    assert!(!report.exported);
    assert!(!fixture.output.exists(), "no output file should be written");
}

#[tokio::test]
async fn test_blank_lines_are_skipped() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/plain"))
            .times(1)
            .respond_with(status_code(200).body(PLAIN_PAGE)),
    );

    let plain_url = server.url("/plain").to_string();
    let fixture = fixture(&format!("\n   \n{plain_url}\n\t\n"));

    let report = run_scan(config_for(&fixture)).await.expect("scan runs");

    assert_eq!(report.total_targets, 1);
    assert!(!report.exported);
}

#[tokio::test]
async fn test_duplicate_targets_yield_one_verdict_each() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/bundled"))
            .times(2)
            .respond_with(status_code(200).body(WEBPACK_PAGE)),
    );

    let bundled_url = server.url("/bundled").to_string();
    let fixture = fixture(&format!("{bundled_url}\n{bundled_url}\n"));

    let report = run_scan(config_for(&fixture)).await.expect("scan runs");

    // Verdicts are per-dispatch, never deduplicated by URL
    assert_eq!(report.total_targets, 2);
    assert_eq!(report.verdicts.len(), 2);

    let (_, rows) = read_csv(&fixture.output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], bundled_url);
    assert_eq!(rows[1][0], bundled_url);
}

#[tokio::test]
async fn test_failed_target_does_not_abort_run() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/bundled"))
            .times(1)
            .respond_with(status_code(200).body(WEBPACK_PAGE)),
    );

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let dead_port = listener.local_addr().expect("addr").port();
    drop(listener);

    let bundled_url = server.url("/bundled").to_string();
    let fixture = fixture(&format!("http://127.0.0.1:{dead_port}/\n{bundled_url}\n"));

    let report = run_scan(config_for(&fixture)).await.expect("scan runs");

    assert_eq!(report.total_targets, 2);
    assert_eq!(report.failed_targets, 1);
    assert_eq!(report.verdicts.len(), 1);
    assert!(report.exported);
}

#[tokio::test]
async fn test_missing_input_file_is_a_hard_error() {
    let dir = TempDir::new().expect("tempdir");
    let config = Config {
        file: dir.path().join("does_not_exist.txt"),
        output: dir.path().join("results.csv"),
        ..Default::default()
    };

    let result = run_scan(config).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_whitespace_around_urls_is_trimmed() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/plain"))
            .times(1)
            .respond_with(status_code(200).body(PLAIN_PAGE)),
    );

    let plain_url = server.url("/plain").to_string();
    let fixture = fixture(&format!("  {plain_url}\t\n"));

    let report = run_scan(config_for(&fixture)).await.expect("scan runs");

    assert_eq!(report.total_targets, 1);
    assert_eq!(report.failed_targets, 0);
}
