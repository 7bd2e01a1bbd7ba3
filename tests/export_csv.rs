//! Verdict table export tests.

use tempfile::TempDir;

use webpack_scan::classify::Verdict;
use webpack_scan::export::write_verdicts;

fn verdict(url: &str, content_length: usize, title: &str, script_count: usize) -> Verdict {
    Verdict {
        url: url.to_string(),
        content_length,
        title: title.to_string(),
        script_count,
    }
}

#[test]
fn test_header_contract() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("results.csv");

    let written = write_verdicts(&path, &[]).expect("write succeeds");
    assert_eq!(written, 0);

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let header: Vec<String> = reader
        .headers()
        .expect("read header")
        .iter()
        .map(String::from)
        .collect();
    assert_eq!(header, vec!["URL", "Content Length", "Title", "JSNum"]);
    assert_eq!(reader.records().count(), 0);
}

#[test]
fn test_one_row_per_verdict_in_order() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("results.csv");

    let verdicts = vec![
        verdict("https://a.example/", 1204, "Site A", 3),
        verdict("https://b.example/shop", 88, "No Title", 0),
        verdict("https://c.example/", 50211, "Site C", 12),
    ];

    let written = write_verdicts(&path, &verdicts).expect("write succeeds");
    assert_eq!(written, 3);

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|record| record.expect("read row").iter().map(String::from).collect())
        .collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["https://a.example/", "1204", "Site A", "3"]);
    assert_eq!(rows[1], vec!["https://b.example/shop", "88", "No Title", "0"]);
    assert_eq!(rows[2], vec!["https://c.example/", "50211", "Site C", "12"]);
}

#[test]
fn test_titles_with_delimiters_round_trip() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("results.csv");

    let tricky = r#"Shop, "the best" one
in town"#;
    let verdicts = vec![verdict("https://a.example/", 10, tricky, 1)];

    write_verdicts(&path, &verdicts).expect("write succeeds");

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let record = reader
        .records()
        .next()
        .expect("one row")
        .expect("read row");
    assert_eq!(&record[2], tricky);
}

#[test]
fn test_unwritable_path_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("missing").join("results.csv");

    assert!(write_verdicts(&path, &[]).is_err());
}
