use std::fs;

use loadcompare::compare::{Comparator, RatioEntry};
use loadcompare::errors::CompareError;

fn temp_prefix(name: &str, current: &str, previous: &str) -> String {
    let dir = std::env::temp_dir().join(format!(
        "loadcompare_compare_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("temp dir");
    let prefix = dir.join("demo").to_str().expect("utf-8 path").to_string();
    fs::write(format!("{prefix}_stats.csv"), current).expect("current");
    fs::write(format!("{prefix}_stats_previous.csv"), previous).expect("previous");
    prefix
}

#[test]
fn test_ratio_of_120_over_100_is_1_2() {
    let prefix = temp_prefix(
        "ratio",
        "Type,Name,metric\nGET,op1,120\n",
        "Type,Name,metric\nGET,op1,100\n",
    );
    let mut comparer = Comparator::new(&prefix);
    let results = comparer.compare_column("metric").expect("compare");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].label, "(metric)_0");
    assert!((results[0].value - 1.2).abs() < 1e-12);
}

#[test]
fn test_multi_column_series_is_labeled_and_concatenated_in_order() {
    let prefix = temp_prefix(
        "multi",
        "Type,Name,A,B\nGET,op1,10,4\nGET,op2,20,6\n",
        "Type,Name,A,B\nGET,op1,10,2\nGET,op2,10,3\n",
    );
    let mut comparer = Comparator::new(&prefix);
    let mut results: Vec<RatioEntry> = Vec::new();
    for column in ["A", "B"] {
        results.extend(comparer.compare_column(column).expect("compare"));
    }
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].label, "(A)_0");
    assert_eq!(results[1].label, "(A)_1");
    assert_eq!(results[2].label, "(B)_0");
    assert_eq!(results[3].label, "(B)_1");
    assert_eq!(results[3].value, 2.0);
    assert_eq!(comparer.tables().len(), 2);
    assert_eq!(comparer.tables()[0].title, "A");
    assert!(comparer.tables()[0].body.contains("<table"));
}

#[test]
fn test_zero_baseline_value_yields_infinite_ratio() {
    let prefix = temp_prefix(
        "zero",
        "Type,Name,RPS\nGET,op1,50\n",
        "Type,Name,RPS\nGET,op1,0\n",
    );
    let mut comparer = Comparator::new(&prefix);
    let results = comparer.compare_column("RPS").expect("compare");
    assert!(results[0].value.is_infinite());
}

#[test]
fn test_row_missing_from_baseline_yields_nan_ratio() {
    let prefix = temp_prefix(
        "missing_row",
        "Type,Name,RPS\nGET,op1,50\nGET,op2,60\n",
        "Type,Name,RPS\nGET,op1,50\n",
    );
    let mut comparer = Comparator::new(&prefix);
    let results = comparer.compare_column("RPS").expect("compare");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].value, 1.0);
    assert!(results[1].value.is_nan());
}

#[test]
fn test_unknown_column_is_reported() {
    let prefix = temp_prefix(
        "unknown",
        "Type,Name,RPS\nGET,op1,50\n",
        "Type,Name,RPS\nGET,op1,50\n",
    );
    let mut comparer = Comparator::new(&prefix);
    let err = comparer.compare_column("Latency").expect_err("must fail");
    assert!(matches!(err, CompareError::ColumnNotFound(_)));
}

#[test]
fn test_missing_snapshot_file_is_reported() {
    let prefix = temp_prefix("missing_file", "Type,Name,RPS\nGET,op1,50\n", "");
    fs::remove_file(format!("{prefix}_stats_previous.csv")).expect("remove");

    let mut comparer = Comparator::new(&prefix);
    let err = comparer.compare_column("RPS").expect_err("must fail");
    assert!(matches!(err, CompareError::MissingSnapshot(_)));
}

#[test]
fn test_comparison_stats_csv_joins_on_name_with_index() {
    let prefix = temp_prefix(
        "stats_csv",
        "Type,Name,RPS\nGET,op1,60\nGET,op3,10\n",
        "Type,Name,RPS\nGET,op1,50\nGET,op2,20\n",
    );
    let comparer = Comparator::new(&prefix);
    let path = comparer.write_comparison_stats().expect("write");

    let raw = fs::read_to_string(&path).expect("read");
    let mut lines = raw.lines();
    assert_eq!(lines.next(), Some(",Name,Type_new,RPS_new,Type_old,RPS_old"));
    assert_eq!(lines.next(), Some("0,op1,GET,60,GET,50"));
    assert_eq!(lines.next(), Some("1,op3,GET,10,,"));
    assert_eq!(lines.next(), Some("2,op2,,,GET,20"));
}
