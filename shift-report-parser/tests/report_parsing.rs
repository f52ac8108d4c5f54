//! End-to-end parsing tests against realistic report text

use chrono::NaiveDate;
use shift_report_parser::ReportScanner;
use std::io::Write;

const SAMPLE_REPORT: &str = "\
Production Report - Line 7
==========================

 3/4/24    Monday
Operator: K. Larsen
Total Machine 7  Shift 1
Pcs:   412
Downtime: 18 min

3/4/24
Total Machine 7  Shift 2
Pcs: 389

3/29/24
Shift notes: changeover at 14:00
Total Machine 7  Shift 1
Pcs:    455

4/2/24
Total Machine 7  Shift 1
Pcs: 401

4/3/24
Total Machine 7  Shift 2
Scrap only, count unavailable
";

#[test]
fn parses_multi_month_report() {
    let scanner = ReportScanner::new();
    let result = scanner.parse_lines(SAMPLE_REPORT.lines()).unwrap();

    assert_eq!(result.total_pieces, 412 + 389 + 455 + 401);
    assert_eq!(result.total_shifts, 5);
    assert_eq!(result.last_machine_id.as_deref(), Some("7"));

    let march = &result.monthly["2024-03"];
    assert_eq!(march.pieces, 412 + 389 + 455);
    assert_eq!(march.shifts, 3);

    let april = &result.monthly["2024-04"];
    assert_eq!(april.pieces, 401);
    assert_eq!(april.shifts, 1);

    let min = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    let max = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();
    assert_eq!(result.date_range, Some((min, max)));
}

#[test]
fn monthly_sums_never_exceed_overall_totals() {
    let scanner = ReportScanner::new();
    let result = scanner.parse_lines(SAMPLE_REPORT.lines()).unwrap();

    let month_pieces: u64 = result.monthly.values().map(|m| m.pieces).sum();
    let month_shifts: u64 = result.monthly.values().map(|m| m.shifts).sum();

    // Pieces are only ever counted alongside a Pcs line, so the sums agree.
    assert_eq!(month_pieces, result.total_pieces);
    // The 4/3 shift had no Pcs line: counted overall but in no month.
    assert!(month_shifts < result.total_shifts);
    assert_eq!(month_shifts, 4);
    assert_eq!(result.total_shifts, 5);
}

#[test]
fn month_keys_iterate_chronologically() {
    let scanner = ReportScanner::new();
    let result = scanner
        .parse_lines([
            "11/5/24",
            "Total Machine 2  Shift 1",
            "Pcs: 10",
            "2/5/24",
            "Total Machine 2  Shift 1",
            "Pcs: 20",
            "2/5/25",
            "Total Machine 2  Shift 1",
            "Pcs: 30",
        ])
        .unwrap();

    let keys: Vec<&str> = result.monthly.keys().map(String::as_str).collect();
    assert_eq!(keys, ["2024-02", "2024-11", "2025-02"]);
}

#[test]
fn empty_input_is_not_an_error() {
    let scanner = ReportScanner::new();
    let result = scanner.parse_lines(SAMPLE_REPORT.lines().take(0)).unwrap();

    assert_eq!(result.total_pieces, 0);
    assert_eq!(result.total_shifts, 0);
    assert!(result.last_machine_id.is_none());
    assert!(result.date_range.is_none());
    assert_eq!(result.date_range_label(), "No Date Range");
}

#[test]
fn parse_file_reads_report_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_REPORT.as_bytes()).unwrap();

    let scanner = ReportScanner::new();
    let result = scanner.parse_file(file.path()).unwrap();

    assert_eq!(result.total_pieces, 412 + 389 + 455 + 401);
    assert_eq!(result.total_shifts, 5);
}

#[test]
fn parse_file_missing_path_is_io_error() {
    let scanner = ReportScanner::new();
    let err = scanner
        .parse_file(std::path::Path::new("/nonexistent/report.txt"))
        .unwrap_err();

    assert!(matches!(err, shift_report_parser::ParseError::Io(_)));
}
