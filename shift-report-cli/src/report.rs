//! Text summary renderer
//!
//! Formats a [`ParseResult`] as the plain-text summary printed to stdout:
//! overall totals and throughput, then one line per month in chronological
//! order.

use shift_report_parser::ParseResult;

/// Render the text summary for a parsed report
pub fn render_text(result: &ParseResult) -> String {
    let mut report = Vec::new();

    report.push(format!("Total Pieces: {}", result.total_pieces));
    report.push(format!("Total Shifts: {}", result.total_shifts));
    match result.pieces_per_hour() {
        Some(pph) => report.push(format!("Total Pieces per Hour: {:.2}", pph)),
        None => report.push("Total Pieces per Hour: N/A (No shifts detected)".to_string()),
    }

    report.push(String::new());
    report.push("Monthly Data:".to_string());
    for (month, totals) in &result.monthly {
        report.push(format!(
            "Month: {}, Pieces: {}, Shifts: {}, Pieces per Hour: {:.2}",
            month,
            totals.pieces,
            totals.shifts,
            totals.pieces_per_hour()
        ));
    }

    report.join("\n")
}
