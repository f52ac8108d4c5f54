//! Excel workbook renderer
//!
//! Generates the XLSX artifact with two sheets:
//! - Overall Data: machine/date-range annotations, then the report totals
//! - Monthly Data: one row per month in chronological order
//!
//! Header rows are bold white-on-blue and centered; column widths are sized
//! to the longest cell string in each column. Purely cosmetic - all numbers
//! come straight from the [`ParseResult`].

use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet, XlsxError};
use shift_report_parser::ParseResult;

const HEADER_FILL: u32 = 0x4F81BD;

/// File name for the generated workbook
///
/// `Line_<machine>_<range>.xlsx`, with spaces and colons in the date-range
/// label replaced so the name is filesystem-safe.
pub fn workbook_filename(result: &ParseResult) -> String {
    let machine = result.last_machine_id.as_deref().unwrap_or("unknown");
    let range = result
        .date_range_label()
        .replace(' ', "_")
        .replace(':', "-");
    format!("Line_{}_{}.xlsx", machine, range)
}

/// Build the two-sheet workbook for a parsed report
pub fn build_workbook(result: &ParseResult) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = header_format();

    add_overall_sheet(&mut workbook, result, &header_format)?;
    add_monthly_sheet(&mut workbook, result, &header_format)?;

    Ok(workbook)
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(0xFFFFFF)
        .set_background_color(HEADER_FILL)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn add_overall_sheet(
    workbook: &mut Workbook,
    result: &ParseResult,
    header_format: &Format,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Overall Data")?;

    let line_label = format!(
        "Line: {}",
        result.last_machine_id.as_deref().unwrap_or("unknown")
    );
    let range_label = format!("Date Range: {}", result.date_range_label());
    sheet.write(0, 0, &line_label)?;
    sheet.write(1, 0, &range_label)?;

    let headers = ["Total Pieces", "Total Shifts", "Total Pieces per Hour"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_with_format(2, col as u16, *header, header_format)?;
    }

    sheet.write(3, 0, result.total_pieces)?;
    sheet.write(3, 1, result.total_shifts)?;
    let pph_display = match result.pieces_per_hour() {
        Some(pph) => {
            sheet.write(3, 2, pph)?;
            pph.to_string()
        }
        None => {
            sheet.write(3, 2, "N/A")?;
            "N/A".to_string()
        }
    };

    let columns = [
        vec![
            line_label,
            range_label,
            headers[0].to_string(),
            result.total_pieces.to_string(),
        ],
        vec![headers[1].to_string(), result.total_shifts.to_string()],
        vec![headers[2].to_string(), pph_display],
    ];
    autosize_columns(sheet, &columns)?;

    Ok(())
}

fn add_monthly_sheet(
    workbook: &mut Workbook,
    result: &ParseResult,
    header_format: &Format,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Monthly Data")?;

    let headers = ["Month", "Pieces", "Shifts", "Pieces per Hour"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *header, header_format)?;
    }

    let mut columns: [Vec<String>; 4] =
        std::array::from_fn(|i| vec![headers[i].to_string()]);

    for (row, (month, totals)) in result.monthly.iter().enumerate() {
        let row = (row + 1) as u32;
        let pph = totals.pieces_per_hour();

        sheet.write(row, 0, month)?;
        sheet.write(row, 1, totals.pieces)?;
        sheet.write(row, 2, totals.shifts)?;
        sheet.write(row, 3, pph)?;

        columns[0].push(month.clone());
        columns[1].push(totals.pieces.to_string());
        columns[2].push(totals.shifts.to_string());
        columns[3].push(pph.to_string());
    }

    autosize_columns(sheet, &columns)?;

    Ok(())
}

/// Size each column to its longest cell string, plus padding
fn autosize_columns(sheet: &mut Worksheet, columns: &[Vec<String>]) -> Result<(), XlsxError> {
    for (col, cells) in columns.iter().enumerate() {
        let max_len = cells.iter().map(String::len).max().unwrap_or(0);
        sheet.set_column_width(col as u16, (max_len + 2) as f64)?;
    }
    Ok(())
}
