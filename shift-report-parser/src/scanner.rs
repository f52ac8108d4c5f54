//! Report scanner
//!
//! This module provides the primary interface for the parser library. The
//! scanner walks report lines with a two-state machine:
//!
//! - `SeekingDate`: skip lines until one starts with a report date
//!   (`m/d/yy` or `m/d/yyyy`), which sets the current month context.
//! - `SeekingBlock`: skip lines until a "Total Machine N  Shift S" header,
//!   then inspect the following line for a "Pcs: N" piece count before
//!   returning to `SeekingDate`.
//!
//! Reports contain large amounts of irrelevant text, so every line that
//! matches no pattern is skipped silently. The one fatal case is a line
//! that looks like a date but parses as neither supported format - the
//! month context would be wrong from there on.

use crate::types::{MonthTotals, ParseError, ParseResult, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Scanner state. Two phases, one cursor, one line of lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingDate,
    SeekingBlock,
}

/// The report scanner - entry point for all parsing operations
pub struct ReportScanner {
    /// `m/d/yy` or `m/d/yyyy` at the start of a line, leading whitespace ok
    date_re: Regex,
    /// Machine/shift header; exactly two spaces before "Shift"
    machine_re: Regex,
    /// Piece count on the line after a machine/shift header
    pcs_re: Regex,
}

impl ReportScanner {
    /// Create a new scanner instance
    pub fn new() -> Self {
        Self {
            date_re: Regex::new(r"^\s*(\d{1,2}/\d{1,2}/\d{2,4})").expect("valid date regex"),
            machine_re: Regex::new(r"Total Machine (\d+)  Shift \d+").expect("valid machine regex"),
            pcs_re: Regex::new(r"Pcs:\s+(\d+)").expect("valid pcs regex"),
        }
    }

    /// Read a report file and parse it
    ///
    /// The file is read in full before scanning starts; no handle is held
    /// during the parse.
    ///
    /// # Example
    /// ```no_run
    /// use shift_report_parser::ReportScanner;
    /// use std::path::Path;
    ///
    /// let scanner = ReportScanner::new();
    /// let result = scanner.parse_file(Path::new("june_report.txt")).unwrap();
    /// println!("{} pieces", result.total_pieces);
    /// ```
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        log::info!("Parsing shift report: {:?}", path);
        let content = fs::read_to_string(path)?;
        self.parse_lines(content.lines())
    }

    /// Parse a sequence of report lines into a [`ParseResult`]
    pub fn parse_lines<'a, I>(&self, lines: I) -> Result<ParseResult>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lines: Vec<&str> = lines.into_iter().collect();

        let mut monthly: BTreeMap<String, MonthTotals> = BTreeMap::new();
        let mut total_pieces: u64 = 0;
        let mut total_shifts: u64 = 0;
        let mut last_machine_id: Option<String> = None;
        let mut current_month: Option<String> = None;
        let mut dates: Vec<NaiveDate> = Vec::new();
        let mut state = ScanState::SeekingDate;

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];

            match state {
                ScanState::SeekingDate => {
                    if let Some(caps) = self.date_re.captures(line) {
                        let date_str = &caps[1];
                        let date =
                            parse_report_date(date_str).map_err(|reason| ParseError::Date {
                                line_number: i + 1,
                                line: line.to_string(),
                                reason,
                            })?;
                        log::debug!("line {}: date {} -> month context", i + 1, date);
                        current_month = Some(date.format("%Y-%m").to_string());
                        dates.push(date);
                        state = ScanState::SeekingBlock;
                    }
                }
                ScanState::SeekingBlock => {
                    if let Some(caps) = self.machine_re.captures(line) {
                        last_machine_id = Some(caps[1].to_string());
                        total_shifts += 1;

                        // One line of lookahead for the piece count. The
                        // inspected line is consumed whether it matched or
                        // not; a shift without a Pcs line still counts in
                        // total_shifts but touches no month entry.
                        if i + 1 < lines.len() {
                            if let Some(pcs_caps) = self.pcs_re.captures(lines[i + 1]) {
                                if let Ok(pieces) = pcs_caps[1].parse::<u64>() {
                                    total_pieces += pieces;
                                    if let Some(month) = current_month.as_deref() {
                                        let entry =
                                            monthly.entry(month.to_string()).or_default();
                                        entry.pieces += pieces;
                                        entry.shifts += 1;
                                    }
                                }
                            }
                            i += 1;
                        }
                        state = ScanState::SeekingDate;
                    }
                }
            }

            i += 1;
        }

        let date_range = match (dates.iter().min(), dates.iter().max()) {
            (Some(&min), Some(&max)) => Some((min, max)),
            _ => None,
        };

        log::info!(
            "Parsed report: {} pieces over {} shifts in {} month(s)",
            total_pieces,
            total_shifts,
            monthly.len()
        );

        Ok(ParseResult {
            monthly,
            total_pieces,
            total_shifts,
            last_machine_id,
            date_range,
        })
    }
}

impl Default for ReportScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a report date, trying the two-digit-year format first
///
/// Two-digit years fall into chrono's default `%y` century window
/// (69-99 -> 19xx, 00-68 -> 20xx), matching the convention the reports
/// were written against. No explicit pivot is applied.
fn parse_report_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%m/%d/%y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .map_err(|e| e.to_string())
}
