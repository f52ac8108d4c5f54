//! Core types for the shift report parser library
//!
//! This module defines the aggregate the scanner builds while reading a
//! report. The scanner is a single forward pass - it only ever increments
//! counters and extends the observed date range, then freezes everything
//! into a [`ParseResult`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed duration of one production shift, in hours.
///
/// Used to derive pieces-per-hour throughput. Not configurable.
pub const SHIFT_HOURS: f64 = 7.25;

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a report
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A line matched the date-prefix shape but neither supported date
    /// format (`m/d/yy`, `m/d/yyyy`) could parse it. Fatal: the report's
    /// month context would be wrong from here on, so we never guess.
    #[error("line {line_number}: unparseable date in {line:?}: {reason}")]
    Date {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Piece and shift counters for one calendar month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    /// Units produced across all counted shifts in the month
    pub pieces: u64,
    /// Number of shifts that reported a piece count
    pub shifts: u64,
}

impl MonthTotals {
    /// Throughput for this month, or 0.0 when no shifts were counted
    pub fn pieces_per_hour(&self) -> f64 {
        let hours = self.shifts as f64 * SHIFT_HOURS;
        if hours > 0.0 {
            self.pieces as f64 / hours
        } else {
            0.0
        }
    }
}

/// The aggregate produced by one parse of a report
///
/// Built once per parse and immutable afterwards; the renderers in the
/// application layer consume it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Per-month totals keyed by `YYYY-MM`. A BTreeMap so iteration is
    /// already in chronological order.
    pub monthly: BTreeMap<String, MonthTotals>,
    /// Pieces summed across the whole report
    pub total_pieces: u64,
    /// Every machine/shift header seen, whether or not it reported pieces
    pub total_shifts: u64,
    /// Machine identifier from the most recent "Total Machine N" header
    pub last_machine_id: Option<String>,
    /// Earliest and latest report dates observed, if any
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl ParseResult {
    /// Overall throughput, or `None` when no shifts were seen
    pub fn pieces_per_hour(&self) -> Option<f64> {
        if self.total_shifts == 0 {
            None
        } else {
            Some(self.total_pieces as f64 / (self.total_shifts as f64 * SHIFT_HOURS))
        }
    }

    /// Human-readable date range, e.g. "2024-03-01 to 2024-03-31"
    ///
    /// Reports with no date lines render the "No Date Range" sentinel.
    pub fn date_range_label(&self) -> String {
        match self.date_range {
            Some((min, max)) => {
                format!("{} to {}", min.format("%Y-%m-%d"), max.format("%Y-%m-%d"))
            }
            None => "No Date Range".to_string(),
        }
    }
}
