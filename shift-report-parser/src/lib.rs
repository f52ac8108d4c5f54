//! Shift Report Parser Library
//!
//! A small, reusable library for parsing fixed-format shift-production text
//! reports into a per-month production aggregate.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on parsing:
//! - Scans report lines with a two-state machine (seek date, seek block)
//! - Tolerates irregular whitespace and interleaved unrelated lines
//! - Aggregates piece and shift counts per calendar month
//!
//! The library does NOT:
//! - Render text summaries
//! - Generate spreadsheets
//! - Handle command-line concerns
//!
//! All presentation is in the application layer (shift-report-cli).
//!
//! # Example Usage
//!
//! ```
//! use shift_report_parser::ReportScanner;
//!
//! let lines = [
//!     "3/1/24",
//!     "Total Machine 7  Shift 1",
//!     "Pcs:   120",
//! ];
//!
//! let scanner = ReportScanner::new();
//! let result = scanner.parse_lines(lines).unwrap();
//!
//! assert_eq!(result.total_pieces, 120);
//! assert_eq!(result.monthly["2024-03"].shifts, 1);
//! ```

// Public modules
pub mod scanner;
pub mod types;

// Re-export main types for convenience
pub use scanner::ReportScanner;
pub use types::{MonthTotals, ParseError, ParseResult, Result, SHIFT_HOURS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
