//! Plain-text report adapter.
//!
//! Renders comparison results and the theme catalog for the terminal.

mod text_report;

pub use text_report::{render_themes, summary_line, ComparisonReport};
