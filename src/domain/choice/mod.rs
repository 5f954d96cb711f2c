//! Choice module - the things a student compares.
//!
//! - `Criterion` - named 0-10 rating
//! - `Alternative` - priced purchase option with ordered criteria
//! - `Theme` - built-in catalog of suggested items and default criteria

mod alternative;
mod criterion;
mod theme;

pub use alternative::Alternative;
pub use criterion::{is_reserved, normalize_name, same_name, Criterion, AFFORDABILITY};
pub use theme::{find_theme, themes, Theme};
