//! Report generation for collected metrics
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **Console**: an aligned table, optionally colored
//! - **JSON**: machine-readable structured data
//!
//! Both take the same slice of [`CollectedValue`](crate::collect::CollectedValue)
//! and write into any [`core::fmt::Write`]. Values are reported in identifier
//! order regardless of the order in which they were collected.

mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;

use crate::collect::CollectedValue;

/// Borrow the values sorted by identifier.
fn sorted(values: &[CollectedValue]) -> Vec<&CollectedValue> {
    let mut sorted: Vec<_> = values.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));
    sorted
}
