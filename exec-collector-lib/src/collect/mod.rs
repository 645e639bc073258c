//! Concurrent metric collection.
//!
//! A [`Collector`] enumerates the metrics a setfile declares and collects any
//! subset of them. Every requested identifier is handled by an independent
//! task: it is mapped back to its descriptor, the descriptor's program is run,
//! and the output is converted to the declared type. Failures of one metric
//! never affect the others.

mod collected_value;
mod collector;
mod metric_id;
mod namespace;

pub use collected_value::CollectedValue;
pub use collector::Collector;
pub use metric_id::MetricId;
pub use namespace::{DEFAULT_PLUGIN, DEFAULT_VENDOR, Namespace};
