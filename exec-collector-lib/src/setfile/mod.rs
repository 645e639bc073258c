//! Loading and validation of setfiles
//!
//! A setfile is a JSON object mapping metric names to descriptors:
//!
//! ```json
//! {
//!     "uptime": { "exec": "/bin/sh", "type": "float64", "args": ["-c", "cut -d' ' -f1 /proc/uptime | tr -d '\\n'"] },
//!     "kernel": { "exec": "/bin/uname", "type": "string", "args": ["-r"] }
//! }
//! ```
//!
//! [`MetricSet::load`] reads the whole file and validates every descriptor,
//! failing on the first descriptor that lacks `type` or `exec`. The file is
//! never written.

mod descriptor;
mod metric_set;

pub use descriptor::MetricDescriptor;
pub use metric_set::MetricSet;
