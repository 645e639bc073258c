//! Request configuration and its validation
//!
//! A collection request carries a [`ConfigTable`] of loosely typed values.
//! The [`ConfigPolicy`] lists the variables the collector understands
//! (`setfile` and `execution_timeout`), supplies defaults, and turns a table
//! into typed [`Settings`] or a `MissingConfiguration` failure.

mod config_table;
mod policy;

pub use config_table::{ConfigTable, ConfigValue};
pub use policy::{
    ConfigKind, ConfigPolicy, ConfigRule, DEFAULT_EXECUTION_TIMEOUT_SECS, EXECUTION_TIMEOUT_KEY, SETFILE_KEY, Settings,
};
