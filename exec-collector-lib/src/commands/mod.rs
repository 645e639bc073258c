//! Command-line interface for exec-collector
//!
//! The `run` function parses command-line arguments using clap and routes to
//! the appropriate command handler:
//!
//! - **types**: enumerate the metrics declared in the setfile
//! - **collect**: collect some or all metrics and print a console or JSON report
//! - **validate**: load the setfile and report problems
//! - **policy**: list the configuration variables and their types
//! - **init**: write a sample setfile
//!
//! Options shared by every command live in the `common` module. The setfile and
//! timeout are resolved from an optional TOML configuration file, overridden by
//! `--setfile` and `--timeout`, and checked against the collector's
//! configuration policy before any command touches the setfile.

mod collect;
mod common;
mod host;
mod init;
mod policy;
mod run;
mod types;
mod validate;

pub use collect::{CollectArgs, ReportFormat, collect_metrics};
pub use common::{ColorMode, GlobalArgs, LogLevel};
pub use host::Host;
pub use init::{DEFAULT_SETFILE, InitArgs, init_setfile};
pub use policy::show_policy;
pub use run::run;
pub use types::list_types;
pub use validate::validate_setfile;
