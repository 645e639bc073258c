//! Execution of the programs behind each metric
//!
//! [`CommandRunner`] is the seam between the collector and the operating
//! system. [`ProcessRunner`] spawns real child processes; tests substitute
//! deterministic implementations.

mod process_runner;

pub use process_runner::ProcessRunner;

use crate::error::CollectError;
use futures::future::BoxFuture;

/// Runs an executable and captures its standard output.
pub trait CommandRunner: Send + Sync {
    /// Run `executable` with `args` and return everything it wrote to stdout.
    ///
    /// A program that cannot be started or exits unsuccessfully yields
    /// [`CollectError::Execution`]. Only the calling task waits for the program.
    fn run<'a>(&'a self, executable: &'a str, args: &'a [String]) -> BoxFuture<'a, Result<Vec<u8>, CollectError>>;
}
