//! Command dispatch logic for exec-collector

use super::common::{GlobalArgs, init_logging};
use super::{CollectArgs, InitArgs, collect_metrics, init_setfile, list_types, show_policy, validate_setfile};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "exec-collector", version, author, long_about = None)]
#[command(about = "Collect metrics by running the programs declared in a setfile")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the identifiers of all metrics declared in the setfile
    Types,
    /// Collect metrics and report their values
    Collect(CollectArgs),
    /// Check that the setfile can be loaded
    Validate,
    /// Show the configuration variables the collector accepts
    Policy,
    /// Generate a sample setfile
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    init_logging(cli.global.log_level);

    match &cli.command {
        Command::Types => list_types(host, &cli.global),
        Command::Collect(collect_args) => collect_metrics(host, &cli.global, collect_args).await,
        Command::Validate => validate_setfile(host, &cli.global),
        Command::Policy => show_policy(host),
        Command::Init(init_args) => init_setfile(host, init_args),
    }
}
