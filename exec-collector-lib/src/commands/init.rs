use super::Host;
use crate::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::{IntoAppError, bail};
use std::fs;
use std::io::Write;

/// Sample setfile written by `init`.
pub const DEFAULT_SETFILE: &str = include_str!("default_setfile.json");

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output setfile path
    #[arg(value_name = "PATH", default_value = "setfile.json")]
    pub output: Utf8PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

pub fn init_setfile<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!("'{}' already exists, use --force to overwrite it", args.output);
    }

    fs::write(&args.output, DEFAULT_SETFILE).into_app_err_with(|| format!("writing sample setfile to {}", args.output))?;
    let _ = writeln!(host.output(), "Generated sample setfile: {}", args.output);
    Ok(())
}
