//! Options and helpers shared by every command.

use crate::Result;
use crate::collect::{Collector, DEFAULT_PLUGIN, DEFAULT_VENDOR, Namespace};
use crate::settings::{ConfigPolicy, ConfigTable, EXECUTION_TIMEOUT_KEY, SETFILE_KEY, Settings};
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use std::fs;

const LOG_TARGET: &str = "  commands";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Options accepted by every command
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Vendor segment of metric identifiers
    #[arg(long, value_name = "NAME", default_value = DEFAULT_VENDOR, global = true)]
    pub vendor: String,

    /// Plugin segment of metric identifiers
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PLUGIN, global = true)]
    pub plugin: String,

    /// Path to a TOML configuration file
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Setfile declaring the metrics (overrides `setfile` from the configuration file)
    #[arg(long, value_name = "PATH", env = "EXEC_COLLECTOR_SETFILE", global = true)]
    pub setfile: Option<Utf8PathBuf>,

    /// Seconds after which a slow program is reported (overrides `execution_timeout`)
    #[arg(long, value_name = "SECONDS", env = "EXEC_COLLECTOR_TIMEOUT", global = true)]
    pub timeout: Option<u32>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

impl GlobalArgs {
    pub fn namespace(&self) -> Namespace {
        Namespace::new(&self.vendor, &self.plugin)
    }

    pub fn collector(&self) -> Collector {
        Collector::with_process_runner(self.namespace())
    }

    /// Build the configuration table from the configuration file and command-line overrides.
    pub fn config_table(&self) -> Result<ConfigTable> {
        let mut table = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
                ConfigTable::from_toml(&text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?
            }
            None => ConfigTable::new(),
        };

        if let Some(setfile) = &self.setfile {
            table.insert(SETFILE_KEY, setfile.as_str());
        }

        if let Some(timeout) = self.timeout {
            table.insert(EXECUTION_TIMEOUT_KEY, i64::from(timeout));
        }

        log::debug!(target: LOG_TARGET, "Configuration: {table:?}");
        Ok(table)
    }

    /// Resolve the settings a command runs with.
    pub fn settings(&self) -> Result<Settings> {
        let table = self.config_table()?;
        self.resolve_settings(&table)
    }

    /// Check an already built table against the configuration policy.
    pub fn resolve_settings(&self, table: &ConfigTable) -> Result<Settings> {
        ConfigPolicy::default().resolve(table).into_app_err("invalid configuration")
    }
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when commands run more than once in a process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
