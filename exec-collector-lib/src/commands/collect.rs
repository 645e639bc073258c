use super::Host;
use super::common::GlobalArgs;
use crate::Result;
use crate::collect::MetricId;
use crate::reports::{generate_console, generate_json};
use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use ohno::{IntoAppError, bail};
use std::fs;
use std::io::Write;

/// Output format for collected values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Aligned table for terminals
    Console,

    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
pub struct CollectArgs {
    /// Metrics to collect, as bare names or full `/vendor/plugin/name` identifiers.
    /// Collects every declared metric when omitted.
    #[arg(value_name = "METRIC")]
    pub metrics: Vec<String>,

    /// Report format
    #[arg(long, value_name = "FORMAT", default_value = "console")]
    pub format: ReportFormat,

    /// Write the report to a file instead of to the terminal
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// Exit with status code 1 if any requested metric could not be collected
    #[arg(long)]
    pub error_if_incomplete: bool,
}

pub async fn collect_metrics<H: Host>(host: &mut H, global: &GlobalArgs, args: &CollectArgs) -> Result<()> {
    let config = global.config_table()?;
    let collector = global.collector();

    let requested: Vec<MetricId> = if args.metrics.is_empty() {
        let settings = global.resolve_settings(&config)?;
        collector
            .metric_types(&settings.setfile)
            .into_app_err_with(|| format!("enumerating metrics of setfile '{}'", settings.setfile.display()))?
    } else {
        let namespace = collector.namespace();
        args.metrics.iter().map(|m| namespace.resolve(m)).collect::<Result<_>>()?
    };

    let values = if requested.is_empty() {
        Vec::new()
    } else {
        collector
            .collect_with_config(requested.clone(), &config)
            .await
            .into_app_err("collecting metrics")?
    };

    let mut report = String::new();
    match args.format {
        ReportFormat::Console => {
            let use_colors = args.output.is_none() && global.color.use_colors();
            generate_console(&values, use_colors, &mut report)?;
        }
        ReportFormat::Json => {
            generate_json(&values, &mut report)?;
            report.push('\n');
        }
    }

    if let Some(path) = &args.output {
        fs::write(path, &report).into_app_err_with(|| format!("writing report to '{path}'"))?;
    } else {
        write!(host.output(), "{report}")?;
    }

    if values.len() < requested.len() {
        let _ = writeln!(
            host.error(),
            "Collected {} of {} requested metric(s)",
            values.len(),
            requested.len()
        );

        if args.error_if_incomplete {
            bail!("{} requested metric(s) could not be collected", requested.len() - values.len());
        }
    }

    Ok(())
}
