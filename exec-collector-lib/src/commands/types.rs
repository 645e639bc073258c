use super::Host;
use super::common::GlobalArgs;
use crate::Result;
use ohno::IntoAppError;
use std::io::Write;

/// Print the identifier of every metric the setfile declares, one per line.
pub fn list_types<H: Host>(host: &mut H, global: &GlobalArgs) -> Result<()> {
    let settings = global.settings()?;
    let ids = global
        .collector()
        .metric_types(&settings.setfile)
        .into_app_err_with(|| format!("enumerating metrics of setfile '{}'", settings.setfile.display()))?;

    let mut out = host.output();
    for id in ids {
        writeln!(out, "{id}")?;
    }

    Ok(())
}
