use super::Host;
use crate::Result;
use crate::settings::ConfigPolicy;
use std::io::Write;

/// Print the configuration variables the collector accepts.
pub fn show_policy<H: Host>(host: &mut H) -> Result<()> {
    let policy = ConfigPolicy::default();
    let mut out = host.output();

    for rule in policy.rules() {
        let requirement = if rule.required { "required" } else { "optional" };
        write!(out, "{} ({}, {requirement})", rule.key, rule.kind.name())?;
        if let Some(default) = &rule.default {
            write!(out, " default={default}")?;
        }
        writeln!(out, ": {}", rule.description)?;
    }

    Ok(())
}
