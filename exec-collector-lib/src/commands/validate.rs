use super::Host;
use super::common::GlobalArgs;
use crate::Result;
use crate::setfile::MetricSet;
use ohno::IntoAppError;
use std::io::Write;

fn validate_setfile_inner(global: &GlobalArgs) -> Result<MetricSet> {
    let settings = global.settings()?;
    MetricSet::load(&settings.setfile).into_app_err_with(|| format!("loading setfile '{}'", settings.setfile.display()))
}

/// Load the setfile and report whether every descriptor in it is usable.
pub fn validate_setfile<H: Host>(host: &mut H, global: &GlobalArgs) -> Result<()> {
    match validate_setfile_inner(global) {
        Ok(set) => {
            let _ = writeln!(
                host.output(),
                "Setfile is valid\nSetfile: {}\nMetrics: {}",
                set.path().display(),
                set.len()
            );

            for descriptor in set.iter().filter(|d| !d.value_type.is_supported()) {
                let _ = writeln!(
                    host.error(),
                    "warning: metric '{}' has unsupported type '{}' and will be reported as a string",
                    descriptor.name,
                    descriptor.value_type
                );
            }

            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Setfile validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
