use super::MetricId;
use crate::error::CollectError;

/// Vendor segment used when none is configured.
pub const DEFAULT_VENDOR: &str = "intel";

/// Plugin segment used when none is configured.
pub const DEFAULT_PLUGIN: &str = "exec";

/// The `/vendor/plugin` prefix under which metrics are exposed.
///
/// Identifiers in this namespace have one segment more than the prefix; the
/// last one is the metric name from the setfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    prefix: MetricId,
}

impl Namespace {
    pub fn new(vendor: impl Into<String>, plugin: impl Into<String>) -> Self {
        Self {
            prefix: MetricId::new([vendor.into(), plugin.into()]),
        }
    }

    /// Number of segments every identifier must have.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.prefix.len() + 1
    }

    /// Identifier for a metric name declared in a setfile.
    #[must_use]
    pub fn metric_id(&self, name: &str) -> MetricId {
        MetricId::new(self.prefix.segments().iter().map(String::as_str).chain([name]))
    }

    /// Interpret user input: anything containing `/` is a full identifier,
    /// anything else is a bare metric name placed in this namespace.
    pub fn resolve(&self, input: &str) -> crate::Result<MetricId> {
        if input.contains('/') {
            input.parse()
        } else {
            Ok(self.metric_id(input))
        }
    }

    /// Extract the metric name from an identifier, checking its length.
    pub fn metric_name<'a>(&self, id: &'a MetricId) -> Result<&'a str, CollectError> {
        match id.last() {
            Some(name) if id.len() == self.segment_count() => Ok(name),
            _ => Err(CollectError::InvalidIdentifier {
                identifier: id.to_string(),
                expected: self.segment_count(),
                actual: id.len(),
            }),
        }
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(DEFAULT_VENDOR, DEFAULT_PLUGIN)
    }
}
