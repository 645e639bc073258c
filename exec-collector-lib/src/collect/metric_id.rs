use core::fmt;
use core::str::FromStr;
use ohno::bail;

/// A namespaced metric identifier such as `/intel/exec/uptime`.
///
/// Identifiers are kept as received, so one with the wrong number of segments
/// can still be represented and rejected later by the collector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetricId {
    segments: Vec<String>,
}

impl MetricId {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final segment, which names the metric within its namespace.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for MetricId {
    type Err = ohno::AppError;

    /// Parse `/a/b/c` (the leading slash is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix('/').unwrap_or(s);
        if trimmed.is_empty() {
            bail!("metric identifier '{s}' has no segments");
        }

        Ok(Self::new(trimmed.split('/')))
    }
}
