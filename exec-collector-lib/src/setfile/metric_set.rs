use super::descriptor::{MetricDescriptor, RawDescriptor};
use crate::error::CollectError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const LOG_TARGET: &str = "   setfile";

/// All metrics declared by one setfile, keyed by metric name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricSet {
    path: PathBuf,
    metrics: BTreeMap<String, MetricDescriptor>,
}

impl MetricSet {
    /// Read and validate a setfile.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CollectError> {
        let path = path.as_ref();

        let content = fs::read(path).map_err(|source| CollectError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::from_slice(path, &content)?;
        log::debug!(target: LOG_TARGET, "Loaded {} metric(s) from setfile '{}'", set.len(), path.display());
        Ok(set)
    }

    /// Validate setfile content. `path` is only used for error context.
    pub fn from_slice(path: impl Into<PathBuf>, content: &[u8]) -> Result<Self, CollectError> {
        let path = path.into();

        if content.is_empty() {
            return Err(CollectError::EmptySpecification { path });
        }

        let raw: BTreeMap<String, RawDescriptor> = match serde_json::from_slice(content) {
            Ok(raw) => raw,
            Err(e) => {
                return Err(CollectError::MalformedSpecification {
                    path,
                    reason: e.to_string(),
                });
            }
        };

        let mut metrics = BTreeMap::new();
        for (name, raw_descriptor) in raw {
            match raw_descriptor.into_descriptor(&name) {
                Ok(descriptor) => {
                    let _ = metrics.insert(name, descriptor);
                }
                Err(field) => return Err(CollectError::InvalidDescriptor { path, name, field }),
            }
        }

        Ok(Self { path, metrics })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MetricDescriptor> {
        self.metrics.get(name)
    }

    /// Metric names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricDescriptor> {
        self.metrics.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
