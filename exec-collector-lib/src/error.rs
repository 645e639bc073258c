use std::path::PathBuf;

/// Failures produced while loading a setfile or collecting metrics.
///
/// Variants are either batch-scoped, which abort an entire collection call, or
/// unit-scoped, which only drop the affected metric from the results. Use
/// [`CollectError::is_batch_scoped`] to tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// The setfile could not be read.
    #[error("could not read setfile '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The setfile exists but holds no bytes.
    #[error("setfile '{}' is empty", path.display())]
    EmptySpecification { path: PathBuf },

    /// The setfile is not a JSON object of metric descriptors.
    #[error("setfile '{}' cannot be decoded: {reason}", path.display())]
    MalformedSpecification { path: PathBuf, reason: String },

    /// A descriptor is missing one of its required fields.
    #[error("incorrect structure of setfile '{}', missing metric {field} for '{name}'", path.display())]
    InvalidDescriptor {
        path: PathBuf,
        name: String,
        field: &'static str,
    },

    /// The external program could not be started or exited unsuccessfully.
    #[error("executing '{executable}' failed: {reason}")]
    Execution {
        executable: String,
        reason: String,
        partial_stdout: Vec<u8>,
    },

    /// Program output does not parse as the declared type.
    #[error("cannot convert '{raw}' to {value_type}: {reason}")]
    Conversion {
        raw: String,
        value_type: String,
        reason: String,
    },

    /// The declared type tag is unknown; the value is kept as a string.
    #[error("unsupported data type '{value_type}', metric saved as string")]
    UnsupportedType { value_type: String },

    /// A requested identifier has the wrong number of segments.
    #[error("incorrect namespace length for '{identifier}': expected {expected} segments, got {actual}")]
    InvalidIdentifier {
        identifier: String,
        expected: usize,
        actual: usize,
    },

    /// A requested identifier names a metric the setfile does not declare.
    #[error("metric '{name}' requested as '{identifier}' is not declared in the setfile")]
    UnknownMetric { identifier: String, name: String },

    /// A request parameter is absent or has the wrong type.
    #[error("incorrect configuration variable '{key}': {reason}")]
    MissingConfiguration { key: String, reason: String },

    /// No metrics were requested.
    #[error("no metrics were requested")]
    EmptyRequest,
}

impl CollectError {
    /// Whether this failure aborts the whole collection call rather than a single metric.
    #[must_use]
    pub const fn is_batch_scoped(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::EmptySpecification { .. }
                | Self::MalformedSpecification { .. }
                | Self::InvalidDescriptor { .. }
                | Self::MissingConfiguration { .. }
                | Self::EmptyRequest
        )
    }

    /// Short classification name, used as a structured log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::EmptySpecification { .. } => "empty_specification",
            Self::MalformedSpecification { .. } => "malformed_specification",
            Self::InvalidDescriptor { .. } => "invalid_descriptor",
            Self::Execution { .. } => "execution",
            Self::Conversion { .. } => "conversion",
            Self::UnsupportedType { .. } => "unsupported_type",
            Self::InvalidIdentifier { .. } => "invalid_identifier",
            Self::UnknownMetric { .. } => "unknown_metric",
            Self::MissingConfiguration { .. } => "missing_configuration",
            Self::EmptyRequest => "empty_request",
        }
    }
}
