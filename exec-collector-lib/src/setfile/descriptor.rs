use crate::convert::ValueType;
use serde::Deserialize;

/// How to collect one metric: the program to run, its arguments, and the
/// type its output decodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub name: String,
    pub executable: String,
    pub arguments: Vec<String>,
    pub value_type: ValueType,
}

/// A descriptor as written in a setfile, before validation.
///
/// Every field is optional here so a missing `exec` or `type` can be reported
/// against the metric's name instead of as a generic decode error.
#[derive(Debug, Default, Deserialize)]
pub(super) struct RawDescriptor {
    #[serde(default, alias = "Exec")]
    pub exec: Option<String>,

    #[serde(default, rename = "type", alias = "Type")]
    pub value_type: Option<String>,

    #[serde(default, alias = "Args")]
    pub args: Option<Vec<String>>,
}

impl RawDescriptor {
    /// Validate the raw fields, returning the name of the first missing field on failure.
    pub(super) fn into_descriptor(self, name: &str) -> Result<MetricDescriptor, &'static str> {
        let value_type = self.value_type.filter(|t| !t.is_empty()).ok_or("type")?;
        let executable = self.exec.filter(|e| !e.is_empty()).ok_or("exec")?;

        Ok(MetricDescriptor {
            name: name.to_string(),
            executable,
            arguments: self.args.unwrap_or_default(),
            value_type: ValueType::parse(&value_type),
        })
    }
}
