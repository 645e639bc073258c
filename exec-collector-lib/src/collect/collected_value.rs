use super::MetricId;
use crate::convert::TypedValue;
use chrono::{DateTime, Utc};

/// One successfully collected metric.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedValue {
    pub id: MetricId,
    pub value: TypedValue,
    pub timestamp: DateTime<Utc>,
}
