use crate::Result;
use crate::collect::CollectedValue;
use core::fmt::Write;
use serde_json::json;

#[expect(unused_results, reason = "Map::insert never overwrites here")]
pub fn generate<W: Write>(values: &[CollectedValue], writer: &mut W) -> Result<()> {
    let mut metrics = Vec::with_capacity(values.len());

    for value in super::sorted(values) {
        let mut obj = serde_json::Map::new();
        obj.insert("namespace".to_string(), json!(value.id.to_string()));
        obj.insert("type".to_string(), json!(value.value.value_type().as_str()));
        obj.insert("value".to_string(), value.value.to_json());
        obj.insert("timestamp".to_string(), json!(value.timestamp.to_rfc3339()));
        metrics.push(json!(obj));
    }

    let output = json!({
        "metrics": metrics
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
