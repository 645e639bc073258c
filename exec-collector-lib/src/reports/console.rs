use crate::Result;
use crate::collect::CollectedValue;
use crate::convert::TypedValue;
use core::fmt::Write;
use owo_colors::OwoColorize;

const ID_HEADER: &str = "METRIC";
const TYPE_HEADER: &str = "TYPE";
const VALUE_HEADER: &str = "VALUE";

/// Write the values as a table with one row per metric.
///
/// String values are escaped so embedded newlines keep each row on one line.
pub fn generate<W: Write>(values: &[CollectedValue], use_colors: bool, writer: &mut W) -> Result<()> {
    if values.is_empty() {
        writeln!(writer, "No metrics collected")?;
        return Ok(());
    }

    let rows: Vec<_> = super::sorted(values)
        .into_iter()
        .map(|v| (v.id.to_string(), v.value.value_type().to_string(), format_value(&v.value)))
        .collect();

    let id_width = rows.iter().map(|(id, _, _)| id.len()).chain([ID_HEADER.len()]).max().unwrap_or(0);
    let type_width = rows.iter().map(|(_, t, _)| t.len()).chain([TYPE_HEADER.len()]).max().unwrap_or(0);

    // Padding is applied before coloring so escape codes don't skew alignment
    let id_header = format!("{ID_HEADER:<id_width$}");
    let type_header = format!("{TYPE_HEADER:<type_width$}");
    if use_colors {
        writeln!(writer, "{}  {}  {}", id_header.bold(), type_header.bold(), VALUE_HEADER.bold())?;
    } else {
        writeln!(writer, "{id_header}  {type_header}  {VALUE_HEADER}")?;
    }

    for (id, value_type, value) in &rows {
        let id = format!("{id:<id_width$}");
        let value_type = format!("{value_type:<type_width$}");
        if use_colors {
            writeln!(writer, "{}  {}  {value}", id.green(), value_type.cyan())?;
        } else {
            writeln!(writer, "{id}  {value_type}  {value}")?;
        }
    }

    Ok(())
}

fn format_value(value: &TypedValue) -> String {
    match value {
        TypedValue::String(s) => s.escape_debug().to_string(),
        other => other.to_string(),
    }
}
