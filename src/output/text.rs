//! Line-per-item text output

use std::io::{self, Write};

use crate::tableau::ListableItem;

/// Fields shown for every datasource and workbook
pub const ROW_FIELDS: &[&str] = &["name", "updatedAt", "createdAt"];

/// Printed instead of rows when a list is empty
pub const EMPTY_PLACEHOLDER: &str = "(none found or insufficient permissions)";

/// Render `key=value` pairs joined by `, `
///
/// Missing keys render as an empty value. A refresh timestamp, when present,
/// is appended as `lastRefreshTime=<value>`.
pub fn format_row(item: &ListableItem, fields: &[&str]) -> String {
    let mut parts: Vec<String> = fields
        .iter()
        .map(|key| format!("{}={}", key, item.field(key).unwrap_or_default()))
        .collect();

    if let Some(refreshed) = item.refresh_time() {
        parts.push(format!("lastRefreshTime={}", refreshed));
    }

    parts.join(", ")
}

/// Write a titled section with one indented row per item
pub fn write_text_section<W: Write>(
    out: &mut W,
    title: &str,
    items: &[ListableItem],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}:", title)?;

    if items.is_empty() {
        writeln!(out, "  {}", EMPTY_PLACEHOLDER)?;
    }
    for item in items {
        writeln!(out, "  {}", format_row(item, ROW_FIELDS))?;
    }

    Ok(())
}
