//! Table output formatter

use comfy_table::{presets::NOTHING, Table};
use std::io::{self, Write};

use super::text::EMPTY_PLACEHOLDER;
use crate::tableau::ListableItem;

/// Write a titled ASCII table with one row per item
pub fn write_table_section<W: Write>(
    out: &mut W,
    title: &str,
    items: &[ListableItem],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}:", title)?;

    if items.is_empty() {
        return writeln!(out, "  {}", EMPTY_PLACEHOLDER);
    }

    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec![
        "Name",
        "ID",
        "Updated At",
        "Created At",
        "Last Refresh",
    ]);

    for item in items {
        table.add_row(vec![
            item.name.clone(),
            item.id.clone(),
            item.updated_at.clone().unwrap_or_default(),
            item.created_at.clone().unwrap_or_default(),
            item.refresh_time().unwrap_or_default(),
        ]);
    }

    writeln!(out, "{}", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_empty_prints_placeholder() {
        let mut out = Vec::new();
        write_table_section(&mut out, "Workbooks", &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Workbooks:"));
        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(!text.contains("Last Refresh"));
    }

    #[test]
    fn test_table_with_data() {
        let ds: ListableItem = serde_json::from_value(serde_json::json!({
            "id": "ds-1",
            "name": "Orders",
            "updatedAt": "2024-01-01T00:00:00Z",
            "lastRefreshTime": "2024-01-02T00:00:00Z"
        }))
        .unwrap();

        let mut out = Vec::new();
        write_table_section(&mut out, "Datasources", &[ds]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Last Refresh"));
        assert!(text.contains("Orders"));
        assert!(text.contains("ds-1"));
        assert!(text.contains("2024-01-02T00:00:00Z"));
    }
}
