//! JSON output formatter

use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::tableau::ListableItem;

/// Serializable report for JSON output
#[derive(Serialize)]
struct JsonReport<'a> {
    datasources: &'a [ListableItem],
    workbooks: &'a [ListableItem],
}

/// Write both lists as one pretty-printed JSON object
pub fn write_json_report<W: Write>(
    out: &mut W,
    datasources: &[ListableItem],
    workbooks: &[ListableItem],
) -> Result<()> {
    let report = JsonReport {
        datasources,
        workbooks,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
