//! Output formatting module
//!
//! Handles the console formats: text lines, table, JSON

mod json;
mod table;
mod text;

pub use self::json::write_json_report;
pub use self::table::write_table_section;
pub use self::text::{format_row, write_text_section, EMPTY_PLACEHOLDER, ROW_FIELDS};
