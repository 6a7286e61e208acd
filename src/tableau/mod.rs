//! Tableau REST API client module
//!
//! This module provides the authenticated session client, the read-only list
//! queries and the refresh check command built on top of them.

mod auth;
mod client;
pub mod commands;
pub mod items;
pub mod projects;
mod session;
pub mod traits;

use serde::{Deserialize, Deserializer};

pub use client::TableauClient;
pub use commands::run_check_command;
pub use items::{Datasource, ListableItem, Workbook};
pub use projects::{resolve_project_id, Project};
pub use session::{PersonalAccessToken, Session};
pub use traits::{ListResponse, TableauResource};

/// Pagination metadata from the Tableau API (shared across resources)
///
/// Tableau sends the counts as JSON strings; numbers are accepted too.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, deserialize_with = "count")]
    pub page_number: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub page_size: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub total_available: Option<u64>,
}

fn count<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => s.parse().ok(),
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        _ => None,
    })
}
