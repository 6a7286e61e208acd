//! Datasource and workbook data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::tableau::traits::{ListResponse, TableauResource};
use crate::tableau::Pagination;

/// Datasource or workbook as returned by the list endpoints
///
/// Fields not modelled explicitly are kept in `extra` so that any key can be
/// rendered by name.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListableItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_refresh_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Published data connection
pub type Datasource = ListableItem;

/// Published report artifact
pub type Workbook = ListableItem;

impl ListableItem {
    /// Look up a field by its API (camelCase) name
    pub fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "updatedAt" => self.updated_at.clone(),
            "createdAt" => self.created_at.clone(),
            "lastRefreshTime" => self.last_refresh_time.clone(),
            other => match self.extra.get(other)? {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                v => Some(v.to_string()),
            },
        }
    }

    /// Refresh timestamp, preferring `lastRefreshTime` over `lastUpdatedAt`
    pub fn refresh_time(&self) -> Option<String> {
        ["lastRefreshTime", "lastUpdatedAt"]
            .iter()
            .filter_map(|key| self.field(key))
            .find(|value| !value.is_empty())
    }
}

impl TableauResource for ListableItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Response wrapper for `GET /sites/{site}/datasources`
#[derive(Deserialize, Debug, Default)]
pub struct DatasourcesResponse {
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub datasources: Option<DatasourceList>,
}

/// Inner `{"datasource": [...]}` object
#[derive(Deserialize, Debug, Default)]
pub struct DatasourceList {
    #[serde(default)]
    pub datasource: Vec<Datasource>,
}

impl ListResponse<Datasource> for DatasourcesResponse {
    fn into_items(self) -> Vec<Datasource> {
        self.datasources.map(|d| d.datasource).unwrap_or_default()
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

/// Response wrapper for `GET /sites/{site}/workbooks`
#[derive(Deserialize, Debug, Default)]
pub struct WorkbooksResponse {
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub workbooks: Option<WorkbookList>,
}

/// Inner `{"workbook": [...]}` object
#[derive(Deserialize, Debug, Default)]
pub struct WorkbookList {
    #[serde(default)]
    pub workbook: Vec<Workbook>,
}

impl ListResponse<Workbook> for WorkbooksResponse {
    fn into_items(self) -> Vec<Workbook> {
        self.workbooks.map(|w| w.workbook).unwrap_or_default()
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}
