//! Datasource and workbook API operations

use crate::config::api;
use crate::error::Result;
use crate::tableau::TableauClient;

use super::models::{Datasource, DatasourcesResponse, Workbook, WorkbooksResponse};

impl TableauClient {
    /// Get datasources including their last refresh time
    ///
    /// When `project_id` is given, only datasources of that project are returned.
    pub async fn list_datasources(&self, project_id: Option<&str>) -> Result<Vec<Datasource>> {
        let mut query = vec![
            ("fields", api::ITEM_FIELDS),
            ("include", api::DATASOURCE_INCLUDE),
        ];
        if let Some(id) = project_id {
            query.push(("projectId", id));
        }

        self.fetch_list::<Datasource, DatasourcesResponse>(api::DATASOURCES, &query, "datasources")
            .await
    }

    /// Get workbooks, optionally limited to one project
    pub async fn list_workbooks(&self, project_id: Option<&str>) -> Result<Vec<Workbook>> {
        let mut query = vec![("fields", api::ITEM_FIELDS)];
        if let Some(id) = project_id {
            query.push(("projectId", id));
        }

        self.fetch_list::<Workbook, WorkbooksResponse>(api::WORKBOOKS, &query, "workbooks")
            .await
    }
}
