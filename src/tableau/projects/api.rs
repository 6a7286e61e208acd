//! Project API operations

use crate::config::api;
use crate::error::Result;
use crate::tableau::TableauClient;

use super::models::{Project, ProjectsResponse};

impl TableauClient {
    /// Get the projects of the signed-in site (first page only)
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.fetch_list::<Project, ProjectsResponse>(api::PROJECTS, &[], "projects")
            .await
    }
}
