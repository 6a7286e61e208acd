//! Project data models

use serde::Deserialize;

use crate::tableau::traits::{ListResponse, TableauResource};
use crate::tableau::Pagination;

/// Response wrapper for `GET /sites/{site}/projects`
#[derive(Deserialize, Debug, Default)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub projects: Option<ProjectList>,
}

/// Inner `{"project": [...]}` object
#[derive(Deserialize, Debug, Default)]
pub struct ProjectList {
    #[serde(default)]
    pub project: Vec<Project>,
}

/// Project data from Tableau API
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl TableauResource for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl ListResponse<Project> for ProjectsResponse {
    fn into_items(self) -> Vec<Project> {
        self.projects.map(|p| p.project).unwrap_or_default()
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}
