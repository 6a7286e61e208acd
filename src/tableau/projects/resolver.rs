//! Project resolution utilities
//!
//! Turns an optional project name into a project id used to filter listings.

use log::debug;

use crate::error::{Result, TableauError};
use crate::tableau::traits::TableauResource;
use crate::tableau::TableauClient;

/// Resolve a project name to its id
///
/// Returns `Ok(None)` without touching the network when no name (or an empty
/// name) is given. An unknown name is a `NotFound` error rather than an
/// unfiltered listing.
///
/// # Arguments
/// * `client` - Signed-in Tableau client
/// * `project_name` - Exact, case-sensitive project name
pub async fn resolve_project_id(
    client: &TableauClient,
    project_name: Option<&str>,
) -> Result<Option<String>> {
    let Some(name) = project_name.filter(|n| !n.is_empty()) else {
        return Ok(None);
    };

    debug!("Resolving project by name '{}'", name);
    let projects = client.list_projects().await?;

    match projects.into_iter().find(|p| p.matches_name(name)) {
        Some(project) => {
            debug!("Project '{}' resolved to {}", name, project.id);
            Ok(Some(project.id))
        }
        None => Err(TableauError::NotFound(format!(
            "Project '{}' not found or inaccessible.",
            name
        ))),
    }
}
