//! Project module - list projects and resolve names to ids

mod api;
mod models;
mod resolver;

pub use models::{Project, ProjectList, ProjectsResponse};
pub use resolver::resolve_project_id;
