//! tabcheck - Check Tableau datasource and workbook refresh times
//!
//! A read-only diagnostic CLI for the Tableau REST API.
//!
//! # Features
//!
//! - Sign in with a personal access token (always signed out afterwards)
//! - List datasources with their last refresh time
//! - List workbooks with their last update time
//! - Filter both lists by project name
//! - Multiple output formats (text, table, JSON)
//!
//! # Example
//!
//! ```bash
//! export TABLEAU_PAT_NAME="my-pat"
//! export TABLEAU_PAT_SECRET="..."
//!
//! # Check the default site
//! tabcheck --site-content-url finance
//!
//! # Only content of one project, as a table
//! tabcheck --project-name Sales -o table
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod tableau;
pub mod ui;

pub use cli::{Cli, OutputFormat};
pub use error::{Result, TableauError};
pub use output::format_row;
pub use tableau::{
    resolve_project_id, run_check_command, Datasource, ListableItem, PersonalAccessToken,
    Project, Session, TableauClient, TableauResource, Workbook,
};
