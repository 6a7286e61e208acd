/// Configuration constants for the Tableau REST API
pub mod api {
    /// REST API version used in `<base>/api/<version>`
    pub const VERSION: &str = "3.19";

    /// Header carrying the session token
    pub const AUTH_HEADER: &str = "X-Tableau-Auth";

    /// Sign-in endpoint
    pub const SIGN_IN: &str = "/auth/signin";

    /// Sign-out endpoint
    pub const SIGN_OUT: &str = "/auth/signout";

    /// Sites endpoint (all listing endpoints live below a site)
    pub const SITES: &str = "sites";

    /// Projects endpoint
    pub const PROJECTS: &str = "projects";

    /// Datasources endpoint
    pub const DATASOURCES: &str = "datasources";

    /// Workbooks endpoint
    pub const WORKBOOKS: &str = "workbooks";

    /// Fields requested for datasources and workbooks
    pub const ITEM_FIELDS: &str = "id,name,updatedAt,createdAt";

    /// Extra data requested for datasources only
    pub const DATASOURCE_INCLUDE: &str = "lastRefreshTime";
}

/// Environment variable names backing the CLI flags
pub mod env {
    pub const BASE_URL: &str = "TABLEAU_BASE_URL";
    pub const SITE_CONTENT_URL: &str = "TABLEAU_SITE_CONTENT_URL";
    pub const PAT_NAME: &str = "TABLEAU_PAT_NAME";
    pub const PAT_SECRET: &str = "TABLEAU_PAT_SECRET";
    pub const PROJECT_NAME: &str = "TABLEAU_PROJECT_NAME";
    pub const API_VERSION: &str = "TABLEAU_API_VERSION";
}

/// Default values for CLI
pub mod defaults {
    /// Default Tableau Cloud pod
    pub const BASE_URL: &str = "https://us-west-2b.online.tableau.com";

    /// Default site content URL
    pub const SITE_CONTENT_URL: &str = "foxanalytics";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
