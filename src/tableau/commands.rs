//! Refresh check command

use futures::FutureExt;
use log::{debug, info};
use std::future::Future;
use std::io::Write;
use std::panic::AssertUnwindSafe;

use crate::cli::{Cli, OutputFormat};
use crate::error::Result;
use crate::output::{write_json_report, write_table_section, write_text_section};
use crate::tableau::{resolve_project_id, TableauClient};
use crate::ui::{create_spinner, finish_spinner};

/// Sign in, list datasources and workbooks, and always sign out
///
/// Sign-out is attempted after the listing finishes, fails, or panics. Its
/// own outcome never replaces the listing's result.
pub async fn run_check_command<W: Write>(
    client: &mut TableauClient,
    cli: &Cli,
    out: &mut W,
) -> Result<()> {
    let outcome = AssertUnwindSafe(check(client, cli, out))
        .catch_unwind()
        .await;

    client.sign_out().await;

    match outcome {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

async fn check<W: Write>(client: &mut TableauClient, cli: &Cli, out: &mut W) -> Result<()> {
    let text = cli.output == OutputFormat::Text;

    if text {
        writeln!(
            out,
            "Signing in to {} (site '{}')...",
            client.base_url(),
            client.site_content_url()
        )?;
    }
    with_spinner("Signing in...", cli.batch, client.sign_in()).await?;
    if text {
        writeln!(out, "Signed in.")?;
    }

    let project_name = cli.project_name.as_deref();
    let project_id = with_spinner(
        "Resolving project...",
        cli.batch,
        resolve_project_id(client, project_name),
    )
    .await?;

    if let (Some(id), Some(name)) = (&project_id, project_name) {
        if text {
            writeln!(out, "Filtering by project: {} ({})", name, id)?;
        } else {
            info!("Filtering by project: {} ({})", name, id);
        }
    }

    let datasources = with_spinner(
        "Fetching datasources...",
        cli.batch,
        client.list_datasources(project_id.as_deref()),
    )
    .await?;
    if text {
        write_text_section(out, "Datasources", &datasources)?;
    }

    let workbooks = with_spinner(
        "Fetching workbooks...",
        cli.batch,
        client.list_workbooks(project_id.as_deref()),
    )
    .await?;

    debug!(
        "Listed {} datasources and {} workbooks",
        datasources.len(),
        workbooks.len()
    );

    match cli.output {
        OutputFormat::Text => write_text_section(out, "Workbooks", &workbooks)?,
        OutputFormat::Table => {
            write_table_section(out, "Datasources", &datasources)?;
            write_table_section(out, "Workbooks", &workbooks)?;
        }
        OutputFormat::Json => write_json_report(out, &datasources, &workbooks)?,
    }

    Ok(())
}

/// Await one network step with a spinner shown in interactive mode
async fn with_spinner<T, F>(message: &str, batch: bool, step: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let spinner = create_spinner(message, batch);
    let result = step.await;
    finish_spinner(spinner);
    result
}
