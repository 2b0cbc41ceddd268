use std::path::PathBuf;

use anyhow::Result;
use mylogger_sdk::{Store, export_logs};

pub fn handle(
    store: &Store,
    folder_path: Option<PathBuf>,
    project_name: Option<String>,
    ids: Option<Vec<i64>>,
) -> Result<()> {
    // Missing filters are a usage notice, not a failure.
    if project_name.is_none() && ids.is_none() {
        println!("Please provide either --project_name or --ids to export logs.");
        return Ok(());
    }

    let folder = match folder_path {
        Some(folder) => folder,
        None => std::env::current_dir()?,
    };

    export_logs(store, &folder, project_name.as_deref(), ids.as_deref())?;
    Ok(())
}
