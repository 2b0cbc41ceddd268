use anyhow::Result;
use mylogger_sdk::{Store, annotate};

pub fn handle(store: &Store, id: i64, commit: Option<String>, info: Option<String>) -> Result<()> {
    // Missing annotation content is a usage notice, not a failure.
    if commit.is_none() && info.is_none() {
        println!("Please provide at least --commit or --info to update the log entry.");
        return Ok(());
    }

    annotate(store, id, commit.as_deref(), info.as_deref())?;
    println!("Log ID {} updated!", id);
    Ok(())
}
