use anyhow::Result;
use mylogger_sdk::{Store, counts_by_project};

pub fn handle(store: &Store) -> Result<()> {
    let counts = counts_by_project(store)?;

    println!("{:<30} | {:<10}", "Project Name", "Logs Count");
    println!("{}", "-".repeat(45));
    for (project, count) in counts {
        println!("{:<30} | {:<10}", project, count);
    }

    Ok(())
}
