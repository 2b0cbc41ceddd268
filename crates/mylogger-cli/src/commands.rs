use anyhow::Result;
use mylogger_sdk::Store;

use crate::args::{Cli, Commands};
use crate::handlers;
use crate::paths;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = paths::resolve_data_dir()?;
    let db_path = paths::resolve_db_path(&data_dir, cli.db_path.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&db_path);
        return Ok(());
    };

    if !db_path.exists() {
        anyhow::bail!(
            "Database file not found at {}. Please provide a valid path using --db-path.",
            db_path.display()
        );
    }

    let store = Store::open(&db_path)?;

    match command {
        Commands::Status => handlers::status::handle(&store),
        Commands::Export {
            folder_path,
            project_name,
            ids,
        } => handlers::export::handle(&store, folder_path, project_name, ids),
        Commands::Resolve { id, commit, info } => {
            handlers::resolve::handle(&store, id, commit, info)
        }
    }
}

fn show_guidance(db_path: &std::path::Path) {
    println!("my_logger - Captured exception log manager\n");

    if db_path.exists() {
        println!("Quick commands:");
        println!("  my_logger status                  # Log counts per project");
        println!("  my_logger export --project_name X # Export a project's logs");
        println!("  my_logger resolve --id N --commit C\n");
    } else {
        println!("No log database yet at {}.", db_path.display());
        println!("Logs appear once an instrumented application captures its first exception,");
        println!("or point at an existing store with --db-path.\n");
    }

    println!("For more commands:");
    println!("  my_logger --help");
}
