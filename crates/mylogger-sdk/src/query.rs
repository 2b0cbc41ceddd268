use std::fs;
use std::io::Write;
use std::path::Path;

use mylogger_store::Store;

use crate::error::Result;

/// Log counts per project, ordered by project name.
pub fn counts_by_project(store: &Store) -> Result<Vec<(String, i64)>> {
    Ok(store.counts_by_project()?)
}

/// Export matching records as one `<id>.log` file per record.
///
/// The filter is a conjunction when both parts are supplied. The target
/// folder is created if absent. No matches is not an error: a notice is
/// printed and the export is empty. Returns the number of files written.
pub fn export_logs(
    store: &Store,
    folder: &Path,
    project_name: Option<&str>,
    ids: Option<&[i64]>,
) -> Result<usize> {
    let records = store.select_records(project_name, ids)?;

    if records.is_empty() {
        println!("No logs found for the given criteria.");
        return Ok(0);
    }

    fs::create_dir_all(folder)?;
    for record in &records {
        let mut file = fs::File::create(folder.join(format!("{}.log", record.id)))?;
        for (key, value) in &record.fields {
            writeln!(file, "{}: {}", key, value)?;
        }
        writeln!(file)?;
    }

    println!("Exported {} logs to {}", records.len(), folder.display());
    Ok(records.len())
}

/// Attach a remediation annotation to a record (thin pass-through to the
/// store; `bug_fix_date` is always stamped).
pub fn annotate(store: &Store, id: i64, commit: Option<&str>, info: Option<&str>) -> Result<()> {
    Ok(store.update_annotation(id, commit, info)?)
}
