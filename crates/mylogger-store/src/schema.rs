use rusqlite::Connection;

use crate::Result;

// NOTE: Schema Lifecycle Rationale
//
// Why plain CREATE TABLE IF NOT EXISTS (no versioned migrations)?
// - Constructing a Store against an existing file must never alter rows
// - The table is append-only; new optional columns would arrive as NULLable
//   additions, and the dynamic-column insert tolerates absent columns via
//   the emergency fallback rather than a migration step
//
// Why one wide table (no normalization)?
// - One capture = one row keeps the fallback path trivially schema-safe
// - The read side only ever filters by project_name and id

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_name TEXT NOT NULL,
            project_version TEXT NOT NULL,
            file_path TEXT NOT NULL,
            line INTEGER NOT NULL,
            function TEXT NOT NULL,
            line_code TEXT NOT NULL,
            exception_type TEXT NOT NULL,
            exception_value TEXT NOT NULL,
            level_name TEXT,
            level_no INTEGER,
            level_icon TEXT,
            process_id INTEGER,
            process_name TEXT,
            thread_id INTEGER,
            thread_name TEXT,
            message TEXT NOT NULL,
            module TEXT NOT NULL,
            name TEXT NOT NULL,
            time INT NOT NULL,
            elapsed FLOAT,
            bug_fix_info TEXT DEFAULT NULL,
            bug_fix_commit TEXT DEFAULT NULL,
            bug_fix_date INT DEFAULT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_logs_project ON logs(project_name);
        "#,
    )?;

    Ok(())
}
