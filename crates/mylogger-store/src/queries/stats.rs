use rusqlite::Connection;

use crate::Result;

/// Log counts per project, one row per distinct `project_name`.
pub fn counts_by_project(conn: &Connection) -> Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT project_name, COUNT(*)
        FROM logs
        GROUP BY project_name
        ORDER BY project_name
        "#,
    )?;

    let counts = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(counts)
}
