use rusqlite::Connection;
use rusqlite::types::{Value, ValueRef};

use crate::Result;

/// One fully materialized row, every column rendered for display.
///
/// Columns are read dynamically off the statement so the export surface
/// stays in lockstep with the schema without a hand-maintained field list.
#[derive(Debug, Clone)]
pub struct ExportedRecord {
    pub id: i64,
    /// `(column, rendered value)` pairs in schema order.
    pub fields: Vec<(String, String)>,
}

/// Select full records filtered by project and/or an explicit id set.
///
/// Both filters together form a conjunction. Supplying neither returns every
/// row; requiring at least one filter is the calling CLI's contract, not
/// this layer's.
pub fn select_records(
    conn: &Connection,
    project_name: Option<&str>,
    ids: Option<&[i64]>,
) -> Result<Vec<ExportedRecord>> {
    let mut conditions: Vec<String> = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    if let Some(project) = project_name {
        conditions.push(format!("project_name = ?{}", params.len() + 1));
        params.push(Value::from(project.to_string()));
    }
    if let Some(ids) = ids {
        let placeholders: Vec<String> = ids
            .iter()
            .enumerate()
            .map(|(i, _)| format!("?{}", params.len() + i + 1))
            .collect();
        conditions.push(format!("id IN ({})", placeholders.join(", ")));
        params.extend(ids.iter().map(|id| Value::from(*id)));
    }

    let mut sql = String::from("SELECT * FROM logs");
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let column_names: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

    let mut records = Vec::new();
    let mut rows = stmt.query(rusqlite::params_from_iter(params.iter()))?;
    while let Some(row) = rows.next()? {
        let mut id = 0i64;
        let mut fields = Vec::with_capacity(column_names.len());
        for (i, column) in column_names.iter().enumerate() {
            let value = row.get_ref(i)?;
            if column == "id" {
                id = row.get(i)?;
            }
            fields.push((column.clone(), render_value(value)));
        }
        records.push(ExportedRecord { id, fields });
    }

    Ok(records)
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "None".to_string(),
        ValueRef::Integer(n) => n.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    }
}
