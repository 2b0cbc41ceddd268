use mylogger_types::LogRecord;
use rusqlite::types::Value;

/// Ordered column -> value mapping for a single `logs` row.
///
/// Kept dynamic on purpose: the insert names exactly the columns it was
/// given, so a caller-supplied field the schema does not know about fails at
/// the statement level and is recovered through the emergency path instead
/// of being silently dropped.
#[derive(Debug, Clone, Default)]
pub struct RecordFields(Vec<(String, Value)>);

impl RecordFields {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.0.push((column.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(c, _)| c.as_str())
    }

    /// Render `INSERT INTO logs (...) VALUES (...)` naming exactly the
    /// supplied columns, plus the bind values in matching order.
    pub(crate) fn insert_sql(&self) -> (String, Vec<Value>) {
        let columns: Vec<&str> = self.0.iter().map(|(c, _)| c.as_str()).collect();
        let placeholders: Vec<String> = (1..=self.0.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO logs ({}) VALUES ({})",
            columns.join(", "),
            placeholders.join(", ")
        );
        let values = self.0.iter().map(|(_, v)| v.clone()).collect();
        (sql, values)
    }
}

/// Flatten a [`LogRecord`] into the field map the store inserts.
///
/// `id` is store-assigned and never supplied; remediation columns are only
/// written by the annotation path and are skipped while unset.
pub fn record_fields(record: &LogRecord) -> RecordFields {
    let mut fields = RecordFields::new();
    fields.push("project_name", record.project_name.clone());
    fields.push("project_version", record.project_version.clone());
    fields.push("file_path", record.file_path.clone());
    fields.push("line", record.line);
    fields.push("function", record.function.clone());
    fields.push("line_code", record.line_code.clone());
    fields.push("exception_type", record.exception_type.clone());
    fields.push("exception_value", record.exception_value.clone());
    fields.push("level_name", record.level_name.clone());
    fields.push("level_no", record.level_no);
    fields.push("level_icon", record.level_icon.clone());
    fields.push("process_id", record.process_id);
    fields.push("process_name", record.process_name.clone());
    fields.push("thread_id", record.thread_id);
    fields.push("thread_name", record.thread_name.clone());
    fields.push("message", record.message.clone());
    fields.push("module", record.module.clone());
    fields.push("name", record.name.clone());
    fields.push("time", record.time);
    fields.push("elapsed", record.elapsed);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_sql_names_supplied_columns() {
        let mut fields = RecordFields::new();
        fields.push("project_name", "demo".to_string());
        fields.push("line", 3i64);

        let (sql, values) = fields.insert_sql();
        assert_eq!(sql, "INSERT INTO logs (project_name, line) VALUES (?1, ?2)");
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn empty_map_is_detectable() {
        assert!(RecordFields::new().is_empty());
    }
}
