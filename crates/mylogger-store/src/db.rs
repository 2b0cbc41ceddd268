use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, params, params_from_iter};
use rusqlite::types::Value;

use crate::error::{Error, Result};
use crate::queries;
use crate::records::RecordFields;
use crate::schema;

// NOTE: Write-Path Rationale
//
// Why a path handle instead of a held connection?
// - Every logical operation opens, uses and releases its own connection, so
//   a Store can be cloned across threads (deferred-write worker, async
//   spawn_blocking) without any locking layer of its own
// - Serialization of concurrent inserts is left to SQLite's transaction
//   guarantees; each insert is one atomic transaction
//
// Why does insert() return Option instead of Result?
// - The capture path must never raise into the instrumented application.
//   Insert failures are recovered via the emergency record; a double
//   failure is reported to the operator console and surfaces as None.

/// Durable append-only store of captured exceptions.
#[derive(Debug, Clone)]
pub struct Store {
    db_path: PathBuf,
}

impl Store {
    /// Open (or create) the store at `db_path`, ensuring the schema exists.
    ///
    /// Parent directories are created on demand. Schema creation is
    /// idempotent: reopening an existing file never alters rows. A schema
    /// initialization failure is the one fatal condition of this layer.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let store = Self { db_path };
        store.with_conn(|conn| schema::init_schema(conn))?;
        Ok(store)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Scoped connection: open, run `f` inside a transaction, commit on
    /// success, roll back on any error, close on every exit path.
    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = Connection::open(&self.db_path)?;
        let tx = conn.unchecked_transaction()?;
        let out = f(&tx)?;
        tx.commit()?;
        Ok(out)
    }

    /// Insert one row naming exactly the supplied columns.
    ///
    /// An empty field map is a caller-contract violation: reported to the
    /// operator console, no write attempted, `None` returned. Any store
    /// level failure falls through to [`Store::emergency_insert`]; this
    /// method never returns an error.
    pub fn insert(&self, fields: &RecordFields) -> Option<i64> {
        if fields.is_empty() {
            println!("insert called with an empty record, nothing to write");
            return None;
        }

        let (sql, values) = fields.insert_sql();
        match self.execute_insert(&sql, &values) {
            Ok(id) => Some(id),
            Err(err) => self.emergency_insert(&err.to_string(), &err, &sql, fields),
        }
    }

    fn execute_insert(&self, sql: &str, values: &[Value]) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(sql, params_from_iter(values.iter()))?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Second-chance insert used only when a normal insert fails.
    ///
    /// Builds a minimal record out of guaranteed-valid columns under the
    /// fixed `my_logger` project identity, embedding the original failure in
    /// the message. If this attempt also fails the failure is terminal for
    /// this capture: a critical diagnostic is printed and `None` is
    /// returned, never an error.
    pub fn emergency_insert(
        &self,
        error_description: &str,
        cause: &Error,
        attempted_sql: &str,
        attempted: &RecordFields,
    ) -> Option<i64> {
        // Line column is NOT NULL; fall back to 0 when nothing is extractable.
        let line = mylogger_types::line_from_message(error_description).unwrap_or(0);

        let mut fields = RecordFields::new();
        fields.push("project_name", "my_logger".to_string());
        fields.push("project_version", "unknown".to_string());
        fields.push("file_path", file!().to_string());
        fields.push("line", line);
        fields.push("function", "insert".to_string());
        fields.push("line_code", String::new());
        fields.push("exception_type", cause.kind().to_string());
        fields.push("exception_value", cause.to_string());
        fields.push(
            "message",
            format!("Failed to insert log: {}", error_description),
        );
        fields.push("module", module_path!().to_string());
        fields.push("name", "my_logger".to_string());
        fields.push("time", chrono::Utc::now().timestamp() as f64);

        let (sql, values) = fields.insert_sql();
        match self.execute_insert(&sql, &values) {
            Ok(id) => {
                println!("Database error: {}", error_description);
                println!("sql attempted: {}", attempted_sql);
                println!("data attempted: {:?}", attempted);
                println!("a log will be created to the my_logger project");
                Some(id)
            }
            Err(critical) => {
                println!("Critical failure: unable to log to the database. {}", critical);
                None
            }
        }
    }

    /// Attach remediation metadata to an existing record.
    ///
    /// `bug_fix_date` is always stamped; an id with no matching row is a
    /// no-op the caller is expected to pre-validate when it matters.
    pub fn update_annotation(
        &self,
        id: i64,
        commit: Option<&str>,
        info: Option<&str>,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE logs SET bug_fix_commit = ?1, bug_fix_info = ?2, \
                 bug_fix_date = CURRENT_TIMESTAMP WHERE id = ?3",
                params![commit, info, id],
            )?;
            Ok(())
        })
    }

    /// One `(project_name, count)` pair per distinct project.
    pub fn counts_by_project(&self) -> Result<Vec<(String, i64)>> {
        self.with_conn(queries::stats::counts_by_project)
    }

    /// Full records matching the conjunction of the supplied filters.
    pub fn select_records(
        &self,
        project_name: Option<&str>,
        ids: Option<&[i64]>,
    ) -> Result<Vec<queries::export::ExportedRecord>> {
        self.with_conn(|conn| queries::export::select_records(conn, project_name, ids))
    }
}
