// SQLite exception store
// One append-only `logs` table; writes never raise out of the capture path

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Store;
pub use error::{Error, Result};
pub use queries::export::ExportedRecord;
pub use records::{RecordFields, record_fields};
