// NOTE: my_logger SDK Rationale
//
// Why a Result-shaped capture boundary (not panics)?
// - The wrapped unit of work is `FnOnce() -> Result<T, E>` or a future of
//   the same shape; a failure branches into the record/write/acknowledge
//   pipeline and re-raise vs swallow becomes an explicit post-capture
//   decision instead of implicit control flow
// - Only the original failure may ever propagate, and only when re-raise is
//   requested; no logging-internal error escapes into the host application
//
// Why is the sync/async split two entry points (not a runtime check)?
// - The call shape is known where the wrapper is applied, so it is selected
//   once at wrap time by which method the caller compiles against
// - The suspended variant moves the blocking SQLite write off the scheduler
//   with spawn_blocking; the blocking variant writes inline

mod error;
mod extract;
mod logger;
mod query;
mod queue;
mod sink;
mod template;

pub use error::{Error, Result};
pub use extract::{ExtractedFields, extract};
pub use logger::{CaptureOptions, Logger, TEST_HARNESS_ENV, test_harness_active};
pub use query::{annotate, counts_by_project, export_logs};
pub use sink::FolderSink;
pub use template::{LOG_ID_PLACEHOLDER, LOG_PATH_PLACEHOLDER, PathStyle};

// Re-exported for one-stop construction of a logger bound to a store.
pub use mylogger_store::Store;
pub use mylogger_types::{LogRecord, ProjectIdentity};
