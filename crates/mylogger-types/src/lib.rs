// Shared record and identity types for the capture pipeline.
// No I/O here: the store and SDK layers own all side effects.

pub mod record;
mod util;

pub use record::*;
pub use util::*;
