// Thin inspection client over the shared exception store: parameterized
// queries in, console tables and per-record files out. All capture-side
// behavior lives in mylogger-sdk.

mod args;
mod commands;
mod handlers;
pub mod paths;

pub use args::{Cli, Commands};
pub use commands::run;
