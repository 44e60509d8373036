//! CLI command handlers.

mod replay;
mod resolve;

pub use replay::run_replay;
pub use resolve::run_resolve;
