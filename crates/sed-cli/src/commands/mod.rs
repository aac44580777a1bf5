//! CLI subcommand implementations.

pub mod analyze;
pub mod period;
pub mod summary;
pub mod util;
