//! CLI library components for the rdbspec document host.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
