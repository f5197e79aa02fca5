//! CLI library components for the menu ingestion tool.

pub mod logging;
pub mod pipeline;
