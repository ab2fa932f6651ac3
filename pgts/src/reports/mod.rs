//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod generate;
mod init;
mod output;
mod snapshot;

pub use generate::{CatalogStats, GenerateReport, GenerationResult};
pub use init::InitReport;
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Report, TerminalOutput};
pub use snapshot::{SnapshotReport, SnapshotResult};
