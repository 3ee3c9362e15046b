//! Export liveness: dead exports and exports used only by tests.

pub mod liveness;
pub mod test_files;
pub mod types;

pub use liveness::{find_dead_exports, ExportLiveness};
pub use test_files::TestFileClassifier;
pub use types::{DeadExportFinding, DeadExportKind};
