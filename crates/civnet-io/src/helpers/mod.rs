pub mod diagnostics;
pub mod network_builder;

pub use diagnostics::{ImportDiagnostics, ImportResult, ImportStats};
pub use network_builder::{AddResult, EdgeInput, NetworkBuilder};
