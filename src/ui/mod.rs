/// UI building blocks
///
/// - gallery.rs: the preview thumbnail grid
/// - report.rs: pure rendering of a completed analysis report

pub mod gallery;
pub mod report;
