/// Analysis module
///
/// This module owns everything about the "analysis" side of the app:
/// - The report data model shared with the UI (report.rs)
/// - The canned payload used while no real backend exists (fixture.rs)
/// - The mock service that returns it after a simulated delay (mock.rs)

pub mod fixture;
pub mod mock;
pub mod report;
