/// Mock analysis service
///
/// Stands in for the real vision/transcription backend that does not exist
/// yet. The contract is the one a production service must honor: take the
/// selected frames, come back later with an `AnalysisReport`. The mock
/// "later" is a fixed delay; the report is the canned fixture and ignores
/// the frame content entirely.

use std::path::PathBuf;
use std::time::Duration;

use super::fixture;
use super::report::AnalysisReport;

/// Simulated processing time before the result appears
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(2000);

/// Run the simulated analysis over the selected frames.
///
/// Sleeps for `ANALYSIS_DELAY`, then returns the constant report. The
/// `frames` argument is unused by the mock but kept in the signature so a
/// real backend can slot in without touching any caller.
pub async fn analyze(frames: Vec<PathBuf>) -> AnalysisReport {
    println!("🧠 Simulating analysis of {} frame(s)...", frames.len());

    tokio::time::sleep(ANALYSIS_DELAY).await;

    fixture::roller_skating_report()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_analyze_returns_fixture_after_delay() {
        let start = tokio::time::Instant::now();

        let report = analyze(vec![PathBuf::from("frame1.jpg")]).await;

        // Paused clock: the sleep advances logical time by exactly the delay
        assert!(start.elapsed() >= ANALYSIS_DELAY);
        assert_eq!(report, fixture::roller_skating_report());
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_ignores_frame_content() {
        let one = analyze(vec![PathBuf::from("a.png")]).await;
        let many = analyze(vec![
            PathBuf::from("b.png"),
            PathBuf::from("c.png"),
            PathBuf::from("d.png"),
        ])
        .await;

        assert_eq!(one, many);
    }
}
