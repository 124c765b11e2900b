/// Upload/preview/analysis session state machine
///
/// This struct is the entire data model of the page: the selected image
/// files, their positionally-aligned previews, the (nullable) analysis
/// report, and the analyzing flag. It is pure and synchronous; all async
/// work (thumbnail decoding, the mock analysis delay) happens outside and
/// reports back through `previews_loaded` / `finish_analysis`.
///
/// Every selection bumps a sequence number. Async completions carry the
/// sequence they were started under, and stale ones are dropped, so a
/// pending decode or analysis run can never overwrite state that belongs
/// to a newer selection.

use std::path::PathBuf;

use iced::widget::image;

use crate::analysis::report::AnalysisReport;

/// One entry in the preview list, positionally aligned with the image set.
///
/// Invariant: `previews.len() == images.len()` at all times after a
/// selection event, which is why decode failures become a `Failed` entry
/// instead of being dropped.
#[derive(Debug, Clone)]
pub enum Preview {
    /// Thumbnail decode still running in the background
    Loading,
    /// Decoded thumbnail ready to display
    Ready(image::Handle),
    /// File could not be decoded as an image (kept so positions line up)
    Failed(String),
}

/// All transient state for one page view. Nothing here is persisted;
/// it is discarded when the window closes.
#[derive(Debug, Default)]
pub struct Session {
    /// Ordered set of picked files, replaced wholesale on each selection
    images: Vec<PathBuf>,
    /// One preview per picked file, same order
    previews: Vec<Preview>,
    /// Present only after an analysis run completes
    report: Option<AnalysisReport>,
    /// True only during the simulated processing window
    analyzing: bool,
    /// Bumped on every selection; stale async completions are dropped
    seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the image set with a new selection.
    ///
    /// Clears any existing report immediately, resets the preview list to
    /// `Loading` placeholders of matching length, and cancels any pending
    /// analysis run or preview batch. Returns the sequence number the
    /// caller must attach to the background decode for this batch.
    pub fn select_files(&mut self, files: Vec<PathBuf>) -> u64 {
        self.previews = files.iter().map(|_| Preview::Loading).collect();
        self.images = files;
        self.report = None;
        self.analyzing = false;
        self.seq += 1;
        self.seq
    }

    /// Install a decoded preview batch. Batches from a superseded
    /// selection are dropped; the placeholder list already matches the
    /// current selection.
    pub fn previews_loaded(&mut self, seq: u64, previews: Vec<Preview>) {
        if seq != self.seq {
            return;
        }

        debug_assert_eq!(previews.len(), self.images.len());
        self.previews = previews;
    }

    /// Start an analysis run.
    ///
    /// Returns `None` (no-op) if the image set is empty or a run is
    /// already pending; otherwise sets the analyzing flag and returns the
    /// run token to attach to the completion.
    pub fn begin_analysis(&mut self) -> Option<u64> {
        if self.images.is_empty() || self.analyzing {
            return None;
        }

        self.analyzing = true;
        Some(self.seq)
    }

    /// Complete an analysis run. Completions for a superseded selection
    /// are dropped (the flag was already reset by `select_files`).
    pub fn finish_analysis(&mut self, seq: u64, report: AnalysisReport) {
        if seq != self.seq {
            return;
        }

        self.analyzing = false;
        self.report = Some(report);
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn previews(&self) -> &[Preview] {
        &self.previews
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Whether the analyze control should be enabled
    pub fn can_analyze(&self) -> bool {
        !self.images.is_empty() && !self.analyzing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixture;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_selection_creates_matching_previews() {
        let mut session = Session::new();

        session.select_files(paths(&["a.jpg", "b.jpg", "c.jpg"]));

        assert_eq!(session.images().len(), 3);
        assert_eq!(session.previews().len(), 3);
        assert!(session
            .previews()
            .iter()
            .all(|p| matches!(p, Preview::Loading)));
    }

    #[test]
    fn test_empty_selection_is_valid() {
        let mut session = Session::new();

        session.select_files(paths(&["a.jpg"]));
        session.select_files(Vec::new());

        assert!(session.images().is_empty());
        assert!(session.previews().is_empty());
        assert!(!session.can_analyze());
    }

    #[test]
    fn test_selection_replaces_previous_set() {
        let mut session = Session::new();

        session.select_files(paths(&["a.jpg", "b.jpg", "c.jpg"]));
        session.select_files(paths(&["d.jpg", "e.jpg"]));

        assert_eq!(session.images(), paths(&["d.jpg", "e.jpg"]).as_slice());
        assert_eq!(session.previews().len(), 2);
    }

    #[test]
    fn test_stale_preview_batch_is_dropped() {
        let mut session = Session::new();

        let old_seq = session.select_files(paths(&["a.jpg", "b.jpg"]));
        session.select_files(paths(&["c.jpg"]));

        session.previews_loaded(
            old_seq,
            vec![Preview::Failed("x".into()), Preview::Failed("y".into())],
        );

        // The stale two-entry batch must not replace the one-entry list
        assert_eq!(session.previews().len(), 1);
        assert!(matches!(session.previews()[0], Preview::Loading));
    }

    #[test]
    fn test_analysis_requires_images() {
        let mut session = Session::new();

        assert_eq!(session.begin_analysis(), None);
        assert!(!session.is_analyzing());
        assert!(session.report().is_none());
    }

    #[test]
    fn test_analysis_lifecycle() {
        let mut session = Session::new();

        session.select_files(paths(&["a.jpg"]));
        let run = session.begin_analysis().unwrap();
        assert!(session.is_analyzing());
        assert!(!session.can_analyze());

        session.finish_analysis(run, fixture::roller_skating_report());
        assert!(!session.is_analyzing());

        let report = session.report().unwrap();
        assert_eq!(report.observations.len(), 5);
        assert_eq!(report.reinforcement_patterns.len(), 5);
        assert_eq!(report.recommendations.len(), 6);
    }

    #[test]
    fn test_retrigger_while_pending_is_rejected() {
        let mut session = Session::new();

        session.select_files(paths(&["a.jpg"]));
        let run = session.begin_analysis().unwrap();

        // Second trigger while pending must not start another run
        assert_eq!(session.begin_analysis(), None);

        session.finish_analysis(run, fixture::roller_skating_report());
        assert!(session.report().is_some());
        assert!(!session.is_analyzing());
    }

    #[test]
    fn test_new_selection_clears_report() {
        let mut session = Session::new();

        session.select_files(paths(&["a.jpg"]));
        let run = session.begin_analysis().unwrap();
        session.finish_analysis(run, fixture::roller_skating_report());
        assert!(session.report().is_some());

        session.select_files(paths(&["b.jpg"]));

        // Cleared immediately, before any new trigger
        assert!(session.report().is_none());
    }

    #[test]
    fn test_stale_analysis_completion_is_dropped() {
        let mut session = Session::new();

        session.select_files(paths(&["a.jpg"]));
        let run = session.begin_analysis().unwrap();

        // Selecting new files cancels the pending run
        session.select_files(paths(&["b.jpg"]));
        assert!(!session.is_analyzing());

        session.finish_analysis(run, fixture::roller_skating_report());

        assert!(session.report().is_none());
        assert!(!session.is_analyzing());
    }
}
