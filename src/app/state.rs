// LandSearch - app/state.rs
//
// Application state and command handlers. Holds the Record Store, the
// search form, the current match set, page state, notifications and the
// document viewer. Owned by the eframe::App implementation and touched only
// from the UI thread.
//
// The Presentation Layer calls the `on_*` handlers; each handler catches the
// errors of its own operation and turns them into notifications, so no
// failure leaves the UI in a broken state.

use crate::app::notify::Notifications;
use crate::app::search::SearchScheduler;
use crate::core::filter::{self, Criteria};
use crate::core::model::{DatasetStats, FilterOptions, LandRecord};
use crate::core::paginate::{Page, PageState};
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::error::{ExportError, LoadError, SearchError};
use crate::util::locale;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

// =============================================================================
// Document viewer
// =============================================================================

/// A document reference currently shown in the viewer popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    pub link: String,
    pub title: String,
}

/// Popup showing one record's referenced document.
///
/// Closing clears the reference and hands back the results scroll offset
/// captured when the popup opened, so the caller can restore it.
#[derive(Debug, Default)]
pub struct DocumentViewer {
    document: Option<OpenDocument>,
    saved_scroll: f32,
}

impl DocumentViewer {
    pub fn open(&mut self, link: String, title: String, scroll_offset: f32) {
        tracing::debug!(link = %link, "Document viewer opened");
        self.document = Some(OpenDocument { link, title });
        self.saved_scroll = scroll_offset;
    }

    /// Close the popup. Returns the scroll offset to restore, or `None` if
    /// nothing was open.
    pub fn close(&mut self) -> Option<f32> {
        self.document.take().map(|_| {
            tracing::debug!("Document viewer closed");
            self.saved_scroll
        })
    }

    pub fn is_open(&self) -> bool {
        self.document.is_some()
    }

    pub fn document(&self) -> Option<&OpenDocument> {
        self.document.as_ref()
    }
}

// =============================================================================
// AppState
// =============================================================================

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Validated configuration.
    pub config: AppConfig,

    /// Data file the Record Store is (or will be) loaded from.
    pub data_path: PathBuf,

    /// The Record Store: every loaded record, read-only after load.
    records: Vec<LandRecord>,

    /// Header statistics over `records`.
    pub stats: DatasetStats,

    /// Values offered by the form's selection controls.
    pub options: FilterOptions,

    /// Whether a load is in flight. Search, reset and export are disabled.
    pub loading: bool,

    /// Live form input; becomes the criteria of the next search.
    pub form: Criteria,

    /// Indices into `records` matching the last completed search.
    matches: Vec<usize>,

    /// Page state over `matches`.
    pub page: PageState,

    /// Whether the results section is shown (a search has completed).
    pub show_results: bool,

    /// Delayed search queue.
    pub scheduler: SearchScheduler,

    /// Transient notices.
    pub notifications: Notifications,

    /// Document viewer popup.
    pub viewer: DocumentViewer,

    /// Last known vertical scroll offset of the results area.
    pub results_scroll: f32,

    /// Scroll offset the results area should jump to on the next frame.
    pub restore_scroll: Option<f32>,

    /// Set by the results panel; the shell opens the save dialog.
    pub export_requested: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Non-fatal configuration warnings, shown once at startup.
    pub warnings: Vec<String>,
}

impl AppState {
    /// Create initial state with an empty Record Store.
    pub fn new(config: AppConfig, data_path: PathBuf) -> Self {
        let page = PageState::new(config.page_size);
        let scheduler = SearchScheduler::new(Duration::from_millis(config.search_delay_ms));
        Self {
            config,
            data_path,
            records: Vec::new(),
            stats: DatasetStats::default(),
            options: FilterOptions::default(),
            loading: false,
            form: Criteria::default(),
            matches: Vec::new(),
            page,
            show_results: false,
            scheduler,
            notifications: Notifications::new(),
            viewer: DocumentViewer::default(),
            results_scroll: 0.0,
            restore_scroll: None,
            export_requested: false,
            show_about: false,
            warnings: Vec::new(),
        }
    }

    pub fn records(&self) -> &[LandRecord] {
        &self.records
    }

    // -------------------------------------------------------------------------
    // Load
    // -------------------------------------------------------------------------

    /// A load has begun: the old store is discarded and dependent actions
    /// are disabled until it finishes.
    pub fn on_load_started(&mut self, path: PathBuf) {
        self.data_path = path;
        self.loading = true;
        self.scheduler.cancel();
        self.replace_records(Vec::new());
    }

    pub fn on_load_completed(&mut self, records: Vec<LandRecord>, now: Instant) {
        self.loading = false;
        self.replace_records(records);
        tracing::info!(
            records = self.stats.total_records,
            talukas = self.stats.talukas,
            villages = self.stats.villages,
            "Record store ready"
        );
        self.notifications.success(locale::LOAD_SUCCESS, now);
    }

    /// Load failed: the store stays empty and the user is told why.
    pub fn on_load_failed(&mut self, error: &LoadError, now: Instant) {
        self.loading = false;
        self.replace_records(Vec::new());
        tracing::warn!(error = %error, "Record store left empty");
        self.notifications
            .error(format!("{}{error}", locale::LOAD_FAILURE_PREFIX), now);
    }

    fn replace_records(&mut self, records: Vec<LandRecord>) {
        self.stats = DatasetStats::compute(&records);
        self.options = FilterOptions::from_records(&records);
        self.records = records;
        self.matches.clear();
        self.page.reset(0);
        self.show_results = false;
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Submit a search. It runs after the configured delay, via
    /// [`AppState::poll_search`]. Ignored while loading. Returns whether the
    /// search was queued.
    pub fn on_search(&mut self, criteria: Criteria, now: Instant) -> bool {
        if self.loading {
            tracing::debug!("Search ignored while loading");
            return false;
        }
        self.scheduler.schedule(criteria, now);
        true
    }

    /// Submit the current form contents.
    pub fn submit_form(&mut self, now: Instant) -> bool {
        self.on_search(self.form.clone(), now)
    }

    /// Whether a submitted search is waiting for its delay to elapse.
    pub fn search_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Run the pending search if its delay has elapsed. Returns whether a
    /// search ran (successfully or not).
    pub fn poll_search(&mut self, now: Instant) -> bool {
        match self.scheduler.poll(now) {
            Some(criteria) => {
                // Outcome already reported through notifications.
                let _ = self.run_search(&criteria, now);
                true
            }
            None => false,
        }
    }

    /// Filter the store immediately and install the result as a fresh match
    /// set. On failure the previous results are left untouched.
    pub fn run_search(&mut self, criteria: &Criteria, now: Instant) -> Result<usize, SearchError> {
        self.run_search_with(criteria, now, filter::apply_filters)
    }

    fn run_search_with<F>(
        &mut self,
        criteria: &Criteria,
        now: Instant,
        filter: F,
    ) -> Result<usize, SearchError>
    where
        F: FnOnce(&[LandRecord], &Criteria) -> Vec<usize>,
    {
        let records = &self.records;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| filter(records, criteria)));

        match outcome {
            Ok(matches) => {
                let count = matches.len();
                self.install_matches(matches);
                tracing::info!(matches = count, total = self.records.len(), "Search complete");
                if count > 0 {
                    self.notifications.success(locale::records_found(count), now);
                }
                Ok(count)
            }
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown fault".to_string());
                let error = SearchError::Internal { reason };
                tracing::error!(error = %error, "Search failed; keeping previous results");
                self.notifications.error(locale::SEARCH_FAILURE, now);
                Err(error)
            }
        }
    }

    fn install_matches(&mut self, matches: Vec<usize>) {
        self.page.reset(matches.len());
        self.matches = matches;
        self.show_results = true;
        self.restore_scroll = Some(0.0);
    }

    /// Clear the form, cancel any pending search and hide the results.
    pub fn on_reset(&mut self) {
        self.form = Criteria::default();
        self.scheduler.cancel();
        self.matches.clear();
        self.page.reset(0);
        self.show_results = false;
    }

    /// Change the taluka selection. The village list depends on the taluka,
    /// so the village selection is cleared.
    pub fn set_taluka(&mut self, taluka: String) {
        if self.form.taluka != taluka {
            self.form.taluka = taluka;
            self.form.village.clear();
        }
    }

    /// Villages offered for the currently selected taluka.
    pub fn village_choices(&self) -> Vec<String> {
        self.options.villages_for(&self.form.taluka)
    }

    // -------------------------------------------------------------------------
    // Results and pagination
    // -------------------------------------------------------------------------

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Every record of the current match set, in store order.
    pub fn matched_records(&self) -> Vec<&LandRecord> {
        self.matches.iter().map(|&i| &self.records[i]).collect()
    }

    /// The current page window over the match set (indices into the store).
    pub fn current_page(&self) -> Page<'_, usize> {
        self.page.window(&self.matches)
    }

    /// Records on the current page with their 1-based row numbers.
    pub fn page_rows(&self) -> Vec<(usize, &LandRecord)> {
        let page = self.current_page();
        page.items
            .iter()
            .enumerate()
            .map(|(offset, &idx)| (page.first_row + offset, &self.records[idx]))
            .collect()
    }

    /// Previous (`delta < 0`) or next (`delta > 0`) page navigation.
    pub fn on_page_change(&mut self, delta: isize) -> bool {
        let moved = self.page.step(delta);
        if moved {
            self.restore_scroll = Some(0.0);
            tracing::debug!(page = self.page.current_page(), "Page changed");
        }
        moved
    }

    /// Jump to a numbered page (clamped to the valid range).
    pub fn on_page_jump(&mut self, page: usize) -> usize {
        let before = self.page.current_page();
        let now_on = self.page.jump_to(page);
        if now_on != before {
            self.restore_scroll = Some(0.0);
        }
        now_on
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// Check whether an export can proceed before asking for a destination.
    /// Reports the empty-export failure itself.
    pub fn on_export_requested(&mut self, now: Instant) -> bool {
        if self.matches.is_empty() {
            tracing::info!("Export requested with no results");
            self.notifications.error(locale::EXPORT_NO_RESULTS, now);
            return false;
        }
        true
    }

    /// Export the full match set (not just the current page) to `path`.
    pub fn on_export(&mut self, path: &Path, now: Instant) -> Result<usize, ExportError> {
        let result = fs::write_csv_export(&self.matched_records(), path, self.config.csv_quoting);
        match &result {
            Ok(_) => self.notifications.success(locale::EXPORT_SUCCESS, now),
            Err(ExportError::NoRecords) => {
                self.notifications.error(locale::EXPORT_NO_RESULTS, now)
            }
            Err(e) => {
                tracing::error!(error = %e, "CSV export failed");
                self.notifications
                    .error(format!("{}{e}", locale::EXPORT_FAILURE_PREFIX), now);
            }
        }
        result
    }

    // -------------------------------------------------------------------------
    // Document viewer
    // -------------------------------------------------------------------------

    pub fn open_document(&mut self, record: &LandRecord) {
        self.viewer.open(
            record.download_link.clone(),
            record.document_title(),
            self.results_scroll,
        );
    }

    pub fn close_document(&mut self) {
        if let Some(offset) = self.viewer.close() {
            self.restore_scroll = Some(offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(taluka: &str, village: &str, holder: &str, year: i64) -> LandRecord {
        LandRecord {
            taluka: taluka.to_string(),
            village: village.to_string(),
            holder_name: holder.to_string(),
            year: Some(year),
            survey_no: "1".to_string(),
            land_type: "NA".to_string(),
            download_link: "https://example.org/doc.pdf".to_string(),
        }
    }

    fn loaded_state(n: usize) -> (AppState, Instant) {
        let now = Instant::now();
        let mut state = AppState::new(AppConfig::default(), PathBuf::from("data.json"));
        state.on_load_started(PathBuf::from("data.json"));
        let records = (0..n)
            .map(|i| {
                let taluka = if i % 2 == 0 { "A" } else { "B" };
                make_record(taluka, "X", &format!("Holder {i}"), 2020)
            })
            .collect();
        state.on_load_completed(records, now);
        (state, now)
    }

    #[test]
    fn test_search_waits_for_delay() {
        let (mut state, now) = loaded_state(4);
        assert!(state.on_search(Criteria::default(), now));
        assert!(state.search_pending());
        assert!(!state.poll_search(now));
        assert!(!state.show_results);

        let later = now + Duration::from_millis(state.config.search_delay_ms);
        assert!(state.poll_search(later));
        assert!(state.show_results);
        assert_eq!(state.match_count(), 4);
    }

    #[test]
    fn test_failed_search_keeps_previous_results() {
        let (mut state, now) = loaded_state(25);
        state.run_search(&Criteria::default(), now).unwrap();
        state.on_page_change(1);
        let notices = state.notifications.len();

        let result = state.run_search_with(&Criteria::default(), now, |_, _| {
            panic!("filter fault")
        });
        match result {
            Err(SearchError::Internal { reason }) => assert_eq!(reason, "filter fault"),
            other => panic!("expected Internal error, got {other:?}"),
        }
        assert_eq!(state.match_count(), 25);
        assert_eq!(state.page.current_page(), 2);
        assert!(state.show_results);
        assert_eq!(state.notifications.len(), notices + 1);
        assert_eq!(
            state.notifications.iter().last().map(|n| n.message.as_str()),
            Some(locale::SEARCH_FAILURE)
        );
    }

    #[test]
    fn test_search_ignored_while_loading() {
        let now = Instant::now();
        let mut state = AppState::new(AppConfig::default(), PathBuf::from("data.json"));
        state.on_load_started(PathBuf::from("data.json"));
        assert!(!state.on_search(Criteria::default(), now));
        assert!(!state.search_pending());
    }

    #[test]
    fn test_new_search_resets_page() {
        let (mut state, now) = loaded_state(25);
        state.run_search(&Criteria::default(), now).unwrap();
        state.on_page_change(1);
        state.on_page_change(1);
        assert_eq!(state.page.current_page(), 3);

        let criteria = Criteria {
            taluka: "A".to_string(),
            ..Default::default()
        };
        assert_eq!(state.run_search(&criteria, now).unwrap(), 13);
        assert_eq!(state.page.current_page(), 1);
        assert_eq!(state.page.total_pages(), 2);
    }

    #[test]
    fn test_page_rows_numbering() {
        let (mut state, now) = loaded_state(25);
        state.run_search(&Criteria::default(), now).unwrap();
        state.on_page_jump(3);
        let rows = state.page_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].0, 21);
        assert_eq!(rows[0].1.holder_name, "Holder 20");
    }

    #[test]
    fn test_next_past_last_page_is_noop() {
        let (mut state, now) = loaded_state(25);
        state.run_search(&Criteria::default(), now).unwrap();
        assert!(state.on_page_change(1));
        assert!(state.on_page_change(1));
        assert!(!state.on_page_change(1));
        assert_eq!(state.page.current_page(), 3);
    }

    #[test]
    fn test_export_requires_matches() {
        let (mut state, now) = loaded_state(3);
        let criteria = Criteria {
            taluka: "Z".to_string(),
            ..Default::default()
        };
        assert_eq!(state.run_search(&criteria, now).unwrap(), 0);
        let before = state.notifications.len();
        assert!(!state.on_export_requested(now));
        assert_eq!(state.notifications.len(), before + 1);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        assert!(matches!(
            state.on_export(&path, now),
            Err(ExportError::NoRecords)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_covers_all_pages() {
        let (mut state, now) = loaded_state(25);
        state.run_search(&Criteria::default(), now).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        assert_eq!(state.on_export(&path, now).unwrap(), 25);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 26);
    }

    #[test]
    fn test_reset_clears_form_and_results() {
        let (mut state, now) = loaded_state(5);
        state.form.holder_name = "holder".to_string();
        state.run_search(&state.form.clone(), now).unwrap();
        state.submit_form(now);
        state.on_reset();
        assert_eq!(state.form, Criteria::default());
        assert!(!state.search_pending());
        assert!(!state.show_results);
        assert_eq!(state.match_count(), 0);
    }

    #[test]
    fn test_taluka_change_clears_village() {
        let (mut state, _) = loaded_state(4);
        state.form.village = "X".to_string();
        state.set_taluka("A".to_string());
        assert_eq!(state.form.village, "");
        assert_eq!(state.village_choices(), vec!["X"]);
    }

    #[test]
    fn test_load_failure_leaves_store_empty() {
        let (mut state, now) = loaded_state(4);
        state.on_load_started(PathBuf::from("other.json"));
        let error = LoadError::FileTooLarge {
            path: PathBuf::from("other.json"),
            size: 10,
            max_size: 1,
        };
        state.on_load_failed(&error, now);
        assert!(state.records().is_empty());
        assert!(!state.loading);
        assert_eq!(state.stats.total_records, 0);
    }

    #[test]
    fn test_document_viewer_restores_scroll() {
        let (mut state, _) = loaded_state(1);
        state.results_scroll = 120.0;
        let record = state.records()[0].clone();
        state.open_document(&record);
        assert_eq!(
            state.viewer.document().map(|d| d.title.as_str()),
            Some("Holder 0 - 1")
        );

        state.results_scroll = 0.0;
        state.close_document();
        assert!(!state.viewer.is_open());
        assert_eq!(state.restore_scroll, Some(120.0));

        state.restore_scroll = None;
        state.close_document();
        assert_eq!(state.restore_scroll, None);
    }
}
