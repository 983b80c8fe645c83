// src/app.rs

use crate::core::export::export_result;
use crate::core::models::ScanResult;
use crate::core::scanner::ScanRequest;
use ratatui::widgets::{ListState, ScrollbarState};
use std::path::Path;
use std::time::{Duration, Instant};
use strum::{Display, EnumIter};
use tracing::{info, warn};

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Maximum number of log lines kept for the log panel.
pub const LOG_TAIL_LINES: usize = 200;

const SCORE_ANIMATION_STEP: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Page {
    Scanner,
    Learn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub created: Instant,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub page: Page,
    pub input: String,
    pub scan_result: Option<ScanResult>,
    /// Score shown by the gauge, counts up to the real score after a scan.
    pub displayed_score: u8,
    pub spinner_frame: usize,
    pub threat_list_state: ListState,
    pub scroll_offset: usize,
    /// Number of lines on the Learn page, set by its renderer.
    pub learn_content_length: usize,
    pub learn_scroll_state: ScrollbarState,
    pub notification: Option<Notification>,
    pub show_logs: bool,
    pub log_content: Vec<String>,
    pub log_horizontal_scroll: usize,
    pub log_horizontal_scroll_state: ScrollbarState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            page: Page::Scanner,
            input: String::new(),
            scan_result: None,
            displayed_score: 0,
            spinner_frame: 0,
            threat_list_state: ListState::default(),
            scroll_offset: 0,
            learn_content_length: 0,
            learn_scroll_state: ScrollbarState::default(),
            notification: None,
            show_logs: false,
            log_content: Vec::new(),
            log_horizontal_scroll: 0,
            log_horizontal_scroll_state: ScrollbarState::default(),
        }
    }

    /// Whether keystrokes should go into the URL box.
    pub fn accepts_input(&self) -> bool {
        self.page == Page::Scanner && self.state != AppState::Scanning
    }

    /// Validates the current input and moves to `Scanning`.
    ///
    /// Returns the validated request, or `None` if a scan is already running or
    /// the input was rejected. A rejection only raises a notification: the
    /// state and any previous result stay as they were.
    pub fn submit(&mut self) -> Option<ScanRequest> {
        if self.state == AppState::Scanning {
            return None;
        }
        match ScanRequest::new(&self.input) {
            Ok(request) => {
                info!(url = %self.input, "Scan started.");
                self.state = AppState::Scanning;
                self.spinner_frame = 0;
                Some(request)
            }
            Err(e) => {
                warn!(input = %self.input, error = %e, "Scan request rejected.");
                self.notify(NotificationKind::Error, "Error", e.to_string());
                None
            }
        }
    }

    pub fn complete(&mut self, result: ScanResult) {
        let kind = if result.status.is_safe() {
            NotificationKind::Info
        } else {
            NotificationKind::Error
        };
        self.notify(
            kind,
            "Scan Complete",
            format!("Security score: {}/100", result.score),
        );
        self.threat_list_state = ListState::default();
        if result.has_threats() {
            self.threat_list_state.select(Some(0));
        }
        self.displayed_score = 0;
        self.scan_result = Some(result);
        self.state = AppState::Finished;
    }

    /// Leaves `Scanning` without a new result. Whatever was shown before the
    /// scan is shown again.
    pub fn cancel_scan(&mut self) {
        if self.state != AppState::Scanning {
            return;
        }
        self.state = if self.scan_result.is_some() {
            AppState::Finished
        } else {
            AppState::Idle
        };
        self.notify(NotificationKind::Info, "Scan Cancelled", "No result was produced.".to_string());
    }

    pub fn notify(&mut self, kind: NotificationKind, title: &str, message: String) {
        self.notification = Some(Notification {
            title: title.to_string(),
            message,
            kind,
            created: Instant::now(),
        });
    }

    pub fn expire_notification(&mut self, now: Instant) {
        if let Some(n) = &self.notification {
            if now.saturating_duration_since(n.created) >= NOTIFICATION_TTL {
                self.notification = None;
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();

        if let (AppState::Finished, Some(result)) = (self.state, &self.scan_result) {
            if self.displayed_score < result.score {
                self.displayed_score = self
                    .displayed_score
                    .saturating_add(SCORE_ANIMATION_STEP)
                    .min(result.score);
            }
        }

        self.expire_notification(Instant::now());

        if self.show_logs {
            self.log_content = crate::logging::read_log_tail(LOG_TAIL_LINES);
        }
    }

    pub fn export_report(&mut self, dir: &Path) {
        let Some(result) = &self.scan_result else {
            self.notify(NotificationKind::Error, "Export Failed", "There is no scan result to export.".to_string());
            return;
        };
        match export_result(result, dir) {
            Ok(path) => {
                self.notify(NotificationKind::Info, "Report Exported", path.display().to_string());
            }
            Err(e) => {
                warn!(error = ?e, "Export failed.");
                self.notify(NotificationKind::Error, "Export Failed", e.to_string());
            }
        }
    }

    pub fn toggle_page(&mut self) {
        self.page = match self.page {
            Page::Scanner => Page::Learn,
            Page::Learn => Page::Scanner,
        };
        self.scroll_offset = 0;
        self.learn_scroll_state = ScrollbarState::default();
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if self.show_logs {
            self.log_content = crate::logging::read_log_tail(LOG_TAIL_LINES);
        }
    }

    pub fn scroll_up(&mut self) {
        match self.page {
            Page::Scanner => {
                if let Some(i) = self.threat_list_state.selected() {
                    self.threat_list_state.select(Some(i.saturating_sub(1)));
                }
            }
            Page::Learn => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                self.learn_scroll_state = self.learn_scroll_state.position(self.scroll_offset);
            }
        }
    }

    pub fn scroll_down(&mut self) {
        match self.page {
            Page::Scanner => {
                let count = self.scan_result.as_ref().map_or(0, |r| r.threats.len());
                let next = self.threat_list_state.selected().map_or(0, |i| i + 1);
                if next < count {
                    self.threat_list_state.select(Some(next));
                }
            }
            Page::Learn => {
                let last_line = self.learn_content_length.saturating_sub(1);
                self.scroll_offset = self.scroll_offset.saturating_add(1).min(last_line);
                self.learn_scroll_state = self.learn_scroll_state.position(self.scroll_offset);
            }
        }
    }

    pub fn scroll_logs_left(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_sub(4);
        self.log_horizontal_scroll_state = self
            .log_horizontal_scroll_state
            .position(self.log_horizontal_scroll);
    }

    pub fn scroll_logs_right(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_add(4);
        self.log_horizontal_scroll_state = self
            .log_horizontal_scroll_state
            .position(self.log_horizontal_scroll);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.scan_result = None;
        self.displayed_score = 0;
        self.threat_list_state = ListState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::scan_url;

    fn app_with_input(input: &str) -> App {
        let mut app = App::new();
        app.input = input.to_string();
        app
    }

    #[test]
    fn empty_submit_is_rejected_with_notification() {
        let mut app = App::new();
        assert!(app.submit().is_none());
        assert_eq!(app.state, AppState::Idle);
        let n = app.notification.as_ref().unwrap();
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, "Please enter a URL to scan");
    }

    #[test]
    fn invalid_submit_keeps_previous_result() {
        let mut app = app_with_input("https://github.com");
        app.complete(scan_url("https://github.com").unwrap());
        app.input = "not a url".to_string();

        assert!(app.submit().is_none());
        assert_eq!(app.state, AppState::Finished);
        assert_eq!(app.scan_result.as_ref().unwrap().url, "https://github.com");
        assert_eq!(app.notification.as_ref().unwrap().message, "Please enter a valid URL");
    }

    #[test]
    fn valid_submit_starts_scanning_once() {
        let mut app = app_with_input("https://bit.ly/abc");
        let request = app.submit().expect("accepted");
        assert_eq!(request.input, "https://bit.ly/abc");
        assert_eq!(request.url.host_str(), Some("bit.ly"));
        assert_eq!(app.state, AppState::Scanning);
        assert!(!app.accepts_input());
        assert!(app.submit().is_none());
    }

    #[test]
    fn complete_shows_result_and_notifies() {
        let mut app = app_with_input("https://bit.ly/abc");
        app.submit();
        app.complete(scan_url("https://bit.ly/abc").unwrap());

        assert_eq!(app.state, AppState::Finished);
        assert_eq!(app.threat_list_state.selected(), Some(0));
        let n = app.notification.as_ref().unwrap();
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, "Security score: 15/100");
    }

    #[test]
    fn safe_result_notifies_as_info() {
        let mut app = App::new();
        app.complete(scan_url("https://github.com/user/repository").unwrap());
        assert_eq!(app.notification.as_ref().unwrap().kind, NotificationKind::Info);
        assert_eq!(app.threat_list_state.selected(), None);
    }

    #[test]
    fn cancel_returns_to_previous_screen() {
        let mut app = app_with_input("https://github.com");
        app.submit();
        app.cancel_scan();
        assert_eq!(app.state, AppState::Idle);

        app.complete(scan_url("https://github.com").unwrap());
        app.submit();
        app.cancel_scan();
        assert_eq!(app.state, AppState::Finished);
    }

    #[test]
    fn score_animates_up_to_the_result() {
        let mut app = App::new();
        app.complete(scan_url("https://bit.ly/abc").unwrap());
        for _ in 0..10 {
            app.on_tick();
        }
        assert_eq!(app.displayed_score, 15);
    }

    #[test]
    fn notifications_expire() {
        let mut app = App::new();
        app.notify(NotificationKind::Info, "Hi", "there".to_string());
        let created = app.notification.as_ref().unwrap().created;

        app.expire_notification(created + Duration::from_secs(1));
        assert!(app.notification.is_some());
        app.expire_notification(created + NOTIFICATION_TTL);
        assert!(app.notification.is_none());
    }

    #[test]
    fn threat_selection_stays_in_bounds() {
        let mut app = App::new();
        app.complete(scan_url("https://bit.ly/abc").unwrap());
        for _ in 0..10 {
            app.scroll_down();
        }
        assert_eq!(app.threat_list_state.selected(), Some(2));
    }

    #[test]
    fn export_without_result_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        app.export_report(dir.path());
        assert_eq!(app.notification.as_ref().unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn export_writes_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        app.complete(scan_url("https://github.com/user/repository").unwrap());
        app.export_report(dir.path());

        let n = app.notification.as_ref().unwrap();
        assert_eq!(n.title, "Report Exported");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut app = app_with_input("https://github.com");
        app.complete(scan_url("https://github.com").unwrap());
        app.reset();
        assert_eq!(app.state, AppState::Idle);
        assert!(app.input.is_empty());
        assert!(app.scan_result.is_none());
    }

    #[test]
    fn learn_scroll_stops_at_the_last_line() {
        let mut app = App::new();
        app.toggle_page();
        app.learn_content_length = 5;
        for _ in 0..100 {
            app.scroll_down();
        }
        assert_eq!(app.scroll_offset, 4);
        app.scroll_up();
        assert_eq!(app.scroll_offset, 3);
    }

    #[test]
    fn learn_page_blocks_typing() {
        let mut app = App::new();
        app.toggle_page();
        assert_eq!(app.page, Page::Learn);
        assert!(!app.accepts_input());
        app.toggle_page();
        assert!(app.accepts_input());
    }
}
