// src/events.rs

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::Duration;

use crate::app::{App, AppState, Page};
use crate::core::scanner::ScanTask;

/// Owns the app state together with the scan that is currently running, so a
/// key press can start or cancel a scan in one place.
pub struct Controller {
    pub app: App,
    pending: Option<ScanTask>,
    scan_delay: Duration,
    export_dir: PathBuf,
}

impl Controller {
    pub fn new(scan_delay: Duration, export_dir: PathBuf) -> Self {
        Self {
            app: App::new(),
            pending: None,
            scan_delay,
            export_dir,
        }
    }

    pub fn has_pending_scan(&self) -> bool {
        self.pending.is_some()
    }

    /// Moves a finished scan into the app. Results only come from the task
    /// that is still pending; a cancelled task has been dropped by then.
    pub fn poll_scan(&mut self) {
        let Some(task) = self.pending.as_mut() else {
            return;
        };
        if let Some(result) = task.try_result() {
            self.pending = None;
            self.app.complete(result);
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    /// Stops any running scan. Call before leaving the UI loop.
    pub fn shutdown(&mut self) {
        self.cancel_pending();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let app = &mut self.app;

        // Keys that work everywhere.
        match key.code {
            KeyCode::Char('c') if ctrl => return self.quit(),
            KeyCode::Char('l') if ctrl => return app.toggle_logs(),
            KeyCode::Tab => return app.toggle_page(),
            KeyCode::Left if app.show_logs => return app.scroll_logs_left(),
            KeyCode::Right if app.show_logs => return app.scroll_logs_right(),
            KeyCode::Up => return app.scroll_up(),
            KeyCode::Down => return app.scroll_down(),
            KeyCode::Esc if app.state == AppState::Scanning => {
                self.cancel_pending();
                return self.app.cancel_scan();
            }
            KeyCode::Esc => return self.quit(),
            _ => {}
        }

        if app.page != Page::Scanner {
            if key.code == KeyCode::Char('q') {
                self.quit();
            }
            return;
        }

        match key.code {
            KeyCode::Char('e') if ctrl => app.export_report(&self.export_dir),
            KeyCode::Char('n') if ctrl && app.accepts_input() => app.reset(),
            KeyCode::Char(c) if !ctrl && app.accepts_input() => app.input.push(c),
            KeyCode::Backspace if app.accepts_input() => {
                app.input.pop();
            }
            KeyCode::Enter => {
                if let Some(request) = app.submit() {
                    self.pending = Some(ScanTask::spawn(request, self.scan_delay));
                }
            }
            _ => {}
        }
    }

    fn quit(&mut self) {
        self.cancel_pending();
        self.app.quit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NotificationKind;
    use crate::core::models::RiskStatus;

    const DELAY: Duration = Duration::from_secs(2);

    fn press(controller: &mut Controller, code: KeyCode) {
        controller.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(controller: &mut Controller, c: char) {
        controller.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(controller: &mut Controller, text: &str) {
        for c in text.chars() {
            press(controller, KeyCode::Char(c));
        }
    }

    fn controller() -> Controller {
        let dir = std::env::temp_dir().join("phishguard-events-tests");
        Controller::new(DELAY, dir)
    }

    #[tokio::test(start_paused = true)]
    async fn enter_scans_and_result_arrives_after_delay() {
        let mut c = controller();
        type_text(&mut c, "https://bit.ly/x");
        press(&mut c, KeyCode::Enter);
        assert_eq!(c.app.state, AppState::Scanning);
        assert!(c.has_pending_scan());

        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
        c.poll_scan();
        assert_eq!(c.app.state, AppState::Finished);
        assert_eq!(c.app.scan_result.as_ref().unwrap().status, RiskStatus::Dangerous);
        assert!(!c.has_pending_scan());
    }

    #[tokio::test(start_paused = true)]
    async fn esc_while_scanning_cancels_without_quitting() {
        let mut c = controller();
        type_text(&mut c, "https://bit.ly/x");
        press(&mut c, KeyCode::Enter);
        press(&mut c, KeyCode::Esc);

        assert!(!c.app.should_quit);
        assert_eq!(c.app.state, AppState::Idle);
        assert!(!c.has_pending_scan());

        tokio::time::sleep(DELAY * 2).await;
        c.poll_scan();
        assert!(c.app.scan_result.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_result_never_replaces_the_next_scan() {
        let mut c = controller();
        type_text(&mut c, "https://bit.ly/x");
        press(&mut c, KeyCode::Enter);
        // Let the first scan finish without polling it, then cancel.
        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
        press(&mut c, KeyCode::Esc);

        ctrl(&mut c, 'n');
        type_text(&mut c, "https://github.com/user/repository");
        press(&mut c, KeyCode::Enter);
        c.poll_scan();
        assert_eq!(c.app.state, AppState::Scanning);

        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
        c.poll_scan();
        let result = c.app.scan_result.as_ref().unwrap();
        assert_eq!(result.url, "https://github.com/user/repository");
        assert_eq!(result.status, RiskStatus::Safe);
    }

    #[tokio::test(start_paused = true)]
    async fn quit_cancels_pending_scan() {
        let mut c = controller();
        type_text(&mut c, "https://bit.ly/x");
        press(&mut c, KeyCode::Enter);
        ctrl(&mut c, 'c');
        assert!(c.app.should_quit);
        assert!(!c.has_pending_scan());
    }

    #[tokio::test]
    async fn esc_when_idle_quits() {
        let mut c = controller();
        press(&mut c, KeyCode::Esc);
        assert!(c.app.should_quit);
    }

    #[tokio::test]
    async fn empty_enter_notifies_and_stays_idle() {
        let mut c = controller();
        press(&mut c, KeyCode::Enter);
        assert_eq!(c.app.state, AppState::Idle);
        assert!(!c.has_pending_scan());
        assert_eq!(c.app.notification.as_ref().unwrap().kind, NotificationKind::Error);
    }

    #[tokio::test]
    async fn typing_q_goes_into_the_url() {
        let mut c = controller();
        type_text(&mut c, "q");
        assert!(!c.app.should_quit);
        assert_eq!(c.app.input, "q");
        press(&mut c, KeyCode::Backspace);
        assert!(c.app.input.is_empty());
    }

    #[tokio::test]
    async fn learn_page_ignores_typing_and_quits_on_q() {
        let mut c = controller();
        press(&mut c, KeyCode::Tab);
        assert_eq!(c.app.page, Page::Learn);
        press(&mut c, KeyCode::Char('x'));
        assert!(c.app.input.is_empty());
        press(&mut c, KeyCode::Char('q'));
        assert!(c.app.should_quit);
    }
}
