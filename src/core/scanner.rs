// src/core/scanner.rs

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use url::Url;

use crate::core::classifier;
use crate::core::error::ScanError;
use crate::core::models::ScanResult;

/// How long the demo pretends to work before showing a verdict.
pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_millis(2000);

/// Input that has already passed [`classifier::validate`].
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// The text exactly as typed.
    pub input: String,
    pub url: Url,
}

impl ScanRequest {
    pub fn new(input: &str) -> Result<Self, ScanError> {
        let url = classifier::validate(input)?;
        Ok(Self { input: input.to_string(), url })
    }
}

/// A pending simulated scan.
///
/// The verdict itself is computed instantly; the task only holds it back for
/// `delay` so the UI has something to animate. Each task owns its own result
/// channel, so a result can only ever be read through the task that produced
/// it. Dropping the handle does not stop the timer, call [`ScanTask::cancel`]
/// for that.
pub struct ScanTask {
    handle: JoinHandle<()>,
    rx: oneshot::Receiver<ScanResult>,
}

impl ScanTask {
    /// Starts the delay timer. The result becomes available through
    /// [`ScanTask::try_result`] once the delay elapses.
    pub fn spawn(request: ScanRequest, delay: Duration) -> Self {
        info!(url = %request.input, delay_ms = delay.as_millis() as u64, "Scheduling simulated scan.");
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = classifier::classify(&request.input, &request.url);
            if tx.send(result).is_err() {
                debug!("Scan receiver dropped before the result was delivered.");
            }
        });
        Self { handle, rx }
    }

    /// Returns the result if the delay has elapsed, without waiting.
    pub fn try_result(&mut self) -> Option<ScanResult> {
        self.rx.try_recv().ok()
    }

    /// Waits for the result. `None` if the task was cancelled.
    pub async fn result(self) -> Option<ScanResult> {
        self.rx.await.ok()
    }

    /// Aborts the pending timer and closes the result channel. Nothing can be
    /// read from this task afterwards, even if it had already finished.
    pub fn cancel(mut self) {
        if !self.handle.is_finished() {
            info!("Cancelling pending simulated scan.");
        }
        self.handle.abort();
        self.rx.close();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Validates, waits `delay`, then classifies. Used by the headless mode.
///
/// Invalid input is rejected immediately, without waiting.
pub async fn simulate_scan(input: &str, delay: Duration) -> Result<ScanResult, ScanError> {
    let parsed = classifier::validate(input)?;
    tokio::time::sleep(delay).await;
    Ok(classifier::classify(input, &parsed))
}
