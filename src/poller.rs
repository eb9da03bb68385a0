use crate::datamodel::{Reading, ScanCursor};
use crate::http::data::{NEXT_KEY_PARTITION_HEADER, NEXT_KEY_TIMESTAMP_HEADER};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

/// Fetch failure in one poll tick. Never surfaced to consumers of the
/// displayed dataset; the next scheduled tick is the de facto retry.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// URL of the readings endpoint.
    pub endpoint: String,
    /// Tick period.
    pub interval: Duration,
    pub request_timeout: Duration,
}

#[derive(Debug, Default)]
struct DisplayState {
    readings: Vec<Reading>,
    /// Highest sequence number applied so far.
    applied_seq: u64,
    /// Resume key echoed back to the endpoint on the next tick.
    cursor: Option<ScanCursor>,
}

/// Timer-driven loop keeping a displayed dataset fresh.
///
/// Ticks do not wait for each other. Every outgoing request carries a
/// monotonically increasing sequence number and a response only replaces
/// the dataset if its sequence is the highest applied so far, so a slow
/// response resolving late never regresses the display to stale data.
#[derive(Debug)]
pub struct Poller {
    http: reqwest::Client,
    config: PollerConfig,
    state: Mutex<DisplayState>,
    next_seq: AtomicU64,
}

impl Poller {
    pub fn new(config: PollerConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            config,
            state: Mutex::new(DisplayState::default()),
            next_seq: AtomicU64::new(1),
        })
    }

    /// Copy of the current dataset, for the renderer.
    pub fn snapshot(&self) -> Vec<Reading> {
        self.state
            .lock()
            .map(|state| state.readings.clone())
            .unwrap_or_default()
    }

    /// Tick forever. Each tick spawns its fetch as an independent task.
    pub async fn run(self: Arc<Self>) {
        let mut ticker = tokio::time::interval(self.config.interval);
        loop {
            ticker.tick().await;
            let poller = Arc::clone(&self);
            tokio::spawn(async move {
                if let Err(error) = poller.poll_once().await {
                    tracing::warn!("poll tick failed: {error}");
                }
            });
        }
    }

    /// One fetch-and-apply cycle.
    pub async fn poll_once(&self) -> Result<(), FetchError> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let cursor = self
            .state
            .lock()
            .map(|state| state.cursor.clone())
            .unwrap_or_default();

        let mut request = self.http.get(&self.config.endpoint);
        if let Some(cursor) = &cursor {
            request = request.query(&[
                ("startKeyPartition", cursor.partition.clone()),
                ("startKeyTimestamp", cursor.timestamp.to_string()),
            ]);
        }

        let response = request.send().await?;
        match response.status() {
            StatusCode::OK => {}
            StatusCode::NO_CONTENT => {
                // The window behind the held cursor is exhausted. Drop the
                // cursor so the next tick restarts the scan from the
                // beginning; re-sending it would poll a dead window forever
                // and hide records landing earlier in scan order.
                tracing::debug!(seq, "nothing in the scan window yet");
                self.reset_cursor(seq);
                return Ok(());
            }
            status => return Err(FetchError::Status(status)),
        }

        let next_cursor = cursor_from_headers(response.headers());
        let mut readings: Vec<Reading> = response.json().await?;
        // The endpoint already sorts; re-sort anyway before displaying.
        readings.sort_unstable_by_key(|reading| reading.timestamp);

        self.apply(seq, readings, next_cursor);
        Ok(())
    }

    /// Forget the resume key, keeping the displayed readings. Gated by the
    /// same sequence rule as `apply`.
    fn reset_cursor(&self, seq: u64) {
        if let Ok(mut state) = self.state.lock() {
            if seq <= state.applied_seq {
                return;
            }
            state.applied_seq = seq;
            state.cursor = None;
        }
    }

    fn apply(&self, seq: u64, readings: Vec<Reading>, cursor: Option<ScanCursor>) {
        if let Ok(mut state) = self.state.lock() {
            if seq <= state.applied_seq {
                tracing::debug!(
                    seq,
                    applied = state.applied_seq,
                    "discarding stale poll response"
                );
                return;
            }
            state.applied_seq = seq;
            state.readings = readings;
            state.cursor = cursor;
        }
    }
}

/// Continuation from the response headers, honored only as a pair, same as
/// the endpoint honors its query parameters.
fn cursor_from_headers(headers: &HeaderMap) -> Option<ScanCursor> {
    let partition = headers
        .get(NEXT_KEY_PARTITION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let timestamp = headers
        .get(NEXT_KEY_TIMESTAMP_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|digits| digits.parse().ok());
    ScanCursor::from_parts(partition, timestamp)
}
