//! Event-driven notification pipeline.
//!
//! The platform integration (notification access, posting local
//! notifications) is injected through [`PermissionGate`] and
//! [`SuggestionSink`]; raw notifications arrive over a tokio channel.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::ListenerError;
use crate::models::config::ListenerConfig;

use super::rules::AmountExtractor;
use super::suggestion::ExpenseSuggestion;

/// Notification access state reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Authorized,
    Denied,
    Unknown,
}

/// Platform hook for notification access.
pub trait PermissionGate {
    /// Current permission state.
    fn status(&self) -> PermissionStatus;

    /// Ask the user for access and return the resulting state.
    fn request(&self) -> PermissionStatus;
}

/// Receives suggestions to surface to the user.
pub trait SuggestionSink {
    fn dispatch(&self, suggestion: &ExpenseSuggestion) -> Result<(), ListenerError>;
}

impl<F> SuggestionSink for F
where
    F: Fn(&ExpenseSuggestion) -> Result<(), ListenerError>,
{
    fn dispatch(&self, suggestion: &ExpenseSuggestion) -> Result<(), ListenerError> {
        self(suggestion)
    }
}

/// Upper bound on the event channel buffer.
pub const MAX_CHANNEL_CAPACITY: usize = 1 << 16;

/// Create the channel a platform source feeds notifications into.
///
/// `capacity` is clamped to `1..=MAX_CHANNEL_CAPACITY`.
pub fn channel(capacity: usize) -> (mpsc::Sender<NotificationEvent>, mpsc::Receiver<NotificationEvent>) {
    if capacity > MAX_CHANNEL_CAPACITY {
        warn!(capacity, max = MAX_CHANNEL_CAPACITY, "channel capacity clamped");
    }
    mpsc::channel(capacity.clamp(1, MAX_CHANNEL_CAPACITY))
}

/// Make sure notification access is granted, asking once if needed.
pub fn ensure_permission(gate: &impl PermissionGate) -> Result<(), ListenerError> {
    if gate.status() == PermissionStatus::Authorized {
        return Ok(());
    }

    info!("requesting notification access");
    match gate.request() {
        PermissionStatus::Authorized => Ok(()),
        status => {
            warn!(?status, "notification access not granted");
            Err(ListenerError::PermissionDenied)
        }
    }
}

/// A notification posted by another app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// Posting app, when the platform reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Notification body.
    #[serde(default)]
    pub text: String,
}

impl NotificationEvent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            package: None,
            text: text.into(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

/// Counters collected while the listener runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerStats {
    pub received: usize,
    pub matched: usize,
    pub duplicates: usize,
    pub dispatch_failures: usize,
}

/// Runs the amount extractor over incoming notifications.
pub struct NotificationListener<S> {
    extractor: AmountExtractor,
    sink: S,
    dedup_capacity: usize,
    recent: VecDeque<String>,
    stats: ListenerStats,
}

impl<S: SuggestionSink> NotificationListener<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, &ListenerConfig::default())
    }

    pub fn with_config(sink: S, config: &ListenerConfig) -> Self {
        Self {
            extractor: AmountExtractor::new(),
            sink,
            dedup_capacity: config.dedup_capacity,
            recent: VecDeque::new(),
            stats: ListenerStats::default(),
        }
    }

    /// Check permission, then process events until the channel closes.
    pub async fn start(
        &mut self,
        gate: &impl PermissionGate,
        rx: mpsc::Receiver<NotificationEvent>,
    ) -> Result<ListenerStats, ListenerError> {
        ensure_permission(gate)?;
        Ok(self.run(rx).await)
    }

    /// Process events until every sender is dropped.
    pub async fn run(&mut self, mut rx: mpsc::Receiver<NotificationEvent>) -> ListenerStats {
        info!("notification listener started");

        while let Some(event) = rx.recv().await {
            self.handle(&event);
        }

        info!(
            received = self.stats.received,
            matched = self.stats.matched,
            "notification listener stopped"
        );
        self.stats
    }

    /// Process one notification and return the suggestion it produced.
    pub fn handle(&mut self, event: &NotificationEvent) -> Option<ExpenseSuggestion> {
        self.stats.received += 1;
        debug!(package = event.package.as_deref(), text = %event.text, "notification received");

        if self.is_duplicate(&event.text) {
            self.stats.duplicates += 1;
            debug!("duplicate notification skipped");
            return None;
        }

        let amount = self.extractor.extract(&event.text).amount()?;
        self.stats.matched += 1;

        let suggestion = ExpenseSuggestion::new(amount);
        match self.sink.dispatch(&suggestion) {
            Ok(()) => info!(%amount, "expense suggestion dispatched"),
            Err(e) => {
                self.stats.dispatch_failures += 1;
                warn!(%amount, error = %e, "failed to dispatch expense suggestion");
            }
        }

        Some(suggestion)
    }

    pub fn stats(&self) -> ListenerStats {
        self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Records `text` and reports whether it was among the recent texts.
    fn is_duplicate(&mut self, text: &str) -> bool {
        if self.dedup_capacity == 0 {
            return false;
        }

        if self.recent.iter().any(|seen| seen == text) {
            return true;
        }

        if self.recent.len() == self.dedup_capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(text.to_string());
        false
    }
}
