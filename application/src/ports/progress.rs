//! Progress notification port
//!
//! Defines the interface for reporting progress during a run.

use dsa_ask_domain::{Model, ProviderKind};
use std::time::Duration;

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self, provider: ProviderKind, model: &Model);

    /// Called when the request returns, successfully or not
    fn on_request_complete(&self, success: bool, elapsed: Duration);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _provider: ProviderKind, _model: &Model) {}
    fn on_request_complete(&self, _success: bool, _elapsed: Duration) {}
}
