//! Progress reporting while a request is in flight

use colored::Colorize;
use dsa_ask_application::ports::progress::ProgressNotifier;
use dsa_ask_domain::{Model, ProviderKind};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner with elapsed time while waiting for the model
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, provider: ProviderKind, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(provider.display_name().to_string());
        pb.set_message(format!("waiting for {}", model));
        pb.enable_steady_tick(Duration::from_millis(120));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, success: bool, elapsed: Duration) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        let status = if success {
            format!("{} answered in {:.2}s", "v".green(), elapsed.as_secs_f64())
        } else {
            format!("{} failed after {:.2}s", "x".red(), elapsed.as_secs_f64())
        };
        pb.finish_with_message(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_request_start(ProviderKind::DeepSeek, &Model::DeepSeekReasoner);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_request_complete(true, Duration::from_millis(10));
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_complete_without_start_is_noop() {
        let reporter = ProgressReporter::new();
        reporter.on_request_complete(false, Duration::ZERO);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
