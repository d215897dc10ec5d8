use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Trait for progress reporting
pub trait ProgressReporter: Send + Sync {
    fn finish(&self);
    fn abandon(&self);
}

/// Indicatif spinner; adb gives no byte counts we could show a bar for
pub struct IndicatifProgress {
    bar: ProgressBar,
}

impl IndicatifProgress {
    pub fn spinner(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }
}

impl ProgressReporter for IndicatifProgress {
    fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn abandon(&self) {
        self.bar.abandon();
    }
}

/// No-op progress reporter for when progress reporting is disabled
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn finish(&self) {}
    fn abandon(&self) {}
}

/// Progress reporter factory
#[derive(Debug, Clone, Copy)]
pub struct ProgressFactory {
    enabled: bool,
}

impl ProgressFactory {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Spinner shown while a push or pull is running
    pub fn transfer(&self, label: &str) -> Box<dyn ProgressReporter> {
        if !self.enabled {
            return Box::new(NoOpProgress);
        }
        Box::new(IndicatifProgress::spinner(label))
    }
}

impl Default for ProgressFactory {
    fn default() -> Self {
        Self::new(true)
    }
}
