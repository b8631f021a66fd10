use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Progress indicator shown on stderr while a port scan runs.
pub struct ScanSpinner {
    bar: ProgressBar,
}

impl ScanSpinner {
    pub fn start(host: &str, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template("{spinner:.blue} {msg} {pos}/{len} ports")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICK_STRINGS);

        bar.set_style(style);
        bar.set_message(format!("Scanning {}", host.bold()));
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Callback for the scanner: advances the bar by one port.
    pub fn tick_handle(&self) -> impl Fn(u16) + Send + Sync + 'static {
        let bar = self.bar.clone();
        move |_port| bar.inc(1)
    }

    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}
