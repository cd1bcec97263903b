//! Progress bar display for installations

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress over (asset × platform) work items
pub struct ProgressDisplay {
    pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a progress display; draws to stderr only when `visible` and a terminal
    pub fn new(total: u64, visible: bool) -> Self {
        let pb = ProgressBar::with_draw_target(
            Some(total),
            if visible {
                ProgressDrawTarget::stderr()
            } else {
                ProgressDrawTarget::hidden()
            },
        );

        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }

        Self { pb }
    }

    /// Show the platform currently being installed
    pub fn set_platform(&self, display_name: &str) {
        self.pb.set_message(display_name.to_string());
    }

    /// Advance by one asset, showing its name
    pub fn inc(&self, asset_name: &str) {
        let chars = asset_name.chars().count();
        let display_name = if chars > 40 {
            let tail: String = asset_name.chars().skip(chars - 37).collect();
            format!("...{tail}")
        } else {
            asset_name.to_string()
        };
        self.pb.set_message(display_name);
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
