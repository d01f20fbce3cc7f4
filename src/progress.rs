//! Progress bars for row-based generation.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const ROW_TEMPLATE: &str = concat!(
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] ",
    "{pos}/{len} rows ({percent}%) {msg}",
);

/// A bar counting `total` rows, in the same style as the other commands
pub fn row_progress_bar(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::with_template(ROW_TEMPLATE) {
        pb.set_style(style.progress_chars("█▓▒░  ").tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
