// ============================================================
// Layer 6 — Progress Bars
// ============================================================

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for a scan over `total` rows.
pub fn row_progress_bar(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let template = format!(
        "{{spinner:.green}} {label} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})"
    );
    if let Ok(style) = ProgressStyle::default_bar().template(&template) {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}
