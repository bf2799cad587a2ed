//! Terminal screens: search form, results list, and customer detail.
//!
//! Screens stay thin: they prompt, delegate to the form model, the rendering
//! services, and the repository, and surface normalized errors. Data moves
//! between screens as owned snapshots taken at navigation time.

use std::time::Duration;

use console::style;
use indicatif::ProgressBar;

pub mod detail;
pub mod results;
pub mod search;

/// Pending-state spinner for a single in-flight request.
pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Modal-style alert used by the search screen.
pub(crate) fn alert(title: &str, message: &str) {
    eprintln!("{} {message}", style(title).red().bold());
}
