//! Status bar and its progress indicator

mod progress_bar;
mod status;

pub use progress_bar::ProgressBar;
pub use status::{StatusBar, StatusInfo};
