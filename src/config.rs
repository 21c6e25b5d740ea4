//! Build-time configuration.
//!
//! The scraper has no configuration file and no behavioural flags; everything
//! that would normally be tunable is fixed here. Log verbosity is the one
//! runtime knob and is read from `RUST_LOG` in `main`.

use std::path::PathBuf;
use std::time::Duration;

/// User agent sent with every request. Several of the sources serve a bot
/// wall to non-browser agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Upper bound on a single navigation, matching a browser's default.
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Options used when launching the browser engine.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub user_agent: String,
    pub navigation_timeout: Duration,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            navigation_timeout: NAVIGATION_TIMEOUT,
        }
    }
}

/// Directory the CSV export is written to: the working directory.
pub fn output_dir() -> PathBuf {
    PathBuf::from(".")
}
