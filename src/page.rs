//! Route detection for the static pages this module runs on.

use web_sys::window;

/// Which of the hand-authored pages is currently loaded. The pages link to
/// each other by file name, so a plain substring match on the path is the
/// whole detection scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Download,
    Tutorial,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        if path.contains("tutorial.html") {
            Route::Tutorial
        } else if path.contains("download.html") {
            Route::Download
        } else {
            Route::Landing
        }
    }

    /// Route of the page the module is running on. Falls back to the landing
    /// page when the location is unavailable.
    pub fn current() -> Self {
        window()
            .and_then(|w| w.location().pathname().ok())
            .map(|p| Route::from_path(&p))
            .unwrap_or(Route::Landing)
    }
}
