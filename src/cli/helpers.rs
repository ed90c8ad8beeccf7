//! Shared helper functions for CLI commands

use chrono::{Local, NaiveDate};
use miette::{IntoDiagnostic, Result};
use std::io::{self, IsTerminal};

use crate::cli::GlobalOpts;
use crate::core::config::TrackerStore;
use crate::core::overrides::OverrideCache;

/// The day to evaluate: `--today` if given, else the local date
pub fn today(global: &GlobalOpts) -> NaiveDate {
    global.today.unwrap_or_else(|| Local::now().date_naive())
}

/// Open the tracker store named by `--config`, or the default one
pub fn open_store(global: &GlobalOpts) -> Result<TrackerStore> {
    let path = match &global.config {
        Some(path) => path.clone(),
        None => TrackerStore::default_path().into_diagnostic()?,
    };
    TrackerStore::open(path).into_diagnostic()
}

/// Override cache rooted at the store's directory
pub fn override_cache(store: &TrackerStore) -> OverrideCache {
    OverrideCache::new(store.base_dir().map(|p| p.to_path_buf()))
}

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Check whether stdin is an interactive terminal
pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_multibyte() {
        assert_eq!(truncate_str("🍉🍉🍉🍉🍉", 4), "🍉...");
    }
}
