//! Custom verse overrides
//!
//! Users may replace the verse of any week by pointing the tracker at a JSON
//! object keyed by week number:
//!
//! ```json
//! {
//!   "12": "Plain text, no citation",
//!   "20": { "text": "...", "reference": "Psalm 139:14" }
//! }
//! ```
//!
//! Loading fails open. A missing, unreadable or malformed file yields an
//! empty override set and a warning, and a bad entry only drops that entry.

use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::data::{lookup_verse, VerseEntry, WeekIndex, MAX_WEEK, MIN_WEEK};

/// One override value: bare text, or text with a citation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VerseOverride {
    Text(String),
    Entry(VerseEntry),
}

impl VerseOverride {
    pub fn to_entry(&self) -> VerseEntry {
        match self {
            VerseOverride::Text(text) => VerseEntry::new(text.clone(), ""),
            VerseOverride::Entry(entry) => entry.clone(),
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(VerseOverride::Text(text.clone())),
            Value::Object(map) => {
                let text = map.get("text")?.as_str()?;
                let reference = match map.get("reference") {
                    None | Some(Value::Null) => "",
                    Some(other) => other.as_str()?,
                };
                Some(VerseOverride::Entry(VerseEntry::new(text, reference)))
            }
            _ => None,
        }
    }
}

/// Override entries keyed by the decimal string of the week
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VerseOverrides(BTreeMap<String, VerseOverride>);

impl VerseOverrides {
    pub fn get(&self, week: WeekIndex) -> Option<&VerseOverride> {
        self.0.get(&week.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VerseOverride)> {
        self.0.iter()
    }
}

/// Where override content comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OverrideSource {
    /// JSON given directly in the configuration
    Inline(String),
    File(PathBuf),
}

impl OverrideSource {
    /// Interpret a configured value as inline JSON or a file path
    ///
    /// Relative paths that do not exist as given are looked up under
    /// `base_dir`. Returns `None` for a blank value.
    pub fn resolve(raw: &str, base_dir: Option<&Path>) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if raw.starts_with('{') {
            return Some(OverrideSource::Inline(raw.to_string()));
        }

        let literal = PathBuf::from(raw);
        if literal.exists() || literal.is_absolute() {
            return Some(OverrideSource::File(literal));
        }
        match base_dir {
            Some(base) => Some(OverrideSource::File(base.join(literal))),
            None => Some(OverrideSource::File(literal)),
        }
    }

    fn describe(&self) -> String {
        match self {
            OverrideSource::Inline(_) => "inline verse overrides".to_string(),
            OverrideSource::File(path) => path.display().to_string(),
        }
    }
}

/// Parse override JSON, dropping anything that is not a valid entry
pub fn parse_overrides(content: &str, origin: &str) -> VerseOverrides {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring verse overrides from {}: invalid JSON: {}", origin, e);
            return VerseOverrides::default();
        }
    };

    let Value::Object(map) = value else {
        tracing::warn!(
            "Ignoring verse overrides from {}: expected a JSON object keyed by week",
            origin
        );
        return VerseOverrides::default();
    };

    let mut entries = BTreeMap::new();
    for (key, value) in &map {
        let week = match key.trim().parse::<u8>() {
            Ok(week) if (MIN_WEEK..=MAX_WEEK).contains(&week) => week,
            _ => {
                tracing::warn!("Skipping verse override {:?} in {}: not a week 1-42", key, origin);
                continue;
            }
        };
        match VerseOverride::from_value(value) {
            Some(entry) => {
                entries.insert(week.to_string(), entry);
            }
            None => {
                tracing::warn!(
                    "Skipping verse override for week {} in {}: expected text or {{text, reference}}",
                    week,
                    origin
                );
            }
        }
    }

    tracing::debug!("Loaded {} verse override(s) from {}", entries.len(), origin);
    VerseOverrides(entries)
}

fn load_source(source: &OverrideSource) -> VerseOverrides {
    match source {
        OverrideSource::Inline(json) => parse_overrides(json, &source.describe()),
        OverrideSource::File(path) => match std::fs::read_to_string(path) {
            Ok(content) => parse_overrides(&content, &source.describe()),
            Err(e) => {
                tracing::warn!("Could not read verse overrides {}: {}", path.display(), e);
                VerseOverrides::default()
            }
        },
    }
}

/// Load overrides from a configured value (inline JSON or path)
pub fn load_overrides(raw: &str, base_dir: Option<&Path>) -> VerseOverrides {
    match OverrideSource::resolve(raw, base_dir) {
        Some(source) => load_source(&source),
        None => VerseOverrides::default(),
    }
}

/// Loaded overrides, kept until explicitly invalidated
#[derive(Debug, Default)]
pub struct OverrideCache {
    base_dir: Option<PathBuf>,
    entries: HashMap<OverrideSource, Arc<VerseOverrides>>,
}

impl OverrideCache {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self {
            base_dir,
            entries: HashMap::new(),
        }
    }

    /// Overrides for a configured value, loading them on first use
    pub fn get(&mut self, raw: &str) -> Arc<VerseOverrides> {
        let Some(source) = OverrideSource::resolve(raw, self.base_dir.as_deref()) else {
            return Arc::new(VerseOverrides::default());
        };
        self.entries
            .entry(source)
            .or_insert_with_key(|source| Arc::new(load_source(source)))
            .clone()
    }

    /// Drop the cached overrides for one value, returning whether any were cached
    pub fn invalidate(&mut self, raw: &str) -> bool {
        match OverrideSource::resolve(raw, self.base_dir.as_deref()) {
            Some(source) => self.entries.remove(&source).is_some(),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Default verses with overrides layered on top
#[derive(Debug, Clone, Default)]
pub struct VerseBook {
    overrides: Arc<VerseOverrides>,
}

impl VerseBook {
    pub fn new(overrides: Arc<VerseOverrides>) -> Self {
        Self { overrides }
    }

    pub fn has_overrides(&self) -> bool {
        !self.overrides.is_empty()
    }

    /// Verse for a week, the override winning when one exists
    pub fn lookup(&self, week: i64) -> VerseEntry {
        let index = WeekIndex::clamp(week);
        self.overrides
            .get(index)
            .map(VerseOverride::to_entry)
            .unwrap_or_else(|| lookup_verse(week))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_both_value_shapes() {
        let overrides = parse_overrides(
            r#"{"3": "Plain text", "4": {"text": "Structured", "reference": "John 3:16"}}"#,
            "test",
        );
        assert_eq!(overrides.len(), 2);

        let book = VerseBook::new(Arc::new(overrides));
        assert_eq!(book.lookup(3), VerseEntry::new("Plain text", ""));
        assert_eq!(book.lookup(4), VerseEntry::new("Structured", "John 3:16"));
        assert_eq!(book.lookup(5), lookup_verse(5));
    }

    #[test]
    fn test_malformed_entry_dropped_valid_kept() {
        let overrides = parse_overrides(r#"{"7": 42, "8": "Kept", "8x": "bad key"}"#, "test");
        assert_eq!(overrides.len(), 1);
        assert!(overrides.get(WeekIndex::clamp(7)).is_none());
        assert_eq!(
            overrides.get(WeekIndex::clamp(8)),
            Some(&VerseOverride::Text("Kept".to_string()))
        );
    }

    #[test]
    fn test_entry_missing_text_dropped() {
        let overrides = parse_overrides(r#"{"9": {"reference": "Psalm 1:1"}}"#, "test");
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_non_object_and_invalid_json_are_empty() {
        assert!(parse_overrides("[1, 2, 3]", "test").is_empty());
        assert!(parse_overrides("not json", "test").is_empty());
        assert!(parse_overrides("", "test").is_empty());
    }

    #[test]
    fn test_out_of_range_keys_dropped() {
        let overrides = parse_overrides(r#"{"0": "zero", "43": "too late", "42": "last"}"#, "test");
        assert_eq!(overrides.len(), 1);
        assert!(overrides.get(WeekIndex::clamp(42)).is_some());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let overrides = load_overrides("does-not-exist.json", Some(tmp.path()));
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_relative_path_resolves_against_base_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("verses.json"), r#"{"1": "From base dir"}"#).unwrap();

        let overrides = load_overrides("verses.json", Some(tmp.path()));
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_inline_json_source() {
        let source = OverrideSource::resolve(r#" {"2": "Inline"} "#, None);
        assert!(matches!(source, Some(OverrideSource::Inline(_))));
        assert_eq!(load_overrides(r#"{"2": "Inline"}"#, None).len(), 1);
    }

    #[test]
    fn test_blank_source_is_none() {
        assert_eq!(OverrideSource::resolve("   ", None), None);
        assert!(load_overrides("", None).is_empty());
    }

    #[test]
    fn test_cache_reuses_until_invalidated() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("verses.json");
        fs::write(&path, r#"{"1": "First"}"#).unwrap();

        let mut cache = OverrideCache::new(Some(tmp.path().to_path_buf()));
        let first = cache.get("verses.json");
        assert_eq!(first.len(), 1);

        // Cached copy survives a change on disk
        fs::write(&path, r#"{"1": "First", "2": "Second"}"#).unwrap();
        assert_eq!(cache.get("verses.json").len(), 1);
        assert_eq!(cache.len(), 1);

        assert!(cache.invalidate("verses.json"));
        assert_eq!(cache.get("verses.json").len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_book_clamps_week() {
        let book = VerseBook::default();
        assert!(!book.has_overrides());
        assert_eq!(book.lookup(-4), lookup_verse(1));
        assert_eq!(book.lookup(60), lookup_verse(42));
    }
}
