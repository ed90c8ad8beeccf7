//! Tracker configuration and the on-disk tracker store
//!
//! Each configured pregnancy is a [`TrackerConfig`]. Configurations live in a
//! single YAML file (`trackers.yaml` under the platform config directory by
//! default) and are only created through [`TrackerConfig::from_setup`],
//! which applies the same validation as the interactive setup.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use ulid::Ulid;

use crate::core::clock::{self, PregnancySnapshot, DEFAULT_GESTATION_DAYS};
use crate::data::{ComparisonMode, CustomComparisons};

/// Accepted range for the pregnancy length, in days
pub const PREGNANCY_LENGTH_RANGE: std::ops::RangeInclusive<u32> = 1..=365;

/// Date format used for due dates everywhere
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default store file name inside the config directory
pub const STORE_FILE_NAME: &str = "trackers.yaml";

/// One configured pregnancy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Stable identifier (ULID), used to build sensor unique ids
    pub entry_id: String,

    pub title: String,

    pub due_date: NaiveDate,

    /// Total gestation length in days
    #[serde(default = "default_pregnancy_length")]
    pub pregnancy_length: u32,

    #[serde(default, deserialize_with = "lenient_mode")]
    pub comparison_mode: ComparisonMode,

    /// Verse overrides: a JSON file path or inline JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_bible_verses: Option<String>,

    /// Comparisons used by custom mode, keyed by week
    #[serde(default, skip_serializing_if = "CustomComparisons::is_empty")]
    pub custom_comparisons: CustomComparisons,
}

fn default_pregnancy_length() -> u32 {
    DEFAULT_GESTATION_DAYS
}

fn lenient_mode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ComparisonMode, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(ComparisonMode::from_str_lenient)
        .unwrap_or_default())
}

/// Raw answers from the setup flow, before validation
#[derive(Debug, Clone, Default)]
pub struct SetupInput {
    pub due_date: String,
    pub pregnancy_length: Option<u32>,
    pub comparison_mode: Option<ComparisonMode>,
    pub custom_bible_verses: Option<String>,
    pub title: Option<String>,
}

/// Field-level setup validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("Invalid due date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Due date {due_date} is in the past (today is {today})")]
    DueDatePast { due_date: NaiveDate, today: NaiveDate },

    #[error("Pregnancy length must be between 1 and 365 days, got {days}")]
    InvalidLength { days: u32 },
}

impl SetupError {
    /// The setup field this error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            SetupError::InvalidDate { .. } | SetupError::DueDatePast { .. } => "due_date",
            SetupError::InvalidLength { .. } => "pregnancy_length",
        }
    }
}

/// Parse a due date and reject dates before `today`
pub fn validate_due_date(input: &str, today: NaiveDate) -> Result<NaiveDate, SetupError> {
    let due_date =
        NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| SetupError::InvalidDate {
            input: input.to_string(),
        })?;
    if due_date < today {
        return Err(SetupError::DueDatePast { due_date, today });
    }
    Ok(due_date)
}

pub fn validate_pregnancy_length(days: u32) -> Result<u32, SetupError> {
    if PREGNANCY_LENGTH_RANGE.contains(&days) {
        Ok(days)
    } else {
        Err(SetupError::InvalidLength { days })
    }
}

impl TrackerConfig {
    /// Validate setup answers and build a new configuration
    pub fn from_setup(input: SetupInput, today: NaiveDate) -> Result<Self, SetupError> {
        let due_date = validate_due_date(&input.due_date, today)?;
        let pregnancy_length =
            validate_pregnancy_length(input.pregnancy_length.unwrap_or(DEFAULT_GESTATION_DAYS))?;

        let title = input
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("Pregnancy Tracker ({})", due_date.format(DATE_FORMAT)));

        Ok(Self {
            entry_id: Ulid::new().to_string(),
            title,
            due_date,
            pregnancy_length,
            comparison_mode: input.comparison_mode.unwrap_or_default(),
            custom_bible_verses: input
                .custom_bible_verses
                .filter(|v| !v.trim().is_empty()),
            custom_comparisons: CustomComparisons::default(),
        })
    }

    /// Identifier that prevents the same due date being configured twice
    pub fn unique_id(&self) -> String {
        format!("pregnancy_{}", self.due_date.format(DATE_FORMAT))
    }

    pub fn start_date(&self) -> NaiveDate {
        clock::start_date(self.due_date, self.pregnancy_length)
    }

    pub fn snapshot(&self, today: NaiveDate) -> PregnancySnapshot {
        clock::snapshot(self.due_date, self.pregnancy_length, today)
    }
}

/// Tracker store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid tracker store {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to serialize trackers: {0}")]
    Serialize(String),

    #[error("A tracker for this due date is already configured ({0})")]
    AlreadyConfigured(String),

    #[error("No tracker matching '{0}'")]
    NotFound(String),

    #[error("No trackers configured. Run 'pregtrack init' first")]
    NoTrackers,

    #[error("{0} trackers configured; specify which one to use")]
    Ambiguous(usize),

    #[error("Could not determine a config directory; pass --config")]
    NoConfigDir,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    trackers: Vec<TrackerConfig>,
}

/// The set of configured trackers backed by a YAML file
#[derive(Debug)]
pub struct TrackerStore {
    path: PathBuf,
    trackers: Vec<TrackerConfig>,
}

impl TrackerStore {
    /// `<platform config dir>/pregtrack/trackers.yaml`
    pub fn default_path() -> Result<PathBuf, StoreError> {
        directories::ProjectDirs::from("", "", "pregtrack")
            .map(|dirs| dirs.config_dir().join(STORE_FILE_NAME))
            .ok_or(StoreError::NoConfigDir)
    }

    /// Open a store, treating a missing file as an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            tracing::debug!("No tracker store at {}, starting empty", path.display());
            return Ok(Self {
                path,
                trackers: Vec::new(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        let file: StoreFile = if content.trim().is_empty() {
            StoreFile::default()
        } else {
            serde_yml::from_str(&content).map_err(|e| StoreError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?
        };

        tracing::debug!("Loaded {} tracker(s) from {}", file.trackers.len(), path.display());
        Ok(Self {
            path,
            trackers: file.trackers,
        })
    }

    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = StoreFile {
            trackers: self.trackers.clone(),
        };
        let yaml = serde_yml::to_string(&file).map_err(|e| StoreError::Serialize(e.to_string()))?;
        fs::write(&self.path, yaml).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory relative override paths are resolved against
    pub fn base_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    pub fn trackers(&self) -> &[TrackerConfig] {
        &self.trackers
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    /// Add a tracker, refusing a second tracker for the same due date
    pub fn add(&mut self, config: TrackerConfig) -> Result<(), StoreError> {
        let unique_id = config.unique_id();
        if self.trackers.iter().any(|t| t.unique_id() == unique_id) {
            return Err(StoreError::AlreadyConfigured(unique_id));
        }
        tracing::info!("Adding tracker {} ({})", config.title, config.entry_id);
        self.trackers.push(config);
        Ok(())
    }

    /// Find a tracker by entry id, entry id prefix, unique id or due date
    pub fn find(&self, selector: &str) -> Option<&TrackerConfig> {
        self.position(selector).map(|i| &self.trackers[i])
    }

    fn position(&self, selector: &str) -> Option<usize> {
        let selector = selector.trim();
        if selector.is_empty() {
            return None;
        }
        let upper = selector.to_ascii_uppercase();

        self.trackers
            .iter()
            .position(|t| t.entry_id == upper || t.unique_id() == selector)
            .or_else(|| {
                self.trackers
                    .iter()
                    .position(|t| t.due_date.format(DATE_FORMAT).to_string() == selector)
            })
            .or_else(|| {
                let matches: Vec<usize> = self
                    .trackers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.entry_id.starts_with(&upper))
                    .map(|(i, _)| i)
                    .collect();
                (matches.len() == 1).then(|| matches[0])
            })
    }

    /// Pick a tracker: the one named, or the only one configured
    pub fn select(&self, selector: Option<&str>) -> Result<&TrackerConfig, StoreError> {
        match selector {
            Some(s) => self
                .find(s)
                .ok_or_else(|| StoreError::NotFound(s.to_string())),
            None => match self.trackers.as_slice() {
                [] => Err(StoreError::NoTrackers),
                [only] => Ok(only),
                many => Err(StoreError::Ambiguous(many.len())),
            },
        }
    }

    pub fn remove(&mut self, selector: &str) -> Result<TrackerConfig, StoreError> {
        let index = self
            .position(selector)
            .ok_or_else(|| StoreError::NotFound(selector.to_string()))?;
        let removed = self.trackers.remove(index);
        tracing::info!("Removed tracker {} ({})", removed.title, removed.entry_id);
        Ok(removed)
    }
}
