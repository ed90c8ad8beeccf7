//! Per-tracker read context
//!
//! A [`TrackerContext`] bundles one tracker's configuration, its merged verse
//! table and the day being evaluated. Every derived value is computed from
//! it on demand; nothing is stored between reads.

use chrono::NaiveDate;

use crate::core::clock::{self, DueDateRange, PregnancySnapshot, TermStatus};
use crate::core::config::TrackerConfig;
use crate::core::milestone::{self, MilestoneProgress};
use crate::core::overrides::{OverrideCache, VerseBook};
use crate::core::reference::{parse_reference, ReferenceParts};
use crate::data::{
    all_comparisons, lookup_summary, AllComparisons, ComparisonEntry, ComparisonMode, VerseEntry,
};

pub struct TrackerContext<'a> {
    config: &'a TrackerConfig,
    verses: VerseBook,
    today: NaiveDate,
    snapshot: PregnancySnapshot,
}

impl<'a> TrackerContext<'a> {
    pub fn new(config: &'a TrackerConfig, verses: VerseBook, today: NaiveDate) -> Self {
        Self {
            config,
            verses,
            today,
            snapshot: config.snapshot(today),
        }
    }

    /// Build a context, loading verse overrides through `cache`
    pub fn with_cache(config: &'a TrackerConfig, cache: &mut OverrideCache, today: NaiveDate) -> Self {
        let verses = match config.custom_bible_verses.as_deref() {
            Some(source) => VerseBook::new(cache.get(source)),
            None => VerseBook::default(),
        };
        Self::new(config, verses, today)
    }

    pub fn config(&self) -> &TrackerConfig {
        self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn snapshot(&self) -> &PregnancySnapshot {
        &self.snapshot
    }

    /// Completed weeks, the key into every week table
    pub fn week(&self) -> i64 {
        self.snapshot.weeks_elapsed
    }

    /// Comparison in the given mode; custom mode uses the tracker's own table
    pub fn comparison(&self, mode: ComparisonMode) -> ComparisonEntry {
        self.config.custom_comparisons.resolve(self.week(), mode)
    }

    /// Comparison in the tracker's configured mode
    pub fn configured_comparison(&self) -> ComparisonEntry {
        self.comparison(self.config.comparison_mode)
    }

    pub fn all_comparisons(&self) -> AllComparisons {
        all_comparisons(self.week())
    }

    pub fn summary(&self) -> &'static str {
        lookup_summary(self.week())
    }

    pub fn verse(&self) -> VerseEntry {
        self.verse_for(self.week())
    }

    /// Verse for any week, with this tracker's overrides applied
    pub fn verse_for(&self, week: i64) -> VerseEntry {
        self.verses.lookup(week)
    }

    pub fn has_custom_verses(&self) -> bool {
        self.config.custom_bible_verses.is_some()
    }

    pub fn reference(&self) -> ReferenceParts {
        parse_reference(&self.verse().reference)
    }

    pub fn milestones(&self) -> MilestoneProgress {
        milestone::progress(self.week())
    }

    pub fn countdown(&self) -> String {
        clock::countdown(self.snapshot.days_remaining)
    }

    pub fn due_date_range(&self) -> DueDateRange {
        DueDateRange::around(self.config.due_date)
    }

    pub fn term_status(&self) -> TermStatus {
        TermStatus::from_weeks(self.week())
    }
}
