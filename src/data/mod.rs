//! Week-indexed data tables
//!
//! Immutable lookup tables keyed by pregnancy week (1-42): size comparisons,
//! development summaries and devotional verses. Every lookup clamps the week
//! into range first, so callers never see a missing entry.

pub mod comparisons;
pub mod summaries;
pub mod verses;
pub mod week;

pub use comparisons::{
    all_comparisons, dad_comparison, lookup_comparison, veggie_comparison, AllComparisons,
    ComparisonEntry, ComparisonMode, CustomComparison, CustomComparisons,
};
pub use summaries::lookup_summary;
pub use verses::{lookup_verse, VerseEntry};
pub use week::{WeekIndex, MAX_WEEK, MIN_WEEK};
