//! Week index - the key shared by every data table

use serde::{Deserialize, Serialize};

/// First week covered by the tables
pub const MIN_WEEK: u8 = 1;

/// Last week covered by the tables
pub const MAX_WEEK: u8 = 42;

/// A pregnancy week guaranteed to lie in `MIN_WEEK..=MAX_WEEK`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekIndex(u8);

impl WeekIndex {
    /// Clamp any week number into the table range
    pub fn clamp(week: i64) -> Self {
        Self(week.clamp(MIN_WEEK as i64, MAX_WEEK as i64) as u8)
    }

    /// Strict constructor, `None` when out of range
    pub fn new(week: u8) -> Option<Self> {
        (MIN_WEEK..=MAX_WEEK).contains(&week).then_some(Self(week))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based offset into a table of `MAX_WEEK` rows
    pub(crate) fn offset(self) -> usize {
        (self.0 - MIN_WEEK) as usize
    }

    /// Iterate over every week in the tables
    pub fn all() -> impl Iterator<Item = WeekIndex> {
        (MIN_WEEK..=MAX_WEEK).map(WeekIndex)
    }
}

impl From<i64> for WeekIndex {
    fn from(week: i64) -> Self {
        Self::clamp(week)
    }
}

impl std::fmt::Display for WeekIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(WeekIndex::clamp(-5).get(), 1);
        assert_eq!(WeekIndex::clamp(0).get(), 1);
        assert_eq!(WeekIndex::clamp(1).get(), 1);
        assert_eq!(WeekIndex::clamp(27).get(), 27);
        assert_eq!(WeekIndex::clamp(42).get(), 42);
        assert_eq!(WeekIndex::clamp(43).get(), 42);
        assert_eq!(WeekIndex::clamp(i64::MAX).get(), 42);
    }

    #[test]
    fn test_strict_constructor() {
        assert!(WeekIndex::new(0).is_none());
        assert!(WeekIndex::new(43).is_none());
        assert_eq!(WeekIndex::new(12).map(WeekIndex::get), Some(12));
    }

    #[test]
    fn test_all_covers_table() {
        let weeks: Vec<u8> = WeekIndex::all().map(WeekIndex::get).collect();
        assert_eq!(weeks.len(), 42);
        assert_eq!(weeks.first(), Some(&1));
        assert_eq!(weeks.last(), Some(&42));
    }
}
