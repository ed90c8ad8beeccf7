//! Pregnancy clock - progress derived from a due date
//!
//! Everything here is a pure function of `(due_date, gestation_days, today)`.
//! Nothing is cached: a snapshot is recomputed on every read.

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Default gestation length (40 weeks)
pub const DEFAULT_GESTATION_DAYS: u32 = 280;

/// Days either side of the due date covered by the due-date range
pub const DUE_RANGE_DAYS: u64 = 14;

/// Trimester of the pregnancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub fn from_weeks(weeks: i64) -> Self {
        if weeks < 13 {
            Trimester::First
        } else if weeks < 27 {
            Trimester::Second
        } else {
            Trimester::Third
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Trimester::First => "First Trimester",
            Trimester::Second => "Second Trimester",
            Trimester::Third => "Third Trimester",
        }
    }
}

impl From<Trimester> for u8 {
    fn from(trimester: Trimester) -> Self {
        trimester.number()
    }
}

impl std::fmt::Display for Trimester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Where the pregnancy stands relative to its start and due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PregnancyStatus {
    /// Today is before the computed start date
    NotStarted,
    JustStarted,
    InProgress,
    DueToday,
    Overdue,
}

impl PregnancyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PregnancyStatus::NotStarted => "not_started",
            PregnancyStatus::JustStarted => "just_started",
            PregnancyStatus::InProgress => "in_progress",
            PregnancyStatus::DueToday => "due_today",
            PregnancyStatus::Overdue => "overdue",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            PregnancyStatus::NotStarted => "Not Started",
            PregnancyStatus::JustStarted => "Just Started",
            PregnancyStatus::InProgress => "In Progress",
            PregnancyStatus::DueToday => "Due Today",
            PregnancyStatus::Overdue => "Overdue",
        }
    }
}

impl std::fmt::Display for PregnancyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Progress values for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PregnancySnapshot {
    pub days_elapsed: i64,
    pub days_remaining: i64,
    /// Whole weeks since the start, never negative
    pub weeks_elapsed: i64,
    pub days_into_week: i64,
    /// 0.0-100.0, one decimal place
    pub percent_complete: f64,
    pub trimester: Trimester,
    pub status: PregnancyStatus,
}

impl PregnancySnapshot {
    /// `"W+D"` notation, e.g. `"27+0"`
    pub fn week_description(&self) -> String {
        format!("{}+{}", self.weeks_elapsed, self.days_into_week)
    }
}

/// First day of the pregnancy for a due date
pub fn start_date(due_date: NaiveDate, gestation_days: u32) -> NaiveDate {
    due_date
        .checked_sub_days(Days::new(gestation_days as u64))
        .unwrap_or(NaiveDate::MIN)
}

/// Compute the snapshot for `today`
pub fn snapshot(due_date: NaiveDate, gestation_days: u32, today: NaiveDate) -> PregnancySnapshot {
    let gestation_days = gestation_days.max(1);
    let start = start_date(due_date, gestation_days);

    let days_elapsed = (today - start).num_days();
    let days_remaining = (due_date - today).num_days();

    let (weeks_elapsed, days_into_week) = if days_elapsed < 0 {
        (0, 0)
    } else {
        (days_elapsed / 7, days_elapsed % 7)
    };

    let raw_percent = days_elapsed as f64 / gestation_days as f64 * 100.0;
    let percent_complete = (raw_percent.clamp(0.0, 100.0) * 10.0).round() / 10.0;

    let status = if days_remaining < 0 {
        PregnancyStatus::Overdue
    } else if days_remaining == 0 {
        PregnancyStatus::DueToday
    } else if days_elapsed < 0 {
        PregnancyStatus::NotStarted
    } else if weeks_elapsed < 1 {
        PregnancyStatus::JustStarted
    } else {
        PregnancyStatus::InProgress
    };

    PregnancySnapshot {
        days_elapsed,
        days_remaining,
        weeks_elapsed,
        days_into_week,
        percent_complete,
        trimester: Trimester::from_weeks(weeks_elapsed),
        status,
    }
}

/// Countdown text for the days left until the due date
pub fn countdown(days_remaining: i64) -> String {
    if days_remaining < 0 {
        return format!("Overdue by {} days", days_remaining.abs());
    }
    if days_remaining == 0 {
        return "Due today!".to_string();
    }

    let weeks = days_remaining / 7;
    let days = days_remaining % 7;
    if weeks == 0 {
        format!("{} days", days_remaining)
    } else {
        format!("{}w {}d", weeks, days)
    }
}

/// Obstetric term classification by completed weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TermStatus {
    #[serde(rename = "Preterm")]
    Preterm,
    #[serde(rename = "Early term")]
    EarlyTerm,
    #[serde(rename = "Full term")]
    FullTerm,
    #[serde(rename = "Late term")]
    LateTerm,
    #[serde(rename = "Post term")]
    PostTerm,
}

impl TermStatus {
    pub fn from_weeks(weeks: i64) -> Self {
        match weeks {
            w if w < 37 => TermStatus::Preterm,
            w if w < 39 => TermStatus::EarlyTerm,
            w if w < 41 => TermStatus::FullTerm,
            w if w < 42 => TermStatus::LateTerm,
            _ => TermStatus::PostTerm,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TermStatus::Preterm => "Preterm",
            TermStatus::EarlyTerm => "Early term",
            TermStatus::FullTerm => "Full term",
            TermStatus::LateTerm => "Late term",
            TermStatus::PostTerm => "Post term",
        }
    }
}

impl std::fmt::Display for TermStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The window of likely delivery dates around the due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DueDateRange {
    pub early_date: NaiveDate,
    pub due_date: NaiveDate,
    pub late_date: NaiveDate,
}

impl DueDateRange {
    pub fn around(due_date: NaiveDate) -> Self {
        let span = Days::new(DUE_RANGE_DAYS);
        Self {
            early_date: due_date.checked_sub_days(span).unwrap_or(due_date),
            due_date,
            late_date: due_date.checked_add_days(span).unwrap_or(due_date),
        }
    }

    /// `"Dec 17 - Jan 14"`
    pub fn display(&self) -> String {
        format!(
            "{} - {}",
            self.early_date.format("%b %d"),
            self.late_date.format("%b %d")
        )
    }
}
