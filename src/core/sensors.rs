//! Sensor readings
//!
//! Each [`SensorKind`] turns a [`TrackerContext`] into one state value plus
//! a set of attributes, mirroring how a home-automation host exposes the
//! tracker. Readings are recomputed on every call.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::core::config::DATE_FORMAT;
use crate::core::context::TrackerContext;
use crate::data::ComparisonMode;

/// Every sensor a tracker exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Weeks,
    DaysElapsed,
    DaysRemaining,
    Percent,
    Trimester,
    Status,
    SizeComparison,
    DadSizeComparison,
    SizeComparisonImage,
    Countdown,
    DueDateRange,
    WeeklySummary,
    Milestone,
    BibleVerse,
    BibleVerseReference,
}

impl SensorKind {
    pub const ALL: [SensorKind; 15] = [
        SensorKind::Weeks,
        SensorKind::DaysElapsed,
        SensorKind::DaysRemaining,
        SensorKind::Percent,
        SensorKind::Trimester,
        SensorKind::Status,
        SensorKind::SizeComparison,
        SensorKind::DadSizeComparison,
        SensorKind::SizeComparisonImage,
        SensorKind::Countdown,
        SensorKind::DueDateRange,
        SensorKind::WeeklySummary,
        SensorKind::Milestone,
        SensorKind::BibleVerse,
        SensorKind::BibleVerseReference,
    ];

    /// Stable key, also the unique id suffix
    pub fn key(&self) -> &'static str {
        match self {
            SensorKind::Weeks => "weeks",
            SensorKind::DaysElapsed => "days_elapsed",
            SensorKind::DaysRemaining => "days_remaining",
            SensorKind::Percent => "percent",
            SensorKind::Trimester => "trimester",
            SensorKind::Status => "status",
            SensorKind::SizeComparison => "size_comparison",
            SensorKind::DadSizeComparison => "dad_size_comparison",
            SensorKind::SizeComparisonImage => "size_comparison_image",
            SensorKind::Countdown => "countdown",
            SensorKind::DueDateRange => "due_date_range",
            SensorKind::WeeklySummary => "weekly_summary",
            SensorKind::Milestone => "milestone",
            SensorKind::BibleVerse => "bible_verse",
            SensorKind::BibleVerseReference => "bible_verse_reference",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SensorKind::Weeks => "Weeks",
            SensorKind::DaysElapsed => "Days Elapsed",
            SensorKind::DaysRemaining => "Days Remaining",
            SensorKind::Percent => "Percent Complete",
            SensorKind::Trimester => "Trimester",
            SensorKind::Status => "Status",
            SensorKind::SizeComparison => "Size Comparison",
            SensorKind::DadSizeComparison => "Dad Size Comparison",
            SensorKind::SizeComparisonImage => "Size Comparison Image",
            SensorKind::Countdown => "Countdown",
            SensorKind::DueDateRange => "Due Date Range",
            SensorKind::WeeklySummary => "Weekly Summary",
            SensorKind::Milestone => "Milestone",
            SensorKind::BibleVerse => "Bible Verse",
            SensorKind::BibleVerseReference => "Bible Verse Reference",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SensorKind::Weeks => "mdi:calendar-week",
            SensorKind::DaysElapsed => "mdi:calendar-check",
            SensorKind::DaysRemaining => "mdi:calendar-clock",
            SensorKind::Percent => "mdi:percent",
            SensorKind::Trimester => "mdi:numeric",
            SensorKind::Status => "mdi:information",
            SensorKind::SizeComparison | SensorKind::DadSizeComparison => "mdi:ruler",
            SensorKind::SizeComparisonImage => "mdi:image-outline",
            SensorKind::Countdown => "mdi:timer-outline",
            SensorKind::DueDateRange => "mdi:calendar-range",
            SensorKind::WeeklySummary => "mdi:text-box-outline",
            SensorKind::Milestone => "mdi:trophy-outline",
            SensorKind::BibleVerse => "mdi:book-open-variant",
            SensorKind::BibleVerseReference => "mdi:bookmark-outline",
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            SensorKind::Weeks => Some("weeks"),
            SensorKind::DaysElapsed | SensorKind::DaysRemaining => Some("days"),
            SensorKind::Percent => Some("%"),
            _ => None,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.key() == key)
    }

    /// Compute this sensor's reading for a tracker
    pub fn read(&self, ctx: &TrackerContext<'_>) -> SensorReading {
        let (state, attributes) = self.compute(ctx);
        let attributes = match attributes {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        SensorReading {
            key: self.key(),
            unique_id: format!("{}_{}", ctx.config().entry_id, self.key()),
            name: self.name(),
            icon: self.icon(),
            unit: self.unit(),
            state,
            attributes,
        }
    }

    fn compute(&self, ctx: &TrackerContext<'_>) -> (Value, Value) {
        let snap = ctx.snapshot();
        let week = ctx.week();
        let due_date = ctx.config().due_date.format(DATE_FORMAT).to_string();

        match self {
            SensorKind::Weeks => (
                json!(snap.weeks_elapsed),
                json!({
                    "days_into_week": snap.days_into_week,
                    "week_description": snap.week_description(),
                }),
            ),
            SensorKind::DaysElapsed => (json!(snap.days_elapsed), json!({})),
            SensorKind::DaysRemaining => {
                (json!(snap.days_remaining), json!({ "due_date": due_date }))
            }
            SensorKind::Percent => (json!(snap.percent_complete), json!({})),
            SensorKind::Trimester => (
                json!(snap.trimester.number()),
                json!({ "trimester_name": snap.trimester.name() }),
            ),
            SensorKind::Status => (
                json!(snap.status.label()),
                json!({ "status": snap.status.as_str() }),
            ),
            SensorKind::SizeComparison => {
                let mut attrs = comparison_attributes(ctx);
                attrs.insert("mode".into(), json!(ctx.config().comparison_mode.as_str()));
                (json!(ctx.configured_comparison().label), Value::Object(attrs))
            }
            SensorKind::DadSizeComparison => (
                json!(ctx.comparison(ComparisonMode::Dad).label),
                Value::Object(comparison_attributes(ctx)),
            ),
            SensorKind::SizeComparisonImage => (
                json!(ctx.comparison(ComparisonMode::Veggie).image),
                Value::Object(comparison_attributes(ctx)),
            ),
            SensorKind::Countdown => (
                json!(ctx.countdown()),
                json!({
                    "days_remaining": snap.days_remaining,
                    "weeks_remaining": snap.days_remaining.div_euclid(7),
                    "days_in_week": snap.days_remaining.rem_euclid(7),
                    "due_date": due_date,
                }),
            ),
            SensorKind::DueDateRange => {
                let range = ctx.due_date_range();
                (
                    json!(range.display()),
                    json!({
                        "early_date": range.early_date.format(DATE_FORMAT).to_string(),
                        "due_date": due_date,
                        "late_date": range.late_date.format(DATE_FORMAT).to_string(),
                        "term_status": ctx.term_status().label(),
                    }),
                )
            }
            SensorKind::WeeklySummary => (json!(ctx.summary()), json!({ "week": week })),
            SensorKind::Milestone => {
                let progress = ctx.milestones();
                let (next_name, next_weeks) = match &progress.next {
                    Some(next) => (json!(next.name), json!(next.weeks_to_go)),
                    None => (Value::Null, Value::Null),
                };
                (
                    json!(progress.current),
                    json!({
                        "week": week,
                        "milestone_count": progress.reached.len(),
                        "milestones_reached": progress.reached,
                        "next_milestone": next_name,
                        "weeks_to_next_milestone": next_weeks,
                    }),
                )
            }
            SensorKind::BibleVerse => {
                let verse = ctx.verse();
                (
                    json!(verse.text),
                    json!({
                        "week": week,
                        "reference": verse.reference,
                        "text": verse.text,
                        "custom_verses_enabled": ctx.has_custom_verses(),
                    }),
                )
            }
            SensorKind::BibleVerseReference => {
                let verse = ctx.verse();
                let parts = ctx.reference();
                (
                    json!(parts.book_and_chapter),
                    json!({
                        "week": week,
                        "book": parts.book,
                        "chapter": parts.chapter,
                        "verse": parts.verse,
                        "full_reference": verse.reference,
                    }),
                )
            }
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

fn comparison_attributes(ctx: &TrackerContext<'_>) -> Map<String, Value> {
    let all = ctx.all_comparisons();
    let mut attrs = Map::new();
    attrs.insert("week".into(), json!(ctx.week()));
    attrs.insert("veggie".into(), json!(all.veggie.label));
    attrs.insert("veggie_image".into(), json!(all.veggie.image));
    attrs.insert("veggie_emoji".into(), json!(all.veggie.emoji));
    attrs.insert("dad".into(), json!(all.dad.label));
    attrs.insert("dad_image".into(), json!(all.dad.image));
    attrs.insert("dad_emoji".into(), json!(all.dad.emoji));
    attrs
}

/// One sensor's computed value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub key: &'static str,
    pub unique_id: String,
    pub name: &'static str,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    pub state: Value,
    pub attributes: Map<String, Value>,
}

impl SensorReading {
    /// State rendered for display, with the unit appended when present
    pub fn display_state(&self) -> String {
        let state = match &self.state {
            Value::String(s) => s.clone(),
            Value::Null => "unknown".to_string(),
            other => other.to_string(),
        };
        match self.unit {
            Some(unit) => format!("{} {}", state, unit),
            None => state,
        }
    }
}

/// Read every sensor for a tracker
pub fn read_all(ctx: &TrackerContext<'_>) -> Vec<SensorReading> {
    SensorKind::ALL.iter().map(|kind| kind.read(ctx)).collect()
}
