//! Library-level tests for the week tables, clock and verse overrides

use chrono::NaiveDate;
use pregtrack::core::{
    countdown, load_overrides, parse_reference, snapshot, OverrideCache, PregnancyStatus,
    VerseBook,
};
use pregtrack::data::{
    lookup_comparison, lookup_summary, lookup_verse, ComparisonMode, WeekIndex, MAX_WEEK,
};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ============================================================================
// Week table tests
// ============================================================================

#[test]
fn test_lookups_clamp_out_of_range_weeks() {
    for week in [-100, -1, 0] {
        assert_eq!(lookup_summary(week), lookup_summary(1));
        assert_eq!(lookup_verse(week), lookup_verse(1));
        assert_eq!(
            lookup_comparison(week, ComparisonMode::Veggie),
            lookup_comparison(1, ComparisonMode::Veggie)
        );
    }
    for week in [43, 60, i64::MAX] {
        assert_eq!(lookup_summary(week), lookup_summary(42));
        assert_eq!(lookup_verse(week), lookup_verse(42));
        assert_eq!(
            lookup_comparison(week, ComparisonMode::Dad),
            lookup_comparison(42, ComparisonMode::Dad)
        );
    }
}

#[test]
fn test_every_week_has_data() {
    assert_eq!(WeekIndex::all().count(), MAX_WEEK as usize);
    for week in WeekIndex::all() {
        let w = week.get() as i64;
        assert!(!lookup_summary(w).is_empty());
        assert!(!lookup_verse(w).text.is_empty());
        assert!(!lookup_comparison(w, ComparisonMode::Veggie).label.is_empty());
        assert!(!lookup_comparison(w, ComparisonMode::Dad).label.is_empty());
    }
}

#[test]
fn test_custom_mode_uses_veggie_table() {
    for week in WeekIndex::all() {
        let w = week.get() as i64;
        assert_eq!(
            lookup_comparison(w, ComparisonMode::Custom).label,
            lookup_comparison(w, ComparisonMode::Veggie).label
        );
    }
}

#[test]
fn test_builtin_references_parse() {
    for week in WeekIndex::all() {
        let verse = lookup_verse(week.get() as i64);
        let parts = parse_reference(&verse.reference);
        assert!(!parts.book.is_empty(), "week {} has no book", week);
        assert!(!parts.chapter.is_empty(), "week {} has no chapter", week);
        assert_eq!(
            parts.book_and_chapter,
            format!("{} {}", parts.book, parts.chapter)
        );
    }
}

// ============================================================================
// Clock tests
// ============================================================================

#[test]
fn test_percent_is_monotonic_and_bounded() {
    let due = date("2025-12-31");
    let mut today = date("2025-03-01");
    let mut last = 0.0;

    while today <= date("2026-02-01") {
        let snap = snapshot(due, 280, today);
        assert!((0.0..=100.0).contains(&snap.percent_complete));
        assert!(snap.percent_complete >= last);
        assert_eq!(snap.days_elapsed + snap.days_remaining, 280);
        last = snap.percent_complete;
        today = today.succ_opt().unwrap();
    }
    assert_eq!(last, 100.0);
}

#[test]
fn test_status_transitions() {
    let due = date("2025-12-31");
    assert_eq!(
        snapshot(due, 280, date("2025-03-01")).status,
        PregnancyStatus::NotStarted
    );
    assert_eq!(
        snapshot(due, 280, date("2025-03-26")).status,
        PregnancyStatus::JustStarted
    );
    assert_eq!(
        snapshot(due, 280, date("2025-10-02")).status,
        PregnancyStatus::InProgress
    );
    assert_eq!(
        snapshot(due, 280, date("2025-12-31")).status,
        PregnancyStatus::DueToday
    );
    assert_eq!(
        snapshot(due, 280, date("2026-01-01")).status,
        PregnancyStatus::Overdue
    );
}

#[test]
fn test_snapshot_before_start_clamps_weeks() {
    let snap = snapshot(date("2025-12-31"), 280, date("2025-03-01"));
    assert_eq!(snap.days_elapsed, -25);
    assert_eq!(snap.weeks_elapsed, 0);
    assert_eq!(snap.days_into_week, 0);
    assert_eq!(snap.percent_complete, 0.0);
}

#[test]
fn test_countdown_formats() {
    insta::assert_snapshot!(countdown(90), @"12w 6d");
    insta::assert_snapshot!(countdown(5), @"5 days");
    insta::assert_snapshot!(countdown(0), @"Due today!");
    insta::assert_snapshot!(countdown(-3), @"Overdue by 3 days");
}

// ============================================================================
// Verse override tests
// ============================================================================

#[test]
fn test_override_file_mixed_entries() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("verses.json");
    fs::write(
        &path,
        r#"{
            "1": "Plain text",
            "2": {"text": "With reference", "reference": "John 3:16"},
            "3": {"reference": "Missing text"},
            "50": "Out of range",
            "week4": "Bad key"
        }"#,
    )
    .unwrap();

    let overrides = load_overrides(path.to_str().unwrap(), None);
    assert_eq!(overrides.len(), 2);

    let book = VerseBook::new(Arc::new(overrides));
    assert_eq!(book.lookup(1).text, "Plain text");
    assert_eq!(book.lookup(1).reference, "");
    assert_eq!(book.lookup(2).reference, "John 3:16");
    assert_eq!(book.lookup(3), lookup_verse(3));
    assert_eq!(book.lookup(4), lookup_verse(4));
}

#[test]
fn test_unusable_override_sources_fall_back() {
    let tmp = TempDir::new().unwrap();
    let broken = tmp.path().join("broken.json");
    fs::write(&broken, "[1, 2, 3]").unwrap();

    for source in [
        broken.to_str().unwrap(),
        "/definitely/not/here.json",
        "{ not json",
        "",
    ] {
        let book = VerseBook::new(Arc::new(load_overrides(source, None)));
        assert!(!book.has_overrides(), "{:?} produced overrides", source);
        assert_eq!(book.lookup(27), lookup_verse(27));
    }
}

#[test]
fn test_override_cache_reloads_after_invalidate() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("verses.json");
    fs::write(&path, r#"{"5": "First"}"#).unwrap();

    let mut cache = OverrideCache::new(Some(tmp.path().to_path_buf()));
    assert_eq!(cache.get("verses.json").len(), 1);

    fs::write(&path, r#"{"5": "First", "6": "Second"}"#).unwrap();
    assert_eq!(cache.get("verses.json").len(), 1);

    assert!(cache.invalidate("verses.json"));
    assert_eq!(cache.get("verses.json").len(), 2);
}
