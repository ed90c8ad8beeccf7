//! Pregnancy Tracker
//!
//! Week-by-week pregnancy progress computed from a due date: elapsed and
//! remaining time, trimester, size comparisons, development summaries,
//! milestones and a devotional verse for each week.

pub mod cli;
pub mod core;
pub mod data;
pub mod logging;
pub mod report;
