//! Pregnancy milestones

use serde::Serialize;

/// A milestone reached at a fixed week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub name: &'static str,
    pub week: i64,
}

/// All milestones in week order
pub const MILESTONES: [Milestone; 6] = [
    Milestone { name: "Heartbeat detected", week: 5 },
    Milestone { name: "Second trimester", week: 13 },
    Milestone { name: "Viability", week: 24 },
    Milestone { name: "Third trimester", week: 27 },
    Milestone { name: "Full term", week: 37 },
    Milestone { name: "Due date", week: 40 },
];

/// The next milestone and how far away it is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextMilestone {
    pub name: &'static str,
    pub weeks_to_go: i64,
}

/// Milestone progress for one week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneProgress {
    pub week: i64,
    pub current: &'static str,
    pub reached: Vec<String>,
    pub next: Option<NextMilestone>,
}

/// Label for the latest milestone reached by `week`
pub fn current_label(week: i64) -> &'static str {
    match MILESTONES.iter().rev().find(|m| week >= m.week) {
        None => "Early pregnancy",
        Some(m) if m.name == "Due date" => "Due date reached!",
        Some(m) => m.name,
    }
}

/// Milestones reached so far, formatted `"Viability (Week 24)"`
pub fn reached(week: i64) -> Vec<String> {
    MILESTONES
        .iter()
        .filter(|m| week >= m.week)
        .map(|m| format!("{} (Week {})", m.name, m.week))
        .collect()
}

/// The first milestone not yet reached
pub fn next(week: i64) -> Option<NextMilestone> {
    MILESTONES
        .iter()
        .find(|m| week < m.week)
        .map(|m| NextMilestone {
            name: m.name,
            weeks_to_go: m.week - week,
        })
}

pub fn progress(week: i64) -> MilestoneProgress {
    MilestoneProgress {
        week,
        current: current_label(week),
        reached: reached(week),
        next: next(week),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_label() {
        assert_eq!(current_label(0), "Early pregnancy");
        assert_eq!(current_label(4), "Early pregnancy");
        assert_eq!(current_label(5), "Heartbeat detected");
        assert_eq!(current_label(23), "Second trimester");
        assert_eq!(current_label(24), "Viability");
        assert_eq!(current_label(38), "Full term");
        assert_eq!(current_label(40), "Due date reached!");
        assert_eq!(current_label(42), "Due date reached!");
    }

    #[test]
    fn test_reached_list() {
        assert!(reached(4).is_empty());
        assert_eq!(
            reached(25),
            vec![
                "Heartbeat detected (Week 5)",
                "Second trimester (Week 13)",
                "Viability (Week 24)",
            ]
        );
        assert_eq!(reached(40).len(), 6);
    }

    #[test]
    fn test_next_milestone() {
        assert_eq!(
            next(0),
            Some(NextMilestone { name: "Heartbeat detected", weeks_to_go: 5 })
        );
        assert_eq!(
            next(27),
            Some(NextMilestone { name: "Full term", weeks_to_go: 10 })
        );
        assert_eq!(next(40), None);
    }
}
