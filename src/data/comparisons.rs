//! Size comparisons - what the baby measures up to, week by week
//!
//! Two built-in modes ship with the crate (vegetables and "dad objects").
//! A third, custom mode is filled from user configuration and falls back
//! to the vegetable table for any week it leaves out.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::week::WeekIndex;

/// Which comparison content to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    #[default]
    Veggie,
    Dad,
    Custom,
}

impl ComparisonMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Veggie => "veggie",
            ComparisonMode::Dad => "dad",
            ComparisonMode::Custom => "custom",
        }
    }

    /// Parse a mode name, treating anything unrecognized as `Veggie`
    pub fn from_str_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "dad" => ComparisonMode::Dad,
            "custom" => ComparisonMode::Custom,
            _ => ComparisonMode::Veggie,
        }
    }
}

impl std::fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One comparison: a label plus optional emoji and image path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Both built-in comparisons for a week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllComparisons {
    pub week: WeekIndex,
    pub veggie: ComparisonEntry,
    pub dad: ComparisonEntry,
}

struct Row {
    veggie: &'static str,
    veggie_emoji: &'static str,
    dad: &'static str,
    dad_emoji: &'static str,
}

const fn row(
    veggie: &'static str,
    veggie_emoji: &'static str,
    dad: &'static str,
    dad_emoji: &'static str,
) -> Row {
    Row {
        veggie,
        veggie_emoji,
        dad,
        dad_emoji,
    }
}

static COMPARISONS: [Row; 42] = [
    row("Poppy seed", "🌱", "Dad's cologne sample", "🧴"),
    row("Sesame seed", "🌾", "Dad's tie clip", "👔"),
    row("Peppercorn", "⚫", "Dad's collar stay", "👕"),
    row("Lentil", "🫘", "Dad's cufflink", "🔘"),
    row("Apple seed", "🍎", "Dad's guitar pick", "🎸"),
    row("Sweet pea", "🫛", "Dad's dice", "🎲"),
    row("Blueberry", "🫐", "Dad's USB drive", "💾"),
    row("Raspberry", "🍇", "Dad's golf tee", "⛳"),
    row("Cherry", "🍒", "Dad's bottle cap", "🍾"),
    row("Strawberry", "🍓", "Dad's house key", "🔑"),
    row("Brussels sprout", "🥬", "Dad's poker chip", "🪙"),
    row("Plum", "🍑", "Dad's AirPods case", "🎧"),
    row("Lemon", "🍋", "Dad's remote control", "📺"),
    row("Peach", "🍑", "Dad's coffee mug", "☕"),
    row("Apple", "🍎", "Dad's baseball", "⚾"),
    row("Avocado", "🥑", "Dad's favorite beer", "🍺"),
    row("Turnip", "🥔", "Dad's gaming controller", "🎮"),
    row("Bell pepper", "🫑", "Dad's wallet", "👛"),
    row("Mango", "🥭", "Dad's running shoe", "👟"),
    row("Banana", "🍌", "Dad's laptop charger", "🔌"),
    row("Carrot", "🥕", "Dad's tablet", "📱"),
    row("Papaya", "🥭", "Dad's sneaker", "👟"),
    row("Grapefruit", "🍊", "Dad's iPad", "📱"),
    row("Cantaloupe", "🍈", "Dad's laptop", "💻"),
    row("Cauliflower", "🥦", "Dad's toolbox", "🧰"),
    row("Lettuce head", "🥬", "Dad's briefcase", "💼"),
    row("Cabbage", "🥬", "Dad's basketball", "🏀"),
    row("Eggplant", "🍆", "Dad's bowling ball", "🎳"),
    row("Butternut squash", "🎃", "Dad's backpack", "🎒"),
    row("Large cabbage", "🥬", "Dad's monitor", "🖥️"),
    row("Coconut", "🥥", "Dad's guitar", "🎸"),
    row("Jicama", "🥔", "Dad's golf bag", "🏌️"),
    row("Pineapple", "🍍", "Dad's grill cover", "🔥"),
    row("Honeydew melon", "🍈", "Dad's cooler", "🧊"),
    row("Large honeydew melon", "🍈", "Dad's tackle box", "🎣"),
    row("Romaine lettuce", "🥬", "Dad's lawn mower", "🚜"),
    row("Swiss chard", "🥬", "Dad's tool chest", "🧰"),
    row("Leek", "🧅", "Dad's recliner", "🛋️"),
    row("Mini watermelon", "🍉", "Dad's TV", "📺"),
    row("Small pumpkin", "🎃", "Dad's grill", "🍖"),
    row("Pumpkin", "🎃", "Dad's workbench", "🔨"),
    row("Watermelon", "🍉", "Dad's car tire", "🛞"),
];

/// Web path of the bundled image for a built-in mode
pub fn image_path(mode: ComparisonMode, week: WeekIndex) -> String {
    format!("/local/pregnancy_tracker/{}/week_{}.png", mode.as_str(), week)
}

/// Vegetable comparison for a week
pub fn veggie_comparison(week: i64) -> ComparisonEntry {
    let week = WeekIndex::clamp(week);
    let row = &COMPARISONS[week.offset()];
    ComparisonEntry {
        label: row.veggie.to_string(),
        emoji: Some(row.veggie_emoji.to_string()),
        image: Some(image_path(ComparisonMode::Veggie, week)),
    }
}

/// Dad-object comparison for a week
pub fn dad_comparison(week: i64) -> ComparisonEntry {
    let week = WeekIndex::clamp(week);
    let row = &COMPARISONS[week.offset()];
    ComparisonEntry {
        label: row.dad.to_string(),
        emoji: Some(row.dad_emoji.to_string()),
        image: Some(image_path(ComparisonMode::Dad, week)),
    }
}

/// Comparison for a week in the given mode
///
/// Custom mode has no table of its own here and yields the vegetable entry;
/// use [`CustomComparisons::lookup`] when user content is configured.
pub fn lookup_comparison(week: i64, mode: ComparisonMode) -> ComparisonEntry {
    match mode {
        ComparisonMode::Veggie | ComparisonMode::Custom => veggie_comparison(week),
        ComparisonMode::Dad => dad_comparison(week),
    }
}

/// Both built-in comparisons for a week
pub fn all_comparisons(week: i64) -> AllComparisons {
    AllComparisons {
        week: WeekIndex::clamp(week),
        veggie: veggie_comparison(week),
        dad: dad_comparison(week),
    }
}

/// A user-supplied comparison: either a bare label or a full entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomComparison {
    Label(String),
    Entry(ComparisonEntry),
}

impl CustomComparison {
    fn to_entry(&self) -> ComparisonEntry {
        match self {
            CustomComparison::Label(label) => ComparisonEntry {
                label: label.clone(),
                emoji: None,
                image: None,
            },
            CustomComparison::Entry(entry) => entry.clone(),
        }
    }
}

/// User-supplied comparisons keyed by week number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomComparisons(BTreeMap<u8, CustomComparison>);

impl CustomComparisons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, week: u8, comparison: CustomComparison) {
        self.0.insert(week, comparison);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Custom comparison for a week, falling back to the vegetable table
    pub fn lookup(&self, week: i64) -> ComparisonEntry {
        let index = WeekIndex::clamp(week);
        self.0
            .get(&index.get())
            .map(CustomComparison::to_entry)
            .unwrap_or_else(|| veggie_comparison(week))
    }

    /// Comparison in any mode, with this table backing custom mode
    pub fn resolve(&self, week: i64, mode: ComparisonMode) -> ComparisonEntry {
        match mode {
            ComparisonMode::Custom => self.lookup(week),
            other => lookup_comparison(week, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_week_has_builtin_entries() {
        for week in WeekIndex::all() {
            let w = week.get() as i64;
            assert!(!veggie_comparison(w).label.is_empty());
            assert!(!dad_comparison(w).label.is_empty());
        }
    }

    #[test]
    fn test_known_weeks() {
        assert_eq!(veggie_comparison(1).label, "Poppy seed");
        assert_eq!(veggie_comparison(27).label, "Cabbage");
        assert_eq!(dad_comparison(42).label, "Dad's car tire");
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(lookup_comparison(-3, ComparisonMode::Veggie), veggie_comparison(1));
        assert_eq!(lookup_comparison(0, ComparisonMode::Dad), dad_comparison(1));
        assert_eq!(lookup_comparison(99, ComparisonMode::Dad), dad_comparison(42));
    }

    #[test]
    fn test_image_path_format() {
        let entry = dad_comparison(12);
        assert_eq!(
            entry.image.as_deref(),
            Some("/local/pregnancy_tracker/dad/week_12.png")
        );
    }

    #[test]
    fn test_lenient_mode_parsing() {
        assert_eq!(ComparisonMode::from_str_lenient("dad"), ComparisonMode::Dad);
        assert_eq!(ComparisonMode::from_str_lenient(" Custom "), ComparisonMode::Custom);
        assert_eq!(ComparisonMode::from_str_lenient("veggie"), ComparisonMode::Veggie);
        assert_eq!(ComparisonMode::from_str_lenient("fruit"), ComparisonMode::Veggie);
        assert_eq!(ComparisonMode::from_str_lenient(""), ComparisonMode::Veggie);
    }

    #[test]
    fn test_custom_without_table_is_veggie() {
        assert_eq!(
            lookup_comparison(20, ComparisonMode::Custom),
            veggie_comparison(20)
        );
    }

    #[test]
    fn test_custom_table_falls_back_per_week() {
        let mut custom = CustomComparisons::new();
        custom.insert(10, CustomComparison::Label("Golf ball".to_string()));
        custom.insert(
            11,
            CustomComparison::Entry(ComparisonEntry {
                label: "Lime".to_string(),
                emoji: Some("🍋‍🟩".to_string()),
                image: None,
            }),
        );

        assert_eq!(custom.lookup(10).label, "Golf ball");
        assert_eq!(custom.lookup(10).emoji, None);
        assert_eq!(custom.lookup(11).label, "Lime");
        assert_eq!(custom.lookup(12), veggie_comparison(12));
        assert_eq!(custom.resolve(10, ComparisonMode::Dad), dad_comparison(10));
    }

    #[test]
    fn test_custom_table_from_yaml() {
        let yaml = "5: Grape\n6:\n  label: Kidney bean\n  emoji: \"🫘\"\n";
        let custom: CustomComparisons = serde_yml::from_str(yaml).unwrap();
        assert_eq!(custom.len(), 2);
        assert_eq!(custom.lookup(5).label, "Grape");
        assert_eq!(custom.lookup(6).emoji.as_deref(), Some("🫘"));
    }
}
