//! Mood categories driving every lookup in the acquisition pipeline

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// Closed set of mood labels.
///
/// Every source list, prompt list, palette and cache partition is keyed by
/// one of these. Unknown labels are never rejected; [`Category::normalize`]
/// maps them onto [`Category::Neutral`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Angry,
    Disgust,
    Fear,
    Happy,
    Neutral,
    Sad,
    Surprise,
}

impl Category {
    /// Category used for any label outside the closed set
    pub const DEFAULT: Category = Category::Neutral;

    /// Map an arbitrary caller label onto the closed set.
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn normalize(label: &str) -> Self {
        let cleaned = label.trim().to_ascii_lowercase();
        Self::from_str(&cleaned).unwrap_or(Self::DEFAULT)
    }

    /// All categories in declaration order
    pub fn all() -> impl Iterator<Item = Category> {
        Self::iter()
    }

    /// Stable lowercase name, also used as the cache sub-directory
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("happy", Category::Happy)]
    #[case("SAD", Category::Sad)]
    #[case("  Surprise ", Category::Surprise)]
    #[case("disgust", Category::Disgust)]
    #[case("joy", Category::Neutral)]
    #[case("", Category::Neutral)]
    #[case("angry!", Category::Neutral)]
    fn test_normalize(#[case] label: &str, #[case] expected: Category) {
        assert_eq!(Category::normalize(label), expected);
    }

    #[test]
    fn test_closed_set_has_seven_members() {
        assert_eq!(Category::COUNT, 7);
        assert_eq!(Category::all().count(), 7);
    }

    #[test]
    fn test_display_round_trips_through_normalize() {
        for category in Category::all() {
            assert_eq!(Category::normalize(&category.to_string()), category);
            assert_eq!(category.as_str(), category.to_string());
        }
    }
}
