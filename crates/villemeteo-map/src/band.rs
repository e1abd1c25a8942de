//! Population banding.

use serde::{Deserialize, Serialize};

/// Fill colors used on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillColor {
    #[default]
    White,
    LightGreen,
    Yellow,
    Orange,
    Pink,
    Red,
    /// Department containing a commune from the current search
    Black,
}

impl FillColor {
    /// CSS color keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            FillColor::White => "white",
            FillColor::LightGreen => "lightgreen",
            FillColor::Yellow => "yellow",
            FillColor::Orange => "orange",
            FillColor::Pink => "pink",
            FillColor::Red => "red",
            FillColor::Black => "black",
        }
    }
}

impl std::fmt::Display for FillColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Population tier of a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTier {
    /// No rule matched (exact 500,000)
    #[default]
    Default,
    UpTo500k,
    Over500k,
    Over1M,
    Over1_5M,
    Over2M,
}

impl ColorTier {
    pub fn fill(self) -> FillColor {
        match self {
            ColorTier::Default => FillColor::White,
            ColorTier::UpTo500k => FillColor::LightGreen,
            ColorTier::Over500k => FillColor::Yellow,
            ColorTier::Over1M => FillColor::Orange,
            ColorTier::Over1_5M => FillColor::Pink,
            ColorTier::Over2M => FillColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Below(u64),
    Above(u64),
}

impl Rule {
    fn matches(self, population: u64) -> bool {
        match self {
            Rule::Below(threshold) => population < threshold,
            Rule::Above(threshold) => population > threshold,
        }
    }
}

/// Evaluated in order; the last matching rule wins.
const BANDS: [(Rule, ColorTier); 5] = [
    (Rule::Below(500_000), ColorTier::UpTo500k),
    (Rule::Above(500_000), ColorTier::Over500k),
    (Rule::Above(1_000_000), ColorTier::Over1M),
    (Rule::Above(1_500_000), ColorTier::Over1_5M),
    (Rule::Above(2_000_000), ColorTier::Over2M),
];

/// Tier for a department population.
///
/// Comparisons are strict, so exactly 500,000 matches no rule and stays
/// [`ColorTier::Default`].
pub fn band(population: u64) -> ColorTier {
    BANDS
        .iter()
        .filter(|(rule, _)| rule.matches(population))
        .last()
        .map_or(ColorTier::Default, |(_, tier)| *tier)
}
