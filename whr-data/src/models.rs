//! Model structs for the regional indicators pipeline.
//!
//! Long-format rows derive `Serialize` so they can be passed to D3.js as
//! JSON from the Dioxus WASM frontend.

use serde::Serialize;

/// The four happiness indicators compared on the dashboard.
///
/// Each variant maps to a CSV header in the WHR 2021 file and to the
/// snake_case label used on the chart's x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    LadderScore,
    SocialSupport,
    HealthyLifeExpectancy,
    FreedomToMakeLifeChoices,
}

impl Indicator {
    /// All indicators, in CSV column order.
    pub const ALL: [Indicator; 4] = [
        Indicator::LadderScore,
        Indicator::SocialSupport,
        Indicator::HealthyLifeExpectancy,
        Indicator::FreedomToMakeLifeChoices,
    ];

    /// Header name in the source CSV.
    pub fn column(&self) -> &'static str {
        match self {
            Indicator::LadderScore => "Ladder score",
            Indicator::SocialSupport => "Social support",
            Indicator::HealthyLifeExpectancy => "Healthy life expectancy",
            Indicator::FreedomToMakeLifeChoices => "Freedom to make life choices",
        }
    }

    /// Chart label (also the sort key for the long table).
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::LadderScore => "ladder_score",
            Indicator::SocialSupport => "social_support",
            Indicator::HealthyLifeExpectancy => "healthy_life_expectancy",
            Indicator::FreedomToMakeLifeChoices => "freedom_to_make_life_choices",
        }
    }

    /// Position within [`Indicator::ALL`], used to index per-record score arrays.
    pub fn index(&self) -> usize {
        match self {
            Indicator::LadderScore => 0,
            Indicator::SocialSupport => 1,
            Indicator::HealthyLifeExpectancy => 2,
            Indicator::FreedomToMakeLifeChoices => 3,
        }
    }
}

/// One raw CSV row: a country with its region label and indicator scores.
///
/// Scores are `None` where the source cell is empty or non-numeric; such
/// cells are excluded from both the sum and the count when averaging.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub country: String,
    pub region: String,
    /// Indexed by [`Indicator::index`].
    pub scores: [Option<f64>; 4],
}

/// One aggregated (and later normalized) row per distinct region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionAggregate {
    pub region: String,
    /// Per-indicator mean, indexed by [`Indicator::index`].
    pub means: [f64; 4],
}

/// A single long-format row: one (region, indicator) pair with its
/// normalized value. The chart consumes these directly as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorValue {
    pub region: String,
    /// Serializes as the snake_case label, matching [`Indicator::label`].
    pub indicator: Indicator,
    pub value: f64,
}

/// Region filter input: a single region name or a list of names.
///
/// The upstream control may hand over either shape; `names()` normalizes
/// both to a slice so the filter treats `Single(r)` exactly like
/// `Many([r])`.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionSelection {
    Single(String),
    Many(Vec<String>),
}

impl RegionSelection {
    /// The selected region names as a slice.
    pub fn names(&self) -> &[String] {
        match self {
            RegionSelection::Single(name) => std::slice::from_ref(name),
            RegionSelection::Many(names) => names,
        }
    }

    pub fn contains(&self, region: &str) -> bool {
        self.names().iter().any(|n| n == region)
    }
}

/// Inclusive value band for the range filter.
///
/// Precondition (enforced by the range control): 0 <= low <= high <= 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
}

impl ValueRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_indices_match_all_order() {
        for (i, ind) in Indicator::ALL.iter().enumerate() {
            assert_eq!(ind.index(), i);
        }
    }

    #[test]
    fn single_selection_matches_one_element_list() {
        let single = RegionSelection::Single("East Asia".to_string());
        let many = RegionSelection::Many(vec!["East Asia".to_string()]);
        assert_eq!(single.names(), many.names());
        assert!(single.contains("East Asia"));
        assert!(!single.contains("Western Europe"));
    }

    #[test]
    fn value_range_is_inclusive_at_both_ends() {
        let range = ValueRange::new(0.2, 0.8);
        assert!(range.contains(0.2));
        assert!(range.contains(0.8));
        assert!(!range.contains(0.19999));
        assert!(!range.contains(0.80001));
    }

    #[test]
    fn indicator_value_serializes_with_snake_case_label() {
        let row = IndicatorValue {
            region: "East Asia".to_string(),
            indicator: Indicator::HealthyLifeExpectancy,
            value: 0.5,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["indicator"], "healthy_life_expectancy");
        assert_eq!(json["region"], "East Asia");
    }
}
