//! The immutable dashboard dataset built once at startup.

use crate::models::{Indicator, IndicatorValue, RegionSelection, ValueRange};
use crate::{loader, pipeline};
use std::collections::BTreeMap;

/// Everything the dashboard needs after startup: the sorted long table,
/// the per-indicator region ordering index, and the distinct region list
/// for populating the selector.
///
/// Built once by [`DashboardData::from_csv`] and never mutated; every user
/// interaction is a pure [`filter`](DashboardData::filter) over it, so
/// concurrent interactions need no locking.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    sorted_long: Vec<IndicatorValue>,
    region_order: BTreeMap<Indicator, Vec<String>>,
    regions: Vec<String>,
}

impl DashboardData {
    /// Run the full startup pipeline on raw CSV text:
    /// load, aggregate, normalize, melt, sort, index.
    ///
    /// Any failure here (missing file content, missing columns, degenerate
    /// indicator column) is fatal: the dashboard does not start serving.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let records = loader::parse_happiness_csv(csv_data)?;
        let mut aggregates = pipeline::aggregate_by_region(&records)?;
        pipeline::min_max_scale(&mut aggregates)?;

        let regions: Vec<String> = aggregates.iter().map(|a| a.region.clone()).collect();

        let mut sorted_long = pipeline::melt(&aggregates);
        pipeline::sort_long(&mut sorted_long);
        let region_order = pipeline::region_order_index(&sorted_long);

        log::info!(
            "dataset: {} regions, {} long rows",
            regions.len(),
            sorted_long.len()
        );
        Ok(Self {
            sorted_long,
            region_order,
            regions,
        })
    }

    /// The sorted long table (indicator label asc, value desc).
    pub fn rows(&self) -> &[IndicatorValue] {
        &self.sorted_long
    }

    /// Distinct region names, ascending, for the selector options.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Region names in descending-value order for one indicator.
    pub fn region_order(&self, indicator: Indicator) -> &[String] {
        self.region_order
            .get(&indicator)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The full ordering index, for chart configuration.
    pub fn region_order_index(&self) -> &BTreeMap<Indicator, Vec<String>> {
        &self.region_order
    }

    /// The update operation's data half: every row of the sorted long
    /// table whose region is selected and whose value lies in `range`
    /// (inclusive both ends), in table order.
    ///
    /// Pure: identical inputs always produce identical output. An empty
    /// result is valid; the chart simply renders empty.
    pub fn filter(
        &self,
        selection: &RegionSelection,
        range: ValueRange,
    ) -> Vec<IndicatorValue> {
        self.sorted_long
            .iter()
            .filter(|row| selection.contains(&row.region) && range.contains(row.value))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Country name,Regional indicator,Ladder score,Social support,Healthy life expectancy,Freedom to make life choices
Finland,Western Europe,7.842,0.954,72.0,0.949
Denmark,Western Europe,7.620,0.954,72.7,0.946
Japan,East Asia,5.940,0.884,75.1,0.796
Taiwan Province of China,East Asia,6.584,0.898,69.6,0.784
Brazil,Latin America and Caribbean,6.330,0.882,66.6,0.838
";

    fn dataset() -> DashboardData {
        DashboardData::from_csv(SAMPLE).unwrap()
    }

    #[test]
    fn builds_one_aggregate_per_region_and_four_long_rows_each() {
        let data = dataset();
        assert_eq!(data.regions().len(), 3);
        assert_eq!(data.rows().len(), 3 * 4);
        // Selector options ascending
        assert_eq!(
            data.regions(),
            &[
                "East Asia".to_string(),
                "Latin America and Caribbean".to_string(),
                "Western Europe".to_string(),
            ]
        );
    }

    #[test]
    fn ordering_index_covers_every_indicator() {
        let data = dataset();
        for ind in Indicator::ALL {
            assert_eq!(data.region_order(ind).len(), 3);
        }
        // Western Europe has the highest ladder mean, so it leads that order
        assert_eq!(data.region_order(Indicator::LadderScore)[0], "Western Europe");
    }

    #[test]
    fn selecting_one_region_returns_exactly_its_four_rows() {
        let data = dataset();
        let rows = data.filter(
            &RegionSelection::Many(vec!["East Asia".to_string()]),
            ValueRange::new(0.0, 1.0),
        );
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.region == "East Asia"));
        let mut indicators: Vec<Indicator> = rows.iter().map(|r| r.indicator).collect();
        indicators.sort();
        indicators.dedup();
        assert_eq!(indicators.len(), 4, "one row per indicator");
    }

    #[test]
    fn filter_output_is_the_maximal_matching_subset() {
        let data = dataset();
        let selection = RegionSelection::Many(vec![
            "East Asia".to_string(),
            "Western Europe".to_string(),
        ]);
        let range = ValueRange::new(0.2, 0.8);
        let rows = data.filter(&selection, range);
        for row in &rows {
            assert!(selection.contains(&row.region));
            assert!(range.contains(row.value));
        }
        // Maximality: every table row matching both predicates is present
        let expected = data
            .rows()
            .iter()
            .filter(|r| selection.contains(&r.region) && range.contains(r.value))
            .count();
        assert_eq!(rows.len(), expected);
    }

    #[test]
    fn narrow_band_with_no_matches_is_empty_not_an_error() {
        let data = dataset();
        // Only per-column maxima reach 1.0; restrict to a region that
        // holds no maximum in (0.9, 1.0) for any indicator.
        let rows = data.filter(
            &RegionSelection::Many(vec!["Latin America and Caribbean".to_string()]),
            ValueRange::new(0.99, 1.0),
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn single_and_one_element_many_filter_identically() {
        let data = dataset();
        let range = ValueRange::new(0.0, 1.0);
        let single = data.filter(&RegionSelection::Single("East Asia".to_string()), range);
        let many = data.filter(
            &RegionSelection::Many(vec!["East Asia".to_string()]),
            range,
        );
        assert_eq!(single, many);
    }

    #[test]
    fn filtering_twice_with_identical_inputs_is_identical() {
        let data = dataset();
        let selection = RegionSelection::Many(vec!["Western Europe".to_string()]);
        let range = ValueRange::new(0.2, 0.8);
        assert_eq!(data.filter(&selection, range), data.filter(&selection, range));
    }

    #[test]
    fn normalized_extremes_survive_the_full_build() {
        let data = dataset();
        for ind in Indicator::ALL {
            let values: Vec<f64> = data
                .rows()
                .iter()
                .filter(|r| r.indicator == ind)
                .map(|r| r.value)
                .collect();
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!((min - 0.1).abs() < 1e-12);
            assert!((max - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn single_region_csv_fails_the_degenerate_scale_check() {
        let csv = "\
Country name,Regional indicator,Ladder score,Social support,Healthy life expectancy,Freedom to make life choices
Japan,East Asia,5.940,0.884,75.1,0.796
";
        let err = DashboardData::from_csv(csv).unwrap_err();
        assert!(err.to_string().contains("cannot scale"));
    }
}
