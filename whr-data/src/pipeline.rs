//! The startup transformation pipeline: aggregate, normalize, reshape, sort.
//!
//! These are plain slice-in/vec-out transforms over ordered standard
//! collections. They run exactly once, at startup; everything downstream
//! treats their output as read-only.

use crate::models::{CountryRecord, Indicator, IndicatorValue, RegionAggregate};
use anyhow::bail;
use std::collections::BTreeMap;

/// Lower bound of the normalized value range.
pub const SCALE_LO: f64 = 0.1;
/// Upper bound of the normalized value range.
pub const SCALE_HI: f64 = 1.0;

/// Group records by exact region label and compute the unweighted mean of
/// each indicator per group.
///
/// `None` cells are excluded from both the sum and the count. Output is
/// ordered ascending by region name (BTreeMap key order). A region with no
/// numeric cells at all for some indicator has no meaningful mean and is
/// reported as an error.
pub fn aggregate_by_region(records: &[CountryRecord]) -> anyhow::Result<Vec<RegionAggregate>> {
    let mut groups: BTreeMap<&str, ([f64; 4], [u32; 4])> = BTreeMap::new();

    for record in records {
        let (sums, counts) = groups
            .entry(record.region.as_str())
            .or_insert(([0.0; 4], [0u32; 4]));
        for ind in Indicator::ALL {
            if let Some(v) = record.scores[ind.index()] {
                sums[ind.index()] += v;
                counts[ind.index()] += 1;
            }
        }
    }

    let mut aggregates = Vec::with_capacity(groups.len());
    for (region, (sums, counts)) in groups {
        let mut means = [0.0; 4];
        for ind in Indicator::ALL {
            let count = counts[ind.index()];
            if count == 0 {
                bail!(
                    "region {:?} has no numeric values for {:?}",
                    region,
                    ind.column()
                );
            }
            means[ind.index()] = sums[ind.index()] / count as f64;
        }
        aggregates.push(RegionAggregate {
            region: region.to_string(),
            means,
        });
    }

    log::info!(
        "pipeline: aggregated {} rows into {} regions",
        records.len(),
        aggregates.len()
    );
    Ok(aggregates)
}

/// Min-max scale each indicator column independently into
/// [[`SCALE_LO`], [`SCALE_HI`]], preserving relative order within the column.
///
/// A degenerate column (min == max across all regions) would divide by
/// zero; it is reported as an explicit error instead.
pub fn min_max_scale(aggregates: &mut [RegionAggregate]) -> anyhow::Result<()> {
    for ind in Indicator::ALL {
        let i = ind.index();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for agg in aggregates.iter() {
            min = min.min(agg.means[i]);
            max = max.max(agg.means[i]);
        }
        if min == max {
            bail!(
                "cannot scale {:?}: all regions share the value {}",
                ind.column(),
                min
            );
        }
        for agg in aggregates.iter_mut() {
            agg.means[i] = SCALE_LO + (agg.means[i] - min) / (max - min) * (SCALE_HI - SCALE_LO);
        }
    }
    Ok(())
}

/// Unpivot the wide per-region table into long format: one row per
/// (region, indicator) pair, so the output has 4x the input's row count.
pub fn melt(aggregates: &[RegionAggregate]) -> Vec<IndicatorValue> {
    let mut rows = Vec::with_capacity(aggregates.len() * Indicator::ALL.len());
    for agg in aggregates {
        for ind in Indicator::ALL {
            rows.push(IndicatorValue {
                region: agg.region.clone(),
                indicator: ind,
                value: agg.means[ind.index()],
            });
        }
    }
    rows
}

/// Sort the long table by indicator label ascending, then value descending.
/// Ties on value fall back to region name so the order is total.
pub fn sort_long(rows: &mut [IndicatorValue]) {
    rows.sort_by(|a, b| {
        a.indicator
            .label()
            .cmp(b.indicator.label())
            .then(b.value.total_cmp(&a.value))
            .then_with(|| a.region.cmp(&b.region))
    });
}

/// Derive the region ordering index from the sorted long table: for each
/// indicator, the region names in the order they appear after the sort
/// (i.e. descending by normalized value). Display-only; controls the
/// chart's stacking and legend order.
pub fn region_order_index(sorted: &[IndicatorValue]) -> BTreeMap<Indicator, Vec<String>> {
    let mut index: BTreeMap<Indicator, Vec<String>> = BTreeMap::new();
    for row in sorted {
        index
            .entry(row.indicator)
            .or_default()
            .push(row.region.clone());
    }
    index
}
