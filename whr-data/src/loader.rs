//! CSV parsing for the World Happiness Report 2021 dataset.
//!
//! The loader resolves columns by header name, so extra columns in the
//! source file are ignored. A missing required header is a fatal error:
//! the dashboard refuses to start rather than aggregate garbage.
//!
//! # CSV Format
//!
//! With headers, at least:
//! `Country name,Regional indicator,Ladder score,Social support,Healthy life expectancy,Freedom to make life choices`

use crate::models::{CountryRecord, Indicator};
use anyhow::{anyhow, Context};

/// Header of the country name column.
pub const COUNTRY_COLUMN: &str = "Country name";
/// Header of the categorical grouping column.
pub const REGION_COLUMN: &str = "Regional indicator";

/// Parse the happiness report CSV into country records, preserving row order.
///
/// Cells that are empty or non-numeric in an indicator column parse to
/// `None` and are later excluded from both sum and count when averaging.
/// Rows with an empty region label are skipped entirely.
pub fn parse_happiness_csv(csv_data: &str) -> anyhow::Result<Vec<CountryRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr
        .headers()
        .context("failed to read CSV header row")?
        .clone();

    let column_index = |name: &str| -> anyhow::Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| anyhow!("missing required column {:?} in CSV header", name))
    };

    let country_idx = column_index(COUNTRY_COLUMN)?;
    let region_idx = column_index(REGION_COLUMN)?;
    let mut indicator_idx = [0usize; 4];
    for ind in Indicator::ALL {
        indicator_idx[ind.index()] = column_index(ind.column())?;
    }

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = result?;
        let region = r.get(region_idx).unwrap_or("").trim();
        if region.is_empty() {
            skipped += 1;
            continue;
        }

        let mut scores = [None; 4];
        for ind in Indicator::ALL {
            scores[ind.index()] = r
                .get(indicator_idx[ind.index()])
                .and_then(|s| s.trim().parse::<f64>().ok());
        }

        records.push(CountryRecord {
            country: r.get(country_idx).unwrap_or("").trim().to_string(),
            region: region.to_string(),
            scores,
        });
    }

    log::info!(
        "loader: parsed {} country rows, skipped {} without a region",
        records.len(),
        skipped
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Country name,Regional indicator,Ladder score,Social support,Healthy life expectancy,Freedom to make life choices
Finland,Western Europe,7.842,0.954,72.0,0.949
Japan,East Asia,5.940,0.884,75.1,0.796
Taiwan Province of China,East Asia,6.584,0.898,69.6,0.784
";

    #[test]
    fn parses_rows_in_order() {
        let records = parse_happiness_csv(SAMPLE).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].country, "Finland");
        assert_eq!(records[0].region, "Western Europe");
        assert_eq!(records[1].region, "East Asia");
        assert_eq!(records[0].scores[Indicator::LadderScore.index()], Some(7.842));
        assert_eq!(
            records[2].scores[Indicator::HealthyLifeExpectancy.index()],
            Some(69.6)
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "\
Country name,Regional indicator,Standard error of ladder score,Ladder score,Social support,Healthy life expectancy,Freedom to make life choices
Finland,Western Europe,0.032,7.842,0.954,72.0,0.949
";
        let records = parse_happiness_csv(csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].scores[Indicator::LadderScore.index()], Some(7.842));
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "\
Country name,Regional indicator,Ladder score,Social support,Healthy life expectancy
Finland,Western Europe,7.842,0.954,72.0
";
        let err = parse_happiness_csv(csv).unwrap_err();
        assert!(err.to_string().contains("Freedom to make life choices"));
    }

    #[test]
    fn non_numeric_cells_parse_to_none() {
        let csv = "\
Country name,Regional indicator,Ladder score,Social support,Healthy life expectancy,Freedom to make life choices
Finland,Western Europe,7.842,,72.0,n/a
";
        let records = parse_happiness_csv(csv).unwrap();
        assert_eq!(records[0].scores[Indicator::SocialSupport.index()], None);
        assert_eq!(
            records[0].scores[Indicator::FreedomToMakeLifeChoices.index()],
            None
        );
        assert_eq!(records[0].scores[Indicator::LadderScore.index()], Some(7.842));
    }

    #[test]
    fn rows_without_a_region_are_skipped() {
        let csv = "\
Country name,Regional indicator,Ladder score,Social support,Healthy life expectancy,Freedom to make life choices
Finland,Western Europe,7.842,0.954,72.0,0.949
Nowhere,,1.0,1.0,1.0,1.0
";
        let records = parse_happiness_csv(csv).unwrap();
        assert_eq!(records.len(), 1);
    }
}
