use std::collections::HashSet;
use std::path::Path;

use contracts::domain::a001_timeline::aggregate::{DisasterRecord, YearDisasterEntry};
use contracts::shared::reference::{DisasterTypeDetail, DisasterTypeInfo};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::reference;

/// Everything the year/type detail page shows.
#[derive(Debug, Clone)]
pub struct YearTypeDetail {
    pub disaster_type: String,
    pub year: Option<i32>,
    /// Detail entry for the type; `None` when the detail file has no such type.
    pub detail: Option<DisasterTypeDetail>,
    pub records: Vec<DisasterRecord>,
}

/// Lenient year parsing: surrounding whitespace, an optional sign and trailing
/// garbage are accepted ("2020", " 2020 ", "2020-ish"). Returns `None` when
/// no leading integer is present.
pub fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    rest[..digits_len].parse::<i32>().ok().map(|v| v * sign)
}

/// Distinct, non-empty disaster types in first-seen order.
pub fn distinct_types(records: &[DisasterRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(DisasterRecord::type_name)
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect()
}

/// Join distinct types against the catalog. The first catalog entry with the
/// same name wins; types without an entry are dropped.
pub fn enrich_types(
    types: &[String],
    catalog: &[DisasterTypeInfo],
    year: &str,
) -> Vec<YearDisasterEntry> {
    types
        .iter()
        .filter_map(|disaster_type| {
            catalog
                .iter()
                .find(|info| &info.disaster_type == disaster_type)
                .map(|info| YearDisasterEntry {
                    disaster_type: info.disaster_type.clone(),
                    desc: info.desc.clone(),
                    image: info.image.clone(),
                    year: year.to_string(),
                })
        })
        .collect()
}

/// Disaster types recorded in `raw_year`, enriched from the catalog file.
pub async fn disasters_for_year(
    db: &DatabaseConnection,
    catalog_path: &Path,
    raw_year: &str,
) -> anyhow::Result<Vec<YearDisasterEntry>> {
    let records = match parse_year(raw_year) {
        Some(year) => repository::find_by_start_year(db, year).await?,
        None => Vec::new(),
    };
    let types = distinct_types(&records);
    tracing::debug!(
        "{} records, {} distinct types for year {}",
        records.len(),
        types.len(),
        raw_year
    );

    let catalog = reference::load_type_catalog(catalog_path).await?;
    Ok(enrich_types(&types, &catalog, raw_year))
}

/// Detail entry for `disaster_type` plus the records of that type in `raw_year`.
///
/// The two lookups are independent: a type missing from the detail file still
/// gets its records, and vice versa.
pub async fn year_type_detail(
    db: &DatabaseConnection,
    details_path: &Path,
    disaster_type: &str,
    raw_year: &str,
) -> anyhow::Result<YearTypeDetail> {
    let details = reference::load_type_details(details_path).await?;
    let detail = details
        .into_iter()
        .find(|d| d.disaster_type == disaster_type);

    let year = parse_year(raw_year);
    let records = match year {
        Some(year) => repository::find_by_type_and_year(db, disaster_type, year).await?,
        None => Vec::new(),
    };

    Ok(YearTypeDetail {
        disaster_type: disaster_type.to_string(),
        year,
        detail,
        records,
    })
}
