//! Point-in-time queries over the Swiss municipality history
//! (BFS communes snapshot).

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::error::{GeoError, Result};
use crate::hierarchy::ResolvedHierarchy;
use crate::models::date;
use crate::models::municipality::{Municipality, SnapshotRow};
use crate::source::{self, fetch, HttpFetcher, SourceOptions};

const CSV_DELIMITER: u8 = b',';

/// Raw CSV record as served by the BFS communes snapshot endpoint.
#[derive(Debug, Deserialize)]
struct RawSnapshotRecord {
    #[serde(rename = "HistoricalCode")]
    historical_code: String,
    #[serde(rename = "BfsCode", default)]
    bfs_code: Option<String>,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "ShortName", default)]
    short_name: Option<String>,
    #[serde(rename = "Level", default)]
    level: Option<String>,
    #[serde(rename = "Parent", default)]
    parent: Option<String>,
    #[serde(rename = "ValidFrom", default)]
    valid_from: Option<String>,
    #[serde(rename = "ValidTo", default)]
    valid_to: Option<String>,
    #[serde(rename = "Rec_Type_de", default)]
    rec_type: Option<String>,
}

impl RawSnapshotRecord {
    fn into_row(self) -> SnapshotRow {
        SnapshotRow {
            historical_code: self.historical_code,
            bfs_code: self.bfs_code,
            name: self.name,
            short_name: self.short_name,
            level: self
                .level
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .and_then(|value| value.parse().ok()),
            parent_code: self.parent,
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            rec_type: self.rec_type,
        }
    }
}

/// Directory of Swiss administrative units, queried at a fixed reference
/// date.
///
/// The hierarchy is resolved once at construction and never mutated; all
/// queries are bounded in-memory lookups. A unit matches a query only when
/// the reference date falls inside its validity window — a code that exists
/// outside the window is a query miss, not a data error.
#[derive(Debug)]
pub struct MunicipalityDirectory {
    hierarchy: ResolvedHierarchy,
    reference_date: NaiveDate,
}

impl MunicipalityDirectory {
    /// Fetch the snapshot for `reference_date` (None = today) from the BFS
    /// API, falling back to the cached CSV per `options`.
    ///
    /// Accepted date formats: DD-MM-YYYY, YYYY-MM-DD, DD.MM.YYYY.
    pub fn load(options: &SourceOptions, reference_date: Option<&str>) -> Result<Self> {
        let reference = parse_reference_date(reference_date)?;
        let bfs_date = reference.format("%d-%m-%Y").to_string();
        let csv_filename = format!("bfs_municipalities_{}.csv", bfs_date.replace('-', ""));
        let cache_path = options.sources_dir.join(&csv_filename);

        let content = source::fetch_or_fallback(
            options,
            "municipality data",
            || {
                let fetcher = HttpFetcher::new();
                let url = fetch::snapshot_url(&bfs_date)?;
                fetcher.download_text_cached(url.as_str(), &cache_path)
            },
            || source::read_cached_csv(&cache_path),
        )?;

        let rows = parse_snapshot_csv(&content)?;
        Self::from_resolved(rows, reference)
    }

    /// Build the directory from already ingested snapshot rows.
    pub fn from_rows(rows: Vec<SnapshotRow>, reference_date: Option<&str>) -> Result<Self> {
        let reference = parse_reference_date(reference_date)?;
        Self::from_resolved(rows, reference)
    }

    fn from_resolved(rows: Vec<SnapshotRow>, reference_date: NaiveDate) -> Result<Self> {
        let hierarchy = ResolvedHierarchy::resolve(rows)?;
        info!(
            "municipality directory ready: {} units at {}",
            hierarchy.len(),
            reference_date
        );
        Ok(Self {
            hierarchy,
            reference_date,
        })
    }

    /// The date all queries are evaluated at.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Unit carrying the given current BFS code at the reference date.
    ///
    /// Overlapping validity windows for the same code are an upstream
    /// anomaly; the unit with the later valid-from wins.
    pub fn get_by_bfs_code(&self, code: &str) -> Result<&Municipality> {
        self.hierarchy
            .lookup_bfs(code.trim())
            .filter(|unit| unit.is_valid_at(self.reference_date))
            .max_by_key(|unit| unit.valid_from)
            .ok_or_else(|| GeoError::NotFound {
                kind: "municipality",
                code: code.to_string(),
            })
    }

    /// Unit carrying the given historical code at the reference date. A
    /// municipality may have held several historical codes across mergers,
    /// each valid in a disjoint window.
    pub fn get_by_historical_code(&self, code: &str) -> Result<&Municipality> {
        self.hierarchy
            .lookup_historical(code.trim())
            .filter(|unit| unit.is_valid_at(self.reference_date))
            .max_by_key(|unit| unit.valid_from)
            .ok_or_else(|| GeoError::NotFound {
                kind: "municipality",
                code: code.to_string(),
            })
    }

    /// All units active at the reference date whose resolved canton code
    /// matches. Empty when the canton is unknown.
    pub fn get_by_canton(&self, canton_code: &str) -> Vec<&Municipality> {
        self.iter_by_canton(canton_code).collect()
    }

    /// Streaming variant of [`get_by_canton`](Self::get_by_canton).
    pub fn iter_by_canton(&self, canton_code: &str) -> impl Iterator<Item = &Municipality> {
        let canton = canton_code.trim().to_uppercase();
        self.hierarchy
            .lookup_canton(&canton)
            .filter(move |unit| unit.is_valid_at(self.reference_date))
    }

    /// Units with no end date.
    pub fn get_active(&self) -> Vec<&Municipality> {
        self.iter_all().filter(|unit| unit.is_active()).collect()
    }

    /// Superseded, merged or dissolved units (end date set).
    pub fn get_historical(&self) -> Vec<&Municipality> {
        self.iter_all().filter(|unit| !unit.is_active()).collect()
    }

    pub fn get_all(&self) -> Vec<&Municipality> {
        self.iter_all().collect()
    }

    pub fn iter_all(&self) -> impl Iterator<Item = &Municipality> {
        self.hierarchy.units().iter()
    }

    pub fn len(&self) -> usize {
        self.hierarchy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hierarchy.is_empty()
    }
}

fn parse_reference_date(reference_date: Option<&str>) -> Result<NaiveDate> {
    match reference_date {
        Some(raw) => date::parse_flexible(raw).ok_or_else(|| {
            GeoError::Validation(format!("unparseable reference date '{raw}'"))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn parse_snapshot_csv(content: &str) -> Result<Vec<SnapshotRow>> {
    let records: Vec<RawSnapshotRecord> = source::parse_csv(content, CSV_DELIMITER)?;
    Ok(records
        .into_iter()
        .map(RawSnapshotRecord::into_row)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        historical_code: &str,
        bfs_code: Option<&str>,
        name: &str,
        short_name: Option<&str>,
        level: u8,
        parent: Option<&str>,
        valid_from: &str,
        valid_to: Option<&str>,
    ) -> SnapshotRow {
        SnapshotRow {
            historical_code: historical_code.to_string(),
            bfs_code: bfs_code.map(String::from),
            name: name.to_string(),
            short_name: short_name.map(String::from),
            level: Some(level),
            parent_code: parent.map(String::from),
            valid_from: Some(valid_from.to_string()),
            valid_to: valid_to.map(String::from),
            rec_type: None,
        }
    }

    /// Canton ZH with one district, the city of Zürich, and a merger
    /// history: "A" (1960..2000) succeeded by "B" (2001..open).
    fn fixture() -> Vec<SnapshotRow> {
        vec![
            row("1", Some("1"), "Zürich", Some("ZH"), 1, None, "12-09-1848", None),
            row("100", Some("101"), "Bezirk Zürich", None, 2, Some("1"), "12-09-1848", None),
            row(
                "261",
                Some("261"),
                "Zürich",
                Some("Zürich"),
                3,
                Some("100"),
                "12-09-1848",
                None,
            ),
            row(
                "A",
                None,
                "Alt-Dorf",
                None,
                3,
                Some("100"),
                "01-01-1960",
                Some("31-12-2000"),
            ),
            row("B", Some("295"), "Neu-Dorf", None, 3, Some("100"), "01-01-2001", None),
        ]
    }

    fn directory_at(date: &str) -> MunicipalityDirectory {
        MunicipalityDirectory::from_rows(fixture(), Some(date)).unwrap()
    }

    #[test]
    fn test_unparseable_reference_date_fails_fast() {
        let err = MunicipalityDirectory::from_rows(fixture(), Some("soon")).unwrap_err();
        assert!(matches!(err, GeoError::Validation(_)));
    }

    #[test]
    fn test_get_by_bfs_code() {
        let directory = directory_at("2020-01-01");
        let zurich = directory.get_by_bfs_code("261").unwrap();
        assert_eq!(zurich.name, "Zürich");
        assert_eq!(zurich.canton_code.as_deref(), Some("ZH"));
    }

    #[test]
    fn test_query_miss_outside_validity_window() {
        let directory = directory_at("01-01-1800");
        let err = directory.get_by_bfs_code("261").unwrap_err();
        assert!(matches!(err, GeoError::NotFound { .. }));
    }

    #[test]
    fn test_historical_code_disjoint_windows() {
        let mid = directory_at("15-06-1990");
        assert_eq!(mid.get_by_historical_code("A").unwrap().name, "Alt-Dorf");

        let late = directory_at("2020-01-01");
        assert!(matches!(
            late.get_by_historical_code("A"),
            Err(GeoError::NotFound { .. })
        ));
        assert_eq!(late.get_by_historical_code("B").unwrap().name, "Neu-Dorf");
    }

    #[test]
    fn test_overlapping_windows_later_valid_from_wins() {
        let mut rows = fixture();
        // anomaly: two overlapping records for bfs code 261
        rows.push(row(
            "261b",
            Some("261"),
            "Zürich (reorganisiert)",
            None,
            3,
            Some("100"),
            "01-01-2015",
            None,
        ));
        // adjust the first 261 record to overlap from 2010
        rows[2].valid_from = Some("01-01-2010".to_string());

        let directory = MunicipalityDirectory::from_rows(rows, Some("01-06-2017")).unwrap();
        let winner = directory.get_by_bfs_code("261").unwrap();
        assert_eq!(winner.historical_code, "261b");
        assert_eq!(
            winner.valid_from,
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_get_by_canton_spans_all_levels() {
        let directory = directory_at("2020-01-01");
        let units = directory.get_by_canton("zh");
        assert!(!units.is_empty());

        let levels: Vec<u8> = units.iter().map(|unit| unit.level.to_number()).collect();
        assert!(levels.contains(&1));
        assert!(levels.contains(&2));
        assert!(levels.contains(&3));

        // the merged record is not active at the reference date
        assert!(units.iter().all(|unit| unit.historical_code != "A"));
    }

    #[test]
    fn test_get_by_canton_unknown_is_empty() {
        let directory = directory_at("2020-01-01");
        assert!(directory.get_by_canton("XX").is_empty());
    }

    #[test]
    fn test_active_historical_partition() {
        let directory = directory_at("2020-01-01");
        let active = directory.get_active();
        let historical = directory.get_historical();

        assert_eq!(active.len() + historical.len(), directory.len());
        assert!(active.iter().all(|unit| unit.is_active()));
        assert!(historical.iter().all(|unit| !unit.is_active()));
        assert_eq!(historical.len(), 1);
        assert_eq!(historical[0].historical_code, "A");
    }

    #[test]
    fn test_iter_matches_get() {
        let directory = directory_at("2020-01-01");
        assert_eq!(
            directory.iter_by_canton("ZH").count(),
            directory.get_by_canton("ZH").len()
        );
        assert_eq!(directory.iter_all().count(), directory.len());
    }

    #[test]
    fn test_snapshot_csv_parsing() {
        let content = "\
HistoricalCode,BfsCode,ValidFrom,ValidTo,Level,Parent,Name,ShortName,Rec_Type_de
1,1,12-09-1848,,1,,Zürich,ZH,Kanton
261,261,12-09-1848,,3,1,Zürich,Zürich,Gemeinde
";
        let rows = parse_snapshot_csv(content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].historical_code, "1");
        assert_eq!(rows[0].level, Some(1));
        assert_eq!(rows[1].parent_code.as_deref(), Some("1"));

        let directory = MunicipalityDirectory::from_rows(rows, Some("2024-01-01")).unwrap();
        assert_eq!(directory.get_by_bfs_code("261").unwrap().name, "Zürich");
    }
}
