//! Indexed lookups over the official Swiss street directory
//! (Amtliches Strassenverzeichnis).
//!
//! The directory exceeds 200,000 rows; the `iter_*` methods expose the
//! prebuilt indexes as restartable iterators so consumers never need a
//! second full scan.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::info;

use crate::error::{GeoError, Result};
use crate::models::street::{parse_official_flag, Street};
use crate::source::{self, stac, HttpFetcher, SourceOptions};

const CSV_DELIMITER: u8 = b';';
const CSV_FILENAME: &str = "amtliches-strassenverzeichnis_ch_2056.csv";
const COLLECTION_ID: &str = "ch.swisstopo.amtliches-strassenverzeichnis";
const ITEM_ID: &str = "amtliches-strassenverzeichnis_ch";

/// Raw CSV record as published by swisstopo.
#[derive(Debug, Deserialize)]
struct RawStreetRecord {
    #[serde(rename = "STR_ESID")]
    esid: String,
    #[serde(rename = "STN_LABEL")]
    name: String,
    #[serde(rename = "ZIP_LABEL", default)]
    postal_codes: String,
    #[serde(rename = "COM_FOSNR")]
    municipality_bfs: String,
    #[serde(rename = "COM_NAME", default)]
    municipality_name: String,
    #[serde(rename = "COM_CANTON", default)]
    canton_code: String,
    #[serde(rename = "STR_TYPE", default)]
    street_type: String,
    #[serde(rename = "STR_STATUS", default)]
    status: String,
    #[serde(rename = "STR_OFFICIAL", default)]
    is_official: String,
    #[serde(rename = "STR_MODIFIED", default)]
    modified_date: String,
    #[serde(rename = "STR_EASTING")]
    easting: String,
    #[serde(rename = "STR_NORTHING")]
    northing: String,
    #[serde(rename = "STR_PARENT", default)]
    parent_esid: Option<String>,
    #[serde(rename = "STR_CHILDREN", default)]
    children_esids: Option<String>,
}

impl RawStreetRecord {
    fn into_street(self) -> Result<Street> {
        let municipality_bfs = self.municipality_bfs.trim().parse().map_err(|_| {
            GeoError::DataIntegrity(format!(
                "street '{}': invalid BFS number '{}'",
                self.esid, self.municipality_bfs
            ))
        })?;
        let easting = parse_coordinate(&self.esid, "STR_EASTING", &self.easting)?;
        let northing = parse_coordinate(&self.esid, "STR_NORTHING", &self.northing)?;

        Ok(Street {
            esid: self.esid.trim().to_string(),
            name: self.name.trim().to_string(),
            postal_codes: self.postal_codes.trim().to_string(),
            municipality_bfs,
            municipality_name: self.municipality_name.trim().to_string(),
            canton_code: self.canton_code.trim().to_uppercase(),
            street_type: self.street_type.trim().to_string(),
            status: self.status.trim().to_string(),
            is_official: parse_official_flag(&self.is_official),
            modified_date: self.modified_date.trim().to_string(),
            easting,
            northing,
            parent_esid: normalize(self.parent_esid),
            children_esids: normalize(self.children_esids),
        })
    }
}

fn normalize(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_coordinate(esid: &str, field: &str, raw: &str) -> Result<f64> {
    raw.trim().parse().map_err(|_| {
        GeoError::DataIntegrity(format!("street '{esid}': invalid {field} '{raw}'"))
    })
}

/// Directory of official Swiss streets with indexes by ESID, municipality,
/// canton and postal code. Built once, read-only afterwards.
pub struct StreetDirectory {
    streets: Vec<Street>,
    by_esid: HashMap<String, usize>,
    by_municipality: HashMap<u32, Vec<usize>>,
    by_canton: HashMap<String, Vec<usize>>,
    by_postal_code: HashMap<String, Vec<usize>>,
}

impl StreetDirectory {
    /// Locate the CSV asset via the STAC API and fetch it, falling back to
    /// the cached file per `options`.
    pub fn load(options: &SourceOptions) -> Result<Self> {
        let cache_path = options.sources_dir.join(CSV_FILENAME);

        let content = source::fetch_or_fallback(
            options,
            "street directory",
            || {
                let fetcher = HttpFetcher::new();
                let items: stac::ItemCollection =
                    fetcher.get_json(&stac::collection_items_url(COLLECTION_ID))?;
                let href = stac::find_asset_href(&items, ITEM_ID, CSV_FILENAME)?.to_string();
                fetcher.download_text_cached(&href, &cache_path)
            },
            || source::read_cached_csv(&cache_path),
        )?;

        let records: Vec<RawStreetRecord> = source::parse_csv(&content, CSV_DELIMITER)?;
        let streets = records
            .into_iter()
            .map(RawStreetRecord::into_street)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_records(streets))
    }

    /// Build the directory from already ingested records.
    pub fn from_records(streets: Vec<Street>) -> Self {
        let mut by_esid: HashMap<String, usize> = HashMap::new();
        let mut by_municipality: HashMap<u32, Vec<usize>> = HashMap::new();
        let mut by_canton: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_postal_code: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, street) in streets.iter().enumerate() {
            by_esid.insert(street.esid.clone(), idx);
            by_municipality
                .entry(street.municipality_bfs)
                .or_default()
                .push(idx);
            by_canton
                .entry(street.canton_code.clone())
                .or_default()
                .push(idx);
            for code in street.postal_code_list() {
                by_postal_code.entry(code.to_string()).or_default().push(idx);
            }
        }

        info!("street directory ready: {} streets", streets.len());
        Self {
            streets,
            by_esid,
            by_municipality,
            by_canton,
            by_postal_code,
        }
    }

    /// Street with the given ESID; a miss is a `NotFound` error.
    pub fn get_by_esid(&self, esid: &str) -> Result<&Street> {
        self.by_esid
            .get(esid.trim())
            .map(move |&idx| &self.streets[idx])
            .ok_or_else(|| GeoError::NotFound {
                kind: "street",
                code: esid.to_string(),
            })
    }

    /// All streets of a municipality, by BFS number. Empty on no match.
    pub fn get_by_municipality(&self, bfs_number: u32) -> Vec<&Street> {
        self.iter_by_municipality(bfs_number).collect()
    }

    /// All streets of a canton, by two-letter code.
    pub fn get_by_canton(&self, canton_code: &str) -> Vec<&Street> {
        self.iter_by_canton(canton_code).collect()
    }

    /// All streets associated with a postal code; a street can carry
    /// several codes.
    pub fn get_by_postal_code(&self, postal_code: &str) -> Vec<&Street> {
        self.iter_by_postal_code(postal_code).collect()
    }

    pub fn get_all(&self) -> &[Street] {
        &self.streets
    }

    pub fn iter_all(&self) -> impl Iterator<Item = &Street> {
        self.streets.iter()
    }

    /// Streaming variant of [`get_by_municipality`](Self::get_by_municipality);
    /// restartable by calling again.
    pub fn iter_by_municipality(&self, bfs_number: u32) -> impl Iterator<Item = &Street> {
        self.by_municipality
            .get(&bfs_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| &self.streets[idx])
    }

    /// Streaming variant of [`get_by_canton`](Self::get_by_canton).
    pub fn iter_by_canton(&self, canton_code: &str) -> impl Iterator<Item = &Street> {
        let key = canton_code.trim().to_uppercase();
        self.by_canton
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| &self.streets[idx])
    }

    /// Streaming variant of [`get_by_postal_code`](Self::get_by_postal_code).
    pub fn iter_by_postal_code(&self, postal_code: &str) -> impl Iterator<Item = &Street> {
        self.by_postal_code
            .get(postal_code.trim())
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| &self.streets[idx])
    }

    pub fn len(&self) -> usize {
        self.streets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn street(esid: &str, name: &str, bfs: u32, canton: &str, postal: &str) -> Street {
        Street {
            esid: esid.to_string(),
            name: name.to_string(),
            postal_codes: postal.to_string(),
            municipality_bfs: bfs,
            municipality_name: "Test".to_string(),
            canton_code: canton.to_string(),
            street_type: "Street".to_string(),
            status: "real".to_string(),
            is_official: true,
            modified_date: "23.07.2024".to_string(),
            easting: 2695609.0,
            northing: 1264330.0,
            parent_esid: None,
            children_esids: None,
        }
    }

    fn directory() -> StreetDirectory {
        StreetDirectory::from_records(vec![
            street("10001", "Bahnhofstrasse", 261, "ZH", "8001 Zürich"),
            street("10002", "Langstrasse", 261, "ZH", "8004 Zürich, 8005 Zürich"),
            street(
                "10003",
                "Untere Kirchenholzstrasse",
                230,
                "ZH",
                "8400 Winterthur, 8408 Winterthur",
            ),
            street("10004", "Rue du Rhône", 6621, "GE", "1204 Genève"),
        ])
    }

    #[test]
    fn test_get_by_esid() {
        let directory = directory();
        let hit = directory.get_by_esid("10003").unwrap();
        assert_eq!(hit.name, "Untere Kirchenholzstrasse");

        let miss = directory.get_by_esid("99999");
        assert!(matches!(miss, Err(GeoError::NotFound { .. })));
    }

    #[test]
    fn test_get_by_municipality() {
        let directory = directory();
        assert_eq!(directory.get_by_municipality(261).len(), 2);
        assert!(directory.get_by_municipality(9999).is_empty());
    }

    #[test]
    fn test_get_by_postal_code() {
        let directory = directory();
        assert_eq!(directory.get_by_postal_code("8005").len(), 1);
        assert_eq!(directory.get_by_postal_code("8408").len(), 1);
        assert!(directory.get_by_postal_code("0000").is_empty());
    }

    #[test]
    fn test_iter_equals_full_scan() {
        let directory = directory();
        let via_iter = directory.iter_by_municipality(261).count();
        let via_scan = directory
            .get_all()
            .iter()
            .filter(|street| street.municipality_bfs == 261)
            .count();
        assert_eq!(via_iter, via_scan);

        // restartable
        assert_eq!(directory.iter_by_municipality(261).count(), via_iter);
    }

    #[test]
    fn test_canton_lookup_is_case_insensitive() {
        let directory = directory();
        assert_eq!(directory.get_by_canton("zh").len(), 3);
    }

    #[test]
    fn test_csv_round_trip() {
        let content = "\
STR_ESID;STN_LABEL;ZIP_LABEL;COM_FOSNR;COM_NAME;COM_CANTON;STR_TYPE;STR_STATUS;STR_OFFICIAL;STR_MODIFIED;STR_EASTING;STR_NORTHING;STR_PARENT;STR_CHILDREN
10194929;Untere Kirchenholzstrasse;8400 Winterthur, 8408 Winterthur;230;Winterthur;ZH;Street;real;true;23.07.2024;2695609.382;1264330.435;;
";
        let records: Vec<RawStreetRecord> = source::parse_csv(content, CSV_DELIMITER).unwrap();
        let street = records
            .into_iter()
            .map(|record| record.into_street())
            .collect::<Result<Vec<_>>>()
            .unwrap()
            .remove(0);
        assert_eq!(street.esid, "10194929");
        assert_eq!(street.postal_code_list(), vec!["8400", "8408"]);
        assert!(street.is_official);
        assert_eq!(street.parent_esid, None);
    }
}
