//! Indexed lookups over the Swiss postal locality directory
//! (Ortschaftenverzeichnis PLZ).

use std::collections::HashMap;

use serde::Deserialize;
use tracing::info;

use crate::error::{GeoError, Result};
use crate::models::postal::PostalLocality;
use crate::source::{self, fetch, HttpFetcher, SourceOptions};

const CSV_DELIMITER: u8 = b';';
const CSV_FILENAME: &str = "ortschaftenverzeichnis_plz_2056.csv";

/// Raw CSV record as published by swisstopo (semicolon-delimited, German
/// headers).
#[derive(Debug, Deserialize)]
struct RawLocalityRecord {
    #[serde(rename = "Ortschaftsname")]
    locality_name: String,
    #[serde(rename = "PLZ")]
    postal_code: String,
    #[serde(rename = "Zusatzziffer", default)]
    additional_digit: String,
    #[serde(rename = "Gemeindename")]
    municipality_name: String,
    #[serde(rename = "BFS-Nr")]
    bfs_number: String,
    #[serde(rename = "Kantonskürzel", default)]
    canton_code: String,
    #[serde(rename = "E")]
    easting: String,
    #[serde(rename = "N")]
    northing: String,
    #[serde(rename = "Sprache", default)]
    language: String,
    #[serde(rename = "Validity", default)]
    validity_date: String,
}

impl RawLocalityRecord {
    fn into_locality(self) -> Result<PostalLocality> {
        let bfs_number = self.bfs_number.trim().parse().map_err(|_| {
            GeoError::DataIntegrity(format!(
                "locality '{}': invalid BFS number '{}'",
                self.locality_name, self.bfs_number
            ))
        })?;
        let easting = parse_coordinate(&self.locality_name, "E", &self.easting)?;
        let northing = parse_coordinate(&self.locality_name, "N", &self.northing)?;

        let additional_digit = if self.additional_digit.trim().is_empty() {
            "00".to_string()
        } else {
            self.additional_digit.trim().to_string()
        };

        Ok(PostalLocality {
            locality_name: self.locality_name.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            additional_digit,
            municipality_name: self.municipality_name.trim().to_string(),
            bfs_number,
            canton_code: self.canton_code.trim().to_uppercase(),
            easting,
            northing,
            language: self.language.trim().to_string(),
            validity_date: self.validity_date.trim().to_string(),
        })
    }
}

fn parse_coordinate(name: &str, axis: &str, raw: &str) -> Result<f64> {
    raw.trim().parse().map_err(|_| {
        GeoError::DataIntegrity(format!(
            "locality '{name}': invalid {axis} coordinate '{raw}'"
        ))
    })
}

/// Directory of Swiss postal localities with indexes by postal code,
/// municipality and canton. Built once, read-only afterwards.
pub struct PostalDirectory {
    localities: Vec<PostalLocality>,
    by_postal_code: HashMap<String, Vec<usize>>,
    by_municipality: HashMap<u32, Vec<usize>>,
    by_canton: HashMap<String, Vec<usize>>,
}

impl PostalDirectory {
    /// Fetch the locality CSV from data.geo.admin.ch, falling back to the
    /// cached file per `options`.
    pub fn load(options: &SourceOptions) -> Result<Self> {
        let cache_path = options.sources_dir.join(CSV_FILENAME);
        let url = format!(
            "{}/ch.swisstopo-vd.ortschaftenverzeichnis_plz/ortschaftenverzeichnis_plz/{}",
            fetch::GEO_ADMIN_BASE,
            CSV_FILENAME
        );

        let content = source::fetch_or_fallback(
            options,
            "postal localities",
            || HttpFetcher::new().download_text_cached(&url, &cache_path),
            || source::read_cached_csv(&cache_path),
        )?;

        let records: Vec<RawLocalityRecord> = source::parse_csv(&content, CSV_DELIMITER)?;
        let localities = records
            .into_iter()
            .map(RawLocalityRecord::into_locality)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_records(localities))
    }

    /// Build the directory from already ingested records.
    pub fn from_records(localities: Vec<PostalLocality>) -> Self {
        let mut by_postal_code: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_municipality: HashMap<u32, Vec<usize>> = HashMap::new();
        let mut by_canton: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, locality) in localities.iter().enumerate() {
            by_postal_code
                .entry(locality.postal_code.clone())
                .or_default()
                .push(idx);
            by_municipality
                .entry(locality.bfs_number)
                .or_default()
                .push(idx);
            if !locality.canton_code.is_empty() {
                by_canton
                    .entry(locality.canton_code.clone())
                    .or_default()
                    .push(idx);
            }
        }

        info!("postal directory ready: {} localities", localities.len());
        Self {
            localities,
            by_postal_code,
            by_municipality,
            by_canton,
        }
    }

    /// All localities sharing a postal code; several localities can share
    /// one code. Empty on no match.
    pub fn get_by_postal_code(&self, postal_code: &str) -> Vec<&PostalLocality> {
        self.select(&self.by_postal_code, postal_code.trim())
    }

    /// All localities of a municipality, by BFS number.
    pub fn get_by_municipality(&self, bfs_number: u32) -> Vec<&PostalLocality> {
        self.iter_by_municipality(bfs_number).collect()
    }

    /// All localities of a canton, by two-letter code.
    pub fn get_by_canton(&self, canton_code: &str) -> Vec<&PostalLocality> {
        self.select(&self.by_canton, &canton_code.trim().to_uppercase())
    }

    pub fn get_all(&self) -> &[PostalLocality] {
        &self.localities
    }

    pub fn iter_all(&self) -> impl Iterator<Item = &PostalLocality> {
        self.localities.iter()
    }

    /// Streaming variant of [`get_by_municipality`](Self::get_by_municipality);
    /// restartable by calling again.
    pub fn iter_by_municipality(&self, bfs_number: u32) -> impl Iterator<Item = &PostalLocality> {
        self.by_municipality
            .get(&bfs_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| &self.localities[idx])
    }

    /// Streaming variant of [`get_by_canton`](Self::get_by_canton).
    pub fn iter_by_canton(&self, canton_code: &str) -> impl Iterator<Item = &PostalLocality> {
        let key = canton_code.trim().to_uppercase();
        self.by_canton
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| &self.localities[idx])
    }

    pub fn len(&self) -> usize {
        self.localities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.localities.is_empty()
    }

    fn select<'a>(
        &'a self,
        index: &'a HashMap<String, Vec<usize>>,
        key: &str,
    ) -> Vec<&'a PostalLocality> {
        index
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(|&idx| &self.localities[idx])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locality(name: &str, plz: &str, bfs: u32, canton: &str) -> PostalLocality {
        PostalLocality {
            locality_name: name.to_string(),
            postal_code: plz.to_string(),
            additional_digit: "00".to_string(),
            municipality_name: name.to_string(),
            bfs_number: bfs,
            canton_code: canton.to_string(),
            easting: 2683141.0,
            northing: 1247935.0,
            language: "de".to_string(),
            validity_date: "2008-07-01".to_string(),
        }
    }

    fn directory() -> PostalDirectory {
        PostalDirectory::from_records(vec![
            locality("Zürich", "8001", 261, "ZH"),
            locality("Zürich", "8002", 261, "ZH"),
            locality("Winterthur", "8400", 230, "ZH"),
            locality("Genève", "1201", 6621, "GE"),
            locality("Vaduz", "9490", 7001, ""),
        ])
    }

    #[test]
    fn test_get_by_postal_code() {
        let directory = directory();
        let hits = directory.get_by_postal_code("8001");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].locality_name, "Zürich");
    }

    #[test]
    fn test_zero_matches_is_empty_not_error() {
        let directory = directory();
        assert!(directory.get_by_postal_code("9999").is_empty());
        assert!(directory.get_by_canton("XX").is_empty());
        assert!(directory.get_by_municipality(1).is_empty());
    }

    #[test]
    fn test_get_by_municipality() {
        let directory = directory();
        let zurich = directory.get_by_municipality(261);
        assert_eq!(zurich.len(), 2);
    }

    #[test]
    fn test_canton_lookup_is_case_insensitive() {
        let directory = directory();
        assert_eq!(directory.get_by_canton("zh").len(), 3);
        assert_eq!(directory.get_by_canton("ZH").len(), 3);
    }

    #[test]
    fn test_iter_matches_full_scan() {
        let directory = directory();
        let via_iter: Vec<_> = directory.iter_by_municipality(261).collect();
        let via_scan: Vec<_> = directory
            .get_all()
            .iter()
            .filter(|locality| locality.bfs_number == 261)
            .collect();
        assert_eq!(via_iter.len(), via_scan.len());

        // restartable: a second pass sees the same records
        assert_eq!(directory.iter_by_municipality(261).count(), 2);
    }

    #[test]
    fn test_csv_round_trip() {
        let content = "\
Ortschaftsname;PLZ;Zusatzziffer;Gemeindename;BFS-Nr;Kantonskürzel;E;N;Sprache;Validity
Zürich;8001;00;Zürich;261;ZH;2683141.0;1247935.0;de;2008-07-01
";
        let records: Vec<RawLocalityRecord> = source::parse_csv(content, CSV_DELIMITER).unwrap();
        let locality = records
            .into_iter()
            .map(|record| record.into_locality())
            .collect::<Result<Vec<_>>>()
            .unwrap()
            .remove(0);
        assert_eq!(locality.bfs_number, 261);
        assert_eq!(locality.coordinates_lv95(), (2683141.0, 1247935.0));
    }

    #[test]
    fn test_invalid_bfs_number_is_data_integrity_error() {
        let content = "\
Ortschaftsname;PLZ;Zusatzziffer;Gemeindename;BFS-Nr;Kantonskürzel;E;N;Sprache;Validity
Zürich;8001;00;Zürich;abc;ZH;2683141.0;1247935.0;de;2008-07-01
";
        let records: Vec<RawLocalityRecord> = source::parse_csv(content, CSV_DELIMITER).unwrap();
        let result: Result<Vec<_>> = records
            .into_iter()
            .map(|record| record.into_locality())
            .collect();
        assert!(matches!(result, Err(GeoError::DataIntegrity(_))));
    }
}
