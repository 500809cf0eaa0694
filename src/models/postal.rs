//! Data model for Swiss postal localities (Ortschaftenverzeichnis PLZ).

use serde::{Deserialize, Serialize};

/// One Swiss postal locality (Ortschaft), coordinates in LV95 (EPSG:2056).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostalLocality {
    /// Official locality name (Ortschaftsname)
    pub locality_name: String,

    /// 4-digit Swiss postal code (PLZ/NPA)
    pub postal_code: String,

    /// 2-digit additional code for sub-localities, "00" if none
    pub additional_digit: String,

    /// Official municipality name (Gemeindename)
    pub municipality_name: String,

    /// BFS municipality number
    pub bfs_number: u32,

    /// Two-letter canton abbreviation, empty for Liechtenstein localities
    pub canton_code: String,

    /// Easting coordinate in LV95
    pub easting: f64,

    /// Northing coordinate in LV95
    pub northing: f64,

    /// Primary language code (de, fr, it, rm, multiple)
    pub language: String,

    /// Date from which this entry is valid (YYYY-MM-DD)
    pub validity_date: String,
}

impl PostalLocality {
    /// Postal code including the additional digit when it is not "00",
    /// e.g. "8001" or "8001-02".
    pub fn full_postal_code(&self) -> String {
        if !self.additional_digit.is_empty() && self.additional_digit != "00" {
            format!("{}-{}", self.postal_code, self.additional_digit)
        } else {
            self.postal_code.clone()
        }
    }

    /// Coordinates as an (easting, northing) pair in LV95.
    pub fn coordinates_lv95(&self) -> (f64, f64) {
        (self.easting, self.northing)
    }
}

impl std::fmt::Display for PostalLocality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.postal_code, self.locality_name, self.canton_code
        )
    }
}
