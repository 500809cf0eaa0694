//! Data model for the official Swiss street directory
//! (Amtliches Strassenverzeichnis).

use serde::{Deserialize, Serialize};

/// One entry of the federal street directory, identified by its ESID
/// (Eidgenössischer Strassenidentifikator). Coordinates in LV95.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Street {
    /// Federal street identifier (STR_ESID)
    pub esid: String,

    /// Official street name (STN_LABEL)
    pub name: String,

    /// Raw postal code label, e.g. "8400 Winterthur, 8408 Winterthur"
    pub postal_codes: String,

    /// BFS municipality number (COM_FOSNR)
    pub municipality_bfs: u32,

    /// Official municipality name (COM_NAME)
    pub municipality_name: String,

    /// Two-letter canton abbreviation (COM_CANTON)
    pub canton_code: String,

    /// Type classification (STR_TYPE): Street, Square, Path, ...
    pub street_type: String,

    /// Status (STR_STATUS): real, planned, historic
    pub status: String,

    /// Whether this is the official street name (STR_OFFICIAL)
    pub is_official: bool,

    /// Last modification date (STR_MODIFIED)
    pub modified_date: String,

    /// Easting coordinate in LV95 (STR_EASTING)
    pub easting: f64,

    /// Northing coordinate in LV95 (STR_NORTHING)
    pub northing: f64,

    /// Parent street ESID for hierarchical streets (STR_PARENT)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_esid: Option<String>,

    /// Comma-separated child street ESIDs (STR_CHILDREN)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_esids: Option<String>,
}

impl Street {
    /// Postal codes extracted from the raw label, e.g.
    /// "8400 Winterthur, 8408 Winterthur" -> ["8400", "8408"].
    pub fn postal_code_list(&self) -> Vec<&str> {
        self.postal_codes
            .split(',')
            .filter_map(|entry| entry.split_whitespace().next())
            .collect()
    }

    /// Child ESIDs split out of the comma-separated field.
    pub fn children_esid_list(&self) -> Vec<&str> {
        match &self.children_esids {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|esid| !esid.is_empty())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Coordinates as an (easting, northing) pair in LV95.
    pub fn coordinates_lv95(&self) -> (f64, f64) {
        (self.easting, self.northing)
    }

    pub fn has_parent(&self) -> bool {
        self.parent_esid.is_some()
    }

    pub fn has_children(&self) -> bool {
        self.children_esids.is_some()
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.name, self.municipality_name, self.canton_code
        )
    }
}

/// Parse the STR_OFFICIAL flag; the feed has used several spellings over
/// the years (true/wahr/ja/1).
pub(crate) fn parse_official_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "true" | "wahr" | "yes" | "ja" | "j" | "1"
    )
}
