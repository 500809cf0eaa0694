//! Data model for Swiss municipality history (BFS communes snapshot).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Administrative level in the BFS hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminLevel {
    /// Canton (Level=1); `short_name` carries the two-letter canton code
    Canton,
    /// District (Level=2)
    District,
    /// Municipality (Level=3)
    Municipality,
}

impl AdminLevel {
    /// Convert a BFS `Level` number to an AdminLevel
    pub fn from_number(level: u8) -> Option<Self> {
        match level {
            1 => Some(AdminLevel::Canton),
            2 => Some(AdminLevel::District),
            3 => Some(AdminLevel::Municipality),
            _ => None,
        }
    }

    /// Get the BFS `Level` number
    pub fn to_number(&self) -> u8 {
        match self {
            AdminLevel::Canton => 1,
            AdminLevel::District => 2,
            AdminLevel::Municipality => 3,
        }
    }
}

impl std::fmt::Display for AdminLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminLevel::Canton => write!(f, "Canton"),
            AdminLevel::District => write!(f, "District"),
            AdminLevel::Municipality => write!(f, "Municipality"),
        }
    }
}

/// Kind of historical event a snapshot record describes.
///
/// The feed carries free-form German labels; unknown labels map to `Other`
/// so a new label never breaks ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Creation,
    Mutation,
    Merge,
    Dissolution,
    Other,
}

impl RecordType {
    /// Classify an upstream `Rec_Type_de` label.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return RecordType::Other;
        }
        if label.contains("ersterfassung") || label.contains("neugründung") {
            RecordType::Creation
        } else if label.contains("fusion") || label.contains("zusammenschluss") {
            RecordType::Merge
        } else if label.contains("aufhebung") || label.contains("auflösung") {
            RecordType::Dissolution
        } else if label.contains("mutation") || label.contains("änderung") {
            RecordType::Mutation
        } else {
            RecordType::Other
        }
    }
}

/// One raw row of the BFS communes snapshot feed, before resolution.
///
/// Dates are kept as the feed delivers them; the hierarchy resolver parses
/// and validates them, rejecting rows it cannot make sense of.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub historical_code: String,
    pub bfs_code: Option<String>,
    pub name: String,
    pub short_name: Option<String>,
    pub level: Option<u8>,
    pub parent_code: Option<String>,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    pub rec_type: Option<String>,
}

/// A resolved Swiss administrative unit (canton, district or municipality).
///
/// Built once by the hierarchy resolver and immutable afterwards. The
/// `canton_code`/`canton_name` fields are enriched eagerly at resolution by
/// walking the parent chain, never on the query path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Municipality {
    /// Historical code, the stable identifier of this snapshot record
    pub historical_code: String,

    /// Current BFS number; absent for merged/dissolved records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfs_code: Option<String>,

    /// Official name
    pub name: String,

    /// Abbreviated name; for cantons this is the two-letter canton code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Administrative level
    pub level: AdminLevel,

    /// Historical code of the owning unit one level up, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,

    /// First day this record is valid
    pub valid_from: NaiveDate,

    /// Last day this record is valid; absent while still active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,

    /// Record kind in the historical feed
    pub rec_type: RecordType,

    /// Two-letter code of the owning canton (enriched at resolution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canton_code: Option<String>,

    /// Name of the owning canton (enriched at resolution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canton_name: Option<String>,
}

impl Municipality {
    /// True while the record has no end date.
    pub fn is_active(&self) -> bool {
        self.valid_to.is_none()
    }

    /// True for records that were closed by a merger (end date set, no
    /// current BFS number).
    pub fn is_merged(&self) -> bool {
        self.valid_to.is_some() && self.bfs_code.is_none()
    }

    pub fn has_parent(&self) -> bool {
        self.parent_code.is_some()
    }

    /// Whether the validity window contains `date`.
    pub fn is_valid_at(&self, date: NaiveDate) -> bool {
        self.valid_from <= date && self.valid_to.map_or(true, |end| end >= date)
    }
}

impl std::fmt::Display for Municipality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.is_active() { "active" } else { "historical" };
        match &self.canton_code {
            Some(canton) => write!(f, "{} ({}, {}) - {}", self.name, self.level, canton, status),
            None => write!(f, "{} ({}) - {}", self.name, self.level, status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(valid_to: Option<NaiveDate>, bfs_code: Option<&str>) -> Municipality {
        Municipality {
            historical_code: "261".to_string(),
            bfs_code: bfs_code.map(String::from),
            name: "Zürich".to_string(),
            short_name: Some("Zürich".to_string()),
            level: AdminLevel::Municipality,
            parent_code: Some("100".to_string()),
            valid_from: NaiveDate::from_ymd_opt(1848, 9, 12).unwrap(),
            valid_to,
            rec_type: RecordType::Other,
            canton_code: Some("ZH".to_string()),
            canton_name: Some("Zürich".to_string()),
        }
    }

    #[test]
    fn test_level_round_trip() {
        for n in 1..=3u8 {
            let level = AdminLevel::from_number(n).unwrap();
            assert_eq!(level.to_number(), n);
        }
        assert_eq!(AdminLevel::from_number(0), None);
        assert_eq!(AdminLevel::from_number(4), None);
    }

    #[test]
    fn test_record_type_labels() {
        assert_eq!(RecordType::from_label("Ersterfassung"), RecordType::Creation);
        assert_eq!(RecordType::from_label("Gemeindefusion"), RecordType::Merge);
        assert_eq!(RecordType::from_label("Aufhebung"), RecordType::Dissolution);
        assert_eq!(
            RecordType::from_label("Namensänderung"),
            RecordType::Mutation
        );
        assert_eq!(RecordType::from_label("Gemeinde"), RecordType::Other);
        assert_eq!(RecordType::from_label(""), RecordType::Other);
    }

    #[test]
    fn test_active_and_merged() {
        let active = unit(None, Some("261"));
        assert!(active.is_active());
        assert!(!active.is_merged());

        let merged = unit(NaiveDate::from_ymd_opt(2000, 12, 31), None);
        assert!(!merged.is_active());
        assert!(merged.is_merged());
    }

    #[test]
    fn test_validity_window() {
        let closed = unit(NaiveDate::from_ymd_opt(2000, 12, 31), Some("261"));
        assert!(closed.is_valid_at(NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()));
        assert!(closed.is_valid_at(NaiveDate::from_ymd_opt(2000, 12, 31).unwrap()));
        assert!(!closed.is_valid_at(NaiveDate::from_ymd_opt(2001, 1, 1).unwrap()));
        assert!(!closed.is_valid_at(NaiveDate::from_ymd_opt(1848, 9, 11).unwrap()));
    }
}
