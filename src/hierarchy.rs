//! Resolution of the BFS administrative hierarchy from flat snapshot rows.
//!
//! The snapshot feed delivers cantons, districts and municipalities as an
//! unordered list of rows linked by historical codes. This module turns
//! that list into an immutable, fully indexed collection: parent links are
//! checked against the dataset, and every unit is enriched with the code
//! and name of its owning canton by walking the parent chain once, at
//! construction. Queries never walk the tree.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::info;

use crate::error::{GeoError, Result};
use crate::models::date;
use crate::models::municipality::{AdminLevel, Municipality, RecordType, SnapshotRow};

/// Maximum parent hops from any unit to its canton
/// (municipality -> district -> canton).
const MAX_PARENT_HOPS: usize = 2;

/// The resolved, immutable set of administrative units with lookup indexes
/// by BFS code, historical code and canton.
#[derive(Debug)]
pub struct ResolvedHierarchy {
    units: Vec<Municipality>,
    by_bfs: HashMap<String, Vec<usize>>,
    by_historical: HashMap<String, Vec<usize>>,
    by_canton: HashMap<String, Vec<usize>>,
}

impl ResolvedHierarchy {
    /// Build the hierarchy from raw snapshot rows.
    ///
    /// Fails with a data-integrity error naming the offending row when a
    /// row has unparseable dates or missing identifiers, when a non-canton
    /// unit has no resolvable parent, when two rows share the same
    /// (historical code, valid-from) pair, or when a parent chain does not
    /// reach a canton within two hops.
    pub fn resolve(rows: Vec<SnapshotRow>) -> Result<Self> {
        let mut units = Vec::with_capacity(rows.len());
        let mut seen: HashSet<(String, NaiveDate)> = HashSet::new();

        for row in &rows {
            let unit = parse_row(row)?;
            if !seen.insert((unit.historical_code.clone(), unit.valid_from)) {
                return Err(GeoError::DataIntegrity(format!(
                    "duplicate snapshot for historical code '{}' valid from {}",
                    unit.historical_code, unit.valid_from
                )));
            }
            units.push(unit);
        }

        let by_historical = index_by(&units, |unit| Some(unit.historical_code.clone()));
        validate_parents(&units, &by_historical)?;

        let enrichments = canton_enrichments(&units, &by_historical)?;
        for (unit, (canton_code, canton_name)) in units.iter_mut().zip(enrichments) {
            unit.canton_code = canton_code;
            unit.canton_name = canton_name;
        }

        let by_bfs = index_by(&units, |unit| unit.bfs_code.clone());
        let by_canton = index_by(&units, |unit| unit.canton_code.clone());

        let cantons = units
            .iter()
            .filter(|unit| unit.level == AdminLevel::Canton)
            .count();
        info!(
            "resolved {} administrative units ({} cantons)",
            units.len(),
            cantons
        );

        Ok(Self {
            units,
            by_bfs,
            by_historical,
            by_canton,
        })
    }

    /// All resolved units, in feed order.
    pub fn units(&self) -> &[Municipality] {
        &self.units
    }

    /// Units carrying the given current BFS code.
    pub fn lookup_bfs(&self, code: &str) -> impl Iterator<Item = &Municipality> {
        self.posting_list(&self.by_bfs, code)
    }

    /// Units carrying the given historical code.
    pub fn lookup_historical(&self, code: &str) -> impl Iterator<Item = &Municipality> {
        self.posting_list(&self.by_historical, code)
    }

    /// Units whose resolved canton code matches (expects an uppercase code).
    pub fn lookup_canton(&self, canton_code: &str) -> impl Iterator<Item = &Municipality> {
        self.posting_list(&self.by_canton, canton_code)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn posting_list<'a>(
        &'a self,
        index: &'a HashMap<String, Vec<usize>>,
        key: &str,
    ) -> impl Iterator<Item = &'a Municipality> {
        index
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| &self.units[idx])
    }
}

fn parse_row(row: &SnapshotRow) -> Result<Municipality> {
    let historical_code = row.historical_code.trim().to_string();
    if historical_code.is_empty() {
        return Err(GeoError::DataIntegrity(
            "snapshot row with empty historical code".to_string(),
        ));
    }

    let name = row.name.trim().to_string();
    if name.is_empty() {
        return Err(GeoError::DataIntegrity(format!(
            "row '{historical_code}': missing name"
        )));
    }

    let level_number = row.level.ok_or_else(|| {
        GeoError::DataIntegrity(format!("row '{historical_code}': missing level"))
    })?;
    let level = AdminLevel::from_number(level_number).ok_or_else(|| {
        GeoError::DataIntegrity(format!(
            "row '{historical_code}': unknown level {level_number}"
        ))
    })?;

    let valid_from = parse_required_date(&historical_code, "ValidFrom", row.valid_from.as_deref())?;
    let valid_to = parse_optional_date(&historical_code, "ValidTo", row.valid_to.as_deref())?;

    if let Some(end) = valid_to {
        if valid_from > end {
            return Err(GeoError::DataIntegrity(format!(
                "row '{historical_code}': valid_from {valid_from} after valid_to {end}"
            )));
        }
    }

    Ok(Municipality {
        historical_code,
        bfs_code: non_empty(row.bfs_code.as_deref()),
        name,
        short_name: non_empty(row.short_name.as_deref()),
        level,
        parent_code: non_empty(row.parent_code.as_deref()),
        valid_from,
        valid_to,
        rec_type: row
            .rec_type
            .as_deref()
            .map(RecordType::from_label)
            .unwrap_or(RecordType::Other),
        canton_code: None,
        canton_name: None,
    })
}

fn parse_required_date(code: &str, field: &str, raw: Option<&str>) -> Result<NaiveDate> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty());
    match raw {
        Some(value) => date::parse_flexible(value).ok_or_else(|| {
            GeoError::DataIntegrity(format!("row '{code}': unparseable {field} '{value}'"))
        }),
        None => Err(GeoError::DataIntegrity(format!(
            "row '{code}': missing {field}"
        ))),
    }
}

fn parse_optional_date(code: &str, field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty());
    match raw {
        Some(value) => date::parse_flexible(value)
            .map(Some)
            .ok_or_else(|| {
                GeoError::DataIntegrity(format!("row '{code}': unparseable {field} '{value}'"))
            }),
        None => Ok(None),
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

fn index_by<F>(units: &[Municipality], key: F) -> HashMap<String, Vec<usize>>
where
    F: Fn(&Municipality) -> Option<String>,
{
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, unit) in units.iter().enumerate() {
        if let Some(key) = key(unit) {
            index.entry(key).or_default().push(idx);
        }
    }
    index
}

/// Every non-canton unit must have a parent that resolves within the
/// dataset. Cantons may be roots, including cantons whose parent code
/// points outside the snapshot (the country-level record is not part of
/// the feed).
fn validate_parents(units: &[Municipality], by_historical: &HashMap<String, Vec<usize>>) -> Result<()> {
    for unit in units {
        if unit.level == AdminLevel::Canton {
            continue;
        }
        let parent_code = unit.parent_code.as_deref().ok_or_else(|| {
            GeoError::DataIntegrity(format!(
                "{} '{}' ({}) has no parent code",
                unit.level, unit.name, unit.historical_code
            ))
        })?;
        if !by_historical.contains_key(parent_code) {
            return Err(GeoError::DataIntegrity(format!(
                "{} '{}' ({}) references unknown parent '{}'",
                unit.level, unit.name, unit.historical_code, parent_code
            )));
        }
    }
    Ok(())
}

/// Compute the canton code/name for every unit by walking parent links, at
/// most [`MAX_PARENT_HOPS`] times. Cantons enrich themselves from their own
/// short name. Exceeding the hop bound means a cycle or an over-deep
/// chain; both are data-integrity errors, never a loop.
fn canton_enrichments(
    units: &[Municipality],
    by_historical: &HashMap<String, Vec<usize>>,
) -> Result<Vec<(Option<String>, Option<String>)>> {
    let mut enrichments = Vec::with_capacity(units.len());

    for unit in units {
        if unit.level == AdminLevel::Canton {
            enrichments.push((unit.short_name.clone(), Some(unit.name.clone())));
            continue;
        }

        let mut current = unit;
        let mut found = None;
        for _ in 0..MAX_PARENT_HOPS {
            let parent_code = match current.parent_code.as_deref() {
                Some(code) => code,
                None => break,
            };
            let parent = resolve_parent(units, by_historical, parent_code);
            match parent {
                Some(parent) if parent.level == AdminLevel::Canton => {
                    found = Some((parent.short_name.clone(), Some(parent.name.clone())));
                    break;
                }
                Some(parent) => current = parent,
                None => break,
            }
        }

        match found {
            Some(enrichment) => enrichments.push(enrichment),
            None => {
                return Err(GeoError::DataIntegrity(format!(
                    "{} '{}' ({}): parent chain does not reach a canton within {} hops",
                    unit.level, unit.name, unit.historical_code, MAX_PARENT_HOPS
                )))
            }
        }
    }

    Ok(enrichments)
}

/// Resolve a parent code to a unit. A historical code can label several
/// records with disjoint validity windows; the record with the latest
/// valid-from wins, consistent with the query-layer tie-break.
fn resolve_parent<'a>(
    units: &'a [Municipality],
    by_historical: &HashMap<String, Vec<usize>>,
    parent_code: &str,
) -> Option<&'a Municipality> {
    by_historical
        .get(parent_code)?
        .iter()
        .map(|&idx| &units[idx])
        .max_by_key(|unit| unit.valid_from)
}
