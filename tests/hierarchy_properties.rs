//! Property tests over synthetic administrative hierarchies of depth 1-3.

use std::collections::HashMap;

use openmun_geodata::hierarchy::ResolvedHierarchy;
use openmun_geodata::models::{AdminLevel, SnapshotRow};
use openmun_geodata::MunicipalityDirectory;
use proptest::prelude::*;
use proptest::test_runner::Config;

const CANTON_CODES: [&str; 4] = ["ZH", "BE", "LU", "UR"];
const CANTON_NAMES: [&str; 4] = ["Zürich", "Bern", "Luzern", "Uri"];

fn row(
    historical_code: String,
    name: &str,
    short_name: Option<&str>,
    level: u8,
    parent: Option<String>,
    valid_to: Option<&str>,
) -> SnapshotRow {
    SnapshotRow {
        historical_code,
        bfs_code: None,
        name: name.to_string(),
        short_name: short_name.map(String::from),
        level: Some(level),
        parent_code: parent,
        valid_from: Some("12-09-1848".to_string()),
        valid_to: valid_to.map(String::from),
        rec_type: None,
    }
}

/// Per-canton shape: number of districts, municipalities per district,
/// municipalities attached directly to the canton, and whether every other
/// municipality is closed (historical).
type CantonShape = (u8, u8, u8, bool);

/// Build a snapshot feed from the generated shapes. Returns the rows plus
/// the expected canton code for every historical code.
fn build_feed(shapes: &[CantonShape]) -> (Vec<SnapshotRow>, HashMap<String, String>) {
    let mut rows = Vec::new();
    let mut expected = HashMap::new();
    let mut muni_counter = 0u32;

    for (canton_idx, &(districts, munis_per_district, direct_munis, close_some)) in
        shapes.iter().enumerate()
    {
        let canton_code = CANTON_CODES[canton_idx];
        let canton_hist = format!("{}", canton_idx + 1);
        rows.push(row(
            canton_hist.clone(),
            CANTON_NAMES[canton_idx],
            Some(canton_code),
            1,
            None,
            None,
        ));
        expected.insert(canton_hist.clone(), canton_code.to_string());

        for district_idx in 0..districts {
            let district_hist = format!("{}{:02}", canton_hist, district_idx);
            rows.push(row(
                district_hist.clone(),
                "Bezirk",
                None,
                2,
                Some(canton_hist.clone()),
                None,
            ));
            expected.insert(district_hist.clone(), canton_code.to_string());

            for _ in 0..munis_per_district {
                muni_counter += 1;
                let muni_hist = format!("m{muni_counter}");
                let valid_to = if close_some && muni_counter % 2 == 0 {
                    Some("31-12-2000")
                } else {
                    None
                };
                rows.push(row(
                    muni_hist.clone(),
                    "Gemeinde",
                    None,
                    3,
                    Some(district_hist.clone()),
                    valid_to,
                ));
                expected.insert(muni_hist, canton_code.to_string());
            }
        }

        for _ in 0..direct_munis {
            muni_counter += 1;
            let muni_hist = format!("m{muni_counter}");
            rows.push(row(
                muni_hist.clone(),
                "Gemeinde",
                None,
                3,
                Some(canton_hist.clone()),
                None,
            ));
            expected.insert(muni_hist, canton_code.to_string());
        }
    }

    (rows, expected)
}

fn shapes() -> impl Strategy<Value = Vec<CantonShape>> {
    prop::collection::vec((0u8..3, 0u8..3, 0u8..3, any::<bool>()), 1..=4)
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn canton_enrichment_terminates_within_two_hops(shapes in shapes()) {
        let (rows, expected) = build_feed(&shapes);
        let hierarchy = ResolvedHierarchy::resolve(rows).expect("synthetic feed resolves");

        let by_historical: HashMap<&str, _> = hierarchy
            .units()
            .iter()
            .map(|unit| (unit.historical_code.as_str(), unit))
            .collect();

        for unit in hierarchy.units() {
            // enrichment assigned the expected canton
            prop_assert_eq!(
                unit.canton_code.as_deref(),
                expected.get(&unit.historical_code).map(String::as_str)
            );

            // and the parent walk reaches a canton within two hops
            let mut current = *by_historical
                .get(unit.historical_code.as_str())
                .expect("indexed");
            let mut hops = 0;
            while current.level != AdminLevel::Canton {
                let parent_code = current.parent_code.as_deref().expect("non-canton has parent");
                current = by_historical.get(parent_code).expect("parent resolves");
                hops += 1;
                prop_assert!(hops <= 2, "parent chain exceeded two hops");
            }
        }
    }

    #[test]
    fn validity_windows_are_ordered(shapes in shapes()) {
        let (rows, _) = build_feed(&shapes);
        let hierarchy = ResolvedHierarchy::resolve(rows).expect("synthetic feed resolves");
        for unit in hierarchy.units() {
            if let Some(end) = unit.valid_to {
                prop_assert!(unit.valid_from <= end);
            }
        }
    }

    #[test]
    fn active_and_historical_partition_the_directory(shapes in shapes()) {
        let (rows, _) = build_feed(&shapes);
        let directory =
            MunicipalityDirectory::from_rows(rows, Some("2020-01-01")).expect("directory builds");

        let active = directory.get_active();
        let historical = directory.get_historical();

        prop_assert_eq!(active.len() + historical.len(), directory.len());
        for unit in &active {
            prop_assert!(unit.is_active());
        }
        for unit in &historical {
            prop_assert!(!unit.is_active());
        }
    }
}
