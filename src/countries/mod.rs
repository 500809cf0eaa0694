//! Lookup API for BFS country codes.
//!
//! The data is a bundled static table regenerated from official BFS
//! sources by the `import-countries` binary; no network or fallback
//! handling is involved.

mod table;

use crate::models::country::Country;

pub use table::COUNTRY_CODES;

/// Country by ISO 3166-1 alpha-2 code, case-insensitive.
pub fn get(iso2: &str) -> Option<&'static Country> {
    let needle = iso2.trim().to_ascii_uppercase();
    COUNTRY_CODES
        .binary_search_by(|country| country.iso2.cmp(needle.as_str()))
        .ok()
        .map(|idx| &COUNTRY_CODES[idx])
}

/// Country by BFS code, e.g. "8100" for Switzerland.
pub fn get_by_bfs_code(bfs_code: &str) -> Option<&'static Country> {
    let needle = bfs_code.trim();
    COUNTRY_CODES
        .iter()
        .find(|country| country.bfs_code == needle)
}

/// The full table, sorted by ISO2 code.
pub fn all() -> &'static [Country] {
    COUNTRY_CODES
}

/// Countries whose name in `language` contains `query`,
/// case-insensitively.
pub fn search(query: &str, language: &str) -> Vec<&'static Country> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    COUNTRY_CODES
        .iter()
        .filter(|country| country.name(language).to_lowercase().contains(&needle))
        .collect()
}

fn bundled(iso2: &str) -> &'static Country {
    get(iso2).expect("bundled country table is missing a neighbour entry")
}

/// Switzerland and its neighbours, for convenience.
pub fn switzerland() -> &'static Country {
    bundled("CH")
}

pub fn germany() -> &'static Country {
    bundled("DE")
}

pub fn france() -> &'static Country {
    bundled("FR")
}

pub fn italy() -> &'static Country {
    bundled("IT")
}

pub fn austria() -> &'static Country {
    bundled("AT")
}

pub fn liechtenstein() -> &'static Country {
    bundled("LI")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_switzerland() {
        let ch = get("CH").unwrap();
        assert_eq!(ch.iso2, "CH");
        assert_eq!(ch.iso3, "CHE");
        assert_eq!(ch.bfs_code, "8100");
        assert_eq!(ch.name_de, "Schweiz");
        assert_eq!(ch.name_fr, "Suisse");
        assert_eq!(ch.name_it, "Svizzera");
        assert_eq!(ch.name_en, "Switzerland");
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let lower = get("ch").unwrap();
        let upper = get("CH").unwrap();
        let mixed = get("Ch").unwrap();
        assert_eq!(lower.bfs_code, upper.bfs_code);
        assert_eq!(mixed.bfs_code, upper.bfs_code);
    }

    #[test]
    fn test_get_by_bfs_code() {
        let ch = get_by_bfs_code("8100").unwrap();
        assert_eq!(ch.iso2, "CH");

        let de = get_by_bfs_code("8207").unwrap();
        assert_eq!(de.iso2, "DE");
        assert_eq!(de.name_de, "Deutschland");
    }

    #[test]
    fn test_unknown_codes() {
        assert!(get("XX").is_none());
        assert!(get_by_bfs_code("9999").is_none());
    }

    #[test]
    fn test_all_is_sorted_and_complete() {
        let countries = all();
        assert!(countries.len() > 200);

        let iso_codes: Vec<&str> = countries.iter().map(|country| country.iso2).collect();
        let mut sorted = iso_codes.clone();
        sorted.sort_unstable();
        assert_eq!(iso_codes, sorted);

        for expected in ["CH", "DE", "FR", "US"] {
            assert!(iso_codes.contains(&expected));
        }
    }

    #[test]
    fn test_search() {
        let results = search("Schweiz", "de");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].iso2, "CH");

        let results = search("Suisse", "fr");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].iso2, "CH");

        let partial = search("Schw", "de");
        assert!(partial.iter().any(|country| country.iso2 == "CH"));

        let shouty = search("SCHWEIZ", "de");
        assert_eq!(shouty.len(), 1);

        assert!(search("", "de").is_empty());
    }

    #[test]
    fn test_name_language_fallback() {
        let ch = get("CH").unwrap();
        assert_eq!(ch.name("de"), "Schweiz");
        assert_eq!(ch.name("fr"), "Suisse");
        assert_eq!(ch.name("it"), "Svizzera");
        assert_eq!(ch.name("en"), "Switzerland");
        // unknown language falls back to German
        assert_eq!(ch.name("xx"), "Schweiz");
    }

    #[test]
    fn test_neighbour_constants() {
        assert_eq!(switzerland().bfs_code, "8100");
        assert_eq!(germany().iso2, "DE");
        assert_eq!(france().iso2, "FR");
        assert_eq!(italy().iso2, "IT");
        assert_eq!(austria().iso2, "AT");
        assert_eq!(liechtenstein().iso2, "LI");
    }

    #[test]
    fn test_table_integrity() {
        for country in all() {
            assert!(!country.iso2.is_empty());
            assert!(!country.bfs_code.is_empty());
            // BFS codes are 4-digit numeric strings
            assert_eq!(country.bfs_code.len(), 4);
            assert!(country.bfs_code.chars().all(|c| c.is_ascii_digit()));
            // at least one name present
            assert!(
                !country.name_de.is_empty()
                    || !country.name_fr.is_empty()
                    || !country.name_it.is_empty()
                    || !country.name_en.is_empty()
            );
        }
    }
}
