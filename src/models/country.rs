//! Data model for BFS country codes.

use serde::Serialize;

/// Country with its BFS code and multilingual short names.
///
/// Entries live in the bundled table generated by `import-countries`; all
/// fields are static strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code
    pub iso2: &'static str,
    /// ISO 3166-1 alpha-3 code, empty for some territories
    pub iso3: &'static str,
    /// BFS country code, e.g. "8100" for Switzerland
    pub bfs_code: &'static str,
    pub name_de: &'static str,
    pub name_fr: &'static str,
    pub name_it: &'static str,
    pub name_en: &'static str,
}

impl Country {
    /// Name in the requested language ("de", "fr", "it", "en"); unknown
    /// languages fall back to German.
    pub fn name(&self, language: &str) -> &'static str {
        match language {
            "fr" => self.name_fr,
            "it" => self.name_it,
            "en" => self.name_en,
            _ => self.name_de,
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name_en, self.iso2)
    }
}
