//! Importer for BFS country codes.
//!
//! Reads the CSV export of the official BFS country code workbook
//! (be-b-00.04-sg-01, sheet Stat_Geb) and regenerates the bundled Rust
//! table in src/countries/table.rs.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

// Column positions in the Stat_Geb sheet.
const COL_BFS_CODE: usize = 0;
const COL_ISO2: usize = 2;
const COL_ISO3: usize = 3;
const COL_NAME_DE: usize = 4;
const COL_NAME_FR: usize = 5;
const COL_NAME_IT: usize = 6;
const COL_NAME_EN: usize = 7;
const COL_VALID: usize = 22;

#[derive(Parser, Debug)]
#[command(name = "import-countries")]
#[command(about = "Regenerate the bundled BFS country code table")]
struct Args {
    /// CSV export of the BFS country code workbook
    #[arg(long, default_value = "sources/bfs/be-b-00.04-sg-01.csv")]
    source: PathBuf,

    /// Generated Rust module to write
    #[arg(long, default_value = "src/countries/table.rs")]
    output: PathBuf,

    /// Regenerate even if the output already exists
    #[arg(long)]
    force: bool,
}

#[derive(Debug)]
struct CountryEntry {
    iso2: String,
    iso3: String,
    bfs_code: String,
    name_de: String,
    name_fr: String,
    name_it: String,
    name_en: String,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    if args.output.exists() && !args.force {
        info!(
            "Output already exists: {} (use --force to regenerate)",
            args.output.display()
        );
        return Ok(());
    }

    let content = fs::read_to_string(&args.source)
        .with_context(|| format!("Failed to read source file {}", args.source.display()))?;

    let mut entries = parse_entries(&content)?;
    entries.sort_by(|a, b| a.iso2.cmp(&b.iso2));
    info!("Parsed {} valid countries", entries.len());

    let module = render_table(&entries);
    if let Some(parent) = args.output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&args.output, module)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        "Generated {} country codes into {}",
        entries.len(),
        args.output.display()
    );
    Ok(())
}

/// Keep entries marked valid ("J") that carry both a BFS code and an ISO2
/// code; territories without either are skipped.
fn parse_entries(content: &str) -> Result<Vec<CountryEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result?;
        let column = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();

        let bfs_code = column(COL_BFS_CODE);
        let iso2 = column(COL_ISO2);
        let valid = column(COL_VALID);

        if valid != "J" || bfs_code.is_empty() || iso2.is_empty() {
            continue;
        }

        entries.push(CountryEntry {
            iso2,
            iso3: column(COL_ISO3),
            bfs_code,
            name_de: column(COL_NAME_DE),
            name_fr: column(COL_NAME_FR),
            name_it: column(COL_NAME_IT),
            name_en: column(COL_NAME_EN),
        });
    }
    Ok(entries)
}

fn render_table(entries: &[CountryEntry]) -> String {
    let mut out = String::from(
        "\
// Auto-generated from BFS data. DO NOT EDIT MANUALLY.
//
// Source: be-b-00.04-sg-01.xlsx
// Description: BFS Official Country and Territory Codes
//              (Staaten- und Gebietsverzeichnis)
//
// Data: (c) Swiss Federal Statistical Office (BFS), provided under Open
// Government Data (OGD) Switzerland terms (\"Open use. Must provide the
// source.\").
//
// Regenerate with: cargo run --bin import-countries

use crate::models::country::Country;

/// BFS country codes and multilingual names, sorted by ISO2 code.
pub static COUNTRY_CODES: &[Country] = &[
",
    );

    for entry in entries {
        out.push_str("    Country {\n");
        out.push_str(&format!("        iso2: \"{}\",\n", escape(&entry.iso2)));
        out.push_str(&format!("        iso3: \"{}\",\n", escape(&entry.iso3)));
        out.push_str(&format!(
            "        bfs_code: \"{}\",\n",
            escape(&entry.bfs_code)
        ));
        out.push_str(&format!(
            "        name_de: \"{}\",\n",
            escape(&entry.name_de)
        ));
        out.push_str(&format!(
            "        name_fr: \"{}\",\n",
            escape(&entry.name_fr)
        ));
        out.push_str(&format!(
            "        name_it: \"{}\",\n",
            escape(&entry.name_it)
        ));
        out.push_str(&format!(
            "        name_en: \"{}\",\n",
            escape(&entry.name_en)
        ));
        out.push_str("    },\n");
    }

    out.push_str("];\n");
    out
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
BfsCode,State,Iso2,Iso3,NameDe,NameFr,NameIt,NameEn,c8,c9,c10,c11,c12,c13,c14,c15,c16,c17,c18,c19,c20,c21,Valid
8100,,CH,CHE,Schweiz,Suisse,Svizzera,Switzerland,,,,,,,,,,,,,,,J
8207,,DE,DEU,Deutschland,Allemagne,Germania,Germany,,,,,,,,,,,,,,,J
8998,,,XYZ,Ohne ISO,Sans ISO,Senza ISO,No ISO,,,,,,,,,,,,,,,J
8999,,XX,XXX,Ungültig,Invalide,Non valido,Invalid,,,,,,,,,,,,,,,N
";

    #[test]
    fn test_parse_entries_filters_invalid() {
        let entries = parse_entries(SAMPLE).unwrap();
        let iso2: Vec<&str> = entries.iter().map(|entry| entry.iso2.as_str()).collect();
        assert_eq!(iso2, vec!["CH", "DE"]);
    }

    #[test]
    fn test_render_table_escapes_quotes() {
        let entries = vec![CountryEntry {
            iso2: "CI".to_string(),
            iso3: "CIV".to_string(),
            bfs_code: "8309".to_string(),
            name_de: "Côte d'Ivoire".to_string(),
            name_fr: "Côte d'Ivoire".to_string(),
            name_it: "Costa d'Avorio".to_string(),
            name_en: "C\"ote d'Ivoire".to_string(),
        }];
        let table = render_table(&entries);
        assert!(table.contains("Côte d'Ivoire"));
        assert!(table.contains("C\\\"ote"));
        assert!(table.starts_with("// Auto-generated"));
        assert!(table.trim_end().ends_with("];"));
    }
}
