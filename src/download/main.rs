//! Downloader for the Swiss geodata source files.
//!
//! Fetches the postal locality directory, the official street directory
//! and the BFS municipality snapshot into the sources directory, where the
//! library's fallback path and the importers pick them up.

mod config;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use openmun_geodata::models::date;
use openmun_geodata::source::{fetch, stac, HttpFetcher};

use crate::config::DownloadConfig;

const POSTAL_CSV: &str = "ortschaftenverzeichnis_plz_2056.csv";
const STREETS_CSV: &str = "amtliches-strassenverzeichnis_ch_2056.csv";
const STREETS_COLLECTION: &str = "ch.swisstopo.amtliches-strassenverzeichnis";
const STREETS_ITEM: &str = "amtliches-strassenverzeichnis_ch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Dataset {
    Postal,
    Streets,
    Municipalities,
    All,
}

#[derive(Parser, Debug)]
#[command(name = "download-geodata")]
#[command(about = "Download Swiss geodata from official government sources")]
struct Args {
    /// Optional TOML configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to store downloaded source files
    #[arg(long)]
    sources_dir: Option<PathBuf>,

    /// Which dataset to download
    #[arg(long, value_enum, default_value_t = Dataset::All)]
    dataset: Dataset,

    /// Reference date for the municipality snapshot (DD-MM-YYYY,
    /// YYYY-MM-DD or DD.MM.YYYY; default: today)
    #[arg(long)]
    reference_date: Option<String>,

    /// Redownload even if the file already exists
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => DownloadConfig::load_from_file(path)?,
        None => DownloadConfig {
            sources_dir: None,
            reference_date: None,
        },
    };

    let sources_dir = args
        .sources_dir
        .or(file_config.sources_dir)
        .unwrap_or_else(|| PathBuf::from("sources/swisstopo"));

    let reference_date = match args.reference_date.or(file_config.reference_date) {
        Some(raw) => date::parse_flexible(&raw)
            .with_context(|| format!("unparseable reference date '{raw}'"))?,
        None => Local::now().date_naive(),
    };
    let bfs_date = reference_date.format("%d-%m-%Y").to_string();

    fs::create_dir_all(&sources_dir).context("Failed to create sources directory")?;

    let fetcher = HttpFetcher::new();
    let mut results: Vec<(&str, bool)> = Vec::new();

    if matches!(args.dataset, Dataset::Postal | Dataset::All) {
        let ok = download_postal(&fetcher, &sources_dir, args.force);
        results.push(("postal localities", ok));
    }
    if matches!(args.dataset, Dataset::Streets | Dataset::All) {
        let ok = download_streets(&fetcher, &sources_dir, args.force);
        results.push(("street directory", ok));
    }
    if matches!(args.dataset, Dataset::Municipalities | Dataset::All) {
        let ok = download_municipalities(&fetcher, &sources_dir, &bfs_date, args.force);
        results.push(("municipality history", ok));
    }

    save_metadata(&sources_dir, &bfs_date)?;

    info!("Download summary:");
    for (dataset, ok) in &results {
        info!("  {:25} {}", dataset, if *ok { "ok" } else { "FAILED" });
    }

    if results.iter().all(|(_, ok)| *ok) {
        Ok(())
    } else {
        anyhow::bail!("one or more downloads failed")
    }
}

fn download_postal(fetcher: &HttpFetcher, sources_dir: &Path, force: bool) -> bool {
    let destination = sources_dir.join(POSTAL_CSV);
    if destination.exists() && !force {
        info!("{} already exists, use --force to redownload", POSTAL_CSV);
        return true;
    }

    let url = format!(
        "{}/ch.swisstopo-vd.ortschaftenverzeichnis_plz/ortschaftenverzeichnis_plz/{}",
        fetch::GEO_ADMIN_BASE,
        POSTAL_CSV
    );

    match download_with_progress(fetcher, &url, &destination) {
        Ok(bytes) => {
            info!("Downloaded postal localities ({:.2} MB)", mb(bytes));
            true
        }
        Err(err) => {
            warn!("Failed to download postal localities: {}", err);
            false
        }
    }
}

fn download_streets(fetcher: &HttpFetcher, sources_dir: &Path, force: bool) -> bool {
    let destination = sources_dir.join(STREETS_CSV);
    if destination.exists() && !force {
        info!("{} already exists, use --force to redownload", STREETS_CSV);
        return true;
    }

    let result = (|| -> Result<u64> {
        let items: stac::ItemCollection =
            fetcher.get_json(&stac::collection_items_url(STREETS_COLLECTION))?;
        let href = stac::find_asset_href(&items, STREETS_ITEM, STREETS_CSV)?.to_string();
        download_with_progress(fetcher, &href, &destination)
    })();

    match result {
        Ok(bytes) => {
            info!("Downloaded street directory ({:.2} MB)", mb(bytes));
            true
        }
        Err(err) => {
            warn!("Failed to download street directory: {}", err);
            false
        }
    }
}

fn download_municipalities(
    fetcher: &HttpFetcher,
    sources_dir: &Path,
    bfs_date: &str,
    force: bool,
) -> bool {
    let filename = municipality_filename(bfs_date);
    let destination = sources_dir.join(&filename);
    if destination.exists() && !force {
        info!("{} already exists, use --force to redownload", filename);
        return true;
    }

    let result = (|| -> Result<usize> {
        let url = fetch::snapshot_url(bfs_date)?;
        let content = fetcher.download_text(url.as_str())?;
        fs::write(&destination, &content)?;
        // subtract the header line
        Ok(content.lines().count().saturating_sub(1))
    })();

    match result {
        Ok(records) => {
            info!(
                "Downloaded municipality snapshot for {} ({} records)",
                bfs_date, records
            );
            true
        }
        Err(err) => {
            warn!("Failed to download municipality snapshot: {}", err);
            false
        }
    }
}

/// Stream a download to disk with a progress bar.
fn download_with_progress(fetcher: &HttpFetcher, url: &str, destination: &Path) -> Result<u64> {
    info!("Downloading {}", url);
    let response = fetcher.get(url)?;
    let total = response.content_length().unwrap_or(0);

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})",
            )?
            .progress_chars("#>-"),
    );

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(destination)
        .with_context(|| format!("Failed to create {}", destination.display()))?;
    let mut reader = pb.wrap_read(response);
    let bytes = std::io::copy(&mut reader, &mut file)?;
    file.flush()?;
    pb.finish_and_clear();

    Ok(bytes)
}

fn municipality_filename(bfs_date: &str) -> String {
    format!("bfs_municipalities_{}.csv", bfs_date.replace('-', ""))
}

/// Record what was downloaded; merged with any existing metadata file.
fn save_metadata(sources_dir: &Path, bfs_date: &str) -> Result<()> {
    let metadata_path = sources_dir.join("metadata.json");
    let today = Local::now().format("%Y-%m-%d").to_string();

    let mut metadata: serde_json::Map<String, serde_json::Value> =
        match fs::read_to_string(&metadata_path) {
            Ok(existing) => serde_json::from_str(&existing).unwrap_or_default(),
            Err(_) => serde_json::Map::new(),
        };

    metadata.insert(
        POSTAL_CSV.to_string(),
        json!({
            "description": "Swiss Postal Codes and Localities (Ortschaftenverzeichnis PLZ)",
            "source": "swisstopo",
            "dataset_id": "ch.swisstopo-vd.ortschaftenverzeichnis_plz",
            "format": "CSV (semicolon-delimited)",
            "coordinate_system": "LV95 (EPSG:2056)",
            "downloaded": today,
            "license": "Open Government Data (OGD) Switzerland",
        }),
    );
    metadata.insert(
        STREETS_CSV.to_string(),
        json!({
            "description": "Official Street Directory of Switzerland",
            "source": "swisstopo",
            "dataset_id": STREETS_COLLECTION,
            "format": "CSV (semicolon-delimited)",
            "coordinate_system": "LV95 (EPSG:2056)",
            "downloaded": today,
            "license": "Open Government Data (OGD) Switzerland",
        }),
    );
    metadata.insert(
        municipality_filename(bfs_date),
        json!({
            "description": "Swiss Municipality History (BFS Communes Snapshot)",
            "source": "BFS",
            "dataset_id": "communes.snapshot",
            "format": "CSV (comma-delimited)",
            "reference_date": bfs_date,
            "downloaded": today,
            "license": "Open Government Data (OGD) Switzerland",
        }),
    );

    fs::write(
        &metadata_path,
        serde_json::to_string_pretty(&serde_json::Value::Object(metadata))?,
    )?;
    info!("Metadata saved to {}", metadata_path.display());
    Ok(())
}

fn mb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}
