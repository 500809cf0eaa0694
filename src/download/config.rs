use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional TOML configuration for the downloader; command-line flags
/// override anything set here.
#[derive(Debug, Deserialize, Clone)]
pub struct DownloadConfig {
    #[serde(default)]
    pub sources_dir: Option<PathBuf>,
    #[serde(default)]
    pub reference_date: Option<String>,
}

impl DownloadConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: DownloadConfig =
            toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("download.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "sources_dir = \"/tmp/geodata\"").unwrap();
        writeln!(file, "reference_date = \"01-01-2020\"").unwrap();

        let config = DownloadConfig::load_from_file(&path).unwrap();
        assert_eq!(config.sources_dir.unwrap(), PathBuf::from("/tmp/geodata"));
        assert_eq!(config.reference_date.unwrap(), "01-01-2020");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(DownloadConfig::load_from_file("/nonexistent/download.toml").is_err());
    }
}
