//! Minimal STAC API models for locating swisstopo dataset assets.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{GeoError, Result};

use super::fetch::STAC_API;

#[derive(Debug, Deserialize)]
pub struct ItemCollection {
    #[serde(default)]
    pub features: Vec<Item>,
}

#[derive(Debug, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub assets: HashMap<String, Asset>,
}

#[derive(Debug, Deserialize)]
pub struct Asset {
    pub href: String,
}

/// Items endpoint of a STAC collection.
pub fn collection_items_url(collection_id: &str) -> String {
    format!("{STAC_API}/collections/{collection_id}/items")
}

/// Find the download href of a named asset on a named item.
pub fn find_asset_href<'a>(
    items: &'a ItemCollection,
    item_id: &str,
    asset_name: &str,
) -> Result<&'a str> {
    let item = items
        .features
        .iter()
        .find(|feature| feature.id == item_id)
        .ok_or_else(|| GeoError::SourceUnavailable {
            context: "stac lookup",
            detail: format!("item '{item_id}' not found in collection"),
        })?;

    item.assets
        .get(asset_name)
        .map(|asset| asset.href.as_str())
        .ok_or_else(|| GeoError::SourceUnavailable {
            context: "stac lookup",
            detail: format!("asset '{asset_name}' not found on item '{item_id}'"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ItemCollection {
        serde_json::from_str(
            r#"{
                "features": [
                    {
                        "id": "amtliches-strassenverzeichnis_ch",
                        "assets": {
                            "amtliches-strassenverzeichnis_ch_2056.csv": {
                                "href": "https://example.org/streets.csv"
                            }
                        }
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_asset_href() {
        let items = sample();
        let href = find_asset_href(
            &items,
            "amtliches-strassenverzeichnis_ch",
            "amtliches-strassenverzeichnis_ch_2056.csv",
        )
        .unwrap();
        assert_eq!(href, "https://example.org/streets.csv");
    }

    #[test]
    fn test_missing_item_and_asset() {
        let items = sample();
        assert!(find_asset_href(&items, "nope", "whatever").is_err());
        assert!(find_asset_href(&items, "amtliches-strassenverzeichnis_ch", "nope").is_err());
    }
}
