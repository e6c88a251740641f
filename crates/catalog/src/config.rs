//! Environment-driven configuration for the catalogue.

use std::path::PathBuf;

use anyhow::Context;

use crate::store::Catalog;

pub const DEFAULT_BASE_URL: &str = "https://sangamfurniture.com";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "919876543210";

pub const ENV_BASE_URL: &str = "SANGAM_BASE_URL";
pub const ENV_WHATSAPP_NUMBER: &str = "SANGAM_WHATSAPP_NUMBER";
pub const ENV_CATALOG_PATH: &str = "SANGAM_CATALOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Public site origin used for absolute URLs (sitemap).
    pub base_url: String,
    /// Number used for WhatsApp enquiry links, digits only with country code.
    pub whatsapp_number: String,
    /// JSON catalogue replacing the built-in content.
    pub catalog_path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            catalog_path: None,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get(ENV_BASE_URL).unwrap_or_else(|| {
            tracing::warn!("{ENV_BASE_URL} not set; using {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        });
        let whatsapp_number = get(ENV_WHATSAPP_NUMBER).unwrap_or_else(|| {
            tracing::warn!("{ENV_WHATSAPP_NUMBER} not set; using placeholder number");
            DEFAULT_WHATSAPP_NUMBER.to_string()
        });

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            whatsapp_number: whatsapp_number
                .chars()
                .filter(char::is_ascii_digit)
                .collect(),
            catalog_path: get(ENV_CATALOG_PATH).map(PathBuf::from),
        }
    }

    /// The configured catalogue: the JSON file when one is set, else the
    /// built-in content.
    pub fn open_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load_json(path)
                .with_context(|| format!("failed to open catalogue at {}", path.display())),
            None => Ok(Catalog::sample().clone()),
        }
    }
}
