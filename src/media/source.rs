// SPDX-License-Identifier: MPL-2.0
//! Loading the interior list from a JSON export or an HTTP endpoint.
//!
//! Rows are accepted both in the camelCase shape used by the storefront
//! (`coverImage`) and in the snake_case column names returned by the hosted
//! database's REST interface (`cover_image`). Blank strings are treated as
//! absent values.

use crate::domain::interior::{DocumentFile, Interior};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Where the interior list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteriorSource {
    /// A JSON file containing an array of interiors.
    File(std::path::PathBuf),
    /// An HTTP(S) endpoint returning an array of interiors.
    Remote { url: String, api_key: Option<String> },
}

impl InteriorSource {
    /// Interprets a CLI argument as a URL or a file path.
    #[must_use]
    pub fn parse(raw: &str, api_key: Option<String>) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            InteriorSource::Remote {
                url: raw.to_string(),
                api_key,
            }
        } else {
            InteriorSource::File(raw.into())
        }
    }

    /// Short description used in the status line and diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            InteriorSource::File(path) => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
            InteriorSource::Remote { url, .. } => url
                .split('?')
                .next()
                .unwrap_or(url)
                .to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DocumentRecord {
    url: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InteriorRecord {
    id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "cover_image")]
    cover_image: Option<String>,
    #[serde(default, alias = "cover_preview")]
    cover_preview: Option<String>,
    #[serde(default, alias = "gallery_images")]
    gallery_images: Option<Vec<String>>,
    #[serde(default, alias = "gallery_previews")]
    gallery_previews: Option<Vec<Option<String>>>,
    #[serde(default, alias = "video_urls")]
    video_urls: Option<Vec<String>>,
    #[serde(default, alias = "document_files")]
    document_files: Option<Vec<DocumentRecord>>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    area: Option<String>,
    #[serde(default)]
    style: Option<String>,
}

impl From<InteriorRecord> for Interior {
    fn from(record: InteriorRecord) -> Self {
        Interior {
            id: record.id,
            title: record.title,
            subtitle: blank_to_none(record.subtitle),
            description: blank_to_none(record.description),
            cover_image: blank_to_none(record.cover_image),
            cover_preview: blank_to_none(record.cover_preview),
            gallery_images: record.gallery_images.unwrap_or_default(),
            gallery_previews: record
                .gallery_previews
                .unwrap_or_default()
                .into_iter()
                .map(blank_to_none)
                .collect(),
            video_urls: record.video_urls.unwrap_or_default(),
            document_files: record
                .document_files
                .unwrap_or_default()
                .into_iter()
                .filter(|doc| !doc.url.trim().is_empty())
                .map(|doc| DocumentFile {
                    url: doc.url,
                    name: blank_to_none(doc.name),
                })
                .collect(),
            location: blank_to_none(record.location),
            area: blank_to_none(record.area),
            style: blank_to_none(record.style),
        }
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses a JSON array of interiors, sorted by id.
pub fn parse_interiors(json: &str) -> Result<Vec<Interior>> {
    let records: Vec<InteriorRecord> = serde_json::from_str(json)?;
    let mut interiors: Vec<Interior> = records.into_iter().map(Interior::from).collect();
    interiors.sort_by_key(|interior| interior.id);
    Ok(interiors)
}

/// Reads interiors from a JSON file.
pub async fn load_from_file(path: &Path) -> Result<Vec<Interior>> {
    let content = tokio::fs::read_to_string(path).await?;
    parse_interiors(&content)
}

/// Fetches interiors from an HTTP endpoint.
///
/// With an API key, sends the `apikey` and bearer headers expected by
/// PostgREST-style backends.
pub async fn load_from_url(url: &str, api_key: Option<&str>) -> Result<Vec<Interior>> {
    let client = reqwest::Client::new();
    let mut request = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json");
    if let Some(key) = api_key {
        request = request
            .header("apikey", key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {key}"));
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Network(format!("HTTP {}", status.as_u16())));
    }
    let body = response.text().await?;
    parse_interiors(&body)
}

/// Loads interiors from the given source.
pub async fn load_interiors(source: InteriorSource) -> Result<Vec<Interior>> {
    match source {
        InteriorSource::File(path) => load_from_file(&path).await,
        InteriorSource::Remote { url, api_key } => load_from_url(&url, api_key.as_deref()).await,
    }
}
