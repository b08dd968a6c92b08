// SPDX-License-Identifier: MPL-2.0
//! Fetching image bytes by URL.
//!
//! Remote URLs are downloaded with `reqwest`; `file://` URLs and bare paths
//! are read from disk. Decoding is left to the image widget.

use crate::error::{Error, Result};
use futures_util::StreamExt;
use iced::widget::image;

/// Upper bound on a single downloaded image (32 MB).
pub const MAX_IMAGE_BYTES: usize = 32 * 1024 * 1024;

/// Where the bytes of a media URL live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location<'a> {
    Remote(&'a str),
    Local(&'a str),
}

/// Classifies a media URL.
#[must_use]
pub fn locate(url: &str) -> Location<'_> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Location::Remote(url)
    } else {
        Location::Local(url.strip_prefix("file://").unwrap_or(url))
    }
}

/// Downloads or reads the image at `url` and wraps it in an image handle.
pub async fn fetch_image(url: String) -> Result<image::Handle> {
    let bytes = match locate(&url) {
        Location::Remote(remote) => download(remote).await?,
        Location::Local(path) => tokio::fs::read(path).await?,
    };
    if bytes.is_empty() {
        return Err(Error::Io(format!("empty media file: {url}")));
    }
    Ok(image::Handle::from_bytes(bytes))
}

async fn download(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Network(format!("HTTP {}", status.as_u16())));
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
            return Err(Error::Network(format!(
                "media exceeds {} MB limit",
                MAX_IMAGE_BYTES / (1024 * 1024)
            )));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn locate_distinguishes_remote_and_local() {
        assert_eq!(
            locate("https://cdn.example.com/a.jpg"),
            Location::Remote("https://cdn.example.com/a.jpg")
        );
        assert_eq!(locate("file:///tmp/a.jpg"), Location::Local("/tmp/a.jpg"));
        assert_eq!(locate("media/a.jpg"), Location::Local("media/a.jpg"));
    }

    #[tokio::test]
    async fn fetch_reads_local_files() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("a.png");
        fs::write(&path, b"fake image data").expect("failed to write file");

        let result = fetch_image(path.to_string_lossy().into_owned()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn fetch_rejects_empty_files() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("empty.png");
        fs::write(&path, b"").expect("failed to write file");

        let result = fetch_image(format!("file://{}", path.display())).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn fetch_missing_file_is_io_error() {
        let result = fetch_image("/definitely/not/here.jpg".to_string()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
