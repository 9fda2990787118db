use std::path::PathBuf;
use std::time::Duration;

use profilecard_config::{HTTP_TIMEOUT_SECS, HTTP_USER_AGENT};
use reqwest::{Client, Url};
use tracing::debug;

use crate::error::AvatarError;
use crate::imaging::{decode_circle_avatar, AvatarImage};

pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(HTTP_USER_AGENT)
        .build()
}

/// Where an avatar reference points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSource {
    Remote(String),
    Local(PathBuf),
}

impl AvatarSource {
    pub fn parse(reference: &str) -> Result<Self, AvatarError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(AvatarError::UnsupportedReference(String::new()));
        }

        // Bare paths (including `C:\...` drive paths) never go through the URL parser.
        if !reference.contains("://") {
            return Ok(Self::Local(PathBuf::from(reference)));
        }

        let unsupported = || AvatarError::UnsupportedReference(reference.to_string());
        let url = Url::parse(reference).map_err(|_| unsupported())?;
        match url.scheme() {
            "http" | "https" => Ok(Self::Remote(reference.to_string())),
            // Decodes percent escapes and accepts an empty or `localhost` host.
            "file" => url.to_file_path().map(Self::Local).map_err(|()| unsupported()),
            _ => Err(unsupported()),
        }
    }
}

/// Fetches avatar bytes over HTTP or from disk and turns them into cropped images.
#[derive(Debug, Clone)]
pub struct AvatarFetcher {
    client: Client,
}

impl AvatarFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch_bytes(&self, reference: &str) -> Result<Vec<u8>, AvatarError> {
        match AvatarSource::parse(reference)? {
            AvatarSource::Remote(url) => {
                debug!("Fetching avatar {}", url);
                let resp = self.client.get(&url).send().await?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(AvatarError::Status {
                        status: status.as_u16(),
                        url,
                    });
                }
                Ok(resp.bytes().await?.to_vec())
            }
            AvatarSource::Local(path) => {
                debug!("Reading avatar {}", path.display());
                Ok(tokio::fs::read(&path).await?)
            }
        }
    }

    /// Fetch, decode and circle-crop. Decoding runs on the blocking pool.
    pub async fn fetch_avatar(
        &self,
        reference: &str,
        size_px: u32,
    ) -> Result<AvatarImage, AvatarError> {
        let bytes = self.fetch_bytes(reference).await?;
        tokio::task::spawn_blocking(move || decode_circle_avatar(&bytes, size_px)).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_references() {
        assert_eq!(
            AvatarSource::parse("https://example.com/a.jpg").unwrap(),
            AvatarSource::Remote("https://example.com/a.jpg".into())
        );
        assert_eq!(
            AvatarSource::parse("HTTP://example.com/a.jpg").unwrap(),
            AvatarSource::Remote("HTTP://example.com/a.jpg".into())
        );
        assert_eq!(
            AvatarSource::parse("file:///tmp/a.png").unwrap(),
            AvatarSource::Local(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            AvatarSource::parse("assets/a.png").unwrap(),
            AvatarSource::Local(PathBuf::from("assets/a.png"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn file_urls_follow_url_rules() {
        assert_eq!(
            AvatarSource::parse("file://localhost/tmp/a.png").unwrap(),
            AvatarSource::Local(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            AvatarSource::parse("FILE:///tmp/a.png").unwrap(),
            AvatarSource::Local(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            AvatarSource::parse("file:///tmp/my%20pic.png").unwrap(),
            AvatarSource::Local(PathBuf::from("/tmp/my pic.png"))
        );
        assert!(matches!(
            AvatarSource::parse("file://fileserver/share/a.png"),
            Err(AvatarError::UnsupportedReference(_))
        ));
    }

    #[test]
    fn rejects_unknown_schemes_and_blanks() {
        assert!(matches!(
            AvatarSource::parse("ftp://example.com/a.png"),
            Err(AvatarError::UnsupportedReference(_))
        ));
        assert!(matches!(
            AvatarSource::parse("   "),
            Err(AvatarError::UnsupportedReference(_))
        ));
    }
}
