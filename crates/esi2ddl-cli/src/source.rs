use anyhow::{Context, Result};
use std::{fmt, path::PathBuf};
use url::Url;

/// Where the API document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetched over HTTP(S)
    Remote(Url),

    /// Read from the local file system
    File(PathBuf),
}

impl Source {
    /// Interprets `location` as an `http(s)://` or `file://` URL, and
    /// anything else as a file path.
    pub fn parse(location: &str) -> Result<Source> {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Source::Remote(url)),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Source::File)
                .map_err(|()| anyhow::anyhow!("invalid file URL: {location}")),
            _ => Ok(Source::File(PathBuf::from(location))),
        }
    }

    /// Reads the whole document.
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Source::Remote(url) => {
                let response = reqwest::get(url.clone())
                    .await
                    .and_then(|response| response.error_for_status())
                    .with_context(|| format!("fetching {url}"))?;

                let bytes = response
                    .bytes()
                    .await
                    .with_context(|| format!("reading {url}"))?;
                Ok(bytes.to_vec())
            }
            Source::File(path) => tokio::fs::read(path)
                .await
                .with_context(|| format!("reading {}", path.display())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => url.fmt(f),
            Source::File(path) => path.display().fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote() {
        let source = Source::parse("https://esi.evetech.net/latest/swagger.json").unwrap();
        assert!(matches!(source, Source::Remote(url) if url.host_str() == Some("esi.evetech.net")));
    }

    #[test]
    fn files() {
        assert_eq!(
            Source::parse("swagger.json").unwrap(),
            Source::File(PathBuf::from("swagger.json"))
        );
        assert_eq!(
            Source::parse("file:///tmp/swagger.json").unwrap(),
            Source::File(PathBuf::from("/tmp/swagger.json"))
        );
    }
}
