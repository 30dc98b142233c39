//! Fetching the quote sheet and turning it into groups.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{QuoteGroup, group_quotes};
use crate::infra::csv::parse_csv;
use crate::infra::decode::decode_quotes;

/// Location used when neither the command line nor the config names one.
pub const DEFAULT_SOURCE: &str = "assets/quotes.csv";

/// Query parameter used for cache busting unless configured otherwise.
pub const DEFAULT_CACHE_BUST_PARAM: &str = "v";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors while fetching the quote sheet.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("quote sheet not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("quote sheet is not valid UTF-8: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

impl LoadError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path: path.into() },
            _ => LoadError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Somewhere the raw CSV text can be fetched from.
pub trait QuoteSource {
    /// Fetches the sheet. `cache_bust` asks the source to bypass caches.
    fn fetch(&self, cache_bust: bool) -> Result<String, LoadError>;

    /// Human-readable location for messages.
    fn location(&self) -> String;
}

/// A sheet on the local file system.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuoteSource for FileSource {
    fn fetch(&self, _cache_bust: bool) -> Result<String, LoadError> {
        let bytes = std::fs::read(&self.path).map_err(|e| LoadError::from_io(&self.path, e))?;
        String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding {
            path: self.path.clone(),
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// A sheet served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    cache_bust_param: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Builds the HTTP client up front so a TLS setup failure surfaces here
    /// rather than on the first fetch.
    pub fn new(
        url: impl Into<String>,
        cache_bust_param: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let url = url.into();
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|source| LoadError::Http {
                url: url.clone(),
                source,
            })?;
        Ok(Self {
            url,
            cache_bust_param: cache_bust_param.into(),
            client,
        })
    }

    /// The URL to request, with a timestamp parameter when cache busting.
    pub fn request_url(&self, cache_bust: bool) -> String {
        if !cache_bust {
            return self.url.clone();
        }
        cache_busted_url(
            &self.url,
            &self.cache_bust_param,
            Utc::now().timestamp_millis(),
        )
    }
}

impl QuoteSource for HttpSource {
    fn fetch(&self, cache_bust: bool) -> Result<String, LoadError> {
        let url = self.request_url(cache_bust);
        let http_error = |source| LoadError::Http {
            url: url.clone(),
            source,
        };

        let response = self.client.get(&url).send().map_err(http_error)?;
        if !response.status().is_success() {
            return Err(LoadError::Status {
                url: url.clone(),
                status: response.status().as_u16(),
            });
        }
        response.text().map_err(http_error)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Appends `param=stamp` to a URL, respecting an existing query string.
pub fn cache_busted_url(url: &str, param: &str, stamp: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{param}={stamp}")
}

/// Picks an HTTP source for `http(s)://` locations and a file source otherwise.
pub fn open_source(
    location: &str,
    cache_bust_param: &str,
) -> Result<Box<dyn QuoteSource>, LoadError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, cache_bust_param)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

impl<S: QuoteSource + ?Sized> QuoteSource for Box<S> {
    fn fetch(&self, cache_bust: bool) -> Result<String, LoadError> {
        (**self).fetch(cache_bust)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Runs the whole pipeline: fetch, parse, decode, group.
pub fn load_groups<S: QuoteSource + ?Sized>(
    source: &S,
    cache_bust: bool,
) -> Result<Vec<QuoteGroup>, LoadError> {
    let text = source.fetch(cache_bust)?;
    let rows = parse_csv(&text);
    let quotes = decode_quotes(&rows);
    debug!(rows = rows.len(), quotes = quotes.len(), "decoded quote sheet");

    let groups = group_quotes(quotes);
    info!(
        source = %source.location(),
        groups = groups.len(),
        "loaded quotes"
    );
    Ok(groups)
}
