// ABOUTME: HTTP client for the image search API with bounded retries
// ABOUTME: Builds tag-filtered queries, fetches one record, and downloads image bytes

use crate::constants::api;
use crate::error::ApiError;
use crate::retry::{retry_with_backoff, RetryConfig};
use crate::tags::TagCatalog;
use crate::types::{ImageRecord, SearchResponse};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use url::Url;

/// Inputs for one fetch operation, fixed for the lifetime of the slideshow.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Allow the explicit pool to participate in random selection.
    pub nsfw: bool,
    /// When non-empty, used verbatim instead of random selection.
    pub custom_tags: Vec<String>,
    /// Per-request bound covering connect through body completion.
    pub timeout: Duration,
}

pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    show_progress: bool,
}

impl SearchClient {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(api::SEARCH_BASE)
    }

    /// Point the client at a different API host. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(api::USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(3))
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {}", e)))?;

        let show_progress = {
            use std::io::IsTerminal;
            std::io::stderr().is_terminal()
        };

        Ok(Self {
            http,
            base_url: base_url.into(),
            show_progress,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Fetch one image record, retrying transient failures with backoff.
    ///
    /// Tag selection happens once per call: custom tags are used verbatim
    /// when present, otherwise one tag is drawn uniformly at random from the
    /// applicable pool. Exhausting all attempts returns the last error.
    pub async fn fetch_one(
        &self,
        options: &FetchOptions,
        catalog: &TagCatalog,
        retry: &RetryConfig,
    ) -> Result<ImageRecord, ApiError> {
        let tags: Vec<String> = if options.custom_tags.is_empty() {
            vec![catalog.pick_random(options.nsfw).name.to_string()]
        } else {
            options.custom_tags.clone()
        };
        log::debug!("searching with tags {:?}", tags);

        retry_with_backoff(retry, || self.search_once(&tags, options.timeout)).await
    }

    /// One bounded search attempt. Non-2xx statuses, unparseable bodies,
    /// empty image arrays, and records without a URL are all failures.
    pub async fn search_once(
        &self,
        tags: &[String],
        timeout: Duration,
    ) -> Result<ImageRecord, ApiError> {
        let url = self.search_url(tags)?;

        let response = self.http.get(url).timeout(timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        let record = parsed
            .images
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::MalformedResponse("no images in response".to_string()))?;

        if record.url.is_empty() {
            return Err(ApiError::MalformedResponse(
                "image entry missing url".to_string(),
            ));
        }

        Ok(record)
    }

    fn search_url(&self, tags: &[String]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, api::SEARCH_PATH))
            .map_err(|e| ApiError::Network(format!("invalid search URL: {}", e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            for tag in tags {
                pairs.append_pair("included_tags", tag);
            }
            pairs.append_pair("height", &format!(">={}", api::MIN_HEIGHT));
        }

        Ok(url)
    }

    /// Download the image bytes behind `url`. Single attempt, no retries;
    /// the slideshow loop owns recovery at this layer.
    pub async fn download(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).timeout(timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let content_length = response.content_length();
        let progress_bar = if self.show_progress {
            let pb = match content_length {
                Some(len) => {
                    let pb = ProgressBar::new(len);
                    pb.set_style(
                        ProgressStyle::default_bar()
                            .template(
                                "{msg} [{bar:25.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})",
                            )
                            .unwrap()
                            .progress_chars("=>-"),
                    );
                    pb
                }
                None => {
                    let pb = ProgressBar::new_spinner();
                    pb.set_style(
                        ProgressStyle::default_spinner()
                            .template("{spinner:.green} {msg} {bytes}")
                            .unwrap(),
                    );
                    pb
                }
            };
            let filename = url.split('/').next_back().unwrap_or("image");
            pb.set_message(format!("Downloading {}", filename));
            Some(pb)
        } else {
            None
        };

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(ApiError::from)?;
            bytes.extend_from_slice(&chunk);

            if let Some(ref pb) = progress_bar {
                pb.set_position(bytes.len() as u64);
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        log::debug!("downloaded {} ({}) from {}", bytes.len(), format_bytes(bytes.len()), url);

        Ok(bytes)
    }
}

/// Format bytes in a human-readable way
pub fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
