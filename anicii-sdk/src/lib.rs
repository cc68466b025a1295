// ABOUTME: anicii SDK library providing a typed client for the image search API
// ABOUTME: Includes retry with backoff, the fixed tag catalog, and response models

pub mod client;
pub mod constants;
pub mod error;
pub mod retry;
pub mod tags;
pub mod types;

pub use client::{format_bytes, FetchOptions, SearchClient};
pub use error::ApiError;
pub use retry::{backoff_delay, retry_with_backoff, RetryConfig};
pub use tags::{CatalogTag, TagCatalog};
pub use types::{Artist, ImageRecord, SearchResponse, TagInfo};
