// ABOUTME: Response models for the image search API
// ABOUTME: Plain serde structs describing one image record and its provenance

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub images: Vec<ImageRecord>,
}

/// One metadata entry describing a single image.
///
/// Immutable once received; owned by the slideshow loop for the duration of
/// one iteration and discarded afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub image_id: u64,
    /// Missing URLs deserialize to an empty string and are rejected by the
    /// client as malformed.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub byte_size: u64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub is_nsfw: bool,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub artist: Option<Artist>,
    #[serde(default)]
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub pixiv: Option<String>,
    #[serde(default)]
    pub patreon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_nsfw: bool,
}
