///! Raw response shapes for the Data API search and channels endpoints
///!
///! Fields the API may omit carry `#[serde(default)]` so a sparse item
///! degrades to placeholders instead of failing the whole response.

use serde::Deserialize;

/// One page of `GET /search` results
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,

    /// Continuation token for the next page, absent on the last page
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub snippet: SearchSnippet,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    #[serde(default)]
    pub channel_id: Option<String>,
}

/// `GET /channels` batch lookup response
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelItem {
    pub id: String,

    #[serde(default)]
    pub snippet: ChannelSnippet,

    #[serde(default)]
    pub statistics: ChannelStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub published_at: String,

    /// Declared two-letter region code, many channels leave this unset
    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub custom_url: Option<String>,

    #[serde(default)]
    pub thumbnails: Thumbnails,

    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Statistics counters arrive as JSON strings, not numbers.
/// `subscriberCount` is absent entirely when the channel hides it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default)]
    pub subscriber_count: Option<String>,

    #[serde(default)]
    pub view_count: Option<String>,

    #[serde(default)]
    pub video_count: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
}
