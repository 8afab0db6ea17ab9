///! YouTube Data API v3 access
///!
///! Wire types for the search and channel-list endpoints, the domain
///! record exported to CSV, and the HTTP client that ties them together.

// ============ Wire Types ============
mod types;
pub use types::{
    ChannelItem, ChannelListResponse, ChannelSnippet, ChannelStatistics, SearchItem,
    SearchListResponse, SearchSnippet, Thumbnail, Thumbnails,
};

// ============ Domain Record ============
mod record;
pub use record::{format_publish_date, ChannelRecord, SUBSCRIBER_COUNT_UNAVAILABLE};

// ============ API Client ============
mod api_client;
pub use api_client::{YoutubeClient, MAX_BATCH_IDS, MAX_RESULTS_PER_PAGE};
