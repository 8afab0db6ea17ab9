///! Export pipelines
///!
///! Each pipeline is a single fetch/lookup/collect cycle; nothing is
///! retried and nothing persists between runs.

mod region;
pub use region::export_region_channels;

mod us;
pub use us::{export_us_channels, MAX_SEARCH_ATTEMPTS};

use crate::youtube::SearchItem;

/// Collect the channel id of every search hit, first-seen order, each id
/// at most once. Two hits on the same channel collapse into one lookup
/// and one output record.
pub fn unique_channel_ids(items: &[SearchItem]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut ids = Vec::new();

    for item in items {
        if let Some(id) = &item.snippet.channel_id {
            if seen.insert(id.clone()) {
                ids.push(id.clone());
            }
        }
    }

    ids
}
