///! Region export: popular-video search -> channel lookup

use anyhow::Result;

use crate::youtube::{ChannelRecord, YoutubeClient};
use super::unique_channel_ids;

/// Fetch the channels behind a region's most-viewed videos.
///
/// One search, one batch lookup. Channels that declare no country are
/// reported under the searched region code.
pub async fn export_region_channels(
    client: &YoutubeClient,
    region_code: &str,
    max_results: u32,
) -> Result<Vec<ChannelRecord>> {
    tracing::info!(
        "Searching popular videos for region {} (max {})",
        region_code,
        max_results
    );

    let search = client.search_popular_videos(region_code, max_results).await?;
    let ids = unique_channel_ids(&search.items);

    if ids.is_empty() {
        tracing::info!("Search returned no channels for region {}", region_code);
        return Ok(Vec::new());
    }

    tracing::info!(
        "Found {} unique channels in {} search hits",
        ids.len(),
        search.items.len()
    );

    let details = client.list_channels(&ids).await?;

    let records = details
        .items
        .into_iter()
        .map(|item| ChannelRecord::from_api(item, region_code))
        .collect();

    Ok(records)
}
