///! US export: paginated channel search, country filter, normalization

use anyhow::Result;

use crate::youtube::{format_publish_date, ChannelItem, ChannelRecord, YoutubeClient};
use super::unique_channel_ids;

/// Pagination cap: at most this many search pages per run.
pub const MAX_SEARCH_ATTEMPTS: u32 = 3;

/// Fetch up to `max_results` channels whose declared country is "US".
///
/// The search region hint alone does not guarantee a US channel, so every
/// page's lookup results are filtered on the declared country before they
/// count toward the cap. The loop ends once the cap is reached or a page
/// comes back without a continuation token; it never fetches more than
/// [`MAX_SEARCH_ATTEMPTS`] pages.
pub async fn export_us_channels(
    client: &YoutubeClient,
    max_results: u32,
) -> Result<Vec<ChannelRecord>> {
    let cap = max_results as usize;
    let mut records: Vec<ChannelRecord> = Vec::new();
    let mut page_token: Option<String> = None;
    let mut attempts = 0;

    while records.len() < cap && attempts < MAX_SEARCH_ATTEMPTS {
        attempts += 1;
        tracing::info!(
            "Channel search attempt {}/{} ({} collected)",
            attempts,
            MAX_SEARCH_ATTEMPTS,
            records.len()
        );

        let page = client
            .search_channels(max_results, page_token.as_deref())
            .await?;

        if page.items.is_empty() {
            break;
        }

        let ids = unique_channel_ids(&page.items);
        let details = client.list_channels(&ids).await?;

        let remaining = cap - records.len();
        records.extend(collect_us_records(details.items, remaining));

        match page.next_page_token {
            Some(token) if records.len() < cap => page_token = Some(token),
            _ => break,
        }
    }

    records.truncate(cap);
    tracing::info!("Collected {} US channels in {} attempts", records.len(), attempts);

    Ok(records)
}

/// Keep items whose declared country is "US" (case-insensitive), convert
/// and normalize them, and stop once `limit` records survive.
fn collect_us_records(items: Vec<ChannelItem>, limit: usize) -> Vec<ChannelRecord> {
    let mut records = Vec::new();

    for item in items {
        if records.len() >= limit {
            break;
        }

        let declared_us = item
            .snippet
            .country
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case("US"));
        if !declared_us {
            continue;
        }

        let mut record = ChannelRecord::from_api(item, "US");
        record.published_at = format_publish_date(&record.published_at);
        records.push(record);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::ChannelListResponse;

    fn channel_items(json: &str) -> Vec<ChannelItem> {
        let resp: ChannelListResponse = serde_json::from_str(json).unwrap();
        resp.items
    }

    const MIXED_COUNTRIES: &str = r#"{"items": [
        {"id": "UCa", "snippet": {"title": "a", "country": "US", "publishedAt": "2020-01-02T03:04:05Z"}, "statistics": {"viewCount": "10", "videoCount": "1"}},
        {"id": "UCb", "snippet": {"title": "b", "country": "GB"}, "statistics": {}},
        {"id": "UCc", "snippet": {"title": "c", "country": "us"}, "statistics": {}},
        {"id": "UCd", "snippet": {"title": "d"}, "statistics": {}}
    ]}"#;

    #[test]
    fn test_collect_us_records_filters_on_declared_country() {
        let records = collect_us_records(channel_items(MIXED_COUNTRIES), 10);

        // GB and undeclared are dropped; lowercase "us" survives
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.country.eq_ignore_ascii_case("US")));
        assert_eq!(records[0].id, "UCa");
        assert_eq!(records[1].id, "UCc");
    }

    #[test]
    fn test_collect_us_records_reformats_publish_date() {
        let records = collect_us_records(channel_items(MIXED_COUNTRIES), 10);
        assert_eq!(records[0].published_at, "2020-01-02");
    }

    #[test]
    fn test_collect_us_records_respects_limit() {
        let records = collect_us_records(channel_items(MIXED_COUNTRIES), 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "UCa");
    }

    #[test]
    fn test_collect_us_records_zero_limit() {
        assert!(collect_us_records(channel_items(MIXED_COUNTRIES), 0).is_empty());
    }
}
