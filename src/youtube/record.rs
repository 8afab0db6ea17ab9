///! Channel record as it goes to the CSV writer
///!
///! One conversion from the wire shape serves both export variants; the
///! US export additionally reformats the publish timestamp to date-only.

use chrono::NaiveDateTime;

use super::types::ChannelItem;

/// Rendered in place of a hidden subscriber count at serialization time.
pub const SUBSCRIBER_COUNT_UNAVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub published_at: String,
    /// None when the channel hides its subscriber count
    pub subscriber_count: Option<u64>,
    pub view_count: u64,
    pub video_count: u64,
    pub country: String,
    pub thumbnail_url: String,
    pub custom_url: String,
    pub keywords: Vec<String>,
}

impl ChannelRecord {
    /// Build a record from a channel lookup item.
    ///
    /// `fallback_country` fills in for channels that declare no country:
    /// the searched region code for the region export, "US" for the US
    /// export (which has already filtered on the declared value).
    pub fn from_api(item: ChannelItem, fallback_country: &str) -> Self {
        let snippet = item.snippet;
        let statistics = item.statistics;

        let thumbnail_url = snippet
            .thumbnails
            .default
            .map(|t| t.url)
            .unwrap_or_default();

        Self {
            id: item.id,
            title: snippet.title,
            description: snippet.description,
            published_at: snippet.published_at,
            subscriber_count: parse_count(statistics.subscriber_count.as_deref()),
            view_count: parse_count(statistics.view_count.as_deref()).unwrap_or(0),
            video_count: parse_count(statistics.video_count.as_deref()).unwrap_or(0),
            country: snippet
                .country
                .unwrap_or_else(|| fallback_country.to_string()),
            thumbnail_url,
            custom_url: snippet.custom_url.unwrap_or_default(),
            keywords: snippet.tags.unwrap_or_default(),
        }
    }
}

/// Lenient string-to-integer coercion for the statistics counters.
fn parse_count(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
}

/// Reformat `YYYY-MM-DDTHH:MM:SSZ` to `YYYY-MM-DD`.
/// Anything that does not parse is passed through unchanged.
pub fn format_publish_date(iso_date: &str) -> String {
    match NaiveDateTime::parse_from_str(iso_date, "%Y-%m-%dT%H:%M:%SZ") {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => iso_date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::types::ChannelListResponse;

    fn sample_item(json: &str) -> ChannelItem {
        let resp: ChannelListResponse = serde_json::from_str(json).unwrap();
        resp.items.into_iter().next().unwrap()
    }

    #[test]
    fn test_from_api_full_record() {
        let item = sample_item(
            r#"{"items": [{
                "id": "UCabc",
                "snippet": {
                    "title": "Some Channel",
                    "description": "About things",
                    "publishedAt": "2014-03-01T12:00:00Z",
                    "country": "GB",
                    "customUrl": "@somechannel",
                    "thumbnails": {"default": {"url": "https://yt3.ggpht.com/x"}},
                    "tags": ["music", "live"]
                },
                "statistics": {"viewCount": "123456", "subscriberCount": "789", "videoCount": "42"}
            }]}"#,
        );

        let record = ChannelRecord::from_api(item, "US");
        assert_eq!(record.id, "UCabc");
        assert_eq!(record.country, "GB");
        assert_eq!(record.subscriber_count, Some(789));
        assert_eq!(record.view_count, 123456);
        assert_eq!(record.video_count, 42);
        assert_eq!(record.thumbnail_url, "https://yt3.ggpht.com/x");
        assert_eq!(record.custom_url, "@somechannel");
        assert_eq!(record.keywords, vec!["music", "live"]);
    }

    #[test]
    fn test_from_api_hidden_subscriber_count() {
        let item = sample_item(
            r#"{"items": [{"id": "UCxyz", "snippet": {"title": "t"}, "statistics": {"viewCount": "9", "videoCount": "1"}}]}"#,
        );

        let record = ChannelRecord::from_api(item, "US");
        assert_eq!(record.subscriber_count, None);
        assert_eq!(record.view_count, 9);
    }

    #[test]
    fn test_from_api_country_fallback() {
        let item = sample_item(
            r#"{"items": [{"id": "UCxyz", "snippet": {"title": "t"}, "statistics": {}}]}"#,
        );

        let record = ChannelRecord::from_api(item, "JP");
        assert_eq!(record.country, "JP");
        assert_eq!(record.view_count, 0);
        assert!(record.custom_url.is_empty());
        assert!(record.keywords.is_empty());
    }

    #[test]
    fn test_parse_count_garbage() {
        assert_eq!(parse_count(Some("123")), Some(123));
        assert_eq!(parse_count(Some(" 123 ")), Some(123));
        assert_eq!(parse_count(Some("12x")), None);
        assert_eq!(parse_count(None), None);
    }

    #[test]
    fn test_format_publish_date() {
        assert_eq!(format_publish_date("2014-03-01T12:34:56Z"), "2014-03-01");
        // Fractional-second and offset forms pass through untouched
        assert_eq!(
            format_publish_date("2014-03-01T12:34:56.000Z"),
            "2014-03-01T12:34:56.000Z"
        );
        assert_eq!(format_publish_date("not a date"), "not a date");
        assert_eq!(format_publish_date(""), "");
    }
}
