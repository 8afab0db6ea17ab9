///! CSV serialization for channel records
///!
///! Opening the target path truncates any previous file, so re-running an
///! export with the same filename replaces it instead of appending. An
///! empty record set writes nothing at all, not even a header.

use std::path::Path;

use anyhow::{Context, Result};

use crate::youtube::{ChannelRecord, SUBSCRIBER_COUNT_UNAVAILABLE};

const REGION_HEADER: [&str; 9] = [
    "id",
    "title",
    "description",
    "published_at",
    "subscriber_count",
    "view_count",
    "video_count",
    "country",
    "thumbnail",
];

const US_HEADER: [&str; 11] = [
    "channel_id",
    "title",
    "description",
    "published_at",
    "subscriber_count",
    "view_count",
    "video_count",
    "country",
    "custom_url",
    "thumbnail_url",
    "keywords",
];

/// Write a region export. Returns the number of rows written.
pub fn write_region_csv(records: &[ChannelRecord], path: &Path) -> Result<usize> {
    if records.is_empty() {
        println!("No channels to write to CSV.");
        return Ok(0);
    }

    let mut writer = csv::Writer::from_path(path)
        .context(format!("Failed to open {}", path.display()))?;

    writer.write_record(REGION_HEADER)?;
    for record in records {
        let subscribers = subscriber_display(record.subscriber_count);
        let views = record.view_count.to_string();
        let videos = record.video_count.to_string();

        writer.write_record([
            record.id.as_str(),
            record.title.as_str(),
            record.description.as_str(),
            record.published_at.as_str(),
            subscribers.as_str(),
            views.as_str(),
            videos.as_str(),
            record.country.as_str(),
            record.thumbnail_url.as_str(),
        ])?;
    }
    writer.flush()?;

    println!(
        "Successfully wrote {} channels to {}",
        records.len(),
        path.display()
    );
    Ok(records.len())
}

/// Write a US export with its fixed column order. Returns rows written.
pub fn write_us_csv(records: &[ChannelRecord], path: &Path) -> Result<usize> {
    if records.is_empty() {
        println!("No channels to write to CSV.");
        return Ok(0);
    }

    let mut writer = csv::Writer::from_path(path)
        .context(format!("Failed to open {}", path.display()))?;

    writer.write_record(US_HEADER)?;
    for record in records {
        let subscribers = subscriber_display(record.subscriber_count);
        let views = record.view_count.to_string();
        let videos = record.video_count.to_string();
        let keywords = record.keywords.join("|");

        writer.write_record([
            record.id.as_str(),
            record.title.as_str(),
            record.description.as_str(),
            record.published_at.as_str(),
            subscribers.as_str(),
            views.as_str(),
            videos.as_str(),
            record.country.as_str(),
            record.custom_url.as_str(),
            record.thumbnail_url.as_str(),
            keywords.as_str(),
        ])?;
    }
    writer.flush()?;

    println!(
        "Successfully wrote {} US-based channels to {}",
        records.len(),
        path.display()
    );
    Ok(records.len())
}

fn subscriber_display(count: Option<u64>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => SUBSCRIBER_COUNT_UNAVAILABLE.to_string(),
    }
}
