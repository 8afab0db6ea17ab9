///! Interactive region export: popular channels for one region code

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use yt_channel_export::config::ExportConfig;
use yt_channel_export::export::write_region_csv;
use yt_channel_export::logging::init_logging;
use yt_channel_export::pipeline::export_region_channels;
use yt_channel_export::youtube::YoutubeClient;

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ExportConfig::load()?;
    init_logging(&config.log_level);
    config.validate()?;

    let region = prompt("Enter a region code (e.g., US, GB, JP): ")?.to_uppercase();
    let max_results: u32 = prompt("Enter maximum number of results (1-50): ")?
        .parse()
        .context("Invalid result count")?;

    let client = YoutubeClient::new(config)?;
    let channels = export_region_channels(&client, &region, max_results).await?;

    let path = PathBuf::from(format!("youtube_channels_{}.csv", region));
    write_region_csv(&channels, &path)?;

    Ok(())
}
