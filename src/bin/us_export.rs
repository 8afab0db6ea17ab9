///! Interactive US channel export with paginated search

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use yt_channel_export::config::ExportConfig;
use yt_channel_export::export::write_us_csv;
use yt_channel_export::logging::init_logging;
use yt_channel_export::pipeline::export_us_channels;
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

async fn run() -> Result<()> {
    let config = ExportConfig::load()?;
    init_logging(&config.log_level);
    config.validate()?;

    let input = prompt("How many US-based channels do you want to retrieve? (1-50): ")?;
    let max_results: u32 = match input.parse() {
        Ok(n) => n,
        Err(_) => {
            println!("Please enter a valid number between 1 and 50.");
            return Ok(());
        }
    };
    let max_results = max_results.clamp(1, 50);

    println!("Searching for US-based YouTube channels...");

    let client = YoutubeClient::new(config)?;
    let channels = export_us_channels(&client, max_results).await?;

    if channels.is_empty() {
        println!("No US-based channels found with the current filters.");
        return Ok(());
    }

    let filename = format!(
        "us_youtube_channels_{}.csv",
        Local::now().format("%Y%m%d_%H%M")
    );
    write_us_csv(&channels, &PathBuf::from(filename))?;

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        println!("An error occurred: {}", e);
    }
}
