use chrono::Local;
use clap::Parser;
use figlet_rs::FIGfont;
use richlist::{
    crawl_richest_from, info_time,
    store::{destination_path, store_table},
    Config, Result, Source,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();
    tracing::debug!("Command line args: {config:?}");

    banner();

    let start_time = Local::now();
    let client = reqwest::Client::new();
    let source = Source::at(&config.base_url);
    let balances = crawl_richest_from(&client, &source, config.limit).await?;

    let dest_file = destination_path(&config.file, start_time.date_naive());
    info_time!("Storing results in: {}", dest_file.display());
    store_table(&balances, &dest_file).await?;

    info_time!(start_time, "Full program time:");
    Ok(())
}

fn banner() {
    let Ok(font) = FIGfont::standard() else {
        println!("RICHLIST");
        return;
    };
    match font.convert("RICHLIST") {
        Some(art) => println!("{}", art),
        None => println!("RICHLIST"),
    }
}
