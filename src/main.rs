use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use vitrine::core::config;
use vitrine::core::state::Shop;
use vitrine::tui;

#[derive(Parser)]
#[command(name = "vitrine", about = "Terminal product display widget")]
struct Args {
    /// Premium membership (free shipping); overrides config file and env
    #[arg(long, value_name = "BOOL")]
    premium: Option<bool>,

    /// TOML catalog file to display; overrides config file and env
    #[arg(long, value_name = "PATH")]
    catalog: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to vitrine.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("vitrine.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(&config, args.premium, args.catalog.as_deref());
    log::info!(
        "Vitrine starting up (premium: {}, catalog: {:?})",
        resolved.premium,
        resolved.catalog_file
    );

    let shop = Shop::from_config(&resolved).map_err(std::io::Error::other)?;

    tui::run(shop)
}
