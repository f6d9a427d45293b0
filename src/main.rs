use clap::Parser;
use marquee::core::catalog;
use marquee::core::config::{self, CliOverrides};
use marquee::core::validation::UrlErrorPolicy;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "marquee", about = "Terminal movie catalog")]
struct Args {
    /// JSON file with the starting list of movies
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// How invalid URLs are flagged on the two URL fields
    #[arg(long, value_enum)]
    url_errors: Option<UrlErrorPolicy>,

    /// Log level for marquee.log (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is read before the logger exists; failures go to stderr
    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}, using defaults");
            config::MarqueeConfig::default()
        }
    };
    let cli = CliOverrides {
        catalog: args.catalog,
        url_errors: args.url_errors,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to marquee.log in current directory
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("marquee.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!(
        "Marquee starting up (catalog: {:?}, url_errors: {:?})",
        resolved.catalog_path,
        resolved.url_errors
    );

    let movies = match catalog::load_or_empty(resolved.catalog_path.as_deref()) {
        Ok(movies) => movies,
        Err(e) => {
            log::warn!("{e}");
            eprintln!("Warning: {e}, starting with an empty catalog");
            Vec::new()
        }
    };

    marquee::tui::run(&resolved, movies)
}
