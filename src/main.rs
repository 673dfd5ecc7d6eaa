use clap::Parser;
use docbot::config::BotConfig;
use docbot::error::BotError;
use docbot::fetch::HttpFetcher;
use docbot::format::{LOG_DATE_PATTERN, parse_date};
use docbot::{DocService, LookupOutcome, PageKey, PageKind};
use std::io::Write;

mod args;
use args::{Args, convert_page_kind};

#[tokio::main]
async fn main() {
    init_logging();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match BotConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match &args.lookup {
        Some(name) => print_lookup(&config, name, convert_page_kind(args.page)).await,
        None => docbot::bot::start(config, args.config.clone()).await,
    };

    if let Err(e) = result {
        ::log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Logs as `[2024-01-31 12:00:00.042] [INFO] docbot::docs: message`
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let now = chrono::Local::now().naive_local();
            writeln!(
                buf,
                "{} [{}] {}: {}",
                parse_date(LOG_DATE_PATTERN, &now),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Render one documentation page to stdout without connecting to Discord
async fn print_lookup(config: &BotConfig, name: &str, kind: PageKind) -> Result<(), BotError> {
    let fetcher = HttpFetcher::new(&config.docs)?;
    let docs = DocService::new(fetcher, &config.docs)?;

    ::log::info!("Looking up '{}' at {}", name, docs.link_for(name));
    let start_time = std::time::Instant::now();

    match docs.lookup(name).await {
        LookupOutcome::Found { link, fields, page } => {
            let page = match kind {
                PageKind::Main => page,
                kind => docs
                    .page(&PageKey::new(link, kind), &fields)
                    .await
                    .map_err(docbot::error::DocError::from)?,
            };
            println!("{}", page);
        }
        LookupOutcome::Fallback { page } => println!("{}", page),
        LookupOutcome::Failed(e) => return Err(e.into()),
    }

    ::log::info!(
        "Lookup complete in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
