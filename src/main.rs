//! Wiring & DI. Entry point: bootstrap adapters, inject into the listing service, write the page.
//! No business logic here; filtering and ordering live in the domain, page assembly in `PageService`.

use dotenv::dotenv;
use showtimes::adapters::clock::{FixedClock, SystemClock};
use showtimes::adapters::feed::source_for;
use showtimes::adapters::page::default_template;
use showtimes::adapters::persistence::ListingJson;
use showtimes::adapters::ui::progress::spinner;
use showtimes::domain::parse_instant;
use showtimes::ports::Clock;
use showtimes::shared::config::AppConfig;
use showtimes::usecases::{ListingService, PageService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config not loaded; using defaults");
        AppConfig::default()
    });
    if cfg.show_banner_or_default() {
        showtimes::adapters::ui::init_ui();
    }

    // --- Page template ---
    let template = match cfg.template_path.as_deref() {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("read template {}: {}", path, e))?,
        None => default_template(),
    };

    // --- Clock: one snapshot per run; SHOWTIMES_TODAY pins the week ---
    let clock: Arc<dyn Clock> = match cfg.today.as_deref() {
        Some(today) => {
            let now = parse_instant(today)
                .ok_or_else(|| anyhow::anyhow!("SHOWTIMES_TODAY is not a date: {}", today))?;
            info!(%now, "using pinned date");
            Arc::new(FixedClock(now))
        }
        None => Arc::new(SystemClock),
    };

    // --- Feed + listing ---
    let source = source_for(&cfg.feed_location_or_default(), cfg.base_url());
    info!(location = %source.location(), "loading showtimes");
    let service = ListingService::new(source, clock);

    let pb = spinner("Loading showtimes");
    let listing = service.build_listing().await;
    pb.finish_and_clear();

    // --- Navbar, film list, export ---
    let pages = PageService::new(cfg.json_output_path.as_deref().map(ListingJson::new));
    let page = pages.assemble(template, listing).await;

    // --- Page is written in every case ---
    let output = PathBuf::from(cfg.output_path_or_default());
    tokio::fs::write(&output, page.html)
        .await
        .map_err(|e| anyhow::anyhow!("write {}: {}", output.display(), e))?;
    info!(path = %output.display(), "page written");

    Ok(())
}
