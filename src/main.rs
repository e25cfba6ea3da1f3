//! chatwash-server - chat message filter behind a small web API.

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use chatwash::server::{configure_routes, AppState};
use chatwash::{FilterLevel, MessageFilter};
use clap::Parser;
use itertools::Itertools;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn, Level};

#[derive(Debug, Parser)]
#[command(name = "chatwash-server", version, about = "Chat message filter web server")]
struct Args {
    /// Host to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to.
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Path to the JSON word-list document.
    #[arg(long, default_value = "word_list.json")]
    words: PathBuf,

    /// Initial strictness level: strict, moderate or lenient.
    #[arg(long, default_value = "moderate")]
    level: String,

    /// Don't open a browser tab after startup.
    #[arg(long)]
    no_browser: bool,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let level: FilterLevel = args.level.parse().context("invalid --level")?;

    // A failed load is a warning, not a crash: the engine runs with an empty
    // block-list and filters nothing until words are added over the API.
    let filter = match MessageFilter::from_path(&args.words, level) {
        Ok(filter) => {
            let words = filter.words();
            info!(
                count = words.len(),
                sample = %words.iter().take(5).join(", "),
                "loaded word list from {}",
                args.words.display()
            );
            filter
        }
        Err(e) => {
            warn!("no word list loaded ({e}); the filter will not block anything");
            MessageFilter::new(level)
        }
    };

    let state = web::Data::new(AppState::new(filter));
    let bind_addr = format!("{}:{}", args.host, args.port);

    let server = HttpServer::new({
        let state = state.clone();
        move || App::new().app_data(state.clone()).configure(configure_routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("cannot bind {bind_addr}"))?
    .run();

    info!("chatwash listening on http://{bind_addr}");

    if !args.no_browser {
        let url = format!("http://{bind_addr}");
        actix_web::rt::spawn(async move {
            // Give the accept loop a moment before pointing a browser at it.
            actix_web::rt::time::sleep(Duration::from_millis(1500)).await;
            if let Err(e) = webbrowser::open(&url) {
                warn!("could not open browser: {e}");
            }
        });
    }

    server.await.context("server error")
}
