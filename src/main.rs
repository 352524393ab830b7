//! quotesync — Entry Point
//!
//! Initializes configuration, logging, the file store, the simulated
//! server, and the sync engine. Runs until SIGINT or `quit`.
//!
//! Wiring sequence:
//! 1. Load config.toml + validate
//! 2. Init tracing (stderr, so stdout stays clean for the view)
//! 3. Create adapters (FileStore, SimulatedServer, ConsoleView)
//! 4. Open the QuoteBook from persisted state, show the last-viewed or
//!    a random quote
//! 5. Spawn health server (/live + /ready)
//! 6. Spawn the periodic sync engine loop
//! 7. Read commands from stdin (the UI-event source)
//! 8. On SIGINT/quit → graceful shutdown (signal→unready→save→exit)

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::sync::{Mutex, broadcast, watch};
use tracing::{error, info, warn};

mod adapters;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::persistence::FileStore;
use adapters::remote::SimulatedServer;
use adapters::view::ConsoleView;
use ports::remote::RemoteSource;
use ports::store::QuoteStore;
use ports::view::{Notice, View};
use usecases::quote_book::QuoteBook;
use usecases::sync_engine::SyncEngine;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging on stderr ─────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.app.log_level)
                }),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        sync_interval = config.sync.interval_seconds,
        "Starting quotesync"
    );

    // ── 3. Shutdown signal channels ─────────────────────────
    let (shutdown_tx, _shutdown_rx) = broadcast::channel::<()>(1);
    let (ready_tx, ready_rx) = watch::channel(true);

    // ── 4. Create adapters ──────────────────────────────────
    let store = Arc::new(
        FileStore::new(&config.persistence.data_dir)
            .await
            .context("Failed to create file store")?,
    );
    let remote = Arc::new(SimulatedServer::new(
        Duration::from_millis(config.remote.fetch_delay_ms),
        Duration::from_millis(config.remote.post_delay_ms),
    ));
    let view = Arc::new(ConsoleView::new());

    // ── 5. Open the quote book from persisted state ─────────
    let export_path = Path::new(&config.persistence.data_dir)
        .join(&config.persistence.export_file);
    let book = QuoteBook::open(
        Arc::clone(&store),
        Arc::clone(&remote),
        Arc::clone(&view),
        export_path,
    )
    .await
    .context("Failed to open quote book")?;

    book.refresh_category_options();
    if !book.show_last_viewed() {
        book.show_random();
    }
    let book = Arc::new(Mutex::new(book));

    // ── 6. Spawn health server ──────────────────────────────
    let health_handle = if config.health.enabled {
        let bind_address = config.health.bind_address.clone();
        Some(tokio::spawn(async move {
            if let Err(e) = adapters::health::serve(&bind_address, ready_rx).await {
                error!(error = %e, "Health server failed");
            }
        }))
    } else {
        None
    };

    // ── 7. Spawn the periodic sync engine ───────────────────
    let engine = Arc::new(SyncEngine::new(
        Arc::clone(&book),
        Arc::clone(&remote),
        Arc::clone(&view),
        Duration::from_secs(config.sync.interval_seconds),
    ));
    let engine_loop = Arc::clone(&engine);
    let engine_shutdown = shutdown_tx.subscribe();
    let engine_handle = tokio::spawn(async move {
        engine_loop.run(engine_shutdown).await;
    });

    // ── 8. Command loop on stdin ────────────────────────────
    print_help();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("SIGINT received, initiating graceful shutdown");
                break;
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(input)) => {
                        match handle_command(&input, &book, &engine, view.as_ref()).await {
                            Ok(true) => {}
                            Ok(false) => break,
                            Err(e) => error!(error = %e, "Command failed"),
                        }
                    }
                    // stdin closed (detached run): keep syncing until SIGINT.
                    Ok(None) => {
                        signal::ctrl_c().await.ok();
                        info!("SIGINT received, initiating graceful shutdown");
                        break;
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to read stdin");
                        break;
                    }
                }
            }
        }
    }

    // ── Graceful shutdown: signal → unready → save → exit ───

    let _ = shutdown_tx.send(());
    let _ = ready_tx.send(false);

    // Final durable save, the end of the collection's lifecycle.
    {
        let book = book.lock().await;
        if let Err(e) = book.save().await {
            error!(error = %e, "Final save failed");
        }
    }

    let _ = tokio::time::timeout(Duration::from_secs(5), engine_handle).await;
    if let Some(handle) = health_handle {
        handle.abort();
    }

    info!("Shutdown complete");
    Ok(())
}

/// Handle one command line. Returns false when the user quits.
async fn handle_command<S, R, V>(
    input: &str,
    book: &Arc<Mutex<QuoteBook<S, R, V>>>,
    engine: &SyncEngine<S, R, V>,
    view: &V,
) -> Result<bool>
where
    S: QuoteStore,
    R: RemoteSource,
    V: View,
{
    let input = input.trim();
    let (command, rest) = match input.split_once(' ') {
        Some((head, tail)) => (head, tail.trim()),
        None => (input, ""),
    };

    match command {
        "" => {}
        "show" if rest.is_empty() => book.lock().await.show_random(),
        "show" | "filter" => book.lock().await.set_filter(rest).await?,
        "add" => match rest.split_once('@') {
            Some((text, category)) => {
                book.lock().await.add_quote(text, category).await?;
            }
            None => view.notify(&Notice::Invalid(
                "Usage: add <text> @ <category>".to_string(),
            )),
        },
        "categories" => book.lock().await.refresh_category_options(),
        "sync" => {
            engine.sync_once().await;
        }
        "export" => {
            if let Err(e) = book.lock().await.export_to_file().await {
                view.notify(&Notice::Invalid(format!("Export failed: {e}")));
            }
        }
        "import" if !rest.is_empty() => {
            let result = book.lock().await.import_from_file(Path::new(rest)).await;
            if let Err(e) = result {
                view.notify(&Notice::Invalid(e.to_string()));
            }
        }
        "help" => print_help(),
        "quit" | "exit" => return Ok(false),
        _ => view.notify(&Notice::Invalid(format!(
            "Unknown command: {command} (try: help)"
        ))),
    }

    Ok(true)
}

fn print_help() {
    println!("Commands:");
    println!("  show               show a random quote (current filter)");
    println!("  show <category>    switch filter and show a quote ('all' for everything)");
    println!("  add <text> @ <category>");
    println!("  categories         list known categories");
    println!("  filter <category>  switch the category filter");
    println!("  sync               reconcile with the server now");
    println!("  export             write the collection to the export file");
    println!("  import <path>      append quotes from a JSON array file");
    println!("  quit");
}
