//! Simulated Server - In-Memory Remote with Artificial Delay
//!
//! Implements the `RemoteSource` port without any network: the "server"
//! is a mutex-guarded collection seeded with its own fixed quotes, and
//! each operation sleeps for a configurable span before completing, the
//! way the real thing would. An offline switch makes both operations
//! fail so the failure path of the sync flow can be exercised.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Result, bail};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::quote::Quote;
use crate::ports::remote::{RemoteAck, RemoteSource};

/// Fixed server-side seed collection.
///
/// One entry overlaps the local seed on purpose, so a first sync has
/// both agreement and remote-only material to work with.
pub fn server_seed_quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "The only way to do great work is to love what you do.".to_string(),
            category: "Work".to_string(),
        },
        Quote {
            text: "Simulated Server Quote: Keep pushing your limits.".to_string(),
            category: "Motivation".to_string(),
        },
        Quote {
            text: "Always code as if the guy who ends up maintaining your code \
                   will be a violent psychopath."
                .to_string(),
            category: "Coding".to_string(),
        },
    ]
}

/// In-memory simulated server.
pub struct SimulatedServer {
    /// The remote collection.
    quotes: Mutex<Vec<Quote>>,
    /// Artificial delay before a fetch completes.
    fetch_delay: Duration,
    /// Artificial delay before a post completes.
    post_delay: Duration,
    /// When set, every operation fails with a simulated network error.
    offline: AtomicBool,
}

impl SimulatedServer {
    /// Create a server with the fixed seed collection.
    pub fn new(fetch_delay: Duration, post_delay: Duration) -> Self {
        Self::with_quotes(server_seed_quotes(), fetch_delay, post_delay)
    }

    /// Create a server with a caller-provided collection.
    pub fn with_quotes(quotes: Vec<Quote>, fetch_delay: Duration, post_delay: Duration) -> Self {
        Self {
            quotes: Mutex::new(quotes),
            fetch_delay,
            post_delay,
            offline: AtomicBool::new(false),
        }
    }

    /// Toggle the simulated network failure mode.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
        info!(offline, "Simulated server availability changed");
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            bail!("simulated network failure: server unreachable");
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteSource for SimulatedServer {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        tokio::time::sleep(self.fetch_delay).await;
        self.check_online()?;

        let quotes = self.quotes.lock().await.clone();
        debug!(quotes = quotes.len(), "Served remote collection");
        Ok(quotes)
    }

    async fn post_quote(&self, quote: &Quote) -> Result<RemoteAck> {
        tokio::time::sleep(self.post_delay).await;
        self.check_online()?;

        self.quotes.lock().await.push(quote.clone());
        debug!(quote = %quote, "Accepted posted quote");
        Ok(RemoteAck { accepted: true })
    }

    async fn is_healthy(&self) -> bool {
        !self.offline.load(Ordering::SeqCst)
    }
}
