//! Background exchange-rate refresher.
//!
//! Copies the rate source into the rate cache once at startup and then on a
//! fixed interval. A failed tick leaves the previous table in place.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use products_types::{ExchangeRateSource, RateCache, RateSourceError};

/// Default period between refresh ticks.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Copies rates from `S` into the shared cache `C`.
pub struct RateRefresher<S: ExchangeRateSource, C: RateCache> {
    source: S,
    cache: Arc<C>,
}

impl<S: ExchangeRateSource, C: RateCache> RateRefresher<S, C> {
    pub fn new(source: S, cache: Arc<C>) -> Self {
        Self { source, cache }
    }

    /// Runs a single refresh tick, returning how many rates were stored.
    ///
    /// On error the cache is not touched.
    pub fn refresh_once(&self) -> Result<usize, RateSourceError> {
        tracing::info!("Updating currency conversion cache at UTC time {}", Utc::now());

        let rates = self.source.get_rates()?;
        let count = rates.len();
        self.cache.set(rates);
        Ok(count)
    }

    /// Starts the periodic refresh task on the current tokio runtime.
    ///
    /// The first tick fires immediately. Ticks never overlap, and a tick that is
    /// already running finishes even if shutdown is requested meanwhile. Each
    /// tick runs on the blocking pool.
    pub fn spawn(self, every: Duration) -> RefresherHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let refresher = Arc::new(self);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {}
                }

                let tick = refresher.clone();
                match tokio::task::spawn_blocking(move || tick.refresh_once()).await {
                    Ok(Ok(count)) => tracing::info!(count, "Currency conversion cache updated"),
                    Ok(Err(e)) => {
                        tracing::error!(error = %e, "Rate refresh failed, keeping previous rates")
                    }
                    Err(e) => tracing::error!(error = %e, "Rate refresh tick did not complete"),
                }
            }

            tracing::info!("Rate refresher stopped");
        });

        RefresherHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Owner of a running refresher. Dropping it also stops future ticks.
pub struct RefresherHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl RefresherHandle {
    /// Stops scheduling ticks and waits for the task to exit.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "Rate refresher task ended abnormally");
        }
    }
}
