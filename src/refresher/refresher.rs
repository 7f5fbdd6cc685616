use crate::refresher::live_view::{LiveSnapshot, LiveView};
use crate::refresher::source::SnapshotSource;
use chrono::Utc;
use std::future::pending;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Interval, MissedTickBehavior, interval};
use tracing::{debug, info, instrument, warn};

/// Polls a [`SnapshotSource`] and keeps a [`LiveView`] current.
///
/// Locations are polled every `location_interval`. Areas are fetched when the refresher
/// starts, retried on every tick until that succeeds, and then only re-fetched when an
/// `area_interval` is set. Polls within one refresher never overlap.
pub struct Refresher {
    source: Arc<dyn SnapshotSource>,
    location_interval: Duration,
    area_interval: Option<Duration>,
}

impl Refresher {
    pub fn new(source: Arc<dyn SnapshotSource>, location_interval: Duration) -> Self {
        Refresher {
            source,
            location_interval,
            area_interval: None,
        }
    }

    pub fn area_interval(mut self, area_interval: Option<Duration>) -> Self {
        self.area_interval = area_interval;
        self
    }

    /// Starts polling on the current runtime. Polling stops when the handle is stopped or dropped.
    pub fn spawn(self) -> RefresherHandle {
        let (snapshot_tx, snapshot_rx) = watch::channel(LiveSnapshot::default());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(self.run(snapshot_tx, shutdown_rx));

        RefresherHandle {
            snapshot_rx,
            shutdown_tx,
            task: Some(task),
        }
    }

    #[instrument(skip_all)]
    async fn run(self, snapshot_tx: watch::Sender<LiveSnapshot>, mut shutdown_rx: watch::Receiver<bool>) {
        info!("🔄 Refreshing live view every {:?}", self.location_interval);

        let mut view = LiveView::default();
        let mut location_ticker = ticker(self.location_interval);
        let mut area_ticker = self.area_interval.map(ticker);

        // Both tickers fire immediately, skip the first area tick to not fetch areas twice at mount
        if let Some(area_ticker) = area_ticker.as_mut() {
            area_ticker.tick().await;
        }

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => break,
                _ = location_ticker.tick() => {
                    if !view.has_areas() {
                        self.refresh_areas(&mut view).await;
                    }
                    self.refresh_locations(&mut view).await;
                }
                _ = next_tick(&mut area_ticker) => {
                    self.refresh_areas(&mut view).await;
                }
            }

            snapshot_tx.send_replace(view.snapshot().clone());
        }

        info!("🔄 Stopped refreshing live view");
    }

    async fn refresh_areas(&self, view: &mut LiveView) {
        match self.source.fetch_areas().await {
            Ok(areas) => {
                debug!("🔄 Fetched {} geofence area(s)", areas.len());
                view.apply_areas(areas);
            }
            Err(err) => {
                view.record_area_failure();
                warn!("⚠️ Unable to fetch geofence areas, keeping the previous ones: {}", err);
            }
        }
    }

    async fn refresh_locations(&self, view: &mut LiveView) {
        match self.source.fetch_locations().await {
            Ok(locations) => {
                debug!("🔄 Fetched {} client location(s)", locations.len());
                view.apply_locations(locations, Utc::now());
            }
            Err(err) => {
                view.record_location_failure();
                warn!("⚠️ Unable to fetch client locations, keeping the previous ones: {}", err);
            }
        }
    }
}

fn ticker(period: Duration) -> Interval {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => pending::<()>().await,
    }
}

/// Owns a running refresher. Dropping it aborts the polling task.
#[derive(Debug)]
pub struct RefresherHandle {
    snapshot_rx: watch::Receiver<LiveSnapshot>,
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl RefresherHandle {
    pub fn subscribe(&self) -> watch::Receiver<LiveSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Stops polling and waits for the current poll to settle.
    pub async fn stop(mut self) {
        self.shutdown_tx.send_replace(true);
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                warn!("⚠️ Live view refresher did not stop cleanly: {}", err);
            }
        }
    }
}

impl Drop for RefresherHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
