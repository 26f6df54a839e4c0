use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::{client_debug, client_info, client_warn};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use crate::api::QueueService;
use crate::{EngineEvent, FetchSeq};

/// Timer cadence for the recurring poll and the rescan settle delay.
#[derive(Debug, Clone)]
pub struct PollerSettings {
    pub poll_interval: Duration,
    pub settle_delay: Duration,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            settle_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PollerCommand {
    FetchQueueNow,
    DispatchRescan,
    ScheduleSettle,
}

/// Owns the recurring poll.
///
/// The loop runs on a dedicated thread with its own runtime. One combined
/// poll fires immediately on spawn, then the ticker fires at `poll_interval`.
/// Ticks keep their cadence regardless of in-flight fetches; overlapping
/// responses are sorted out by the sequence tags on `QueueFetched`.
pub struct PollerHandle {
    cmd_tx: UnboundedSender<PollerCommand>,
    cancel: CancellationToken,
}

impl PollerHandle {
    pub fn spawn(
        service: Arc<dyn QueueService>,
        settings: PollerSettings,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = unbounded_channel();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            runtime.block_on(poll_loop(service, settings, event_tx, cmd_rx, token));
        });

        Self { cmd_tx, cancel }
    }

    /// Fetch a queue snapshot now, outside the regular cadence.
    pub fn request_queue_fetch(&self) {
        let _ = self.cmd_tx.send(PollerCommand::FetchQueueNow);
    }

    /// Fire-and-forget rescan signal to the organizer service.
    pub fn dispatch_rescan(&self) {
        let _ = self.cmd_tx.send(PollerCommand::DispatchRescan);
    }

    /// Arm the settle timer; a `RefreshSettled` event follows.
    pub fn schedule_settle(&self) {
        let _ = self.cmd_tx.send(PollerCommand::ScheduleSettle);
    }

    /// Stops the recurring poll. Idempotent. In-flight requests are not
    /// awaited; their results die on the closed channel.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn poll_loop(
    service: Arc<dyn QueueService>,
    settings: PollerSettings,
    event_tx: mpsc::Sender<EngineEvent>,
    mut cmd_rx: UnboundedReceiver<PollerCommand>,
    cancel: CancellationToken,
) {
    client_info!(
        "poll loop started, interval {:?}, settle {:?}",
        settings.poll_interval,
        settings.settle_delay
    );

    let next_seq = Arc::new(AtomicU64::new(0));
    let mut ticker = tokio::time::interval(settings.poll_interval);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                // Queue and status are independent tasks; one stalling or
                // failing never blocks the other.
                spawn_queue_fetch(&service, &next_seq, &event_tx);
                spawn_status_fetch(&service, &event_tx);
            }
            command = cmd_rx.recv() => match command {
                Some(PollerCommand::FetchQueueNow) => {
                    spawn_queue_fetch(&service, &next_seq, &event_tx);
                }
                Some(PollerCommand::DispatchRescan) => spawn_rescan(&service, &event_tx),
                Some(PollerCommand::ScheduleSettle) => {
                    spawn_settle(&service, &event_tx, settings.settle_delay);
                }
                None => break,
            },
        }
    }

    client_debug!("poll loop stopped");
}

fn spawn_queue_fetch(
    service: &Arc<dyn QueueService>,
    next_seq: &Arc<AtomicU64>,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    let service = service.clone();
    let event_tx = event_tx.clone();
    let seq: FetchSeq = next_seq.fetch_add(1, Ordering::Relaxed) + 1;
    tokio::spawn(async move {
        let result = service.fetch_queue().await;
        let _ = event_tx.send(EngineEvent::QueueFetched { seq, result });
    });
}

fn spawn_status_fetch(service: &Arc<dyn QueueService>, event_tx: &mpsc::Sender<EngineEvent>) {
    let service = service.clone();
    let event_tx = event_tx.clone();
    tokio::spawn(async move {
        let result = service.fetch_status().await;
        let _ = event_tx.send(EngineEvent::StatsFetched { result });
    });
}

fn spawn_rescan(service: &Arc<dyn QueueService>, event_tx: &mpsc::Sender<EngineEvent>) {
    let service = service.clone();
    let event_tx = event_tx.clone();
    tokio::spawn(async move {
        let result = service.trigger_rescan().await;
        if let Err(err) = &result {
            // Logged only; the scanning indicator still settles on time.
            client_warn!("rescan dispatch failed: {err}");
        }
        let _ = event_tx.send(EngineEvent::RescanDispatched { result });
    });
}

fn spawn_settle(
    service: &Arc<dyn QueueService>,
    event_tx: &mpsc::Sender<EngineEvent>,
    delay: Duration,
) {
    let service = service.clone();
    let event_tx = event_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // One follow-up status read; freshly triggered work should be
        // visible by now. The delay is a heuristic, not a completion signal.
        let result = service.fetch_status().await;
        let _ = event_tx.send(EngineEvent::RefreshSettled { result });
    });
}
