use crate::queue::{reconcile, QueueItem};
use crate::stats::{Stats, StatsView};
use crate::view_model::{DashboardViewModel, QueuePhase, QueueRowView};

/// Guidance shown while the organizer service cannot be reached.
pub const CONNECTIVITY_GUIDANCE: &str =
    "Could not connect to the organizer service. Is it running?";

/// Reachability of the organizer service.
///
/// Written only by the queue fetch path; status fetches are best-effort
/// telemetry and never touch this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionState {
    pub ok: bool,
    pub message: Option<String>,
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }
}

impl ConnectionState {
    fn reachable() -> Self {
        Self::default()
    }

    fn unreachable(detail: &str) -> Self {
        Self {
            ok: false,
            message: Some(format!("{CONNECTIVITY_GUIDANCE} ({detail})")),
        }
    }
}

/// Whether a user-triggered rescan indicator is live.
///
/// `Scanning` is cleared by the settle timer, not by server-side completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Scanning,
}

/// Description of a failed fetch, as handed over by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    items: Vec<QueueItem>,
    stats: StatsView,
    connection: ConnectionState,
    refresh: RefreshState,
    loaded: bool,
    last_applied_seq: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&self) -> RefreshState {
        self.refresh
    }

    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    pub fn stats(&self) -> StatsView {
        self.stats
    }

    /// True once after any state change since the last call. The shell uses
    /// this to coalesce renders.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub fn view(&self) -> DashboardViewModel {
        let phase = if !self.loaded {
            QueuePhase::Loading
        } else if self.items.is_empty() {
            QueuePhase::AllCaughtUp
        } else {
            QueuePhase::Ready
        };

        DashboardViewModel {
            phase,
            item_count: self.items.len(),
            items: self.items.iter().map(QueueRowView::from_item).collect(),
            stats: self.stats,
            pending_count: self.stats.pending_count(),
            connection: self.connection.clone(),
            scanning: self.refresh == RefreshState::Scanning,
        }
    }

    pub(crate) fn apply_queue_outcome(
        &mut self,
        seq: u64,
        outcome: Result<Vec<QueueItem>, FetchFailure>,
    ) {
        // Fetches can overlap across ticks; a response overtaken by a newer
        // one must not clobber the newer snapshot.
        if seq <= self.last_applied_seq {
            return;
        }
        self.last_applied_seq = seq;
        self.loaded = true;
        match outcome {
            Ok(raw) => {
                self.items = reconcile(raw);
                self.connection = ConnectionState::reachable();
            }
            Err(failure) => {
                // Keep the last good list on screen; only the banner changes.
                self.connection = ConnectionState::unreachable(&failure.detail);
            }
        }
        self.dirty = true;
    }

    pub(crate) fn apply_stats_outcome(&mut self, outcome: Result<Stats, FetchFailure>) {
        match outcome {
            Ok(stats) => self.stats.apply_success(stats),
            Err(_) => self.stats.apply_failure(),
        }
        self.dirty = true;
    }

    pub(crate) fn begin_scan(&mut self) {
        self.refresh = RefreshState::Scanning;
        self.dirty = true;
    }

    pub(crate) fn finish_scan(&mut self) {
        self.refresh = RefreshState::Idle;
        self.dirty = true;
    }
}
