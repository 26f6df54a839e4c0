/// Work-in-progress counters reported by the organizer service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub tracked_files_count: u64,
    pub grouping_files_count: u64,
    pub groups_count: u64,
}

impl Stats {
    /// Files the organizer has picked up but not yet queued for review.
    /// Recomputed on every read, never cached separately.
    pub fn pending_count(&self) -> u64 {
        self.tracked_files_count + self.grouping_files_count
    }
}

/// Stats with freshness attached.
///
/// A failed status fetch never erases the last good snapshot; it only demotes
/// it to `Stale`. `Unavailable` means no status fetch has succeeded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsView {
    #[default]
    Unavailable,
    Current(Stats),
    Stale(Stats),
}

impl StatsView {
    pub(crate) fn apply_success(&mut self, stats: Stats) {
        *self = StatsView::Current(stats);
    }

    pub(crate) fn apply_failure(&mut self) {
        if let StatsView::Current(stats) = *self {
            *self = StatsView::Stale(stats);
        }
    }

    /// Last known snapshot, current or stale.
    pub fn snapshot(&self) -> Option<Stats> {
        match *self {
            StatsView::Unavailable => None,
            StatsView::Current(stats) | StatsView::Stale(stats) => Some(stats),
        }
    }

    pub fn pending_count(&self) -> u64 {
        self.snapshot().map_or(0, |stats| stats.pending_count())
    }
}
