use crate::queue::QueueItem;
use crate::state::FetchFailure;
use crate::stats::Stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Outcome of a queue fetch, tagged with its fetch sequence number.
    QueueLoaded {
        seq: u64,
        outcome: Result<Vec<QueueItem>, FetchFailure>,
    },
    /// Outcome of a status fetch.
    StatsLoaded { outcome: Result<Stats, FetchFailure> },
    /// User asked for a rescan of the watched folders.
    RefreshClicked,
    /// The settle timer elapsed; carries the follow-up status fetch outcome.
    RefreshSettled { outcome: Result<Stats, FetchFailure> },
    /// A per-item action completed; the view wants a fresh queue snapshot.
    QueueRefreshRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}
