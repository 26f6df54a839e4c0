use crate::queue::{ItemStatus, QueueItem};
use crate::state::ConnectionState;
use crate::stats::StatsView;

/// What the queue list should show, independent of the connectivity banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueuePhase {
    /// No queue response has arrived yet.
    #[default]
    Loading,
    /// A snapshot arrived and it was empty.
    AllCaughtUp,
    /// There are items to show.
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardViewModel {
    pub phase: QueuePhase,
    pub items: Vec<QueueRowView>,
    pub item_count: usize,
    pub stats: StatsView,
    pub pending_count: u64,
    pub connection: ConnectionState,
    pub scanning: bool,
}

/// Flattened per-item row for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRowView {
    pub id: String,
    pub status: ItemStatus,
    pub dirpath: String,
    pub file_count: usize,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl QueueRowView {
    pub(crate) fn from_item(item: &QueueItem) -> Self {
        let metadata = item.metadata.as_ref();
        Self {
            id: item.id.clone(),
            status: item.status.clone(),
            dirpath: item.dirpath.clone(),
            file_count: item.files.len(),
            title: metadata.and_then(|meta| meta.title.clone()),
            author: metadata.and_then(|meta| meta.author.clone()),
        }
    }
}
