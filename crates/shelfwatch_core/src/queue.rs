use std::cmp::Ordering;

/// One background job tracked by the remote organizer service.
///
/// Identity is `id`; everything else is display data. Items are never patched
/// in place: each applied fetch replaces the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItem {
    pub id: String,
    pub status: ItemStatus,
    pub dirpath: String,
    pub files: Vec<String>,
    pub metadata: Option<ItemMetadata>,
}

/// Identification metadata attached once a provider lookup has run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    Pending,
    Processing,
    Approved,
    Rejected,
    Completed,
    Error,
    /// Status strings this client does not know. Kept verbatim so the row
    /// still renders instead of failing the whole snapshot.
    Other(String),
}

impl ItemStatus {
    pub fn is_processing(&self) -> bool {
        matches!(self, ItemStatus::Processing)
    }

    pub fn label(&self) -> &str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Processing => "processing",
            ItemStatus::Approved => "approved",
            ItemStatus::Rejected => "rejected",
            ItemStatus::Completed => "completed",
            ItemStatus::Error => "error",
            ItemStatus::Other(raw) => raw,
        }
    }
}

/// Rebuilds the ordered view from a freshly fetched snapshot.
///
/// Total order: processing items before all others, then id descending under
/// lexicographic comparison. The sort is stable, so equal keys keep their
/// fetch order. Idempotent by construction.
pub fn reconcile(mut items: Vec<QueueItem>) -> Vec<QueueItem> {
    items.sort_by(compare_rows);
    items
}

fn compare_rows(a: &QueueItem, b: &QueueItem) -> Ordering {
    b.status
        .is_processing()
        .cmp(&a.status.is_processing())
        .then_with(|| b.id.cmp(&a.id))
}
