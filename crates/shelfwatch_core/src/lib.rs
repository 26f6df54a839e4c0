//! Shelfwatch core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod queue;
mod state;
mod stats;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use queue::{reconcile, ItemMetadata, ItemStatus, QueueItem};
pub use state::{AppState, ConnectionState, FetchFailure, RefreshState, CONNECTIVITY_GUIDANCE};
pub use stats::{Stats, StatsView};
pub use update::update;
pub use view_model::{DashboardViewModel, QueuePhase, QueueRowView};
