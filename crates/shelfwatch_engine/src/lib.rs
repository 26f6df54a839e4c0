//! Shelfwatch engine: remote calls and poll scheduling.
mod api;
mod poller;
mod types;

pub use api::{ApiSettings, QueueService, ReqwestQueueService};
pub use poller::{PollerHandle, PollerSettings};
pub use types::{
    ApiError, EngineEvent, FailureKind, FetchSeq, ItemMetadataDto, QueueItemDto, StatsDto,
};
