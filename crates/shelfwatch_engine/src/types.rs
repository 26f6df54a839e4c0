use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Tag for queue fetches; newer fetches carry strictly larger values. The
/// core discards any queue outcome whose tag is not newer than the last one
/// it applied.
pub type FetchSeq = u64;

/// One queue entry as served by `GET /api/queue`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueueItemDto {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub dirpath: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub metadata: Option<ItemMetadataDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ItemMetadataDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
}

/// Counters served by `GET /api/status`. Absent fields read as zero; the
/// service merges several reporters into one flat object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct StatsDto {
    #[serde(default)]
    pub tracked_files_count: u64,
    #[serde(default)]
    pub grouping_files_count: u64,
    #[serde(default)]
    pub groups_count: u64,
}

/// Everything the poll loop reports back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    QueueFetched {
        seq: FetchSeq,
        result: Result<Vec<QueueItemDto>, ApiError>,
    },
    StatsFetched {
        result: Result<StatsDto, ApiError>,
    },
    RescanDispatched {
        result: Result<(), ApiError>,
    },
    RefreshSettled {
        result: Result<StatsDto, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response body"),
        }
    }
}
