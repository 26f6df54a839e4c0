use client_logging::client_info;
use shelfwatch_core::{Effect, FetchFailure, ItemMetadata, ItemStatus, Msg, QueueItem, Stats};
use shelfwatch_engine::{ApiError, EngineEvent, PollerHandle, QueueItemDto, StatsDto};

/// Forwards core effects to the poller.
pub struct EffectRunner {
    poller: PollerHandle,
}

impl EffectRunner {
    pub fn new(poller: PollerHandle) -> Self {
        Self { poller }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchQueue => self.poller.request_queue_fetch(),
                Effect::DispatchRescan => {
                    client_info!("rescan requested");
                    self.poller.dispatch_rescan();
                }
                Effect::ScheduleSettle => self.poller.schedule_settle(),
            }
        }
    }

    pub fn stop(&self) {
        self.poller.stop();
    }
}

/// Translates an engine event into a core message.
pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::QueueFetched { seq, result } => Msg::QueueLoaded {
            seq,
            outcome: result
                .map(|items| items.into_iter().map(map_item).collect())
                .map_err(map_failure),
        },
        EngineEvent::StatsFetched { result } => Msg::StatsLoaded {
            outcome: result.map(map_stats).map_err(map_failure),
        },
        // Dispatch failures are already warn-logged by the poller; the view
        // state does not change either way.
        EngineEvent::RescanDispatched { .. } => Msg::NoOp,
        EngineEvent::RefreshSettled { result } => Msg::RefreshSettled {
            outcome: result.map(map_stats).map_err(map_failure),
        },
    }
}

fn map_item(dto: QueueItemDto) -> QueueItem {
    QueueItem {
        id: dto.id,
        status: map_status(&dto.status),
        dirpath: dto.dirpath,
        files: dto.files,
        metadata: dto.metadata.map(|meta| ItemMetadata {
            title: meta.title,
            author: meta.author,
            year: meta.year,
        }),
    }
}

fn map_status(raw: &str) -> ItemStatus {
    match raw {
        "pending" => ItemStatus::Pending,
        "processing" => ItemStatus::Processing,
        "approved" => ItemStatus::Approved,
        "rejected" => ItemStatus::Rejected,
        "completed" => ItemStatus::Completed,
        "error" => ItemStatus::Error,
        other => ItemStatus::Other(other.to_string()),
    }
}

fn map_stats(dto: StatsDto) -> Stats {
    Stats {
        tracked_files_count: dto.tracked_files_count,
        grouping_files_count: dto.grouping_files_count,
        groups_count: dto.groups_count,
    }
}

fn map_failure(err: ApiError) -> FetchFailure {
    FetchFailure {
        detail: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shelfwatch_engine::FailureKind;

    #[test]
    fn known_statuses_map_to_variants() {
        assert_eq!(map_status("processing"), ItemStatus::Processing);
        assert_eq!(map_status("pending"), ItemStatus::Pending);
        assert_eq!(map_status("completed"), ItemStatus::Completed);
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        assert_eq!(
            map_status("paused"),
            ItemStatus::Other("paused".to_string())
        );
    }

    #[test]
    fn queue_event_keeps_its_sequence_tag() {
        let event = EngineEvent::QueueFetched {
            seq: 9,
            result: Ok(Vec::new()),
        };

        match map_event(event) {
            Msg::QueueLoaded { seq, outcome } => {
                assert_eq!(seq, 9);
                assert_eq!(outcome, Ok(Vec::new()));
            }
            other => panic!("unexpected msg {other:?}"),
        }
    }

    #[test]
    fn failure_detail_carries_kind_and_message() {
        let event = EngineEvent::QueueFetched {
            seq: 1,
            result: Err(ApiError {
                kind: FailureKind::HttpStatus(503),
                message: "503 Service Unavailable".to_string(),
            }),
        };

        match map_event(event) {
            Msg::QueueLoaded { outcome, .. } => {
                let failure = outcome.unwrap_err();
                assert!(failure.detail.contains("http status 503"));
            }
            other => panic!("unexpected msg {other:?}"),
        }
    }
}
