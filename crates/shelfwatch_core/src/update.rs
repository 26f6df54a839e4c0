use crate::{AppState, Effect, Msg, RefreshState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueueLoaded { seq, outcome } => {
            state.apply_queue_outcome(seq, outcome);
            Vec::new()
        }
        Msg::StatsLoaded { outcome } => {
            state.apply_stats_outcome(outcome);
            Vec::new()
        }
        Msg::RefreshClicked => {
            if state.refresh() == RefreshState::Scanning {
                // Re-entrant trigger while the indicator is live.
                return (state, Vec::new());
            }
            state.begin_scan();
            vec![Effect::DispatchRescan, Effect::ScheduleSettle]
        }
        Msg::RefreshSettled { outcome } => {
            state.apply_stats_outcome(outcome);
            state.finish_scan();
            Vec::new()
        }
        Msg::QueueRefreshRequested => vec![Effect::FetchQueue],
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
