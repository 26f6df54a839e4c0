use std::io::{self, BufRead};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use client_logging::{client_info, client_warn};
use shelfwatch_core::{update, AppState, Msg};
use shelfwatch_engine::{ApiSettings, PollerHandle, PollerSettings, ReqwestQueueService};

use super::effects::{map_event, EffectRunner};
use super::logging::{self, LogDestination};
use super::render;

const KEY_RESCAN: &str = "r";
const KEY_RELOAD: &str = "u";
const KEY_QUIT: &str = "q";

pub fn run_app() -> anyhow::Result<()> {
    // Logs go to a file so they do not fight the dashboard repaints.
    logging::initialize(LogDestination::File);

    let settings = ApiSettings {
        base_url: base_url_from_invocation(),
        ..ApiSettings::default()
    };
    client_info!("watching organizer service at {}", settings.base_url);

    let service =
        Arc::new(ReqwestQueueService::new(&settings).context("cannot build the API client")?);
    let (event_tx, event_rx) = mpsc::channel();
    let poller = PollerHandle::spawn(service, PollerSettings::default(), event_tx);
    let runner = EffectRunner::new(poller);

    let (input_tx, input_rx) = mpsc::channel::<String>();
    spawn_input_reader(input_tx);

    let mut state = AppState::new();
    render::paint(&state.view());

    loop {
        let mut inbox: Vec<Msg> = Vec::new();
        while let Ok(event) = event_rx.try_recv() {
            inbox.push(map_event(event));
        }

        let mut quit = false;
        while let Ok(line) = input_rx.try_recv() {
            match line.trim() {
                KEY_RESCAN => inbox.push(Msg::RefreshClicked),
                KEY_RELOAD => inbox.push(Msg::QueueRefreshRequested),
                KEY_QUIT => quit = true,
                "" => {}
                other => client_warn!("unbound key {other:?}"),
            }
        }
        if quit {
            break;
        }

        for msg in inbox {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.run(effects);
        }

        if state.consume_dirty() {
            render::paint(&state.view());
        }

        thread::sleep(Duration::from_millis(75));
    }

    runner.stop();
    client_info!("shutting down");
    Ok(())
}

/// First CLI argument wins, then `SHELFWATCH_API`, then the built-in default.
fn base_url_from_invocation() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SHELFWATCH_API").ok())
        .unwrap_or_else(|| ApiSettings::default().base_url)
}

fn spawn_input_reader(tx: mpsc::Sender<String>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
}
