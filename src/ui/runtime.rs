use std::sync::mpsc::{RecvTimeoutError, Sender};

use anyhow::Context;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::feed::FeedViewModel;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const COMMAND_QUEUE: usize = 16;

/// Run the interactive screen on the calling thread until the user quits.
///
/// Loads happen on `runtime`; their results come back as [`AppEvent`]s.
pub fn run(config: &Config, view_model: FeedViewModel, runtime: &Handle) -> anyhow::Result<()> {
    let shutdown = ShutdownHandle::new();
    let tick_rate = config.tick_rate();

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(tick_rate, shutdown.clone());

    spawn_state_forwarder(runtime, &view_model, events.sender(), shutdown.clone());
    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    spawn_command_loop(runtime, view_model.clone(), command_rx, events.sender());
    spawn_signal_listener(runtime, shutdown.clone());

    let mut app = App::new(view_model.loader().resource().origin(), config.ui.scroll_step);
    app.set_command_sender(command_tx);
    app.on_feed(view_model.state());
    if !app.on_mount() {
        tracing::warn!(error = ?app.last_error(), "Initial fetch was not dispatched");
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Feed(state)) => app.on_feed(state),
            Ok(AppEvent::TaskError(message)) => app.on_task_error(message),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}

/// Push every published snapshot into the UI event queue.
fn spawn_state_forwarder(
    runtime: &Handle,
    view_model: &FeedViewModel,
    events: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    let mut rx = view_model.subscribe();
    runtime.spawn(async move {
        loop {
            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = rx.borrow_and_update().clone();
                    if events.send(AppEvent::Feed(snapshot)).is_err() {
                        break;
                    }
                }
                _ = shutdown.wait() => break,
            }
        }
    });
}

fn spawn_command_loop(
    runtime: &Handle,
    view_model: FeedViewModel,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::Fetch => {
                    let fetch = view_model.spawn_fetch();
                    let events = events.clone();
                    tokio::spawn(async move {
                        let message = match fetch.await {
                            Ok(Ok(())) => return,
                            Ok(Err(err)) => err.to_string(),
                            Err(err) => format!("Fetch task failed: {err}"),
                        };
                        let _ = events.send(AppEvent::TaskError(message));
                    });
                }
            }
        }
    });
}

fn spawn_signal_listener(runtime: &Handle, shutdown: ShutdownHandle) {
    runtime.spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if result.is_ok() {
                    shutdown.signal();
                }
            }
            _ = shutdown.wait() => {}
        }
    });
}
