use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::shutdown::ShutdownHandle;
use crate::ui::feed::FeedState;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
    /// The store published a new snapshot.
    Feed(FeedState),
    /// A fetch returned an error to its caller instead of publishing it.
    TaskError(String),
    /// OS signal received or shutdown requested elsewhere.
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread. It polls the terminal and emits a tick every `tick_rate`.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        let spawned = thread::Builder::new()
            .name("cardfeed-input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown.is_shutting_down() {
                        let _ = event_tx.send(AppEvent::Shutdown);
                        break;
                    }

                    // Short poll so the shutdown flag is checked often
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => {
                                let _ = event_tx.send(AppEvent::Key(key));
                            }
                            Ok(Event::Resize(_, _)) => {
                                let _ = event_tx.send(AppEvent::Resize);
                            }
                            Ok(_) => {}
                            Err(err) => {
                                tracing::error!(error = %err, "terminal read failed");
                                break;
                            }
                        },
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "terminal poll failed");
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            });

        if let Err(err) = spawned {
            tracing::error!(error = %err, "failed to spawn input thread");
        }

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
