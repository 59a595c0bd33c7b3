use crate::ui::feed::{FeedState, FeedView};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Load the resource and publish the result.
    Fetch,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Cards moved by PageUp/PageDown, in scroll steps.
const PAGE_STEPS: usize = 5;

/// Screen model: the latest feed snapshot plus local view state.
pub struct App {
    should_quit: bool,
    feed: FeedState,
    origin: String,
    /// Index of the first visible card.
    offset: usize,
    scroll_step: usize,
    command_sender: Option<UiCommandSender>,
    last_error: Option<String>,
}

impl App {
    pub fn new(origin: impl Into<String>, scroll_step: usize) -> Self {
        Self {
            should_quit: false,
            feed: FeedState::default(),
            origin: origin.into(),
            offset: 0,
            scroll_step: scroll_step.max(1),
            command_sender: None,
            last_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Take a new snapshot published by the store.
    pub fn on_feed(&mut self, feed: FeedState) {
        self.feed = feed;
        if !self.feed.errored {
            self.last_error = None;
        }
        self.clamp_offset();
    }

    /// A fetch task returned an error instead of publishing one.
    pub fn on_task_error(&mut self, message: String) {
        self.last_error = Some(message);
    }

    /// First display: load without waiting for user input.
    pub fn on_mount(&mut self) -> bool {
        self.request_fetch()
    }

    /// Re-run the load from the error view. Ignored while the list is shown.
    pub fn retry(&mut self) -> bool {
        if !self.feed.errored {
            return false;
        }
        self.request_fetch()
    }

    pub fn request_fetch(&mut self) -> bool {
        self.send_command(UiCommand::Fetch)
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.scroll_step);
    }

    pub fn scroll_down(&mut self) {
        self.offset = self.offset.saturating_add(self.scroll_step);
        self.clamp_offset();
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.page_step());
    }

    pub fn page_down(&mut self) {
        self.offset = self.offset.saturating_add(self.page_step());
        self.clamp_offset();
    }

    pub fn scroll_home(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_end(&mut self) {
        self.offset = self.feed.items.len().saturating_sub(1);
    }

    pub fn is_error_view(&self) -> bool {
        matches!(self.feed.view(), FeedView::Error)
    }

    fn page_step(&self) -> usize {
        self.scroll_step.saturating_mul(PAGE_STEPS)
    }

    fn clamp_offset(&mut self) {
        let max = self.feed.items.len().saturating_sub(1);
        if self.offset > max {
            self.offset = max;
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                tracing::debug!(?command, "ui command sent");
                true
            }
            Err(err) => {
                self.last_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
