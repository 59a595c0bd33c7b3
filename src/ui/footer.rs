use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const LIST_HINTS: &str = " ↑↓ Scroll │ PgUp/PgDn Page │ Home/End Jump │ q Quit";
pub const ERROR_HINTS: &str = " Enter/r Retry │ q Quit";

pub struct Footer<'a> {
    hints: &'a str,
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'a str) -> Self {
        Self { hints, error: None }
    }

    /// Show a failure from a fetch task in place of the key hints.
    pub fn with_error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let version_width = version.chars().count();

        let mut spans = Vec::new();
        let content_used = match self.error {
            Some(error) => {
                let room = content_width.saturating_sub(version_width + 1);
                let message: String = error.chars().take(room).collect();
                let width = message.chars().count() + 1;
                spans.push(Span::raw(" "));
                spans.push(Span::styled(message, Style::default().fg(STATUS_ERROR)));
                width
            }
            None => {
                spans.push(Span::styled(self.hints.to_string(), text_style));
                self.hints.chars().count()
            }
        };
        let used = content_used + version_width;

        // Pad by char count, not byte count
        let padding = content_width.saturating_sub(used);
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
