use crate::ui::feed::FeedState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_LOADING, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    origin: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(origin: &'a str) -> Self {
        Self { origin }
    }

    pub fn widget(&self, feed: &FeedState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = status_label(feed);

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "cardfeed",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.origin.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_label(feed: &FeedState) -> (String, ratatui::style::Color) {
    if feed.loading {
        ("Loading…".to_string(), STATUS_LOADING)
    } else if feed.errored {
        ("Error".to_string(), STATUS_ERROR)
    } else {
        let noun = if feed.items.len() == 1 { "item" } else { "items" };
        (format!("{} {}", feed.items.len(), noun), STATUS_OK)
    }
}
