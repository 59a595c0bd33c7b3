use crate::model::Item;
use crate::ui::app::App;
use crate::ui::cards::CardList;
use crate::ui::feed::FeedView;
use crate::ui::footer::{Footer, ERROR_HINTS, LIST_HINTS};
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const ERROR_MESSAGE: &str = "An error occurred";
pub const RETRY_LABEL: &str = "[ Retry ]";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.origin()).widget(app.feed()), header);
    frame.render_widget(Clear, body);

    let hints = match app.feed().view() {
        FeedView::Error => {
            draw_error(frame, body);
            ERROR_HINTS
        }
        FeedView::List(items) => {
            draw_list(frame, body, items, app);
            LIST_HINTS
        }
    };

    let footer_widget = Footer::new(hints).with_error(app.last_error());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, items: &[Item], app: &App) {
    if items.is_empty() {
        let text = if app.feed().loading {
            "Loading…"
        } else {
            "No items"
        };
        let placeholder = Paragraph::new(Line::from(text))
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);
        let rect = centered_rect_by_size(area, area.width, 1);
        frame.render_widget(placeholder, rect);
        return;
    }

    frame.render_widget(CardList::new(items, app.offset()), area);
}

fn draw_error(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            ERROR_MESSAGE,
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            RETRY_LABEL,
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let width = (ERROR_MESSAGE.chars().count() as u16).saturating_add(8);
    let height = lines.len() as u16 + 2;
    let rect = centered_rect_by_size(area, width, height);

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(panel, rect);
}
