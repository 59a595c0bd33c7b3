//! Card list for the feed body.
//!
//! Each card is a bordered box: bold title on the first line, body text
//! wrapped beneath it. Wrapping is done here rather than by `Paragraph` so
//! the height of a card is known before it is drawn.

use crate::model::Item;
use crate::ui::theme::{CARD_BODY, CARD_BORDER, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Widget};

/// Border plus one column of padding on each side.
const HORIZONTAL_CHROME: u16 = 4;
const VERTICAL_CHROME: u16 = 2;

pub struct Card<'a> {
    item: &'a Item,
    body: Vec<String>,
}

impl<'a> Card<'a> {
    /// Lay out `item` for `width` columns. Body lines that would not fit in
    /// `max_height` rows are never wrapped.
    pub fn new(item: &'a Item, width: u16, max_height: u16) -> Self {
        let inner = width.saturating_sub(HORIZONTAL_CHROME).max(1) as usize;
        let max_body = max_height.saturating_sub(VERTICAL_CHROME + 1) as usize;
        Self {
            item,
            body: wrap_text(&item.body, inner, max_body),
        }
    }

    /// Rows needed to draw the card, capped at `u16::MAX`.
    pub fn height(&self) -> u16 {
        u16::try_from(self.body.len())
            .unwrap_or(u16::MAX)
            .saturating_add(1)
            .saturating_add(VERTICAL_CHROME)
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CARD_BORDER))
            .padding(Padding::horizontal(1));

        let mut lines = Vec::with_capacity(self.body.len() + 1);
        lines.push(Line::styled(
            self.item.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ));
        lines.extend(
            self.body
                .into_iter()
                .map(|line| Line::styled(line, Style::default().fg(CARD_BODY))),
        );

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Vertical stack of cards starting at `offset`. Cards past the bottom are clipped.
pub struct CardList<'a> {
    items: &'a [Item],
    offset: usize,
}

impl<'a> CardList<'a> {
    pub fn new(items: &'a [Item], offset: usize) -> Self {
        Self { items, offset }
    }
}

impl Widget for CardList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for item in self.items.iter().skip(self.offset) {
            if y >= area.bottom() {
                break;
            }
            let remaining = area.bottom() - y;
            let card = Card::new(item, area.width, remaining);
            let height = card.height().min(remaining);
            card.render(
                Rect {
                    x: area.x,
                    y,
                    width: area.width,
                    height,
                },
                buf,
            );
            y += height;
        }
    }
}

/// Greedy word wrap by char count. Words longer than `width` are split.
/// Stops after `max_lines` lines.
pub fn wrap_text(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    'paragraphs: for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split_whitespace() {
            if lines.len() >= max_lines {
                break 'paragraphs;
            }
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                if lines.len() >= max_lines {
                    break 'paragraphs;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        if lines.len() >= max_lines {
            break;
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines.truncate(max_lines);
    lines
}
