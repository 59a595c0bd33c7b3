use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x5b, 0x8d, 0xef);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_BORDER: Color = Color::Rgb(0x52, 0x52, 0x5b);
pub const CARD_BODY: Color = Color::Rgb(0xd4, 0xd4, 0xd8);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_LOADING: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
