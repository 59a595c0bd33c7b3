//! Terminal presentation of the feed.

pub mod app;
pub mod cards;
pub mod events;
pub mod feed;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
