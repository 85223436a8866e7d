//! Terminal rendering: setup, theme, layout routing, and widgets.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
