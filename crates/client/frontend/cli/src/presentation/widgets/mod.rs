//! Widgets composed by [`super::ui`], one module per screen region.
pub mod ai_modal;
pub mod editor;
pub mod level_select;
pub mod menu;
pub mod play;
pub mod settings;
pub mod status;
pub mod track;
