//! Cross-frontend primitives for presenting the game.
//!
//! Houses the frontend trait, status message logging, shared configuration,
//! and text formatting that both the CLI and future graphical clients reuse.
pub mod config;
pub mod format;
pub mod frontend;
pub mod message;

pub use config::{FrameConfig, FrontendConfig, MessageConfig};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
