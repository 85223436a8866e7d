//! Gameplay and editor collaborators hosted by the terminal frontend.
//!
//! The controller only tracks sessions and editor hand-offs; these provide
//! the minimal simulation and editing the terminal needs to exercise them.
mod runner;
mod workshop;

pub use runner::{RunSignal, TrackRunner};
pub use workshop::Workshop;
