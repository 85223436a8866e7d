//! Event loop handlers, split by concern.
mod generation;
mod input;
mod play;
mod rendering;
