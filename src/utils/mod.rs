//! Shared formatting utilities

pub mod display;

pub use display::{ColorOutput, FrameFormatter};
