//! Top-level error taxonomy.
//!
//! Every failure that ends the process maps onto one `ShushError` variant;
//! the binary reports it once and exits non-zero.

use crate::audio::AudioError;
use crate::feedback::FeedbackError;
use crate::hotkey::HotkeyError;
use thiserror::Error;

/// A user argument that was rejected before any device access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Device index {index} is out of range, {count} device(s) available. \
         Use 0 for the default device or a device id. Run `shush list` to list device ids."
    )]
    IndexOutOfRange { index: u32, count: usize },

    #[error("Toggle and exit hotkeys must differ, both are {binding}")]
    DuplicateHotkey { binding: String },
}

/// Application error types.
#[derive(Debug, Error)]
pub enum ShushError {
    #[error("Setup failed: {0}")]
    Setup(#[source] AudioError),

    #[error("Feedback setup failed: {0}")]
    Feedback(#[source] FeedbackError),

    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),

    #[error("Audio operation failed: {0}")]
    Platform(#[source] AudioError),

    #[error("Hotkey registration failed: {0}")]
    Registration(#[source] HotkeyError),

    #[error("Hotkey listener failed: {0}")]
    Listener(#[source] HotkeyError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Unsupported platform: shush needs the Windows audio and hotkey APIs")]
    UnsupportedPlatform,
}
