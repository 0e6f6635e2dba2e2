//! shush - Library
//!
//! Mute and unmute a microphone on Windows, once from the command line or
//! repeatedly from a global hotkey.
//!
//! ## Features
//!
//! - List active capture devices with stable 1-based ids
//! - Toggle mute on a listed device or on the default communications device
//! - Listen mode: a global hotkey toggles mute and plays a short cue,
//!   a second hotkey exits
//!
//! The Windows collaborators (WASAPI, `RegisterHotKey`, audio output) sit
//! behind `AudioBackend` and `ListenPlatform`.

pub mod app;
pub mod audio;
pub mod cli;
pub mod error;
pub mod feedback;
pub mod hotkey;
pub mod listen;
pub mod platform;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use audio::{AudioBackend, AudioError, DeviceRegistry, MuteControl, MuteTarget};
pub use cli::{Args, Command};
pub use error::{ShushError, ValidationError};
pub use feedback::{Cue, CuePlayer};
pub use hotkey::{HotkeyAction, HotkeyBinding, HotkeyBindings, HotkeySource};
pub use listen::{ListenConfig, ListenPlatform};
pub use session::Session;
