//! Platform-specific glue for listen mode.
//!
//! Ties the Win32 hotkey listener and the default audio output together
//! behind `ListenPlatform`.

#[cfg(windows)]
pub mod win32;

#[cfg(windows)]
pub use win32::WindowsPlatform;
