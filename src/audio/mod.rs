//! Audio module for capture device enumeration and mute control.
//!
//! The platform-independent part (registry, toggler) works against the
//! `AudioBackend` seam; the WASAPI implementation is Windows-only.

pub mod backend;
pub mod device;
pub mod registry;
pub mod toggler;

#[cfg(windows)]
pub mod enumerator;
#[cfg(windows)]
pub mod volume;

pub use backend::{AudioBackend, MuteControl};
pub use device::{AudioError, CaptureDevice, MuteTarget, PlatformError, UNKNOWN_DEVICE_NAME};
pub use registry::DeviceRegistry;
pub use toggler::toggle_mute;

#[cfg(windows)]
pub use enumerator::{ComGuard, WasapiBackend};
#[cfg(windows)]
pub use volume::VolumeController;
