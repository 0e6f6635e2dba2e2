//! Capture device data models.
//!
//! Defines the enumerated capture device, the validated mute target a user
//! index resolves to, and the audio error type.

use thiserror::Error;

/// Error type surfaced by the platform audio API.
#[cfg(windows)]
pub type PlatformError = windows::core::Error;

/// Error type surfaced by the platform audio API.
#[cfg(not(windows))]
pub type PlatformError = std::io::Error;

/// Name shown for endpoints whose friendly name cannot be read.
pub const UNKNOWN_DEVICE_NAME: &str = "Unknown Device";

/// An active capture endpoint captured at enumeration time.
///
/// The handle is owned by the device and released when it is dropped.
#[derive(Debug, Clone)]
pub struct CaptureDevice<E> {
    /// Human-readable device name (from device properties)
    pub name: String,

    /// Opaque platform handle for the endpoint
    pub endpoint: E,
}

impl<E> CaptureDevice<E> {
    pub fn new(name: impl Into<String>, endpoint: E) -> Self {
        Self {
            name: name.into(),
            endpoint,
        }
    }
}

/// The device a user index resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuteTarget {
    /// Index 0: whatever the OS reports as the default communications
    /// capture device at the time of the toggle.
    DefaultCommunications,

    /// 1-based position in the enumerated device list.
    Listed(usize),
}

impl MuteTarget {
    /// The user-facing index this target was resolved from.
    pub fn index(&self) -> usize {
        match self {
            MuteTarget::DefaultCommunications => 0,
            MuteTarget::Listed(n) => *n,
        }
    }
}

impl std::fmt::Display for MuteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MuteTarget::DefaultCommunications => write!(f, "default communications device"),
            MuteTarget::Listed(n) => write!(f, "device {}", n),
        }
    }
}

/// Audio service error types.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Device not found: {index}")]
    DeviceNotFound { index: usize },

    #[error("No default communications device available")]
    NoDefaultDevice,

    #[error("COM initialization failed: {0}")]
    ComInitFailed(#[source] PlatformError),

    #[error("Failed to enumerate devices: {0}")]
    EnumerationFailed(#[source] PlatformError),

    #[error("Volume control not available for device")]
    VolumeNotAvailable,

    #[error("Windows API error: {0}")]
    WindowsError(#[source] PlatformError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_index() {
        assert_eq!(MuteTarget::DefaultCommunications.index(), 0);
        assert_eq!(MuteTarget::Listed(3).index(), 3);
    }

    #[test]
    fn test_target_display() {
        assert_eq!(
            MuteTarget::DefaultCommunications.to_string(),
            "default communications device"
        );
        assert_eq!(MuteTarget::Listed(2).to_string(), "device 2");
    }
}
