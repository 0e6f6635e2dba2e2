//! Snapshot of the active capture devices.
//!
//! Devices are enumerated once; endpoints added or removed afterwards are not
//! reflected. User-facing numbering is 1-based, 0 is reserved for the
//! default communications device and never refers to an entry here.

use super::backend::AudioBackend;
use super::device::{AudioError, CaptureDevice, MuteTarget};
use crate::error::ValidationError;
use tracing::debug;

/// Ordered list of the capture devices that were active at enumeration time.
#[derive(Debug)]
pub struct DeviceRegistry<E> {
    devices: Vec<CaptureDevice<E>>,
}

impl<E> DeviceRegistry<E> {
    /// Enumerate the active capture devices of a backend.
    pub fn enumerate<B>(backend: &B) -> Result<Self, AudioError>
    where
        B: AudioBackend<Endpoint = E>,
    {
        let devices = backend.active_capture_endpoints()?;
        debug!(count = devices.len(), "enumerated capture devices");
        Ok(Self { devices })
    }

    pub fn from_devices(devices: Vec<CaptureDevice<E>>) -> Self {
        Self { devices }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Get a device by its 1-based index.
    pub fn get(&self, index: usize) -> Option<&CaptureDevice<E>> {
        index.checked_sub(1).and_then(|i| self.devices.get(i))
    }

    /// Iterate devices with their 1-based index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CaptureDevice<E>)> {
        self.devices.iter().enumerate().map(|(i, d)| (i + 1, d))
    }

    /// One `<index> -> <name>` line per device.
    pub fn listing(&self) -> Vec<String> {
        self.iter()
            .map(|(index, device)| format!("{} -> {}", index, device.name))
            .collect()
    }

    /// Validate a user index against the device count.
    pub fn resolve(&self, index: u32) -> Result<MuteTarget, ValidationError> {
        match index {
            0 => Ok(MuteTarget::DefaultCommunications),
            n if (n as usize) <= self.devices.len() => Ok(MuteTarget::Listed(n as usize)),
            n => Err(ValidationError::IndexOutOfRange {
                index: n,
                count: self.devices.len(),
            }),
        }
    }
}
