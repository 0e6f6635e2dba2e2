//! Per-process session state.
//!
//! Owns the audio backend and the device snapshot taken at startup. Devices
//! are released when the session is dropped.

use crate::audio::{toggle_mute, AudioBackend, AudioError, DeviceRegistry, MuteTarget};
use crate::error::ValidationError;

/// Audio backend plus the devices enumerated from it.
pub struct Session<B: AudioBackend> {
    backend: B,
    registry: DeviceRegistry<B::Endpoint>,
}

impl<B: AudioBackend> Session<B> {
    /// Enumerate the active capture devices once.
    pub fn open(backend: B) -> Result<Self, AudioError> {
        let registry = DeviceRegistry::enumerate(&backend)?;
        Ok(Self { backend, registry })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn registry(&self) -> &DeviceRegistry<B::Endpoint> {
        &self.registry
    }

    /// Validate a user index. No device is touched.
    pub fn resolve(&self, index: u32) -> Result<MuteTarget, ValidationError> {
        self.registry.resolve(index)
    }

    /// Toggle the target's mute flag. Returns the new state.
    pub fn toggle(&self, target: MuteTarget) -> Result<bool, AudioError> {
        toggle_mute(&self.backend, &self.registry, target)
    }
}
