//! Seams over the platform audio endpoint API.
//!
//! `AudioBackend` is implemented by the WASAPI enumerator on Windows and by
//! fakes in tests.

use super::device::{AudioError, CaptureDevice};

/// Mute control for a single activated endpoint.
pub trait MuteControl {
    /// Get the current mute state.
    fn get_mute(&self) -> Result<bool, AudioError>;

    /// Set the mute state.
    fn set_mute(&self, muted: bool) -> Result<(), AudioError>;

    /// Toggle the mute state. Returns the new state.
    ///
    /// This is a blind read-then-negate. A change made by another process
    /// between the read and the write is overwritten with the negation of the
    /// value that was read.
    fn toggle_mute(&self) -> Result<bool, AudioError> {
        let current = self.get_mute()?;
        let new_state = !current;
        self.set_mute(new_state)?;
        Ok(new_state)
    }
}

/// Access to the OS audio endpoints.
pub trait AudioBackend {
    /// Owned handle to an endpoint. Released on drop.
    type Endpoint;

    /// Mute control obtained by activating an endpoint.
    type Control: MuteControl;

    /// Enumerate capture endpoints that are active right now.
    fn active_capture_endpoints(&self) -> Result<Vec<CaptureDevice<Self::Endpoint>>, AudioError>;

    /// Resolve the current default communications capture endpoint.
    fn default_communications_endpoint(&self) -> Result<Self::Endpoint, AudioError>;

    /// Activate the mute control of an endpoint.
    fn activate(&self, endpoint: &Self::Endpoint) -> Result<Self::Control, AudioError>;
}
