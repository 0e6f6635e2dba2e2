//! Device enumeration using Windows MMDevice API.
//!
//! Provides COM initialization and the WASAPI implementation of
//! `AudioBackend`.

use super::backend::AudioBackend;
use super::device::{AudioError, CaptureDevice, UNKNOWN_DEVICE_NAME};
use super::volume::VolumeController;
use tracing::{debug, warn};
use windows::Win32::Devices::Properties::DEVPKEY_Device_FriendlyName;
use windows::Win32::Media::Audio::{
    eCapture, eCommunications, IMMDevice, IMMDeviceEnumerator, MMDeviceEnumerator,
    DEVICE_STATE_ACTIVE,
};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoUninitialize, CLSCTX_ALL, COINIT_APARTMENTTHREADED, STGM,
};
use windows::Win32::UI::Shell::PropertiesSystem::{IPropertyStore, PROPERTYKEY};

/// COM initialization guard that uninitializes COM on drop.
///
/// Must outlive every COM interface created on this thread.
pub struct ComGuard {
    initialized: bool,
}

impl ComGuard {
    /// Initialize COM for the current thread.
    pub fn new() -> Result<Self, AudioError> {
        unsafe {
            CoInitializeEx(None, COINIT_APARTMENTTHREADED)
                .ok()
                .map_err(AudioError::ComInitFailed)?;
        }
        Ok(Self { initialized: true })
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        if self.initialized {
            unsafe {
                CoUninitialize();
            }
        }
    }
}

/// Audio backend over `IMMDeviceEnumerator`.
pub struct WasapiBackend {
    enumerator: IMMDeviceEnumerator,
}

impl WasapiBackend {
    /// Create the device enumerator.
    ///
    /// Note: COM must be initialized before calling this function.
    pub fn new() -> Result<Self, AudioError> {
        unsafe {
            let enumerator: IMMDeviceEnumerator =
                CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL)
                    .map_err(AudioError::EnumerationFailed)?;

            Ok(Self { enumerator })
        }
    }

    /// Get the friendly name of a device from its property store.
    fn device_name(&self, device: &IMMDevice) -> Option<String> {
        unsafe {
            // STGM_READ = 0
            let props: IPropertyStore = device.OpenPropertyStore(STGM(0)).ok()?;

            // Convert DEVPROPKEY to PROPERTYKEY
            let key = PROPERTYKEY {
                fmtid: DEVPKEY_Device_FriendlyName.fmtid,
                pid: DEVPKEY_Device_FriendlyName.pid,
            };

            let prop = props.GetValue(&key).ok()?;
            let name = prop.to_string();
            if name.is_empty() {
                None
            } else {
                Some(name)
            }
        }
    }
}

impl AudioBackend for WasapiBackend {
    type Endpoint = IMMDevice;
    type Control = VolumeController;

    fn active_capture_endpoints(&self) -> Result<Vec<CaptureDevice<IMMDevice>>, AudioError> {
        unsafe {
            let collection = self
                .enumerator
                .EnumAudioEndpoints(eCapture, DEVICE_STATE_ACTIVE)
                .map_err(AudioError::EnumerationFailed)?;

            let count = collection
                .GetCount()
                .map_err(AudioError::EnumerationFailed)?;

            let mut devices = Vec::with_capacity(count as usize);

            for i in 0..count {
                let device = collection.Item(i).map_err(AudioError::EnumerationFailed)?;
                let name = self.device_name(&device).unwrap_or_else(|| {
                    warn!(position = i, "could not read device name");
                    UNKNOWN_DEVICE_NAME.to_string()
                });
                debug!(position = i, name = %name, "found capture device");
                devices.push(CaptureDevice::new(name, device));
            }

            Ok(devices)
        }
    }

    fn default_communications_endpoint(&self) -> Result<IMMDevice, AudioError> {
        unsafe {
            self.enumerator
                .GetDefaultAudioEndpoint(eCapture, eCommunications)
                .map_err(|_| AudioError::NoDefaultDevice)
        }
    }

    fn activate(&self, endpoint: &IMMDevice) -> Result<VolumeController, AudioError> {
        VolumeController::new(endpoint)
    }
}
