//! Mute toggling for a resolved target.

use super::backend::{AudioBackend, MuteControl};
use super::device::{AudioError, MuteTarget};
use super::registry::DeviceRegistry;
use tracing::debug;

/// Flip the mute flag of the target device. Returns the new state.
///
/// `DefaultCommunications` is looked up through the backend on every call,
/// never through the registry.
pub fn toggle_mute<B>(
    backend: &B,
    registry: &DeviceRegistry<B::Endpoint>,
    target: MuteTarget,
) -> Result<bool, AudioError>
where
    B: AudioBackend,
{
    let muted = match target {
        MuteTarget::DefaultCommunications => {
            let endpoint = backend.default_communications_endpoint()?;
            backend.activate(&endpoint)?.toggle_mute()?
        }
        MuteTarget::Listed(index) => {
            let device = registry
                .get(index)
                .ok_or(AudioError::DeviceNotFound { index })?;
            backend.activate(&device.endpoint)?.toggle_mute()?
        }
    };

    debug!(%target, muted, "toggled mute");
    Ok(muted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;

    fn setup() -> (FakeBackend, DeviceRegistry<crate::testing::FakeEndpoint>) {
        let backend = FakeBackend::new(&[("Mic A", false), ("Mic B", false)]);
        let registry = DeviceRegistry::enumerate(&backend).unwrap();
        (backend, registry)
    }

    #[test]
    fn test_toggle_listed_device() {
        let (backend, registry) = setup();
        let muted = toggle_mute(&backend, &registry, MuteTarget::Listed(1)).unwrap();
        assert!(muted);
        assert!(backend.state.listed_muted(0));
        assert!(!backend.state.listed_muted(1));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let (backend, registry) = setup();
        for target in [MuteTarget::Listed(2), MuteTarget::DefaultCommunications] {
            let first = toggle_mute(&backend, &registry, target).unwrap();
            let second = toggle_mute(&backend, &registry, target).unwrap();
            assert_ne!(first, second);
            assert!(!second);
        }
        assert!(!backend.state.listed_muted(1));
        assert_eq!(backend.state.default.get(), Some(false));
    }

    #[test]
    fn test_default_is_separate_from_registry() {
        let (backend, registry) = setup();
        let muted = toggle_mute(&backend, &registry, MuteTarget::DefaultCommunications).unwrap();
        assert!(muted);
        assert_eq!(backend.state.default.get(), Some(true));
        assert!(!backend.state.listed_muted(0));
        assert!(!backend.state.listed_muted(1));
        assert_eq!(backend.state.default_lookups.get(), 1);
    }

    #[test]
    fn test_default_works_with_empty_registry() {
        let backend = FakeBackend::new(&[]);
        let registry = DeviceRegistry::enumerate(&backend).unwrap();
        assert!(toggle_mute(&backend, &registry, MuteTarget::DefaultCommunications).unwrap());
    }

    #[test]
    fn test_missing_default_device() {
        let backend = FakeBackend::new(&[("Mic A", false)]).without_default();
        let registry = DeviceRegistry::enumerate(&backend).unwrap();
        assert!(matches!(
            toggle_mute(&backend, &registry, MuteTarget::DefaultCommunications),
            Err(AudioError::NoDefaultDevice)
        ));
    }

    #[test]
    fn test_activation_failure_leaves_state() {
        let (backend, registry) = setup();
        backend.state.fail_activate.set(true);
        assert!(toggle_mute(&backend, &registry, MuteTarget::Listed(1)).is_err());
        assert!(!backend.state.listed_muted(0));
    }

    #[test]
    fn test_unvalidated_index_is_not_found() {
        let (backend, registry) = setup();
        assert!(matches!(
            toggle_mute(&backend, &registry, MuteTarget::Listed(9)),
            Err(AudioError::DeviceNotFound { index: 9 })
        ));
        assert_eq!(backend.state.activations.get(), 0);
    }

    #[test]
    fn test_external_change_between_read_and_write_is_not_detected() {
        // Known race: the toggle negates the value it read. Another process
        // mutes the device after the read, so the write is a no-op instead of
        // the unmute a compare-and-set toggle would produce.
        let (backend, registry) = setup();
        backend.state.interfere_after_read.set(true);
        let muted = toggle_mute(&backend, &registry, MuteTarget::Listed(1)).unwrap();
        assert!(muted);
        assert!(backend.state.listed_muted(0));
    }
}
