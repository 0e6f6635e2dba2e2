//! Fake collaborators shared by the unit tests.

use crate::audio::{AudioBackend, AudioError, CaptureDevice, MuteControl};
use crate::feedback::{Cue, CuePlayer};
use crate::hotkey::{HotkeyAction, HotkeyError, HotkeySource};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Listed(usize),
    Default,
}

#[derive(Debug, Clone)]
pub struct FakeEndpoint {
    pub slot: Slot,
}

#[derive(Default)]
pub struct FakeState {
    pub listed: RefCell<Vec<bool>>,
    pub default: Cell<Option<bool>>,
    pub activations: Cell<usize>,
    pub default_lookups: Cell<usize>,
    pub fail_activate: Cell<bool>,
    pub fail_enumerate: Cell<bool>,
    /// Flip the stored flag right after the next read, as another process would.
    pub interfere_after_read: Cell<bool>,
}

impl FakeState {
    fn read(&self, slot: Slot) -> Result<bool, AudioError> {
        match slot {
            Slot::Listed(i) => self
                .listed
                .borrow()
                .get(i)
                .copied()
                .ok_or(AudioError::DeviceNotFound { index: i + 1 }),
            Slot::Default => self.default.get().ok_or(AudioError::NoDefaultDevice),
        }
    }

    fn write(&self, slot: Slot, muted: bool) -> Result<(), AudioError> {
        match slot {
            Slot::Listed(i) => {
                let mut listed = self.listed.borrow_mut();
                let flag = listed
                    .get_mut(i)
                    .ok_or(AudioError::DeviceNotFound { index: i + 1 })?;
                *flag = muted;
            }
            Slot::Default => self.default.set(Some(muted)),
        }
        Ok(())
    }

    pub fn listed_muted(&self, i: usize) -> bool {
        self.listed.borrow()[i]
    }

    pub fn device_accesses(&self) -> usize {
        self.activations.get() + self.default_lookups.get()
    }
}

/// In-memory audio backend with a fixed device list and a separate default
/// communications device.
pub struct FakeBackend {
    names: Vec<String>,
    pub state: Rc<FakeState>,
}

impl FakeBackend {
    pub fn new(devices: &[(&str, bool)]) -> Self {
        let state = FakeState::default();
        *state.listed.borrow_mut() = devices.iter().map(|(_, muted)| *muted).collect();
        state.default.set(Some(false));
        Self {
            names: devices.iter().map(|(name, _)| name.to_string()).collect(),
            state: Rc::new(state),
        }
    }

    pub fn without_default(self) -> Self {
        self.state.default.set(None);
        self
    }
}

pub struct FakeControl {
    slot: Slot,
    state: Rc<FakeState>,
}

impl MuteControl for FakeControl {
    fn get_mute(&self) -> Result<bool, AudioError> {
        let value = self.state.read(self.slot)?;
        if self.state.interfere_after_read.replace(false) {
            self.state.write(self.slot, !value)?;
        }
        Ok(value)
    }

    fn set_mute(&self, muted: bool) -> Result<(), AudioError> {
        self.state.write(self.slot, muted)
    }
}

impl AudioBackend for FakeBackend {
    type Endpoint = FakeEndpoint;
    type Control = FakeControl;

    fn active_capture_endpoints(&self) -> Result<Vec<CaptureDevice<FakeEndpoint>>, AudioError> {
        if self.state.fail_enumerate.get() {
            return Err(AudioError::VolumeNotAvailable);
        }
        Ok(self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                CaptureDevice::new(name.clone(), FakeEndpoint { slot: Slot::Listed(i) })
            })
            .collect())
    }

    fn default_communications_endpoint(&self) -> Result<FakeEndpoint, AudioError> {
        self.state
            .default_lookups
            .set(self.state.default_lookups.get() + 1);
        match self.state.default.get() {
            Some(_) => Ok(FakeEndpoint {
                slot: Slot::Default,
            }),
            None => Err(AudioError::NoDefaultDevice),
        }
    }

    fn activate(&self, endpoint: &FakeEndpoint) -> Result<FakeControl, AudioError> {
        self.state.activations.set(self.state.activations.get() + 1);
        if self.state.fail_activate.get() {
            return Err(AudioError::VolumeNotAvailable);
        }
        Ok(FakeControl {
            slot: endpoint.slot,
            state: Rc::clone(&self.state),
        })
    }
}

/// Hotkey source that replays a fixed script of events.
#[derive(Default)]
pub struct ScriptedHotkeys {
    pub script: VecDeque<Result<HotkeyAction, HotkeyError>>,
    pub waits: usize,
    pub unregistered: Rc<Cell<bool>>,
}

impl ScriptedHotkeys {
    pub fn new(actions: &[HotkeyAction]) -> Self {
        Self {
            script: actions.iter().copied().map(Ok).collect(),
            ..Default::default()
        }
    }
}

impl HotkeySource for ScriptedHotkeys {
    fn wait_next(&mut self) -> Result<HotkeyAction, HotkeyError> {
        self.waits += 1;
        self.script
            .pop_front()
            .unwrap_or(Err(HotkeyError::ListenerStopped))
    }

    fn unregister_all(&mut self) {
        self.unregistered.set(true);
    }
}

/// Cue player that records every cue it is asked to play.
#[derive(Default, Clone)]
pub struct RecordingPlayer {
    pub played: Rc<RefCell<Vec<Cue>>>,
}

impl CuePlayer for RecordingPlayer {
    fn play(&self, cue: Cue) {
        self.played.borrow_mut().push(cue);
    }
}
