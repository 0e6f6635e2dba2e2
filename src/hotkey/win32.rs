//! Global hotkeys using `RegisterHotKey`.
//!
//! Hotkeys are bound to the thread that registered them and are delivered as
//! `WM_HOTKEY` thread messages, so registration, the message pump and
//! unregistration all run on one dedicated thread. Events are forwarded to
//! the owner over a channel.

use super::{HotkeyAction, HotkeyBinding, HotkeyBindings, HotkeyError, HotkeySource, Modifiers};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_NOREPEAT,
    MOD_SHIFT, MOD_WIN,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetMessageW, PeekMessageW, PostThreadMessageW, MSG, PM_NOREMOVE, WM_HOTKEY, WM_QUIT, WM_USER,
};

const TOGGLE_ID: i32 = 1;
const EXIT_ID: i32 = 2;

/// Both listen-mode hotkeys, registered on their own thread.
pub struct GlobalHotkeys {
    thread_id: u32,
    events: Receiver<HotkeyAction>,
    worker: Option<JoinHandle<()>>,
}

impl GlobalHotkeys {
    /// Register both bindings. Fails if either one is already taken.
    pub fn register(bindings: &HotkeyBindings) -> Result<Self, HotkeyError> {
        let (event_tx, events) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::channel();
        let bindings = *bindings;

        let worker = thread::Builder::new()
            .name("shush-hotkeys".to_string())
            .spawn(move || run_message_loop(&bindings, &ready_tx, &event_tx))
            .map_err(HotkeyError::ThreadSpawn)?;

        match ready_rx.recv() {
            Ok(Ok(thread_id)) => Ok(Self {
                thread_id,
                events,
                worker: Some(worker),
            }),
            Ok(Err(err)) => {
                let _ = worker.join();
                Err(err)
            }
            Err(_) => {
                let _ = worker.join();
                Err(HotkeyError::ListenerStopped)
            }
        }
    }

    /// Ask the hotkey thread to unregister and exit, then wait for it.
    fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        unsafe {
            if let Err(err) = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) {
                // The thread is still pumping, joining would block forever.
                warn!(error = %err, "failed to stop hotkey thread");
                return;
            }
        }

        if worker.join().is_err() {
            warn!("hotkey thread panicked");
        }
    }
}

impl HotkeySource for GlobalHotkeys {
    fn wait_next(&mut self) -> Result<HotkeyAction, HotkeyError> {
        self.events.recv().map_err(|_| HotkeyError::ListenerStopped)
    }

    fn unregister_all(&mut self) {
        self.stop();
    }
}

impl Drop for GlobalHotkeys {
    fn drop(&mut self) {
        self.stop();
    }
}

fn modifier_flags(modifiers: Modifiers) -> HOT_KEY_MODIFIERS {
    let mut flags = MOD_NOREPEAT;
    for (modifier, flag) in [
        (Modifiers::CTRL, MOD_CONTROL),
        (Modifiers::SHIFT, MOD_SHIFT),
        (Modifiers::ALT, MOD_ALT),
        (Modifiers::WIN, MOD_WIN),
    ] {
        if modifiers.contains(modifier) {
            flags = flags | flag;
        }
    }
    flags
}

unsafe fn register(id: i32, binding: &HotkeyBinding) -> Result<(), HotkeyError> {
    RegisterHotKey(
        None,
        id,
        modifier_flags(binding.modifiers),
        binding.key.virtual_key(),
    )
    .map_err(|source| HotkeyError::RegistrationFailed {
        binding: binding.to_string(),
        source,
    })?;
    debug!(%binding, id, "registered hotkey");
    Ok(())
}

unsafe fn unregister(id: i32, binding: &HotkeyBinding) {
    match UnregisterHotKey(None, id) {
        Ok(()) => debug!(%binding, id, "unregistered hotkey"),
        Err(err) => warn!(%binding, error = %err, "failed to unregister hotkey"),
    }
}

fn run_message_loop(
    bindings: &HotkeyBindings,
    ready: &Sender<Result<u32, HotkeyError>>,
    events: &Sender<HotkeyAction>,
) {
    unsafe {
        // Create the thread message queue before anyone can post WM_QUIT to it
        let mut msg = MSG::default();
        let _ = PeekMessageW(&mut msg, None, WM_USER, WM_USER, PM_NOREMOVE);

        if let Err(err) = register(TOGGLE_ID, &bindings.toggle) {
            let _ = ready.send(Err(err));
            return;
        }
        if let Err(err) = register(EXIT_ID, &bindings.exit) {
            unregister(TOGGLE_ID, &bindings.toggle);
            let _ = ready.send(Err(err));
            return;
        }

        if ready.send(Ok(GetCurrentThreadId())).is_ok() {
            info!(toggle = %bindings.toggle, exit = %bindings.exit, "hotkeys registered");

            // GetMessageW returns -1 on error and 0 on WM_QUIT
            while GetMessageW(&mut msg, None, 0, 0).0 > 0 {
                if msg.message != WM_HOTKEY {
                    continue;
                }
                let action = match msg.wParam.0 as i32 {
                    TOGGLE_ID => HotkeyAction::ToggleMute,
                    EXIT_ID => HotkeyAction::Exit,
                    other => {
                        debug!(id = other, "ignoring unknown hotkey id");
                        continue;
                    }
                };
                if events.send(action).is_err() {
                    break;
                }
            }
        }

        unregister(TOGGLE_ID, &bindings.toggle);
        unregister(EXIT_ID, &bindings.exit);
    }
}
