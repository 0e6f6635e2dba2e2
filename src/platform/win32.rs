use crate::feedback::{CueClips, CuePlayer, FeedbackError, RodioPlayer};
use crate::hotkey::{GlobalHotkeys, HotkeyBindings, HotkeyError};
use crate::listen::ListenPlatform;

/// Win32 hotkeys and the default output device.
#[derive(Debug, Default)]
pub struct WindowsPlatform;

impl ListenPlatform for WindowsPlatform {
    type Hotkeys = GlobalHotkeys;

    fn register_hotkeys(&self, bindings: &HotkeyBindings) -> Result<GlobalHotkeys, HotkeyError> {
        GlobalHotkeys::register(bindings)
    }

    fn open_player(&self, clips: CueClips) -> Result<Box<dyn CuePlayer>, FeedbackError> {
        Ok(Box::new(RodioPlayer::open(clips)?))
    }
}
