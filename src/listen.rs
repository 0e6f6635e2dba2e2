//! Listen mode: toggle mute on a hotkey until the exit hotkey fires.

use crate::audio::{AudioBackend, MuteTarget};
use crate::error::ShushError;
use crate::feedback::{Cue, CueClips, CuePlayer, FeedbackError, SilentPlayer};
use crate::hotkey::{HotkeyAction, HotkeyBindings, HotkeyError, HotkeySource};
use crate::session::Session;
use tracing::{debug, info, warn};

/// Listen mode settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenConfig {
    pub bindings: HotkeyBindings,

    /// Play a cue after each toggle
    pub cues: bool,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            bindings: HotkeyBindings::default(),
            cues: true,
        }
    }
}

/// Opens the OS resources listen mode needs.
pub trait ListenPlatform {
    type Hotkeys: HotkeySource;

    /// Register both bindings. Either one being taken is fatal.
    fn register_hotkeys(&self, bindings: &HotkeyBindings) -> Result<Self::Hotkeys, HotkeyError>;

    /// Open an output device for the decoded cues.
    fn open_player(&self, clips: CueClips) -> Result<Box<dyn CuePlayer>, FeedbackError>;
}

/// What happened during a listen session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenStats {
    pub toggles: usize,
    pub failed_toggles: usize,
}

/// Run listen mode for a user index.
///
/// Validates the index, prepares the cues, registers the hotkeys and loops
/// until the exit hotkey fires. Hotkeys are unregistered before returning,
/// whether the loop ended normally or not.
pub fn listen<B, P>(
    session: &Session<B>,
    index: u32,
    config: &ListenConfig,
    platform: &P,
) -> Result<ListenStats, ShushError>
where
    B: AudioBackend,
    P: ListenPlatform,
{
    let target = session.resolve(index)?;

    let player: Box<dyn CuePlayer> = if config.cues {
        let clips = CueClips::decode_embedded().map_err(ShushError::Feedback)?;
        match platform.open_player(clips) {
            Ok(player) => player,
            Err(err) => {
                warn!(error = %err, "won't be able to play audio cues");
                Box::new(SilentPlayer)
            }
        }
    } else {
        Box::new(SilentPlayer)
    };

    let mut hotkeys = platform
        .register_hotkeys(&config.bindings)
        .map_err(ShushError::Registration)?;

    info!(
        %target,
        toggle = %config.bindings.toggle,
        exit = %config.bindings.exit,
        "listening for hotkeys"
    );
    let result = run_loop(session, target, &mut hotkeys, player.as_ref());

    info!("Quitting");
    hotkeys.unregister_all();

    result.map_err(ShushError::Listener)
}

/// Process hotkey events one at a time until the exit hotkey fires.
///
/// A failed toggle is logged and the loop keeps listening.
pub fn run_loop<B, H>(
    session: &Session<B>,
    target: MuteTarget,
    hotkeys: &mut H,
    player: &dyn CuePlayer,
) -> Result<ListenStats, HotkeyError>
where
    B: AudioBackend,
    H: HotkeySource + ?Sized,
{
    let mut stats = ListenStats::default();

    loop {
        match hotkeys.wait_next()? {
            HotkeyAction::ToggleMute => match session.toggle(target) {
                Ok(muted) => {
                    stats.toggles += 1;
                    info!(%target, muted, "mute toggled");
                    player.play(Cue::for_state(muted));
                }
                Err(err) => {
                    stats.failed_toggles += 1;
                    warn!(%target, error = %err, "toggle failed, still listening");
                }
            },
            HotkeyAction::Exit => {
                debug!(?stats, "exit hotkey pressed");
                return Ok(stats);
            }
        }
    }
}
