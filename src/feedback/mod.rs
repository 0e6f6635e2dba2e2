//! Audible feedback after a toggle.
//!
//! Playback is fire-and-forget: `CuePlayer::play` returns immediately and
//! cues triggered in quick succession overlap.

pub mod clips;

#[cfg(windows)]
pub mod output;

pub use clips::{Clip, CueClips};

#[cfg(windows)]
pub use output::RodioPlayer;

use thiserror::Error;
use tracing::debug;

/// Which cue to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Muted,
    Unmuted,
}

impl Cue {
    /// The cue matching a new mute state.
    pub fn for_state(muted: bool) -> Self {
        if muted {
            Cue::Muted
        } else {
            Cue::Unmuted
        }
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cue::Muted => write!(f, "muted"),
            Cue::Unmuted => write!(f, "unmuted"),
        }
    }
}

/// Plays cues without waiting for them to finish.
pub trait CuePlayer {
    fn play(&self, cue: Cue);
}

/// Player used when cues are disabled or no output device is available.
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl CuePlayer for SilentPlayer {
    fn play(&self, cue: Cue) {
        debug!(%cue, "cue skipped");
    }
}

/// Feedback error types.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Failed to decode {cue} cue: {source}")]
    Decode {
        cue: Cue,
        #[source]
        source: hound::Error,
    },

    #[error("The {cue} cue has no samples")]
    EmptyClip { cue: Cue },

    #[cfg(windows)]
    #[error("No audio output available: {0}")]
    OutputUnavailable(#[from] rodio::StreamError),
}
