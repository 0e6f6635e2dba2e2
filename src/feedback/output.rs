//! Cue playback on the default output device.

use super::{Cue, CueClips, CuePlayer, FeedbackError};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle};
use tracing::{debug, warn};

/// Plays cues on one shared output stream.
///
/// Cues are mixed into the stream, so a cue started while another is still
/// playing overlaps it.
pub struct RodioPlayer {
    clips: CueClips,
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl RodioPlayer {
    pub fn open(clips: CueClips) -> Result<Self, FeedbackError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            clips,
            _stream: stream,
            handle,
        })
    }
}

impl CuePlayer for RodioPlayer {
    fn play(&self, cue: Cue) {
        let clip = self.clips.clip(cue);
        let source = SamplesBuffer::new(clip.channels, clip.sample_rate, clip.samples.to_vec());
        match self.handle.play_raw(source) {
            Ok(()) => debug!(%cue, "playing cue"),
            Err(err) => warn!(%cue, error = %err, "failed to play cue"),
        }
    }
}
