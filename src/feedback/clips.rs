//! Embedded cue clips.
//!
//! Both clips are decoded once at startup into interleaved `f32` samples.
//! Every playback builds a fresh source over the decoded samples, so each
//! play starts from the first sample.

use super::{Cue, FeedbackError};
use std::io::Cursor;
use std::sync::Arc;

const MUTED_WAV: &[u8] = include_bytes!("../../assets/muted.wav");
const UNMUTED_WAV: &[u8] = include_bytes!("../../assets/unmuted.wav");

/// A decoded clip.
#[derive(Debug, Clone)]
pub struct Clip {
    pub samples: Arc<[f32]>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl Clip {
    /// Decode a WAV payload (integer PCM up to 32 bits or 32-bit float).
    pub fn decode(bytes: &[u8]) -> Result<Self, hound::Error> {
        let reader = hound::WavReader::new(Cursor::new(bytes))?;
        let spec = reader.spec();

        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader.into_samples::<f32>().collect::<Result<_, _>>()?,
            hound::SampleFormat::Int => {
                let scale = 1.0 / (1u64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 * scale))
                    .collect::<Result<_, _>>()?
            }
        };

        Ok(Self {
            samples: samples.into(),
            sample_rate: spec.sample_rate,
            channels: spec.channels,
        })
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f32 {
        let frames = self.samples.len() / usize::from(self.channels.max(1));
        frames as f32 / self.sample_rate as f32
    }
}

/// The muted and unmuted cues.
#[derive(Debug, Clone)]
pub struct CueClips {
    muted: Clip,
    unmuted: Clip,
}

impl CueClips {
    /// Decode the clips bundled with the binary.
    pub fn decode_embedded() -> Result<Self, FeedbackError> {
        Self::decode(MUTED_WAV, UNMUTED_WAV)
    }

    pub fn decode(muted: &[u8], unmuted: &[u8]) -> Result<Self, FeedbackError> {
        Ok(Self {
            muted: decode_cue(Cue::Muted, muted)?,
            unmuted: decode_cue(Cue::Unmuted, unmuted)?,
        })
    }

    pub fn clip(&self, cue: Cue) -> &Clip {
        match cue {
            Cue::Muted => &self.muted,
            Cue::Unmuted => &self.unmuted,
        }
    }
}

fn decode_cue(cue: Cue, bytes: &[u8]) -> Result<Clip, FeedbackError> {
    let clip = Clip::decode(bytes).map_err(|source| FeedbackError::Decode { cue, source })?;
    if clip.samples.is_empty() {
        return Err(FeedbackError::EmptyClip { cue });
    }
    Ok(clip)
}
