//! Command dispatch.
//!
//! Drives a session through one of the three commands. The session has
//! already enumerated its devices when `run` is called.

use crate::audio::AudioBackend;
use crate::cli::Command;
use crate::error::ShushError;
use crate::listen::{self, ListenPlatform};
use crate::session::Session;
use std::io::Write;
use tracing::{debug, info};

/// Run a command against a session.
///
/// `list` writes to `out`; `mute` writes nothing on success; `lmute` blocks
/// until the exit hotkey fires.
pub fn run<B, P, W>(
    command: &Command,
    session: &Session<B>,
    platform: &P,
    out: &mut W,
) -> Result<(), ShushError>
where
    B: AudioBackend,
    P: ListenPlatform,
    W: Write,
{
    match command {
        Command::List => {
            for line in session.registry().listing() {
                writeln!(out, "{}", line)?;
            }
            out.flush()?;
            Ok(())
        }
        Command::Mute { index } => {
            let target = session.resolve(*index)?;
            let muted = session.toggle(target).map_err(ShushError::Platform)?;
            info!(%target, muted, "mute toggled");
            Ok(())
        }
        Command::Lmute { index, listen } => {
            let config = listen.to_config()?;
            let stats = listen::listen(session, *index, &config, platform)?;
            debug!(
                toggles = stats.toggles,
                failed = stats.failed_toggles,
                "listen mode finished"
            );
            Ok(())
        }
    }
}
