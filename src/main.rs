use clap::Parser;
use shush::cli::{self, Args};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(windows)]
fn run(args: &Args) -> anyhow::Result<()> {
    use shush::audio::{ComGuard, WasapiBackend};
    use shush::platform::WindowsPlatform;
    use shush::{app, Session, ShushError};

    // Declared first so COM outlives every device handle
    let _com = ComGuard::new().map_err(ShushError::Setup)?;

    let backend = WasapiBackend::new().map_err(ShushError::Setup)?;
    let session = Session::open(backend).map_err(ShushError::Platform)?;

    let mut out = std::io::stdout().lock();
    app::run(&args.command, &session, &WindowsPlatform, &mut out)?;
    Ok(())
}

#[cfg(not(windows))]
fn run(_args: &Args) -> anyhow::Result<()> {
    Err(shush::ShushError::UnsupportedPlatform.into())
}
