//! Native windowed Pong client.
//!
//! Two binaries share this crate: `rally` (unscored, two human paddles) and
//! `pong` (scored, AI opponent, font-rendered score line).

pub mod input;
pub mod render;
pub mod simulation;

/// Install the stdout logger. Failure to install (e.g. a second call)
/// is reported but not fatal.
pub fn setup_logging() {
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply();
    if let Err(err) = result {
        eprintln!("failed to install logger: {err}");
    }
}
