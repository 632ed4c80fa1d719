use clap::Parser;
use clap::error::ErrorKind;
use habari::{Cli, run};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            // Usage errors exit with 1, not clap's default of 2
            _ => {
                e.print().ok();
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout carries only the rendered metadata.
///
/// The parser and `run` only emit `debug!`/`trace!` events, so with the fixed
/// `WARN` ceiling a normal run prints nothing here. The events stay in place
/// for a finer filter; the tool takes no flag or variable to select one.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .init();
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
