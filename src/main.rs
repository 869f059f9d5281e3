use env_logger::Env;
use hotel_reservations::session::{run_session, Session};
use log::info;
use std::io;

// Runs an operator session over stdin/stdout; logs go to stderr.
pub fn run_app() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let mut session = Session::new();

    info!("Reading commands from stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), &mut session)?;

    info!("Session ended with {} hotel(s)", session.registry().hotels().len());
    Ok(())
}

fn main() -> io::Result<()> {
    run_app()
}
