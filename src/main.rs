use std::io;
use toy_robot::{Session, SessionOutcome, SimulatorConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the simulator's replies.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(
        SimulatorConfig::default(),
        io::stdin().lock(),
        io::stdout().lock(),
    );

    session.greet()?;
    if session.run()? == SessionOutcome::InputExhausted {
        tracing::warn!("input closed before EXIT");
    }
    Ok(())
}
