//! Peer score band tool.

mod cli;
mod logging;

fn main() -> eyre::Result<()> {
    cli::run()
}
