use clap::Parser;
use de1soc_board::{Board, Result};
use tracing::error;

/// Print the current state of the KEY pushbuttons and exit.
#[derive(Parser)]
struct Cli {
    /// Also print (and clear) the presses latched in the edge capture
    /// register
    #[arg(long)]
    edges: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let board = Board::open()?;
    let mut keys = board.pushbuttons()?;

    println!("Keys are: {:X}", keys.state());

    if cli.edges {
        println!("Captured edges: {:X}", keys.take_edges());
    }

    Ok(())
}
