use clap::Parser;
use de1soc_board::{
    devices::pushbuttons::Key,
    io::Changed,
    Board, Result,
};
use std::{thread, time::Duration};
use tracing::{debug, error};

/// Mirror the SW9..0 slider switches onto the LEDR9..0 red LEDs. KEY0
/// exits.
#[derive(Parser)]
struct Cli {
    /// Settle time after acting on an input change, in milliseconds
    #[arg(long, default_value_t = 200)]
    debounce_ms: u64,
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
    let debounce = Duration::from_millis(cli.debounce_ms);

    let board = Board::open()?;
    let switches = board.slider_switches()?;
    let keys = board.pushbuttons()?;
    let mut leds = board.red_leds()?;

    println!("Slider switches light their LEDs. Press KEY0 to exit.");

    // Empty latch: the startup state is shown immediately.
    let mut shown = Changed::default();

    while !keys.is_pressed(Key::Key0) {
        let state = switches.state();
        if shown.store(state) {
            leds.set(state);
            debug!("switches now {state:#012b}");
            thread::sleep(debounce);
        }
    }

    leds.clear();

    Ok(())
}
