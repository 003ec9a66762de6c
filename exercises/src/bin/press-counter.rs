use clap::Parser;
use de1soc_board::{devices::pushbuttons::Key, Board, Result};
use std::{thread, time::Duration};
use tracing::{debug, error};

/// Count presses of KEY1..3 on the HEX3..0 displays, using the edge
/// capture register. KEY0 exits.
#[derive(Parser)]
struct Cli {
    /// Settle time after counting a press, in milliseconds
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
    let mut keys = board.pushbuttons()?;
    let mut hex = board.seven_segment()?;

    // Discard anything latched before we started.
    keys.take_edges();

    let mut count: u32 = 0;
    hex.show_decimal(count);

    println!("Press KEY1, KEY2 or KEY3 to count. Press KEY0 to exit.");

    while !keys.is_pressed(Key::Key0) {
        let presses = keys.take_edges() & !Key::Key0.bit();
        if presses != 0 {
            count = (count + presses.count_ones()) % 10_000;
            hex.show_decimal(count);
            println!("Presses: {count}");

            // Contact bounce in the settle window latches as fresh
            // edges; discard them.
            thread::sleep(debounce);
            let bounced = keys.take_edges() & !Key::Key0.bit();
            if bounced != 0 {
                debug!("discarded bounce edges: {bounced:#06b}");
            }
        }
    }

    hex.clear();

    Ok(())
}
