use clap::Parser;
use de1soc_board::{
    devices::pushbuttons::Key,
    io::Changed,
    Board, Result,
};
use de1soc_exercises::mirror;
use std::{thread, time::Duration};
use tracing::{debug, error};

/// Show the binary number entered on SW3..0 as a decimal digit, on the
/// external display wired to JP1 and on HEX0. KEY0 exits.
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
    let mut jp1 = board.jp1()?;
    let switches = board.slider_switches()?;
    let keys = board.pushbuttons()?;
    let mut hex = board.seven_segment()?;

    // The external display decoder sits on the lower four JP1 pins.
    jp1.set_directions(0x0000_000F);
    mirror::clear(&mut jp1, &mut hex);

    println!("Use switches SW0 to SW3 to enter a binary number; its decimal value appears on the display. Press KEY0 to exit.");

    // Seeded with the startup state, so the display only updates on a
    // real change.
    let mut displayed = Changed::new(switches.low_nibble());

    while !keys.is_pressed(Key::Key0) {
        let value = switches.low_nibble();
        if displayed.store(value) {
            mirror::show(&mut jp1, &mut hex, value);
            println!("Displaying number: {value}");
            thread::sleep(debounce);
        }
    }

    debug!("KEY0 pressed, cleaning up");
    mirror::clear(&mut jp1, &mut hex);

    Ok(())
}
