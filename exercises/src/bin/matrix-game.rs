use clap::Parser;
use de1soc_board::{
    devices::pushbuttons::Key,
    io::{Changed, KeyEdgeDetector},
    lcd::{Framebuffer, LcdInterface, HEIGHT, WIDTH},
    Board, Result,
};
use de1soc_exercises::{
    draw,
    game::{Commit, MatrixGame},
    grid::Grid,
    mirror,
};
use std::{thread, time::Duration};
use tracing::{debug, error, info};

/// A 2x2 matrix multiplication game on the LCD.
///
/// Enter each element with SW3..0 and commit it with KEY1: first the four
/// elements of matrix A row by row, then the four of matrix B. After the
/// eighth element the product A*B is shown. KEY0 exits.
#[derive(Parser)]
struct Cli {
    /// Settle time after acting on an input change, in milliseconds
    #[arg(long, default_value_t = 500)]
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

    let mut lcd = LcdInterface::new(board.jp2()?);
    lcd.init();
    lcd.backlight(true);

    let grid = Grid::new(WIDTH, HEIGHT);
    let mut frame = Framebuffer::new();
    draw::grid_lines(&mut frame, &grid);
    lcd.refresh(&frame);

    println!("Enter matrix elements with SW0 to SW3 and commit each with KEY1.");
    println!("Matrix A first (row by row), then matrix B. KEY0 exits.");

    let mut game = MatrixGame::new();
    let mut edges = KeyEdgeDetector::new(keys.state());
    let mut displayed = Changed::new(switches.low_nibble());

    loop {
        // Exit on the raw data register bit, same as the other
        // exercises: a KEY0 held at startup still exits.
        if keys.is_pressed(Key::Key0) {
            debug!("KEY0 pressed, exiting");
            break;
        }

        let pressed = edges.update(keys.state());

        let value = switches.low_nibble();
        if displayed.store(value) {
            mirror::show(&mut jp1, &mut hex, value);
            println!("Displaying number: {value}");
            thread::sleep(debounce);
        }

        if pressed & Key::Key1.bit() != 0 {
            match game.commit(value) {
                Commit::Accepted { entry } => {
                    draw::cell_value(&mut frame, &grid, grid.entry_cell(entry), value);
                    lcd.refresh(&frame);
                }
                Commit::Complete { entry, product } => {
                    draw::cell_value(&mut frame, &grid, grid.entry_cell(entry), value);
                    lcd.refresh(&frame);

                    info!("A = {:?}, B = {:?}", game.a(), game.b());
                    println!("A * B = {product:?}");

                    // Leave the completed input on screen briefly
                    // before replacing it with the product.
                    thread::sleep(debounce);

                    frame.clear();
                    draw::grid_lines(&mut frame, &grid);
                    draw::left_block_matrix(&mut frame, &grid, product);
                    lcd.refresh(&frame);
                }
                Commit::Ignored => {
                    debug!("input already complete, ignoring commit");
                }
            }
            thread::sleep(debounce);
        }
    }

    frame.clear();
    lcd.refresh(&frame);
    lcd.backlight(false);
    lcd.display_off();
    mirror::clear(&mut jp1, &mut hex);

    Ok(())
}
