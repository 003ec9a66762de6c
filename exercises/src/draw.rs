//! Drawing glue between the game state and the LCD framebuffer.

use crate::{
    game::Matrix,
    grid::{Grid, CELLS},
};
use de1soc_board::lcd::Framebuffer;
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    primitives::{Primitive, PrimitiveStyle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};
use std::convert::Infallible;

/// Drawing into the framebuffer cannot fail; this keeps that fact out of
/// every call site.
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Outlines every cell of the grid.
pub fn grid_lines(frame: &mut Framebuffer, grid: &Grid) {
    let style = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    for cell in 0..CELLS {
        infallible(grid.cell(cell).into_styled(style).draw(frame));
    }
}

/// Draws `value` centred in a cell.
pub fn cell_value(frame: &mut Framebuffer, grid: &Grid, cell: usize, value: u32) {
    let character_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    let text = value.to_string();
    infallible(
        Text::with_text_style(&text, grid.cell_centre(cell), character_style, text_style)
            .draw(frame),
    );
}

/// Draws a 2x2 matrix into the left block of the grid.
pub fn left_block_matrix(frame: &mut Framebuffer, grid: &Grid, matrix: Matrix) {
    for row in 0..2 {
        for column in 0..2 {
            cell_value(frame, grid, grid.a_cell(row, column), matrix[row][column]);
        }
    }
}
