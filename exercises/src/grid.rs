//! The 4 column by 2 row grid the matrix game draws on the LCD.
//!
//! Cells are numbered row-major, 0..=3 across the top. The left 2x2 block
//! of cells holds matrix A, the right block matrix B.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

pub const COLUMNS: usize = 4;
pub const ROWS: usize = 2;
pub const CELLS: usize = COLUMNS * ROWS;

/// Cell receiving the n-th committed entry: matrix A row-major first,
/// then matrix B.
const ENTRY_ORDER: [usize; CELLS] = [0, 1, 4, 5, 2, 3, 6, 7];

pub struct Grid {
    cell_width: u32,
    cell_height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cell_width: width / COLUMNS as u32,
            cell_height: height / ROWS as u32,
        }
    }

    /// Outline rectangle of a cell.
    pub fn cell(&self, cell: usize) -> Rectangle {
        assert!(cell < CELLS);
        let row = (cell / COLUMNS) as u32;
        let column = (cell % COLUMNS) as u32;

        Rectangle::new(
            Point::new(
                (column * self.cell_width) as i32,
                (row * self.cell_height) as i32,
            ),
            Size::new(self.cell_width, self.cell_height),
        )
    }

    /// Centre of a cell, the anchor for its value text.
    pub fn cell_centre(&self, cell: usize) -> Point {
        let rect = self.cell(cell);
        rect.top_left
            + Point::new(
                self.cell_width as i32 / 2,
                self.cell_height as i32 / 2,
            )
    }

    /// Cell for the n-th committed game entry.
    pub fn entry_cell(&self, entry: usize) -> usize {
        ENTRY_ORDER[entry]
    }

    /// Cell holding element (`row`, `column`) of matrix A (left block).
    pub fn a_cell(&self, row: usize, column: usize) -> usize {
        assert!(row < 2 && column < 2);
        row * COLUMNS + column
    }

    /// Cell holding element (`row`, `column`) of matrix B (right block).
    pub fn b_cell(&self, row: usize, column: usize) -> usize {
        assert!(row < 2 && column < 2);
        row * COLUMNS + column + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_tile_a_128_by_64_panel() {
        let grid = Grid::new(128, 64);

        assert_eq!(
            grid.cell(0),
            Rectangle::new(Point::zero(), Size::new(32, 32))
        );
        assert_eq!(
            grid.cell(3),
            Rectangle::new(Point::new(96, 0), Size::new(32, 32))
        );
        assert_eq!(
            grid.cell(4),
            Rectangle::new(Point::new(0, 32), Size::new(32, 32))
        );
        assert_eq!(
            grid.cell(7),
            Rectangle::new(Point::new(96, 32), Size::new(32, 32))
        );
    }

    #[test]
    fn centre_is_the_middle_of_the_cell() {
        let grid = Grid::new(128, 64);
        assert_eq!(grid.cell_centre(0), Point::new(16, 16));
        assert_eq!(grid.cell_centre(7), Point::new(112, 48));
    }

    #[test]
    fn entries_fill_a_then_b() {
        let grid = Grid::new(128, 64);

        // A row-major: top-left block.
        assert_eq!(grid.entry_cell(0), grid.a_cell(0, 0));
        assert_eq!(grid.entry_cell(1), grid.a_cell(0, 1));
        assert_eq!(grid.entry_cell(2), grid.a_cell(1, 0));
        assert_eq!(grid.entry_cell(3), grid.a_cell(1, 1));

        // Then B row-major: top-right block.
        assert_eq!(grid.entry_cell(4), grid.b_cell(0, 0));
        assert_eq!(grid.entry_cell(5), grid.b_cell(0, 1));
        assert_eq!(grid.entry_cell(6), grid.b_cell(1, 0));
        assert_eq!(grid.entry_cell(7), grid.b_cell(1, 1));
    }
}
