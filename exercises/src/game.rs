//! The 2x2 matrix multiplication game.
//!
//! The player commits eight values: the four elements of matrix A
//! row-major, then the four of matrix B. After the eighth commit the game
//! reports the product A*B. Further commits are ignored.

pub const ENTRIES: usize = 8;

pub type Matrix = [[u32; 2]; 2];

/// Outcome of committing a value.
#[derive(Debug, PartialEq, Eq)]
pub enum Commit {
    /// The value was stored as entry `entry`.
    Accepted { entry: usize },
    /// The value completed the input; `product` is A*B.
    Complete { entry: usize, product: Matrix },
    /// The game was already complete.
    Ignored,
}

#[derive(Default)]
pub struct MatrixGame {
    entries: [u32; ENTRIES],
    count: usize,
}

impl MatrixGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&mut self, value: u32) -> Commit {
        if self.count == ENTRIES {
            return Commit::Ignored;
        }

        let entry = self.count;
        self.entries[entry] = value;
        self.count += 1;

        if self.count == ENTRIES {
            Commit::Complete {
                entry,
                product: multiply(self.a(), self.b()),
            }
        } else {
            Commit::Accepted { entry }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.count == ENTRIES
    }

    /// Matrix A as entered so far; unentered elements are zero.
    pub fn a(&self) -> Matrix {
        [
            [self.entries[0], self.entries[1]],
            [self.entries[2], self.entries[3]],
        ]
    }

    /// Matrix B as entered so far; unentered elements are zero.
    pub fn b(&self) -> Matrix {
        [
            [self.entries[4], self.entries[5]],
            [self.entries[6], self.entries[7]],
        ]
    }
}

/// 2x2 matrix product. Inputs are switch nibbles (0..=15), so u32
/// arithmetic cannot overflow.
pub fn multiply(a: Matrix, b: Matrix) -> Matrix {
    let mut product = [[0; 2]; 2];
    for (i, row) in product.iter_mut().enumerate() {
        for (j, element) in row.iter_mut().enumerate() {
            *element = a[i][0] * b[0][j] + a[i][1] * b[1][j];
        }
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_commits_complete_the_game() {
        let mut game = MatrixGame::new();

        for (i, value) in [1, 2, 3, 4, 5, 6, 7].iter().enumerate() {
            assert_eq!(game.commit(*value), Commit::Accepted { entry: i });
            assert!(!game.is_complete());
        }

        assert_eq!(
            game.commit(8),
            Commit::Complete {
                entry: 7,
                product: [[19, 22], [43, 50]],
            }
        );
        assert!(game.is_complete());

        assert_eq!(game.a(), [[1, 2], [3, 4]]);
        assert_eq!(game.b(), [[5, 6], [7, 8]]);
    }

    #[test]
    fn commits_after_completion_are_ignored() {
        let mut game = MatrixGame::new();
        for value in 0..ENTRIES as u32 {
            game.commit(value);
        }

        assert_eq!(game.commit(9), Commit::Ignored);
        assert_eq!(game.b(), [[4, 5], [6, 7]]);
    }

    #[test]
    fn multiply_by_identity() {
        let identity = [[1, 0], [0, 1]];
        let m = [[9, 13], [2, 6]];
        assert_eq!(multiply(m, identity), m);
        assert_eq!(multiply(identity, m), m);
    }

    #[test]
    fn multiply_maximum_switch_values() {
        let m = [[15, 15], [15, 15]];
        assert_eq!(multiply(m, m), [[450, 450], [450, 450]]);
    }
}
