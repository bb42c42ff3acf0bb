//! The 9x9 value grid and its checked accessors.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

/// A 9x9 grid of cell values in row-major order (`grid[y][x]`).
///
/// Values are in the range 0-9, where [`NO_VALUE`] (0) marks an empty cell.
/// This is the interchange format between the board, the solver, and the
/// generator.
pub type Grid = [[u8; 9]; 9];

/// The value of an empty cell.
pub const NO_VALUE: u8 = 0;

/// An error raised by the checked [`Board`] accessors.
///
/// These signal programmer or input error at the API boundary; the engine
/// itself never produces coordinates or values outside the valid ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A coordinate outside the 0-8 board range was used.
    #[display("coordinate ({x}, {y}) is outside the 9x9 board")]
    InvalidCoordinate {
        /// The offending x coordinate.
        x: u8,
        /// The offending y coordinate.
        y: u8,
    },
    /// A cell value outside the 0-9 range was supplied.
    #[display("value {value} is not a cell value in the range 0-9")]
    InvalidValue {
        /// The offending value.
        value: u8,
    },
}

/// An error raised when parsing a [`Board`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The text contains a character that is not a cell or whitespace.
    #[display("unexpected character {character:?} in board text")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The text does not describe exactly 81 cells.
    #[display("board text describes {count} cells, expected 81")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

/// A 9x9 Sudoku board of cell values.
///
/// Cells are addressed by `(x, y)` coordinates, each in the range 0-8, and
/// hold values in the range 0-9 where [`NO_VALUE`] (0) means empty. Access
/// through [`value`](Self::value) and [`set_value`](Self::set_value) is
/// checked; bulk access through [`grid`](Self::grid) and
/// [`set_grid`](Self::set_grid) is not.
///
/// The board enforces per-cell range only. Whether the stored values form a
/// legal Sudoku position (no duplicate digit in any row, column, or 3x3 box)
/// is the responsibility of the code placing them.
///
/// # Examples
///
/// ```
/// use quadrille_core::Board;
///
/// let mut board = Board::new();
/// board.set_value(0, 8, 7)?;
///
/// assert_eq!(board.value(0, 8)?, 7);
/// assert_eq!(board.value(0, 0)?, 0);
///
/// board.reset();
/// assert_eq!(board, Board::new());
/// # Ok::<(), quadrille_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Creates a board with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: [[NO_VALUE; 9]; 9],
        }
    }

    /// Sets every cell back to the empty state.
    pub fn reset(&mut self) {
        self.grid = [[NO_VALUE; 9]; 9];
    }

    /// Returns the value of the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCoordinate`] if `x` or `y` is outside the
    /// range 0-8.
    pub fn value(&self, x: u8, y: u8) -> Result<u8, BoardError> {
        check_coordinate(x, y)?;
        Ok(self.grid[usize::from(y)][usize::from(x)])
    }

    /// Stores a value in the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCoordinate`] if `x` or `y` is outside the
    /// range 0-8, or [`BoardError::InvalidValue`] if `value` is outside the
    /// range 0-9.
    pub fn set_value(&mut self, x: u8, y: u8, value: u8) -> Result<(), BoardError> {
        check_coordinate(x, y)?;
        if value > 9 {
            return Err(BoardError::InvalidValue { value });
        }
        self.grid[usize::from(y)][usize::from(x)] = value;
        Ok(())
    }

    /// Returns the full value grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replaces the full value grid, discarding the previous one.
    ///
    /// The grid is taken as-is; like the rest of the board, no global Sudoku
    /// legality check is applied.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Returns the number of non-empty cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadrille_core::Board;
    ///
    /// let mut board = Board::new();
    /// assert_eq!(board.clue_count(), 0);
    ///
    /// board.set_value(3, 3, 9)?;
    /// assert_eq!(board.clue_count(), 1);
    /// # Ok::<(), quadrille_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&value| value != NO_VALUE)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        Self { grid }
    }
}

impl fmt::Display for Board {
    /// Formats the board as nine text rows, three cells to a group, with `_`
    /// for empty cells:
    ///
    /// ```text
    /// 53_ _7_ ___
    /// 6__ 195 ___
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.grid.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, &value) in row.iter().enumerate() {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                if value == NO_VALUE {
                    write!(f, "_")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from text.
    ///
    /// Digits 1-9 are filled cells; `.`, `_`, or `0` are empty cells.
    /// Whitespace is ignored, so the output of [`fmt::Display`] round-trips
    /// and grids can be laid out freely in test sources.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::new();
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let value = match character {
                '.' | '_' | '0' => NO_VALUE,
                '1'..='9' => character as u8 - b'0',
                _ => return Err(ParseBoardError::UnexpectedCharacter { character }),
            };
            if count >= 81 {
                // Count the excess so the error reports the real total.
                count += 1;
                continue;
            }
            board.grid[count / 9][count % 9] = value;
            count += 1;
        }
        if count != 81 {
            return Err(ParseBoardError::WrongCellCount { count });
        }
        Ok(board)
    }
}

fn check_coordinate(x: u8, y: u8) -> Result<(), BoardError> {
    if x > 8 || y > 8 {
        return Err(BoardError::InvalidCoordinate { x, y });
    }
    Ok(())
}
