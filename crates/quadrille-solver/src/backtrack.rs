//! Mask-pruned depth-first backtracking search.

use std::fmt;

use quadrille_core::{DigitSet, Grid, NO_VALUE};
use rand::{rand_core::RngCore, seq::SliceRandom as _};

use crate::SolutionSet;

/// The order in which candidate digits are tried at each empty cell.
///
/// Sequential order makes a solve deterministic and repeatable; shuffled
/// order makes repeated full-board solves produce different valid grids.
/// The random source is injected so that callers (and tests) control
/// reproducibility.
pub enum CandidateOrder<'a> {
    /// Try digits 1 through 9 in increasing order.
    Sequential,
    /// Try digits in a fresh uniformly shuffled order at every cell.
    Shuffled(&'a mut dyn RngCore),
}

impl fmt::Debug for CandidateOrder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("Sequential"),
            Self::Shuffled(_) => f.write_str("Shuffled(..)"),
        }
    }
}

impl CandidateOrder<'_> {
    fn trial_digits(&mut self) -> [u8; 9] {
        let mut digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        if let Self::Shuffled(rng) = self {
            digits.shuffle(rng);
        }
        digits
    }
}

/// A backtracking Sudoku solver bounded by a [`SolutionSet`] capacity.
///
/// Each [`solve`](Self::solve) call builds its own search context (digit
/// masks and a scratch grid), so concurrent solves on separate containers
/// cannot interfere and the solver value itself is freely shareable.
///
/// # Examples
///
/// Checking uniqueness with a capacity-2 set:
///
/// ```
/// use quadrille_core::Board;
/// use quadrille_solver::{BacktrackSolver, CandidateOrder, SolutionSet};
///
/// let board: Board = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let solver = BacktrackSolver::new();
/// let mut solutions = SolutionSet::new(2);
/// let count = solver.solve(board.grid(), &mut solutions, CandidateOrder::Sequential);
///
/// assert_eq!(count, 1); // exactly one solution: the puzzle is proper
/// # Ok::<(), quadrille_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Searches `grid` for complete solutions, recording up to the
    /// container's capacity into `solutions`.
    ///
    /// The container's count is reset at the start of every call; its grid
    /// buffers are overwritten in place. The input grid is never mutated —
    /// preset cells are treated as fixed and solutions are written to the
    /// container only.
    ///
    /// Returns the number of solutions found, which is also available as
    /// `solutions.count()`:
    ///
    /// - `0` — the grid is unsolvable, or a preset digit is duplicated in
    ///   a row, column, or box (the only legality check performed here);
    /// - the container capacity — the search stopped early, so more
    ///   solutions may exist.
    ///
    /// # Panics
    ///
    /// Panics if `grid` contains a value greater than 9. Grids obtained
    /// from [`Board`](quadrille_core::Board) are range-checked at the
    /// boundary and cannot trigger this.
    pub fn solve(
        &self,
        grid: &Grid,
        solutions: &mut SolutionSet,
        mut order: CandidateOrder<'_>,
    ) -> usize {
        solutions.clear();
        match Search::seed(grid, solutions) {
            Some(mut search) => {
                search.descend(0, &mut order);
                search.solutions.count()
            }
            // A preset digit collides with its row, column, or box.
            None => 0,
        }
    }
}

/// Per-call search state: the scratch assignment plus one presence mask per
/// row, column, and box.
struct Search<'a> {
    work: Grid,
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    boxes: [DigitSet; 9],
    solutions: &'a mut SolutionSet,
}

impl<'a> Search<'a> {
    /// Folds every preset cell into its three masks. Returns `None` if two
    /// presets of the same digit share a row, column, or box.
    fn seed(grid: &Grid, solutions: &'a mut SolutionSet) -> Option<Self> {
        let mut search = Self {
            work: *grid,
            rows: [DigitSet::EMPTY; 9],
            cols: [DigitSet::EMPTY; 9],
            boxes: [DigitSet::EMPTY; 9],
            solutions,
        };
        for y in 0..9 {
            for x in 0..9 {
                let value = grid[y][x];
                if value == NO_VALUE {
                    continue;
                }
                let b = box_index(x, y);
                if search.rows[y].contains(value)
                    || search.cols[x].contains(value)
                    || search.boxes[b].contains(value)
                {
                    return None;
                }
                search.rows[y].insert(value);
                search.cols[x].insert(value);
                search.boxes[b].insert(value);
            }
        }
        Some(search)
    }

    /// Tries to complete the assignment from `cell` (0-80, row-major)
    /// onward, recording each completion until the container is full.
    fn descend(&mut self, cell: usize, order: &mut CandidateOrder<'_>) {
        if cell == 81 {
            self.solutions.record(&self.work);
            return;
        }
        let (y, x) = (cell / 9, cell % 9);
        if self.work[y][x] != NO_VALUE {
            // Preset cell: no choice point.
            self.descend(cell + 1, order);
            return;
        }
        let b = box_index(x, y);
        for digit in order.trial_digits() {
            if self.rows[y].contains(digit)
                || self.cols[x].contains(digit)
                || self.boxes[b].contains(digit)
            {
                continue;
            }
            self.rows[y].insert(digit);
            self.cols[x].insert(digit);
            self.boxes[b].insert(digit);
            self.work[y][x] = digit;

            self.descend(cell + 1, order);

            if self.solutions.is_full() {
                // Fast exit: propagate straight up without unwinding.
                return;
            }
            self.rows[y].remove(digit);
            self.cols[x].remove(digit);
            self.boxes[b].remove(digit);
        }
        self.work[y][x] = NO_VALUE;
    }
}

const fn box_index(x: usize, y: usize) -> usize {
    (y / 3) * 3 + x / 3
}

#[cfg(test)]
mod tests {
    use quadrille_core::Board;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    const EMPTY: Grid = [[NO_VALUE; 9]; 9];

    /// The proper puzzle used throughout: exactly one completion.
    fn proper_puzzle() -> Board {
        "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap()
    }

    /// Asserts that every row, column, and box of `grid` is a permutation
    /// of 1-9 and that `grid` extends the presets of `puzzle`.
    fn assert_valid_solution(grid: &Grid, puzzle: &Grid) {
        for i in 0..9 {
            let mut row = DigitSet::EMPTY;
            let mut col = DigitSet::EMPTY;
            let mut boxed = DigitSet::EMPTY;
            for j in 0..9 {
                row.insert(grid[i][j]);
                col.insert(grid[j][i]);
                boxed.insert(grid[(i / 3) * 3 + j / 3][(i % 3) * 3 + j % 3]);
            }
            assert_eq!(row, DigitSet::ALL, "row {i} is not a permutation of 1-9");
            assert_eq!(col, DigitSet::ALL, "column {i} is not a permutation of 1-9");
            assert_eq!(boxed, DigitSet::ALL, "box {i} is not a permutation of 1-9");
        }
        for y in 0..9 {
            for x in 0..9 {
                if puzzle[y][x] != NO_VALUE {
                    assert_eq!(grid[y][x], puzzle[y][x], "preset at ({x}, {y}) was changed");
                }
            }
        }
    }

    /// Finds four cells of a complete grid forming a value-swap rectangle:
    /// two rows and two columns whose crossings hold the same two digits
    /// diagonally, spanning at most two boxes. Blanking them yields a grid
    /// with exactly two completions.
    fn swap_rectangle(grid: &Grid) -> [(usize, usize); 4] {
        for r1 in 0..9 {
            for r2 in r1 + 1..9 {
                for c1 in 0..9 {
                    for c2 in c1 + 1..9 {
                        if grid[r1][c1] != grid[r2][c2] || grid[r1][c2] != grid[r2][c1] {
                            continue;
                        }
                        let same_band = r1 / 3 == r2 / 3;
                        let same_stack = c1 / 3 == c2 / 3;
                        // Spanning four distinct boxes would break them on swap.
                        if same_band || same_stack {
                            return [(r1, c1), (r1, c2), (r2, c1), (r2, c2)];
                        }
                    }
                }
            }
        }
        panic!("no swap rectangle in grid");
    }

    #[test]
    fn test_empty_grid_yields_a_valid_solution() {
        let solver = BacktrackSolver::new();
        let mut solutions = SolutionSet::new(1);

        let count = solver.solve(&EMPTY, &mut solutions, CandidateOrder::Sequential);

        assert_eq!(count, 1);
        assert_valid_solution(solutions.first().unwrap(), &EMPTY);
    }

    #[test]
    fn test_sequential_solve_is_deterministic() {
        let solver = BacktrackSolver::new();
        let mut first = SolutionSet::new(1);
        let mut second = SolutionSet::new(1);

        solver.solve(&EMPTY, &mut first, CandidateOrder::Sequential);
        solver.solve(&EMPTY, &mut second, CandidateOrder::Sequential);

        assert_eq!(first.first(), second.first());
    }

    #[test]
    fn test_proper_puzzle_has_exactly_one_solution() {
        let puzzle = proper_puzzle();
        let solver = BacktrackSolver::new();
        let mut solutions = SolutionSet::new(2);

        let count = solver.solve(puzzle.grid(), &mut solutions, CandidateOrder::Sequential);

        assert_eq!(count, 1);
        assert_valid_solution(solutions.first().unwrap(), puzzle.grid());
    }

    #[test]
    fn test_two_completion_grid_stops_at_capacity_two() {
        // Build a two-completion grid by blanking a swap rectangle out of a
        // complete solution.
        let solver = BacktrackSolver::new();
        let mut solutions = SolutionSet::new(1);
        solver.solve(&EMPTY, &mut solutions, CandidateOrder::Sequential);
        let mut grid = *solutions.first().unwrap();
        for (y, x) in swap_rectangle(&grid) {
            grid[y][x] = NO_VALUE;
        }

        let mut pair = SolutionSet::new(2);
        let count = solver.solve(&grid, &mut pair, CandidateOrder::Sequential);
        assert_eq!(count, 2);
        assert_ne!(pair.solutions()[0], pair.solutions()[1]);

        // With room to spare, the search proves there are exactly two.
        let mut spare = SolutionSet::new(3);
        let count = solver.solve(&grid, &mut spare, CandidateOrder::Sequential);
        assert_eq!(count, 2);
        for solution in spare.solutions() {
            assert_valid_solution(solution, &grid);
        }
    }

    #[test]
    fn test_capacity_bounds_enumeration() {
        let solver = BacktrackSolver::new();
        let mut solutions = SolutionSet::new(4);

        let count = solver.solve(&EMPTY, &mut solutions, CandidateOrder::Sequential);

        assert_eq!(count, 4);
        for solution in solutions.solutions() {
            assert_valid_solution(solution, &EMPTY);
        }
    }

    #[test]
    fn test_duplicate_preset_in_row_yields_zero() {
        let mut grid = EMPTY;
        grid[0][0] = 5;
        grid[0][8] = 5;

        let solver = BacktrackSolver::new();
        let mut solutions = SolutionSet::new(1);
        assert_eq!(solver.solve(&grid, &mut solutions, CandidateOrder::Sequential), 0);
        assert_eq!(solutions.count(), 0);
    }

    #[test]
    fn test_duplicate_preset_in_column_yields_zero() {
        let mut grid = EMPTY;
        grid[0][3] = 7;
        grid[8][3] = 7;

        let solver = BacktrackSolver::new();
        let mut solutions = SolutionSet::new(1);
        assert_eq!(solver.solve(&grid, &mut solutions, CandidateOrder::Sequential), 0);
    }

    #[test]
    fn test_duplicate_preset_in_box_yields_zero() {
        let mut grid = EMPTY;
        grid[0][0] = 3;
        grid[2][2] = 3;

        let solver = BacktrackSolver::new();
        let mut solutions = SolutionSet::new(1);
        assert_eq!(solver.solve(&grid, &mut solutions, CandidateOrder::Sequential), 0);
    }

    #[test]
    fn test_shuffled_solve_is_reproducible_per_seed() {
        let solver = BacktrackSolver::new();

        let mut rng = Pcg64::seed_from_u64(42);
        let mut first = SolutionSet::new(1);
        let count = solver.solve(&EMPTY, &mut first, CandidateOrder::Shuffled(&mut rng));
        assert_eq!(count, 1);
        assert_valid_solution(first.first().unwrap(), &EMPTY);

        let mut rng = Pcg64::seed_from_u64(42);
        let mut second = SolutionSet::new(1);
        solver.solve(&EMPTY, &mut second, CandidateOrder::Shuffled(&mut rng));

        assert_eq!(first.first(), second.first());
    }

    #[test]
    fn test_shuffled_solve_respects_presets() {
        let puzzle = proper_puzzle();
        let solver = BacktrackSolver::new();
        let mut rng = Pcg64::seed_from_u64(7);
        let mut solutions = SolutionSet::new(2);

        let count = solver.solve(
            puzzle.grid(),
            &mut solutions,
            CandidateOrder::Shuffled(&mut rng),
        );

        // Trial order cannot change what the unique solution is.
        assert_eq!(count, 1);
        assert_valid_solution(solutions.first().unwrap(), puzzle.grid());
    }

    #[test]
    fn test_container_reuse_resets_count() {
        let solver = BacktrackSolver::new();
        let mut solutions = SolutionSet::new(2);
        let puzzle = proper_puzzle();

        assert_eq!(
            solver.solve(puzzle.grid(), &mut solutions, CandidateOrder::Sequential),
            1
        );
        assert_eq!(
            solver.solve(&EMPTY, &mut solutions, CandidateOrder::Sequential),
            2
        );
        assert_eq!(
            solver.solve(puzzle.grid(), &mut solutions, CandidateOrder::Sequential),
            1
        );
        assert_eq!(solutions.count(), 1);
    }

    #[test]
    fn test_input_grid_is_not_mutated() {
        let puzzle = proper_puzzle();
        let before = *puzzle.grid();

        let solver = BacktrackSolver::new();
        let mut solutions = SolutionSet::new(1);
        solver.solve(puzzle.grid(), &mut solutions, CandidateOrder::Sequential);

        assert_eq!(puzzle.grid(), &before);
    }
}
