//! Symmetric clue carving.

use quadrille_core::{Board, Grid, NO_VALUE, Position};
use quadrille_solver::{BacktrackSolver, CandidateOrder, SolutionSet};
use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;
use tinyvec::ArrayVec;

use crate::{
    BoardSeed,
    symmetry::{self, Orbit},
};

/// A generated puzzle together with its solution and the seed that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The puzzle board: the carved clue pattern with a unique solution.
    pub problem: Board,
    /// The fully solved board the clues were carved from.
    pub solution: Board,
    /// The seed that reproduces this board exactly.
    pub seed: BoardSeed,
}

/// Generates Sudoku puzzles with unique solutions and point-symmetric clue
/// patterns.
///
/// Generation starts from a random fully-solved grid and removes clues in
/// three passes, re-verifying after every removal that exactly one solution
/// remains:
///
/// 1. **Quad pass** — whole symmetry groups, in random order.
/// 2. **Pair pass** — each surviving 4-cell group split into its two
///    diagonal pairs, tried independently.
/// 3. **Single pass** — only in strict-minimal mode: every remaining clue
///    individually, which may break the symmetry of the pattern.
///
/// Without strict-minimal mode the clue pattern stays fully point-symmetric;
/// with it, no remaining clue can be removed without creating a second
/// solution.
///
/// # Examples
///
/// ```
/// use quadrille_generator::{BoardGenerator, BoardSeed};
///
/// let generator = BoardGenerator::new();
/// let seed: BoardSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
///
/// let first = generator.generate_with_seed(true, seed);
/// let second = generator.generate_with_seed(true, seed);
/// assert_eq!(first, second);
/// # Ok::<(), quadrille_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardGenerator {
    solver: BacktrackSolver,
}

impl BoardGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            solver: BacktrackSolver::new(),
        }
    }

    /// Generates a board from a fresh entropy seed.
    ///
    /// With `strict_minimal` set, clue removal continues past the symmetric
    /// passes until no single clue can be removed; otherwise the clue
    /// pattern keeps its 180-degree point symmetry.
    #[must_use]
    pub fn generate(&self, strict_minimal: bool) -> GeneratedBoard {
        self.generate_with_seed(strict_minimal, BoardSeed::from_entropy())
    }

    /// Generates the board determined by `seed`.
    ///
    /// The same seed and `strict_minimal` flag always reproduce the same
    /// problem and solution.
    #[must_use]
    pub fn generate_with_seed(&self, strict_minimal: bool, seed: BoardSeed) -> GeneratedBoard {
        let mut rng = seed.rng();
        let solution = self.full_solution(&mut rng);
        let mut grid = solution;
        self.carve(&mut grid, strict_minimal, &mut rng);

        let problem = Board::from(grid);
        log::debug!("generated a {}-clue board from seed {seed}", problem.clue_count());
        GeneratedBoard {
            problem,
            solution: Board::from(solution),
            seed,
        }
    }

    /// Generates a puzzle board, discarding solution and seed.
    ///
    /// This is the plain-`Board` form of [`generate`](Self::generate) for
    /// callers that only present the puzzle.
    #[must_use]
    pub fn generate_board(&self, strict_minimal: bool) -> Board {
        self.generate(strict_minimal).problem
    }

    /// Solves the empty grid in shuffled candidate order, yielding a
    /// uniformly scrambled complete solution.
    fn full_solution(&self, rng: &mut Pcg64) -> Grid {
        let mut solutions = SolutionSet::new(1);
        let empty = [[NO_VALUE; 9]; 9];
        let count = self
            .solver
            .solve(&empty, &mut solutions, CandidateOrder::Shuffled(rng));
        // An empty grid is always solvable; a miss here is a solver defect.
        debug_assert_eq!(count, 1);
        *solutions.first().expect("empty grid must have a solution")
    }

    fn carve(&self, grid: &mut Grid, strict_minimal: bool, rng: &mut Pcg64) {
        let mut solutions = SolutionSet::new(2);
        let mut orbits = symmetry::quadrant_orbits();
        orbits.shuffle(rng);

        let survivors = self.carve_orbits(grid, &mut solutions, orbits);
        let leftovers = self.carve_pairs(grid, &mut solutions, &survivors);
        if strict_minimal {
            self.carve_singles(grid, &mut solutions, &leftovers);
        }
    }

    /// Quad pass: removes each whole symmetry group whose clearing keeps the
    /// solution unique. Returns the groups that could not be removed.
    fn carve_orbits(
        &self,
        grid: &mut Grid,
        solutions: &mut SolutionSet,
        orbits: Vec<Orbit>,
    ) -> Vec<Orbit> {
        let total = orbits.len();
        let mut kept = Vec::new();
        for orbit in orbits {
            if !self.try_remove(grid, solutions, &orbit[..]) {
                kept.push(orbit);
            }
        }
        log::debug!("quad pass: removed {} of {total} groups", total - kept.len());
        kept
    }

    /// Pair pass: splits each surviving 4-cell group into its two diagonal
    /// pairs and tries each independently. Groups of one or two cells are
    /// already atomic and carry through untouched. Returns every cell still
    /// holding a clue afterwards.
    fn carve_pairs(
        &self,
        grid: &mut Grid,
        solutions: &mut SolutionSet,
        orbits: &[Orbit],
    ) -> Vec<Position> {
        let mut kept = Vec::new();
        for orbit in orbits {
            match &orbit[..] {
                &[a, b, c, d] => {
                    for pair in [[a, b], [c, d]] {
                        if !self.try_remove(grid, solutions, &pair) {
                            kept.extend(pair);
                        }
                    }
                }
                cells => kept.extend_from_slice(cells),
            }
        }
        log::debug!("pair pass: {} clues carried to the single pass", kept.len());
        kept
    }

    /// Single pass: tries every remaining clue individually, trading the
    /// symmetry of the pattern for strict minimality.
    fn carve_singles(&self, grid: &mut Grid, solutions: &mut SolutionSet, cells: &[Position]) {
        let mut removed = 0;
        for &pos in cells {
            if self.try_remove(grid, solutions, &[pos]) {
                removed += 1;
            }
        }
        log::debug!("single pass: removed {removed} of {} clues", cells.len());
    }

    /// Clears `cells` and keeps the clearing iff the puzzle still has
    /// exactly one solution; otherwise restores the previous values.
    ///
    /// A count of 0 or 2 both mean the removal is unsafe — 2 because a
    /// second solution appeared, 0 only if the input was already broken,
    /// which removal alone cannot cause.
    fn try_remove(
        &self,
        grid: &mut Grid,
        solutions: &mut SolutionSet,
        cells: &[Position],
    ) -> bool {
        let mut saved: ArrayVec<[u8; 4]> = ArrayVec::new();
        for &pos in cells {
            let (x, y) = (usize::from(pos.x()), usize::from(pos.y()));
            saved.push(grid[y][x]);
            grid[y][x] = NO_VALUE;
        }

        if self
            .solver
            .solve(grid, solutions, CandidateOrder::Sequential)
            == 1
        {
            return true;
        }

        for (&pos, &value) in cells.iter().zip(saved.iter()) {
            grid[usize::from(pos.y())][usize::from(pos.x())] = value;
        }
        false
    }
}
