//! Puzzle generation for the Quadrille Sudoku engine.
//!
//! A [`BoardGenerator`] drives the backtracking solver twice over: once to
//! produce a random fully-solved grid, then repeatedly to verify that each
//! clue removal leaves the puzzle with exactly one solution. Clues are
//! removed in symmetry groups — the orbits of top-left-quadrant cells under
//! 180-degree point symmetry — so the resulting clue pattern is visually
//! balanced; a strict-minimal mode keeps removing individual clues past the
//! point where symmetry can be preserved.
//!
//! Every run is driven by a [`BoardSeed`], so puzzles are reproducible:
//! the same seed always yields the same problem and solution.
//!
//! # Examples
//!
//! ```
//! use quadrille_generator::BoardGenerator;
//! use quadrille_solver::{BacktrackSolver, CandidateOrder, SolutionSet};
//!
//! let generator = BoardGenerator::new();
//! let board = generator.generate(false);
//!
//! // The generated puzzle always has exactly one solution.
//! let solver = BacktrackSolver::new();
//! let mut solutions = SolutionSet::new(2);
//! let count = solver.solve(board.problem.grid(), &mut solutions, CandidateOrder::Sequential);
//! assert_eq!(count, 1);
//! assert_eq!(solutions.first(), Some(board.solution.grid()));
//! ```

pub use self::{
    generator::{BoardGenerator, GeneratedBoard},
    seed::{BoardSeed, ParseSeedError},
};

mod generator;
mod seed;
mod symmetry;
