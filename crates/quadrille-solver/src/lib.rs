//! Bounded backtracking search for the Quadrille Sudoku engine.
//!
//! The solver performs a depth-first search over the cells of a grid in
//! row-major order, pruning candidates with per-row, per-column, and per-box
//! digit masks. Search is bounded by the capacity of a [`SolutionSet`]: a
//! capacity of 1 finds one solution, a capacity of 2 turns "does this puzzle
//! have a unique solution?" into a cheap two-solution search, and larger
//! capacities enumerate up to that many solutions.
//!
//! Candidate digits are tried in sequential order by default; passing a
//! [`CandidateOrder::Shuffled`] random source makes repeated full-board
//! solves produce different valid grids, which is how the generator obtains
//! its starting solutions.
//!
//! # Examples
//!
//! ```
//! use quadrille_solver::{BacktrackSolver, CandidateOrder, SolutionSet};
//!
//! let solver = BacktrackSolver::new();
//! let mut solutions = SolutionSet::new(1);
//!
//! let empty = [[0; 9]; 9];
//! let count = solver.solve(&empty, &mut solutions, CandidateOrder::Sequential);
//!
//! assert_eq!(count, 1);
//! assert!(solutions.first().is_some());
//! ```

pub use self::{
    backtrack::{BacktrackSolver, CandidateOrder},
    solution_set::SolutionSet,
};

mod backtrack;
mod solution_set;
