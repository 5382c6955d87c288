//! The encoding layer: puzzle description in, CSP model out
//!
//! Three entry points mirror the three model shapes: a grid with
//! pairwise not-equal constraints, a grid with per-vector all-different
//! constraints, and the full caged model. Each returns the assembled
//! [`Csp`] together with the square of variable ids; once the external
//! solver finishes, the value assigned to `grid[Coord::new(r, c)]` is
//! the solved cell value.
//!
//! Construction is a one-shot, single-threaded build: no partial model
//! is ever handed out, and nothing here mutates a variable or a
//! constraint once it has been added to the CSP.

mod cage;
mod grid;
mod uniqueness;

pub use self::uniqueness::UniquenessStrategy;

use log::debug;

use crate::collections::Square;
use crate::csp::{Csp, VarId};
use crate::error::EncodeError;
use crate::puzzle::{PuzzleSpec, MAX_ADDRESSABLE_WIDTH};

/// Builds a grid-only model with the chosen uniqueness strategy
pub fn grid_model(
    size: usize,
    strategy: UniquenessStrategy,
) -> Result<(Csp, Square<VarId>), EncodeError> {
    let name = match strategy {
        UniquenessStrategy::BinaryNotEqual => "binary-ne-grid",
        UniquenessStrategy::AllDifferent => "nary-alldiff-grid",
    };
    assemble(name, size, strategy)
}

/// Encodes the grid with binary not-equal row and column constraints
pub fn binary_not_equal_model(puzzle: &PuzzleSpec) -> Result<(Csp, Square<VarId>), EncodeError> {
    grid_model(puzzle.size(), UniquenessStrategy::BinaryNotEqual)
}

/// Encodes the grid with n-ary all-different row and column constraints
pub fn all_different_model(puzzle: &PuzzleSpec) -> Result<(Csp, Square<VarId>), EncodeError> {
    grid_model(puzzle.size(), UniquenessStrategy::AllDifferent)
}

/// Encodes the grid and every cage of the puzzle
///
/// The grid uses the all-different strategy. Every cage descriptor
/// yields exactly one constraint or an error, never a silent drop. A
/// cage no value tuple can satisfy yields a constraint with an empty
/// satisfying set rather than an error, leaving unsatisfiability for
/// the solver to report.
pub fn caged_model(puzzle: &PuzzleSpec) -> Result<(Csp, Square<VarId>), EncodeError> {
    if puzzle.size() > MAX_ADDRESSABLE_WIDTH {
        return Err(EncodeError::GridTooLarge(puzzle.size()));
    }
    let (mut csp, grid) =
        assemble("caged-funpuzz", puzzle.size(), UniquenessStrategy::AllDifferent)?;
    for cage in puzzle.cages() {
        let constraint = cage::cage_constraint(&grid, cage, puzzle.size())?;
        csp.add_constraint(constraint);
    }
    debug!(
        "{}: {} variables, {} constraints",
        csp.name(),
        csp.variables().len(),
        csp.constraints().len()
    );
    Ok((csp, grid))
}

fn assemble(
    name: &str,
    size: usize,
    strategy: UniquenessStrategy,
) -> Result<(Csp, Square<VarId>), EncodeError> {
    let mut csp = Csp::new(name);
    let grid = grid::build_grid(&mut csp, size)?;
    uniqueness::add_uniqueness_constraints(&mut csp, &grid, strategy);
    Ok((csp, grid))
}
