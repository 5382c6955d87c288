use itertools::{iproduct, Itertools};
use log::debug;

use crate::collections::square::Vector;
use crate::collections::Square;
use crate::csp::{Constraint, Csp, Value, VarId};

/// The shape of the row and column uniqueness constraints
///
/// Both strategies admit exactly the same full-grid assignments; they
/// differ in constraint arity and satisfying-set size, which gives them
/// different propagation strength in a solver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UniquenessStrategy {
    /// One binary not-equal constraint per pair of cells in a row or column
    BinaryNotEqual,
    /// One constraint per row or column, holding every permutation of `1..=N`
    AllDifferent,
}

/// Emits uniqueness constraints for every row and column of the grid
pub(crate) fn add_uniqueness_constraints(
    csp: &mut Csp,
    grid: &Square<VarId>,
    strategy: UniquenessStrategy,
) {
    let width = grid.width();
    let vectors = (0..width)
        .map(Vector::row)
        .chain((0..width).map(Vector::col));
    for vector in vectors {
        let cells: Vec<VarId> = vector.coords(width).map(|coord| grid[coord]).collect();
        match strategy {
            UniquenessStrategy::BinaryNotEqual => binary_not_equal(csp, vector, &cells, width),
            UniquenessStrategy::AllDifferent => all_different(csp, vector, &cells, width),
        }
    }
    debug!(
        "added {:?} uniqueness constraints for {} vectors",
        strategy,
        2 * width
    );
}

fn binary_not_equal(csp: &mut Csp, vector: Vector, cells: &[VarId], width: usize) {
    for (j, k) in (0..cells.len()).tuple_combinations::<(_, _)>() {
        let mut constraint = Constraint::new(
            format!("{}-ne({},{})", vector, j, k),
            vec![cells[j], cells[k]],
        );
        constraint.add_satisfying_tuples(
            iproduct!(1..=width as Value, 1..=width as Value)
                .filter(|(x, y)| x != y)
                .map(|(x, y)| vec![x, y]),
        );
        csp.add_constraint(constraint);
    }
}

fn all_different(csp: &mut Csp, vector: Vector, cells: &[VarId], width: usize) {
    let mut constraint = Constraint::new(format!("{}-alldiff", vector), cells.to_vec());
    constraint.add_satisfying_tuples((1..=width as Value).permutations(width));
    csp.add_constraint(constraint);
}
