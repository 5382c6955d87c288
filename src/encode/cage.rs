use itertools::Itertools;
use log::debug;

use crate::collections::Square;
use crate::csp::{Constraint, Value, VarId};
use crate::error::EncodeError;
use crate::puzzle::{CageSpec, CellAddress, Operator};

/// Generates the extensional constraint for one cage
///
/// Candidate tuples are the full Cartesian product `(1..=size)^m` in
/// odometer order (rightmost position fastest), so the satisfying set
/// is enumerated in a reproducible order. The candidates do not
/// presuppose row or column uniqueness; a value may repeat across a
/// cage that spans multiple rows and columns. An empty satisfying set
/// means the cage is unsatisfiable and is returned as an ordinary
/// constraint, not an error.
pub(crate) fn cage_constraint(
    grid: &Square<VarId>,
    cage: &CageSpec,
    size: usize,
) -> Result<Constraint, EncodeError> {
    let operator = Operator::from_code(cage.operation())
        .ok_or_else(|| EncodeError::UnknownOperation(cage.operation()))?;
    let scope = cage
        .cells()
        .iter()
        .map(|&address| -> Result<VarId, EncodeError> {
            Ok(grid[CellAddress::new(address).coord(size)?])
        })
        .collect::<Result<Vec<_>, _>>()?;
    let name = format!("cage({})", cage.cells().iter().join(","));
    let mut constraint = Constraint::new(name, scope);
    constraint.add_satisfying_tuples(
        (0..cage.cells().len())
            .map(|_| 1..=size as Value)
            .multi_cartesian_product()
            .filter(|candidate| admits(operator, cage.target(), candidate)),
    );
    debug!(
        "{} [{}{}] admits {} tuples",
        constraint.name(),
        cage.target(),
        operator.symbol(),
        constraint.tuple_count()
    );
    Ok(constraint)
}

/// True if the tuple of values satisfies the cage operation
///
/// Subtract and Divide compute the maximum once over the whole tuple
/// and drop every position tied at that maximum, not just one
/// occurrence. A tuple whose values are all equal leaves `rest` empty,
/// so `(3,3)` satisfies a subtract cage with target 3 and `(2,2)` a
/// divide cage with target 2.
fn admits(operator: Operator, target: Value, values: &[Value]) -> bool {
    match operator {
        Operator::Add => values.iter().sum::<Value>() == target,
        Operator::Multiply => values.iter().product::<Value>() == target,
        Operator::Subtract => match values.iter().max() {
            Some(&mx) => {
                let rest = values.iter().filter(|&&v| v != mx).sum::<Value>();
                mx - rest == target
            }
            None => false,
        },
        Operator::Divide => match values.iter().max() {
            Some(&mx) => {
                let rest = values.iter().filter(|&&v| v != mx).product::<Value>();
                mx == target * rest
            }
            None => false,
        },
    }
}

#[cfg(test)]
mod test {
    use super::cage_constraint;
    use crate::collections::Square;
    use crate::csp::{Csp, Value, VarId};
    use crate::encode::grid::build_grid;
    use crate::error::EncodeError;
    use crate::puzzle::CageSpec;

    fn grid(size: usize) -> Square<VarId> {
        let mut csp = Csp::new("test");
        build_grid(&mut csp, size).unwrap()
    }

    fn tuples(cage: CageSpec, size: usize) -> Vec<Vec<Value>> {
        let constraint = cage_constraint(&grid(size), &cage, size).unwrap();
        constraint
            .satisfying_tuples()
            .map(<[Value]>::to_vec)
            .collect()
    }

    #[test]
    fn add_pair() {
        assert_eq!(
            vec![vec![1, 4], vec![2, 3], vec![3, 2], vec![4, 1]],
            tuples(CageSpec::new(vec![11, 12], 5, 0), 4)
        );
    }

    #[test]
    fn multiply_pair() {
        assert_eq!(
            vec![vec![2, 4], vec![4, 2]],
            tuples(CageSpec::new(vec![11, 12], 8, 3), 4)
        );
    }

    #[test]
    fn subtract_pair() {
        // (3,3) has an empty rest after dropping both maxima, so 3-0=3 holds
        assert_eq!(
            vec![
                vec![1, 4],
                vec![2, 5],
                vec![3, 3],
                vec![4, 1],
                vec![5, 2]
            ],
            tuples(CageSpec::new(vec![11, 12], 3, 1), 5)
        );
    }

    #[test]
    fn divide_pair() {
        assert_eq!(
            vec![
                vec![1, 2],
                vec![2, 1],
                vec![2, 2],
                vec![2, 4],
                vec![3, 6],
                vec![4, 2],
                vec![6, 3]
            ],
            tuples(CageSpec::new(vec![11, 12], 2, 2), 6)
        );
    }

    #[test]
    fn subtract_excludes_every_tied_maximum() {
        // (3,3,1) drops both 3s, leaving rest = [1]; a rule dropping a
        // single occurrence would compute 3 - (3 + 1) instead
        assert_eq!(
            vec![vec![1, 3, 3], vec![2, 2, 2], vec![3, 1, 3], vec![3, 3, 1]],
            tuples(CageSpec::new(vec![11, 12, 21], 2, 1), 3)
        );
    }

    #[test]
    fn single_cell_cage() {
        assert_eq!(
            vec![vec![2]],
            tuples(CageSpec::new(vec![22], 2, 0), 3)
        );
    }

    #[test]
    fn unsatisfiable_cage_has_no_tuples() {
        assert!(tuples(CageSpec::new(vec![11, 12], 100, 0), 4).is_empty());
    }

    #[test]
    fn unknown_operation() {
        let result = cage_constraint(&grid(3), &CageSpec::new(vec![11, 12], 3, 4), 3);
        assert!(matches!(result, Err(EncodeError::UnknownOperation(4))));
    }

    #[test]
    fn address_outside_grid() {
        let result = cage_constraint(&grid(3), &CageSpec::new(vec![11, 14], 3, 0), 3);
        assert!(matches!(
            result,
            Err(EncodeError::CellOutOfRange {
                address: 14,
                width: 3
            })
        ));
    }

    #[test]
    fn scope_follows_cage_cell_order() {
        let grid = grid(3);
        let constraint = cage_constraint(&grid, &CageSpec::new(vec![23, 11], 4, 0), 3).unwrap();
        assert_eq!(vec![5, 0], constraint.scope());
    }
}
