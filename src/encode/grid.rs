use log::debug;

use crate::collections::square::Coord;
use crate::collections::Square;
use crate::csp::{Csp, Value, VarId, Variable};
use crate::error::EncodeError;

/// Allocates one variable per cell with domain `1..=size`
///
/// Variable names are derived from coordinates and are unique and
/// stable for the lifetime of the model; they exist for diagnostics
/// only, nothing reads them back.
pub(crate) fn build_grid(csp: &mut Csp, size: usize) -> Result<Square<VarId>, EncodeError> {
    if size < 1 {
        return Err(EncodeError::InvalidGridSize(size));
    }
    let mut grid = Square::with_width_and_value(size, 0);
    for row in 0..size {
        for col in 0..size {
            let variable = Variable::new(format!("V{}_{}", row, col), 1..=size as Value);
            grid[Coord::new(row, col)] = csp.add_variable(variable);
        }
    }
    debug!("built {0}x{0} grid of variables", size);
    Ok(grid)
}

#[cfg(test)]
mod test {
    use super::build_grid;
    use crate::csp::Csp;
    use crate::error::EncodeError;

    #[test]
    fn one_variable_per_cell() {
        let mut csp = Csp::new("test");
        let grid = build_grid(&mut csp, 3).unwrap();
        assert_eq!(9, csp.variables().len());
        assert_eq!(3, grid.width());
    }

    #[test]
    fn domains_run_from_one_to_size() {
        let mut csp = Csp::new("test");
        build_grid(&mut csp, 4).unwrap();
        for variable in csp.variables() {
            assert_eq!(vec![1, 2, 3, 4], variable.domain());
        }
    }

    #[test]
    fn names_are_unique() {
        let mut csp = Csp::new("test");
        build_grid(&mut csp, 3).unwrap();
        let mut names: Vec<_> = csp.variables().iter().map(|v| v.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(9, names.len());
    }

    #[test]
    fn zero_size_is_invalid() {
        let mut csp = Csp::new("test");
        assert_eq!(
            Err(EncodeError::InvalidGridSize(0)),
            build_grid(&mut csp, 0).map(|_| ())
        );
    }
}
