#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::Result;
use itertools::Itertools;
use log::debug;

use funpuzz::csp::{Constraint, Csp};
use funpuzz::puzzle::{CageSpec, Operator, PuzzleSpec};
use funpuzz::{caged_model, grid_model};

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let (csp, grid) = if options.demo() {
        let puzzle = demo_puzzle();
        print_puzzle(&puzzle);
        caged_model(&puzzle)?
    } else {
        grid_model(options.size(), options.strategy())?
    };
    println!(
        "{}: {1}x{1} grid, {2} variables, {3} constraints, {4} satisfying tuples",
        csp.name(),
        grid.width(),
        csp.variables().len(),
        csp.constraints().len(),
        csp.constraints()
            .iter()
            .map(Constraint::tuple_count)
            .sum::<usize>(),
    );
    print_breakdown(&csp);
    Ok(())
}

/// A 3x3 puzzle with the unique solution
/// `1 2 3 / 2 3 1 / 3 1 2`
fn demo_puzzle() -> PuzzleSpec {
    PuzzleSpec::with_cages(
        3,
        vec![
            CageSpec::new(vec![11], 1, 0),
            CageSpec::new(vec![12, 13], 6, 3),
            CageSpec::new(vec![21, 22], 5, 0),
            CageSpec::new(vec![23, 33], 1, 1),
            CageSpec::new(vec![31, 32], 3, 3),
        ],
    )
}

fn print_puzzle(puzzle: &PuzzleSpec) {
    println!(
        "{0}x{0} grid, {1} cages:",
        puzzle.size(),
        puzzle.cages().len()
    );
    for cage in puzzle.cages() {
        let symbol = Operator::from_code(cage.operation()).map_or('?', Operator::symbol);
        println!(
            "  {:<8} {}{}",
            cage.cells().iter().join(" "),
            cage.target(),
            symbol
        );
    }
}

fn print_breakdown(csp: &Csp) {
    let breakdown = csp
        .constraints()
        .iter()
        .map(|constraint| format!("{} ({} tuples)", constraint.name(), constraint.tuple_count()))
        .join("\n  ");
    debug!("constraints:\n  {}", breakdown);
}
