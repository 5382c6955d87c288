//! FunPuzz puzzle descriptions
//!
//! The types here mirror the input format produced by the external
//! puzzle parser: a grid size followed by cage descriptors whose cells
//! are two-digit addresses and whose operation is a raw wire code.
//! Reading puzzle text or files is out of scope for this crate.

pub use self::operator::Operator;

mod operator;

use crate::collections::square::Coord;
use crate::csp::Value;
use crate::error::EncodeError;

/// The widest grid reachable by two-digit cell addresses
pub const MAX_ADDRESSABLE_WIDTH: usize = 9;

/// A FunPuzz puzzle: a grid size and its cage descriptors
#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleSpec {
    size: usize,
    cages: Vec<CageSpec>,
}

impl PuzzleSpec {
    /// Creates a puzzle of the given size with no cages
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cages: Vec::new(),
        }
    }

    /// Creates a puzzle with the given cages
    pub fn with_cages(size: usize, cages: Vec<CageSpec>) -> Self {
        Self { size, cages }
    }

    pub fn add_cage(&mut self, cage: CageSpec) {
        self.cages.push(cage);
    }

    /// The width (and height) of the puzzle grid
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cages(&self) -> &[CageSpec] {
        &self.cages
    }
}

/// A cage descriptor: cell addresses, a target, and an operation code
///
/// The operation is kept as the raw code from the input format; it is
/// decoded, and rejected, when the cage constraint is generated.
#[derive(Clone, Debug, PartialEq)]
pub struct CageSpec {
    cells: Vec<u32>,
    target: Value,
    operation: i32,
}

impl CageSpec {
    pub fn new(cells: impl Into<Vec<u32>>, target: Value, operation: i32) -> Self {
        Self {
            cells: cells.into(),
            target,
            operation,
        }
    }

    /// The two-digit addresses of the cells in the cage
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// The number the cage's cell values must produce
    pub fn target(&self) -> Value {
        self.target
    }

    /// The operation wire code
    pub fn operation(&self) -> i32 {
        self.operation
    }
}

/// A cell address in the two-digit input format
///
/// The tens digit is the 1-indexed row and the units digit is the
/// 1-indexed column, which caps addressable grids at
/// [`MAX_ADDRESSABLE_WIDTH`] in either dimension. The cap is inherited
/// from the input format, not a limit of the encoder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellAddress(u32);

impl CellAddress {
    pub fn new(address: u32) -> Self {
        Self(address)
    }

    /// Resolves the address to 0-indexed grid coordinates
    pub fn coord(self, width: usize) -> Result<Coord, EncodeError> {
        let out_of_range = || EncodeError::CellOutOfRange {
            address: self.0,
            width,
        };
        let row = (self.0 / 10) as usize;
        let col = (self.0 % 10) as usize;
        let row = row.checked_sub(1).ok_or_else(out_of_range)?;
        let col = col.checked_sub(1).ok_or_else(out_of_range)?;
        if row >= width || col >= width {
            return Err(out_of_range());
        }
        Ok(Coord::new(row, col))
    }
}
