use thiserror::Error;

/// An error raised while encoding a puzzle into a CSP model.
///
/// Malformed input is detected eagerly at model-build time; nothing at
/// this layer is transient or retried. A cage that no value tuple can
/// satisfy is not an error (see [`crate::encode::caged_model`]).
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum EncodeError {
    /// The requested grid size cannot hold any cells.
    #[error("invalid grid size {0}")]
    InvalidGridSize(usize),

    /// A cage cell address does not resolve to a cell of the grid.
    #[error("cell address {address} is outside the {width}x{width} grid")]
    CellOutOfRange { address: u32, width: usize },

    /// Two-digit cell addresses cannot reach rows or columns past 9.
    #[error("grid size {0} is too big for two-digit cell addresses")]
    GridTooLarge(usize),

    /// A cage carries an operation code outside the input format.
    #[error("unknown cage operation code {0}")]
    UnknownOperation(i32),
}
