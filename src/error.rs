//! Errors raised by the game core.
//!
//! Both variants are contract violations: nothing in the core retries or
//! recovers from them.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two matrices whose inner dimensions disagree were multiplied.
    #[error("cannot multiply {lhs_rows} x {lhs_cols} matrix and {rhs_rows} x {rhs_cols} matrix")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// A capability was requested that no concrete implementation provides.
    #[error("{0} is not implemented")]
    UnimplementedCapability(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
