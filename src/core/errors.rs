//! Error types for the few fallible operations in the crate.
//!
//! Move generation itself never fails: it is a total function over well-formed
//! positions. What can fail is converting raw indices into squares, stepping a
//! square off the board, and the offline magic-number search.

// Add this attribute to enforce documentation on all public items
#![deny(missing_docs)]

use thiserror::Error;

use super::Square;
use crate::board::movegen::Slider;

/******************************************\
|==========================================|
|               Square Errors              |
|==========================================|
\******************************************/

/// Errors converting a raw index into a [`Square`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareError {
    /// The index is not in `0..64`.
    #[error("square index {0} is out of range (0-63)")]
    OutOfRange(u8),
}

/// Errors stepping a square along a [`Direction`](crate::core::Direction).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareAddError {
    /// The step left the board, either past a rank edge or by wrapping a file edge.
    #[error("square operation resulted in an out-of-bounds position")]
    OutOfBounds,
}

/******************************************\
|==========================================|
|           Magic Search Errors            |
|==========================================|
\******************************************/

/// Errors raised by the offline magic-number search.
///
/// There is no runtime fallback for a missing magic, so callers of the search
/// treat any of these as fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicSearchError {
    /// No collision-free multiplier was found within the attempt budget.
    #[error("no {slider:?} magic found for {square} after {attempts} attempts")]
    Exhausted {
        /// Slider the search was running for.
        slider: Slider,
        /// Square the search was running for.
        square: Square,
        /// Number of candidates tried.
        attempts: u64,
    },

    /// A multiplier was accepted by the search but then failed independent verification.
    #[error("{slider:?} magic {magic:#X} for {square} maps two occupancies to different attacks")]
    Collision {
        /// Slider the multiplier was found for.
        slider: Slider,
        /// Square the multiplier was found for.
        square: Square,
        /// The rejected multiplier.
        magic: u64,
    },
}
