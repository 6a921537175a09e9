//! Errors used throughout the move-generation core.
//!
//! This module defines the canonical error type returned by board storage,
//! coordinate arithmetic, and the notation utilities. The enum `ChessErrors`
//! is used as the single error type across the crate to simplify propagation
//! and matching. Each variant carries contextual information where
//! appropriate to aid diagnostics.
//!
//! Move generation itself never fails for valid inputs: an in-bounds empty
//! square is `Ok(None)` from a lookup, not an error. The out-of-bounds
//! variants represent caller bugs and are propagated immediately rather than
//! being clamped or silently absorbed.

use crate::board_location::BoardLocation;

/// Unified error type for the move-generation core.
///
/// Each variant corresponds to a specific, identifiable failure mode that can
/// occur while querying board storage, stepping coordinates, or parsing
/// algebraic square names. Variants include contextual payloads where useful
/// (for example `BoardLocation` or the offending character) so that callers
/// can log or display precise diagnostics.
#[derive(Debug)]
pub enum ChessErrors {
    /// A queried location lies outside the board.
    ///
    /// Payload: the offending location. This is a programmer/caller error,
    /// not a runtime condition to recover from.
    OutOfBounds(BoardLocation),

    /// Attempted to step from `BoardLocation` by the delta `(d_file,d_rank)`
    /// which would land off the board.
    ///
    /// Payload: (origin_location, d_file, d_rank). Generators consume this
    /// internally to end a ray or discard a candidate square.
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// Attempted to place a piece onto a square that already holds one.
    ///
    /// Payload: the occupied location.
    BoardLocationOccupied(BoardLocation),

    /// A single character used during algebraic parsing was invalid.
    ///
    /// Payload: the offending character (for example a file outside 'a'..'h'
    /// or a rank outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// An algebraic string (multi-character) failed to parse.
    ///
    /// Payload: the original string that could not be interpreted as a
    /// square name.
    InvalidAlgebraicString(String),
}
