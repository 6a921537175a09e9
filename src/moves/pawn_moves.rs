//! Pawn move generation.
//!
//! Pawns are the one archetype whose advance and capture squares differ.
//! Orientation convention: Light advances toward increasing rank from
//! starting rank 1, Dark toward decreasing rank from starting rank 6.
//! En-passant and promotion need move-history and rank context this
//! generator does not have; the rules layer layers them on top of this
//! output.

use crate::board_location::{move_board_location, BoardLocation};
use crate::piece_register::{Occupancy, PieceRegister};
use crate::piece_team::PieceTeam;

/// Returns the forward rank direction for the given team.
/// Light moves up (+1), Dark moves down (-1).
#[inline]
pub const fn forward_rank_step(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::Dark => -1,
        PieceTeam::Light => 1,
    }
}

/// The rank a team's pawns start on, where the double advance is available.
#[inline]
pub const fn pawn_starting_rank(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::Dark => 6,
        PieceTeam::Light => 1,
    }
}

/// Generate every square a pawn of `team` standing on `from` can reach.
///
/// Emission order: single advance, double advance, then the file-minus and
/// file-plus captures.
pub fn generate_pawn_moves(
    register: &PieceRegister,
    from: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    let step = forward_rank_step(team);
    let mut result = Vec::new();

    // Advances cannot capture: the square ahead must be empty, and the double
    // advance additionally needs the starting rank and an empty destination.
    if let Ok(ahead) = move_board_location(from, 0, step) {
        if matches!(
            register.occupancy_for_team(&ahead, team),
            Ok(Occupancy::Empty)
        ) {
            result.push(ahead);

            if from.1 == pawn_starting_rank(team) {
                if let Ok(two_ahead) = move_board_location(from, 0, 2 * step) {
                    if matches!(
                        register.occupancy_for_team(&two_ahead, team),
                        Ok(Occupancy::Empty)
                    ) {
                        result.push(two_ahead);
                    }
                }
            }
        }
    }

    // Captures go only to the forward diagonals, and only onto enemies; an
    // empty diagonal is not a destination.
    for d_file in [-1, 1] {
        if let Ok(diagonal) = move_board_location(from, d_file, step) {
            if matches!(
                register.occupancy_for_team(&diagonal, team),
                Ok(Occupancy::Enemy)
            ) {
                result.push(diagonal);
            }
        }
    }

    result
}
