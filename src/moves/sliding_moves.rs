//! Shared ray walk for sliding pieces.
//!
//! Rooks, bishops, and queens differ only in which direction vectors they
//! walk; the walk itself is identical and lives here once. Along a single
//! direction the walk emits empty squares until it hits something: an enemy
//! square is emitted as a capture and ends the ray, a friendly square or the
//! board edge ends the ray without emitting.

use crate::board_location::{move_board_location, BoardLocation};
use crate::piece_register::{Occupancy, PieceRegister};
use crate::piece_team::PieceTeam;

/// Walk each `(d_file, d_rank)` direction from `from`, collecting every
/// square a sliding piece of `team` can reach.
///
/// Emission order follows the table order, nearest square first within each
/// direction. Along any single direction at most one emitted square is a
/// capture, and it is always the last one.
pub fn generate_sliding_moves(
    register: &PieceRegister,
    from: &BoardLocation,
    team: PieceTeam,
    directions: &[(i8, i8)],
) -> Vec<BoardLocation> {
    let mut result = Vec::new();

    for (d_file, d_rank) in directions {
        let mut cursor = *from;
        while let Ok(next) = move_board_location(&cursor, *d_file, *d_rank) {
            match register.occupancy_for_team(&next, team) {
                Ok(Occupancy::Empty) => {
                    result.push(next);
                    cursor = next;
                }
                Ok(Occupancy::Enemy) => {
                    // A capture; cannot slide past the captured piece.
                    result.push(next);
                    break;
                }
                // A friendly piece blocks the ray. The error arm cannot
                // occur for a square move_board_location accepted.
                _ => break,
            }
        }
    }

    result
}
