use crate::board_location::{move_board_location, BoardLocation};
use crate::piece_register::{Occupancy, PieceRegister};
use crate::piece_team::PieceTeam;

/// Knight offsets: the eight L-shaped jumps, enumerated clockwise.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Generate every square a knight of `team` standing on `from` can reach.
///
/// Knights jump: intervening pieces are irrelevant, only the landing square's
/// occupancy matters. Each offset is evaluated independently exactly once.
pub fn generate_knight_moves(
    register: &PieceRegister,
    from: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    let mut result = Vec::new();

    for (d_file, d_rank) in KNIGHT_OFFSETS {
        if let Ok(candidate) = move_board_location(from, d_file, d_rank) {
            if matches!(
                register.occupancy_for_team(&candidate, team),
                Ok(Occupancy::Empty | Occupancy::Enemy)
            ) {
                result.push(candidate);
            }
        }
    }

    result
}
