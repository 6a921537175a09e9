use crate::board_location::BoardLocation;
use crate::moves::sliding_moves::generate_sliding_moves;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;

/// Bishop directions: northeast, northwest, southeast, southwest.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Generate every square a bishop of `team` standing on `from` can reach.
pub fn generate_bishop_moves(
    register: &PieceRegister,
    from: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    generate_sliding_moves(register, from, team, &BISHOP_DIRECTIONS)
}
