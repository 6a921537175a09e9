use crate::board_location::{move_board_location, BoardLocation};
use crate::piece_register::{Occupancy, PieceRegister};
use crate::piece_team::PieceTeam;

/// King offsets: one step in each of the eight directions.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate every square a king of `team` standing on `from` can reach.
///
/// Each of the eight offsets is evaluated independently exactly once: the
/// candidate is emitted when it is on the board and empty or enemy-occupied.
/// Whether stepping there would walk into check is a legality-layer concern.
pub fn generate_king_moves(
    register: &PieceRegister,
    from: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    let mut result = Vec::new();

    for (d_file, d_rank) in KING_OFFSETS {
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

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;
    use crate::piece_register::PieceRegister;
    use crate::piece_team::PieceTeam;

    #[test]
    fn king_in_the_open_center_reaches_all_eight_neighbors() {
        let register = PieceRegister::new_empty();
        let reached = generate_king_moves(&register, &(3, 3), PieceTeam::Light);
        assert_eq!(
            reached,
            vec![
                (2, 2),
                (2, 3),
                (2, 4),
                (3, 2),
                (3, 4),
                (4, 2),
                (4, 3),
                (4, 4),
            ]
        );
    }

    #[test]
    fn king_in_the_corner_reaches_exactly_three_squares() {
        let register = PieceRegister::new_empty();
        let reached = generate_king_moves(&register, &(0, 0), PieceTeam::Dark);
        assert_eq!(reached, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn friendly_neighbors_are_excluded_and_enemy_neighbors_are_captures() {
        let mut register = PieceRegister::new_empty();
        register
            .add_piece_record(
                PieceRecord {
                    class: PieceClass::Pawn,
                    team: PieceTeam::Light,
                },
                (3, 4),
            )
            .expect("d5 is empty on a fresh board");
        register
            .add_piece_record(
                PieceRecord {
                    class: PieceClass::Rook,
                    team: PieceTeam::Dark,
                },
                (4, 4),
            )
            .expect("e5 is empty on a fresh board");

        let reached = generate_king_moves(&register, &(3, 3), PieceTeam::Light);
        assert!(!reached.contains(&(3, 4)));
        assert!(reached.contains(&(4, 4)));
        assert_eq!(reached.len(), 7);
    }
}
