use crate::board_location::BoardLocation;
use crate::moves::sliding_moves::generate_sliding_moves;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;

/// Queen directions: the rook orthogonals followed by the bishop diagonals.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Generate every square a queen of `team` standing on `from` can reach.
pub fn generate_queen_moves(
    register: &PieceRegister,
    from: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    generate_sliding_moves(register, from, team, &QUEEN_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::moves::bishop_moves::generate_bishop_moves;
    use crate::moves::rook_moves::generate_rook_moves;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;
    use crate::piece_register::PieceRegister;
    use crate::piece_team::PieceTeam;

    #[test]
    fn queen_on_an_empty_board_corner_reaches_twenty_one_squares() {
        let register = PieceRegister::new_empty();
        let reached = generate_queen_moves(&register, &(0, 0), PieceTeam::Light);
        // 14 rook-style, plus the 7 squares of the one open diagonal.
        assert_eq!(reached.len(), 21);
        assert!(reached.contains(&(0, 7)));
        assert!(reached.contains(&(7, 0)));
        assert!(reached.contains(&(7, 7)));
    }

    #[test]
    fn queen_moves_are_the_union_of_rook_and_bishop_moves() {
        let mut register = PieceRegister::new_empty();
        register
            .add_piece_record(
                PieceRecord {
                    class: PieceClass::Pawn,
                    team: PieceTeam::Dark,
                },
                (3, 5),
            )
            .expect("d6 is empty on a fresh board");
        register
            .add_piece_record(
                PieceRecord {
                    class: PieceClass::Pawn,
                    team: PieceTeam::Light,
                },
                (5, 5),
            )
            .expect("f6 is empty on a fresh board");

        let from = (3, 3);
        let mut queen = generate_queen_moves(&register, &from, PieceTeam::Light);
        let mut union = generate_rook_moves(&register, &from, PieceTeam::Light);
        union.extend(generate_bishop_moves(&register, &from, PieceTeam::Light));

        queen.sort();
        union.sort();
        assert_eq!(queen, union);
    }
}
