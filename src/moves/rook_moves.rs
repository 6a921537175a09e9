use crate::board_location::BoardLocation;
use crate::moves::sliding_moves::generate_sliding_moves;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;

/// Rook directions: north, south, east, west.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Generate every square a rook of `team` standing on `from` can reach.
pub fn generate_rook_moves(
    register: &PieceRegister,
    from: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    generate_sliding_moves(register, from, team, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;
    use crate::piece_register::PieceRegister;
    use crate::piece_team::PieceTeam;

    #[test]
    fn rook_on_an_empty_board_corner_reaches_fourteen_squares() {
        let register = PieceRegister::new_empty();
        let reached = generate_rook_moves(&register, &(0, 0), PieceTeam::Light);
        assert_eq!(reached.len(), 14);
        assert_eq!(
            reached,
            vec![
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (0, 5),
                (0, 6),
                (0, 7),
                (1, 0),
                (2, 0),
                (3, 0),
                (4, 0),
                (5, 0),
                (6, 0),
                (7, 0),
            ]
        );
    }

    #[test]
    fn friendly_blocker_stops_short_and_enemy_blocker_is_the_last_square() {
        let mut register = PieceRegister::new_empty();
        register
            .add_piece_record(
                PieceRecord {
                    class: PieceClass::Bishop,
                    team: PieceTeam::Light,
                },
                (3, 5),
            )
            .expect("d6 is empty on a fresh board");
        register
            .add_piece_record(
                PieceRecord {
                    class: PieceClass::Knight,
                    team: PieceTeam::Dark,
                },
                (5, 3),
            )
            .expect("f4 is empty on a fresh board");

        let reached = generate_rook_moves(&register, &(3, 3), PieceTeam::Light);

        // North: only d5, two short of the friendly bishop on d6.
        assert!(reached.contains(&(3, 4)));
        assert!(!reached.contains(&(3, 5)));
        assert!(!reached.contains(&(3, 6)));

        // East: e4 then the capture on f4, nothing beyond it.
        assert!(reached.contains(&(4, 3)));
        assert!(reached.contains(&(5, 3)));
        assert!(!reached.contains(&(6, 3)));
        assert!(!reached.contains(&(7, 3)));

        // South and west stay open all the way.
        assert!(reached.contains(&(3, 0)));
        assert!(reached.contains(&(0, 3)));
        assert_eq!(reached.len(), 1 + 3 + 2 + 3);
    }

    #[test]
    fn rook_never_reaches_a_friendly_square() {
        let register = PieceRegister::new_standard_opening();
        // a1 rook is boxed in by the a2 pawn and b1 knight.
        let reached = generate_rook_moves(&register, &(0, 0), PieceTeam::Light);
        assert!(reached.is_empty());
    }
}
