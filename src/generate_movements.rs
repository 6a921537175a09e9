//! Movement dispatch for the six piece archetypes.
//!
//! One closed match on `PieceClass` routes a generation query to the
//! archetype's algorithm. There is no per-class polymorphism beyond this
//! match, and no piece object carries behavior; the generators are free
//! functions over `(register, from, team)`.

use crate::board_location::{in_bounds, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;

/// Generate every square `piece` standing on `from` can pseudo-legally reach.
///
/// A destination is pseudo-legal when it is geometrically valid for the
/// piece's class and does not hold a friendly piece; whether moving there
/// would leave the mover's own king in check is for a legality layer to
/// decide from this output.
///
/// The register is trusted to actually hold `piece` at `from`; that is the
/// caller's contract and is not re-verified here. An out-of-bounds `from` is
/// a caller bug and is rejected immediately rather than clamped.
///
/// # Arguments
///
/// * `register` - The board snapshot to generate against.
/// * `from` - The square the piece stands on.
/// * `piece` - The piece identity (class and team).
///
/// # Returns
///
/// * `Ok(destinations)` - deterministic, duplicate-free, in the archetype's
///   table order.
/// * `Err(ChessErrors::OutOfBounds)` - `from` is not a board square.
pub fn generate_movements(
    register: &PieceRegister,
    from: &BoardLocation,
    piece: &PieceRecord,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    if !in_bounds(from) {
        return Err(ChessErrors::OutOfBounds(*from));
    }

    let destinations = match piece.class {
        PieceClass::Pawn => generate_pawn_moves(register, from, piece.team),
        PieceClass::Knight => generate_knight_moves(register, from, piece.team),
        PieceClass::Bishop => generate_bishop_moves(register, from, piece.team),
        PieceClass::Rook => generate_rook_moves(register, from, piece.team),
        PieceClass::Queen => generate_queen_moves(register, from, piece.team),
        PieceClass::King => generate_king_moves(register, from, piece.team),
    };

    Ok(destinations)
}

/// Generate movements for every piece of `team` on the board.
///
/// Returns `(origin, destinations)` pairs in the register's file-major
/// iteration order; origins whose pieces have no destinations are included
/// with an empty list.
pub fn generate_movements_for_team(
    register: &PieceRegister,
    team: PieceTeam,
) -> Result<Vec<(BoardLocation, Vec<BoardLocation>)>, ChessErrors> {
    let mut result = Vec::new();
    for (location, piece) in register.iter_occupied() {
        if piece.team == team {
            let destinations = generate_movements(register, &location, &piece)?;
            result.push((location, destinations));
        }
    }
    Ok(result)
}
