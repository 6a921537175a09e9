use crate::{piece_class::PieceClass, piece_team::PieceTeam};

/// Represents a chess piece with its class and team.
/// Used to store information about a piece on the board.
///
/// A record carries no location: the square a piece stands on is supplied at
/// generation time, so the same record value is reusable across squares and
/// across concurrent queries against one board snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    /// The class (type) of the piece (e.g., pawn, knight).
    pub class: PieceClass,
    /// Piece team
    pub team: PieceTeam,
}
