//! Board snapshot storage.
//!
//! `PieceRegister` owns an 8x8 grid of optional piece records and answers the
//! occupancy queries move generation needs. It only stores and looks up;
//! applying moves is the concern of whatever rules layer sits above it, so
//! there is no removal or relocation here, only setup-time placement.

use crate::{
    board_location::{in_bounds, BoardLocation},
    chess_errors::ChessErrors,
    piece_class::PieceClass,
    piece_record::PieceRecord,
    piece_team::PieceTeam,
};

/// What a square holds, relative to the team asking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Occupancy {
    /// No piece on the square.
    Empty,
    /// A piece of the asking team.
    Friendly,
    /// A piece of the opposing team.
    Enemy,
}

/// An 8x8 grid of optional piece records, indexed `[file][rank]`.
///
/// The register is the sole owner of every piece value it stores; lookups
/// hand out copies, never references into the grid. At most one piece per
/// square holds by construction.
#[derive(Clone, Debug)]
pub struct PieceRegister {
    squares: [[Option<PieceRecord>; 8]; 8],
}

impl PieceRegister {
    /// An empty board.
    pub fn new_empty() -> Self {
        PieceRegister {
            squares: [[None; 8]; 8],
        }
    }

    /// The conventional initial position: Light on ranks 0 and 1, Dark on
    /// ranks 6 and 7.
    pub fn new_standard_opening() -> Self {
        let back_rank: [PieceClass; 8] = [
            PieceClass::Rook,
            PieceClass::Knight,
            PieceClass::Bishop,
            PieceClass::Queen,
            PieceClass::King,
            PieceClass::Bishop,
            PieceClass::Knight,
            PieceClass::Rook,
        ];

        let mut register = PieceRegister::new_empty();
        for (file, class) in back_rank.iter().enumerate() {
            register.squares[file][0] = Some(PieceRecord {
                class: *class,
                team: PieceTeam::Light,
            });
            register.squares[file][1] = Some(PieceRecord {
                class: PieceClass::Pawn,
                team: PieceTeam::Light,
            });
            register.squares[file][6] = Some(PieceRecord {
                class: PieceClass::Pawn,
                team: PieceTeam::Dark,
            });
            register.squares[file][7] = Some(PieceRecord {
                class: *class,
                team: PieceTeam::Dark,
            });
        }
        register
    }

    /// Look up the piece at `x`, if any.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(piece))` - a copy of the occupant.
    /// * `Ok(None)` - the square is empty.
    /// * `Err(ChessErrors::OutOfBounds)` - `x` is not a board square.
    pub fn view_piece_at_location(
        &self,
        x: &BoardLocation,
    ) -> Result<Option<PieceRecord>, ChessErrors> {
        if !in_bounds(x) {
            return Err(ChessErrors::OutOfBounds(*x));
        }
        Ok(self.squares[x.0 as usize][x.1 as usize])
    }

    /// Classify the square at `x` as seen by `team`.
    pub fn occupancy_for_team(
        &self,
        x: &BoardLocation,
        team: PieceTeam,
    ) -> Result<Occupancy, ChessErrors> {
        let occupancy = match self.view_piece_at_location(x)? {
            None => Occupancy::Empty,
            Some(piece) if piece.team == team => Occupancy::Friendly,
            Some(_) => Occupancy::Enemy,
        };
        Ok(occupancy)
    }

    /// Place a piece during position setup.
    ///
    /// # Returns
    ///
    /// * `Err(ChessErrors::OutOfBounds)` - `location` is not a board square.
    /// * `Err(ChessErrors::BoardLocationOccupied)` - the square already holds
    ///   a piece.
    pub fn add_piece_record(
        &mut self,
        piece: PieceRecord,
        location: BoardLocation,
    ) -> Result<(), ChessErrors> {
        if self.view_piece_at_location(&location)?.is_some() {
            return Err(ChessErrors::BoardLocationOccupied(location));
        }
        self.squares[location.0 as usize][location.1 as usize] = Some(piece);
        Ok(())
    }

    /// Iterate every occupied square in file-major order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (BoardLocation, PieceRecord)> + '_ {
        (0..8i8).flat_map(move |file| {
            (0..8i8).filter_map(move |rank| {
                self.squares[file as usize][rank as usize].map(|piece| ((file, rank), piece))
            })
        })
    }
}
