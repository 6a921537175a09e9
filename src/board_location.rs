use crate::chess_errors::ChessErrors;

pub type BoardLocation = (i8, i8);

/// Returns true when both the file and rank of `x` lie on the board.
#[inline]
pub fn in_bounds(x: &BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// Moves a board location by a specified file and rank offset.
///
/// This is the one place bounds are enforced; move generators step through
/// it rather than re-checking ranges themselves.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_file` - The file offset.
/// * `d_rank` - The rank offset.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - Returns the new board location if
///   within bounds, otherwise returns an error carrying the attempted step.
pub fn move_board_location(
    x: &BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_file, x.1 + d_rank);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessErrors::TriedToMoveOutOfBounds((*x, d_file, d_rank)))
    } else {
        Ok(y)
    }
}
