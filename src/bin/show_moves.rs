//! Destination viewer for the standard opening position.
//!
//! Prints the board with every square the selected piece can pseudo-legally
//! reach marked, plus the destinations in algebraic notation.
//!
//! Usage:
//! `cargo run --bin show_moves -- b1`

use quince_chess::chess_errors::ChessErrors;
use quince_chess::generate_movements::generate_movements;
use quince_chess::piece_register::PieceRegister;
use quince_chess::utils::algebraic::{algebraic_to_location, location_to_algebraic};
use quince_chess::utils::render_register::render_with_destinations;

fn main() -> Result<(), ChessErrors> {
    let square = match std::env::args().nth(1) {
        Some(square) => square,
        None => {
            println!("usage: show_moves <square>   (for example: show_moves b1)");
            return Ok(());
        }
    };

    let register = PieceRegister::new_standard_opening();
    let from = algebraic_to_location(&square)?;

    match register.view_piece_at_location(&from)? {
        Some(piece) => {
            let destinations = generate_movements(&register, &from, &piece)?;
            println!("{}", render_with_destinations(&register, &destinations));

            let mut names = Vec::new();
            for destination in &destinations {
                names.push(location_to_algebraic(destination)?);
            }
            println!(
                "{:?} {:?} on {}: {} destinations: {}",
                piece.team,
                piece.class,
                square,
                destinations.len(),
                names.join(" ")
            );
        }
        None => println!("no piece on {square}"),
    }

    Ok(())
}
