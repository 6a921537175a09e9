//! Random-position generator exercise.
//!
//! Scatters pieces over an empty board, picks one at random, and prints its
//! generated movements. Useful for eyeballing generator output on positions
//! no opening ever reaches.
//!
//! Usage:
//! `cargo run --bin random_exercise`

use quince_chess::chess_errors::ChessErrors;
use quince_chess::generate_movements::generate_movements;
use quince_chess::piece_class::ALL_PIECE_CLASSES;
use quince_chess::piece_record::PieceRecord;
use quince_chess::piece_register::PieceRegister;
use quince_chess::piece_team::PieceTeam;
use quince_chess::utils::algebraic::location_to_algebraic;
use quince_chess::utils::render_register::render_with_destinations;

use rand::seq::IteratorRandom;
use rand::RngExt;

const PIECES_TO_SCATTER: usize = 12;

fn main() -> Result<(), ChessErrors> {
    let mut rng = rand::rng();

    let mut register = PieceRegister::new_empty();
    let mut placed = 0;
    while placed < PIECES_TO_SCATTER {
        let location = (rng.random_range(0..8i8), rng.random_range(0..8i8));
        let piece = PieceRecord {
            class: ALL_PIECE_CLASSES[rng.random_range(0..ALL_PIECE_CLASSES.len())],
            team: if rng.random_range(0..2) == 0 {
                PieceTeam::Light
            } else {
                PieceTeam::Dark
            },
        };
        // Re-roll collisions until the board holds the full scatter.
        if register.add_piece_record(piece, location).is_ok() {
            placed += 1;
        }
    }

    if let Some((from, piece)) = register.iter_occupied().choose(&mut rng) {
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
            location_to_algebraic(&from)?,
            destinations.len(),
            names.join(" ")
        );
    }

    Ok(())
}
