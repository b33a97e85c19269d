use log::debug;

use crate::core::engine::{Board, Piece, PieceKind};
use crate::core::utils::Square;

/// Kinds a pawn may turn into.
pub const CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Pawn landing on the far row of its color.
pub fn needs_promotion(piece: &Piece, destination_row: u8) -> bool {
    piece.kind == PieceKind::Pawn && destination_row == piece.color.promotion_row()
}

/** Maps the player's choice to the promoted kind.
 * Anything outside of `CHOICES`, or no choice at all, becomes a queen. */
pub fn resolve(choice: Option<PieceKind>) -> PieceKind {
    choice
        .filter(|kind| CHOICES.contains(kind))
        .unwrap_or(PieceKind::Queen)
}

/// Reads a typed answer such as `knight` or `N`.
pub fn parse_choice(input: &str) -> Option<PieceKind> {
    match input.trim().to_lowercase().as_str() {
        "queen" | "q" => Some(PieceKind::Queen),
        "rook" | "r" => Some(PieceKind::Rook),
        "bishop" | "b" => Some(PieceKind::Bishop),
        "knight" | "n" => Some(PieceKind::Knight),
        _ => None,
    }
}

/** Replaces the pawn on `square` with the resolved kind, same color.
 * Returns the kind actually placed. */
pub fn promote(board: &mut Board, square: Square, choice: Option<PieceKind>) -> PieceKind {
    let pawn = board.remove(square);
    assert!(
        pawn.is_some_and(|piece| piece.kind == PieceKind::Pawn),
        "Trying to promote non-pawn piece on {square}!"
    );
    let kind = resolve(choice);
    if let Some(pawn) = pawn {
        debug!("{} pawn on {square} promoted to {kind}", pawn.color);
        board.place(square, Piece::new(kind, pawn.color).moved());
    }
    kind
}
