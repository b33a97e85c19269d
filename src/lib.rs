//! Move legality for a two-player chess board: per-piece movement rules,
//! turn alternation, captures and pawn promotion. Rendering and input
//! capture belong to the UI layer driving [`Game`] or [`attempt_move`].

pub mod core;

// module re-exports
pub use crate::core::definitions::{Cell, Figure, MoveOutcome, MoveRequest};
pub use crate::core::engine::{Board, Color, Piece, PieceKind};
pub use crate::core::game::{attempt_move, legal_destinations, Game};
pub use crate::core::turn::TurnState;
pub use crate::core::utils::Square;
