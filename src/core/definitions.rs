use std::error::Error;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::core::engine::{Board, Color, Piece, PieceKind};
use crate::core::utils::Square;

/** One attempted drag-and-drop: who moves, from where, to where.
 * `promotion` optionally pre-supplies the piece a pawn turns into. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub piece: Piece,
    pub source: Square,
    pub destination: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    pub fn new(piece: Piece, source: Square, destination: Square) -> MoveRequest {
        MoveRequest {
            piece,
            source,
            destination,
            promotion: None,
        }
    }

    /// Request for whatever stands on `source`, `None` for an empty square.
    pub fn from_board(board: &Board, source: Square, destination: Square) -> Option<MoveRequest> {
        board
            .piece_at(source)
            .map(|piece| MoveRequest::new(piece, source, destination))
    }

    pub fn with_promotion(self, kind: PieceKind) -> MoveRequest {
        MoveRequest {
            promotion: Some(kind),
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /** Move is on the board, turn passed to the opponent */
    Applied {
        captured: Option<PieceKind>,
        promoted: Option<PieceKind>,
    },
    /** Legal pawn move onto the last row, waiting for the promotion choice */
    PromotionPending { square: Square },
    RejectedWrongTurn,
    RejectedIllegalGeometry,
    RejectedBlockedPath,
    RejectedFriendlyCapture,
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            Self::RejectedWrongTurn
                | Self::RejectedIllegalGeometry
                | Self::RejectedBlockedPath
                | Self::RejectedFriendlyCapture
        )
    }

    /// Info line for the player.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Applied { .. } => "",
            Self::PromotionPending { .. } => "Promote pawn to (queen/rook/bishop/knight)",
            Self::RejectedWrongTurn => "It's not your turn!",
            Self::RejectedIllegalGeometry => "You cannot go here",
            Self::RejectedBlockedPath => "You cannot go here, the path is blocked",
            Self::RejectedFriendlyCapture => "You cannot capture your own piece",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub kind: PieceKind,
    pub color: Color,
    pub can_move: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Figure(Figure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    OutOfRange(u8),
    BadName(String),
}

impl Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(index) => write!(f, "square index {index} is outside 0..63"),
            Self::BadName(name) => write!(f, "`{name}` is not a square name"),
        }
    }
}

impl Error for ParseSquareError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePlacementError {
    RankCount(usize),
    RankLength(u8),
    Symbol(char),
}

impl Display for ParsePlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RankCount(count) => write!(f, "expected 8 ranks, found {count}"),
            Self::RankLength(row) => write!(f, "row {row} doesn't hold exactly 8 squares"),
            Self::Symbol(symbol) => write!(f, "unknown piece symbol `{symbol}`"),
        }
    }
}

impl Error for ParsePlacementError {}
