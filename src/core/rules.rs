use log::trace;

use crate::core::definitions::{MoveOutcome, MoveRequest};
use crate::core::engine::{Board, Piece, PieceKind};
use crate::core::utils::{delta, is_clear, Square};

/// Why a move breaks the movement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    FriendlyCapture,
    IllegalGeometry,
    BlockedPath,
}

impl From<Violation> for MoveOutcome {
    fn from(value: Violation) -> Self {
        match value {
            Violation::FriendlyCapture => MoveOutcome::RejectedFriendlyCapture,
            Violation::IllegalGeometry => MoveOutcome::RejectedIllegalGeometry,
            Violation::BlockedPath => MoveOutcome::RejectedBlockedPath,
        }
    }
}

pub fn is_legal(board: &Board, request: &MoveRequest) -> bool {
    check(board, request).is_ok()
}

/** Checks movement rules of `request.piece` on `board`.
 * Turn order is not looked at, neither is the king's safety. */
pub fn check(board: &Board, request: &MoveRequest) -> Result<(), Violation> {
    let MoveRequest {
        piece,
        source,
        destination,
        ..
    } = *request;
    // the moved flag lives on the board, a request may carry a stale copy
    let piece = Piece {
        has_moved: board
            .piece_at(source)
            .map_or(piece.has_moved, |on_board| on_board.has_moved),
        ..piece
    };
    let target = board.piece_at(destination);
    let verdict = if target.is_some_and(|target| target.color == piece.color) {
        Err(Violation::FriendlyCapture)
    } else {
        let (row_delta, col_delta) = delta(source, destination);
        match piece.kind {
            PieceKind::Pawn => pawn(board, piece, source, target, row_delta, col_delta),
            PieceKind::Knight => {
                let shape = (row_delta.abs(), col_delta.abs());
                geometry(shape == (1, 2) || shape == (2, 1))
            }
            PieceKind::King => geometry(row_delta.abs().max(col_delta.abs()) == 1),
            PieceKind::Rook => slide(board, source, destination, straight(row_delta, col_delta)),
            PieceKind::Bishop => slide(board, source, destination, diagonal(row_delta, col_delta)),
            PieceKind::Queen => slide(
                board,
                source,
                destination,
                straight(row_delta, col_delta) || diagonal(row_delta, col_delta),
            ),
        }
    };
    trace!(
        "{} {} {source} -> {destination}: {verdict:?}",
        piece.color,
        piece.kind
    );
    verdict
}

#[inline]
fn geometry(fits: bool) -> Result<(), Violation> {
    if fits {
        Ok(())
    } else {
        Err(Violation::IllegalGeometry)
    }
}

#[inline]
fn straight(row_delta: i8, col_delta: i8) -> bool {
    (row_delta == 0) != (col_delta == 0)
}

#[inline]
fn diagonal(row_delta: i8, col_delta: i8) -> bool {
    row_delta != 0 && row_delta.abs() == col_delta.abs()
}

fn slide(board: &Board, source: Square, destination: Square, fits: bool) -> Result<(), Violation> {
    geometry(fits)?;
    if is_clear(board, source, destination) {
        Ok(())
    } else {
        Err(Violation::BlockedPath)
    }
}

/** Pawn moves: single push, double push while `has_moved` is unset,
 * diagonal capture. No en passant. */
fn pawn(
    board: &Board,
    pawn: Piece,
    source: Square,
    target: Option<Piece>,
    row_delta: i8,
    col_delta: i8,
) -> Result<(), Violation> {
    let direction = pawn.color.pawn_direction();
    let push = col_delta == 0 && target.is_none();
    if push && row_delta == direction {
        return Ok(());
    }
    if push && row_delta == 2 * direction && !pawn.has_moved {
        // keyed off the flag rather than the home row
        let in_front = source.offset(direction, 0);
        return geometry(in_front.is_some_and(|square| board.is_empty(square)));
    }
    let capture = target.is_some_and(|target| target.color != pawn.color);
    geometry(capture && col_delta.abs() == 1 && row_delta == direction)
}
