use log::{debug, trace};

use crate::core::definitions::{Cell, Figure, MoveOutcome, MoveRequest};
use crate::core::engine::{Board, Color, PieceKind};
use crate::core::promotion::{self, needs_promotion};
use crate::core::rules;
use crate::core::turn::TurnState;
use crate::core::utils::{Square, BOARD_LEN};

/** Validate `request` and, if it passes, apply it to a copy of `board`.
 * Rejections hand back the board and turn untouched. A promotion without
 * a pre-supplied choice becomes a queen. */
pub fn attempt_move(
    board: &Board,
    turn: TurnState,
    request: &MoveRequest,
) -> (MoveOutcome, Board, TurnState) {
    if let Err(outcome) = validate(board, turn, request) {
        return (outcome, board.clone(), turn);
    }
    let mut board = board.clone();
    let outcome = apply(&mut board, request);
    (outcome, board, turn.advance())
}

/// Every square the piece on `source` could be moved to right now.
pub fn legal_destinations(board: &Board, turn: TurnState, source: Square) -> Vec<Square> {
    match board.piece_at(source) {
        Some(piece) if turn.is_movers_turn(piece.color) => Square::all()
            .filter(|destination| {
                rules::is_legal(board, &MoveRequest::new(piece, source, *destination))
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn validate(board: &Board, turn: TurnState, request: &MoveRequest) -> Result<(), MoveOutcome> {
    let on_board = board.piece_at(request.source);
    assert!(
        on_board.is_some_and(|piece| piece.kind == request.piece.kind
            && piece.color == request.piece.color),
        "That's a bug! Request for {:?} doesn't match {:?} on {}",
        request.piece,
        on_board,
        request.source
    );
    if !turn.is_movers_turn(request.piece.color) {
        debug!(
            "Rejected {} -> {}: {} to move",
            request.source, request.destination, turn.active_color
        );
        return Err(MoveOutcome::RejectedWrongTurn);
    }
    rules::check(board, request).map_err(|violation| {
        debug!(
            "Rejected {} -> {}: {violation:?}",
            request.source, request.destination
        );
        MoveOutcome::from(violation)
    })
}

/** Execute ***valid*** move. */
fn apply(board: &mut Board, request: &MoveRequest) -> MoveOutcome {
    let MoveRequest {
        piece,
        source,
        destination,
        promotion: choice,
    } = *request;
    let captured = board.remove(destination).map(|target| {
        assert!(
            target.color != piece.color,
            "That's a bug! Piece captured teammate!"
        );
        target.kind
    });
    board.move_internal(source, destination);
    if piece.kind == PieceKind::Pawn {
        board.place(destination, piece.moved());
    }
    let promoted = needs_promotion(&piece, destination.row())
        .then(|| promotion::promote(board, destination, choice));
    debug!(
        "{} {} {source} -> {destination} (captured: {captured:?}, promoted: {promoted:?})",
        piece.color, piece.kind
    );
    MoveOutcome::Applied { captured, promoted }
}

/** Game session owned by the UI layer.
 * The UI only reads the board between moves, every mutation goes through
 * [`Game::submit`] or [`Game::resolve_promotion`]. */
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    turn: TurnState,
    pending: Option<MoveRequest>,
}

impl Game {
    pub fn new() -> Game {
        Game::default()
    }

    pub fn with_board(board: Board, player: Color) -> Game {
        Game {
            board,
            turn: TurnState::new(player),
            pending: None,
        }
    }

    /// Drops the current session and sets up the initial position.
    pub fn reset(&mut self) {
        debug!("Starting a new game");
        *self = Game::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn active_color(&self) -> Color {
        self.turn.active_color
    }

    /// Square of the pawn waiting for its promotion choice.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending.map(|request| request.destination)
    }

    pub fn request(&self, source: Square, destination: Square) -> Option<MoveRequest> {
        MoveRequest::from_board(&self.board, source, destination)
    }

    /** Phase one of a move. A legal promotion without a choice is parked
     * and reported as `PromotionPending`; nothing changes until
     * [`Game::resolve_promotion`]. A new request drops a parked one. */
    pub fn submit(&mut self, request: MoveRequest) -> MoveOutcome {
        if let Some(parked) = self.pending.take() {
            debug!("Dropping pending promotion on {}", parked.destination);
        }
        if request.promotion.is_none() && needs_promotion(&request.piece, request.destination.row())
        {
            if let Err(outcome) = validate(&self.board, self.turn, &request) {
                return outcome;
            }
            trace!("Waiting for promotion choice on {}", request.destination);
            self.pending = Some(request);
            return MoveOutcome::PromotionPending {
                square: request.destination,
            };
        }
        self.commit(&request)
    }

    /// Phase two: applies the parked move with the given choice.
    pub fn resolve_promotion(&mut self, choice: Option<PieceKind>) -> Option<MoveOutcome> {
        let request = self.pending.take()?;
        Some(self.commit(&request.with_promotion(promotion::resolve(choice))))
    }

    pub fn legal_destinations(&self, source: Square) -> Vec<Square> {
        if self.pending.is_some() {
            return Vec::new();
        }
        legal_destinations(&self.board, self.turn, source)
    }

    pub fn cell(&self, square: Square) -> Cell {
        match self.board.piece_at(square) {
            Some(piece) => Cell::Figure(Figure {
                kind: piece.kind,
                color: piece.color,
                can_move: !self.legal_destinations(square).is_empty(),
            }),
            None => Cell::Empty,
        }
    }

    /// Rows top to bottom, row 0 holding Black's back rank at the start.
    pub fn ui_board(&self) -> Vec<Vec<Cell>> {
        (0..BOARD_LEN)
            .map(|row| {
                (0..BOARD_LEN)
                    .filter_map(|col| Square::from_coords(row, col))
                    .map(|square| self.cell(square))
                    .collect()
            })
            .collect()
    }

    fn commit(&mut self, request: &MoveRequest) -> MoveOutcome {
        let (outcome, board, turn) = attempt_move(&self.board, self.turn, request);
        self.board = board;
        self.turn = turn;
        outcome
    }
}
