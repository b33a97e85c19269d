use std::fmt::{self, Display};

use log::trace;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::core::definitions::ParsePlacementError;
use crate::core::utils::{Square, BOARD_LEN};

/** Back rank order, from file a to file h */
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(PartialEq, Eq, Hash, Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a pawn advance. White starts at the bottom (row 7) and
    /// walks toward row 0.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which a pawn of this color gets promoted.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_LEN - 1,
        }
    }

    fn back_row(self) -> u8 {
        match self {
            Color::White => BOARD_LEN - 1,
            Color::Black => 0,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Uppercase FEN letter.
    pub fn symbol(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<PieceKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.symbol() == symbol.to_ascii_uppercase())
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        })
    }
}

/** A piece standing on the board.
 * `has_moved` only matters for pawns, it gates the double push. */
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    pub fn moved(self) -> Piece {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Piece> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        PieceKind::from_symbol(symbol).map(|kind| Piece::new(kind, color))
    }
}

/** 8x8 grid indexed by `Square`. Pure container: no legality checks here. */
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde_as(as = "[_; 64]")]
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Empty board.
    pub fn new() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Parses the piece placement field of a FEN string, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`. The first rank listed
    /// is row 0. Every piece starts with `has_moved == false`.
    pub fn from_placement(placement: &str) -> Result<Board, ParsePlacementError> {
        let ranks: Vec<_> = placement.trim().split('/').collect();
        if ranks.len() != BOARD_LEN as usize {
            return Err(ParsePlacementError::RankCount(ranks.len()));
        }
        let mut board = Board::new();
        for (row, rank) in ranks.into_iter().enumerate() {
            let mut col = 0u8;
            for symbol in rank.chars() {
                if let Some(skip) = symbol.to_digit(10).filter(|n| (1..=8).contains(n)) {
                    col = col
                        .checked_add(skip as u8)
                        .filter(|col| *col <= BOARD_LEN)
                        .ok_or(ParsePlacementError::RankLength(row as u8))?;
                    continue;
                }
                let piece =
                    Piece::from_symbol(symbol).ok_or(ParsePlacementError::Symbol(symbol))?;
                let square = Square::from_coords(row as u8, col)
                    .ok_or(ParsePlacementError::RankLength(row as u8))?;
                board.place(square, piece);
                col += 1;
            }
            if col != BOARD_LEN {
                return Err(ParsePlacementError::RankLength(row as u8));
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_placement`].
    pub fn placement(&self) -> String {
        let mut result = String::with_capacity(72);
        for row in 0..BOARD_LEN {
            if row > 0 {
                result.push('/');
            }
            let mut empty = 0;
            for col in 0..BOARD_LEN {
                match Square::from_coords(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            result.push_str(&empty.to_string());
                            empty = 0;
                        }
                        result.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                result.push_str(&empty.to_string());
            }
        }
        result
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    /// Puts `piece` on `square`, dropping whatever stood there.
    pub fn place(&mut self, square: Square, piece: Piece) {
        trace!("Placing {:?} on {square}", piece);
        self.cells[square.index()] = Some(piece);
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let removed = self.cells[square.index()].take();
        if let Some(piece) = &removed {
            trace!("Removing {:?} from {square}", piece);
        }
        removed
    }

    /** Relocate the piece on `source` to `destination`.
     * Returns the previous occupant of `destination`. */
    pub fn move_internal(&mut self, source: Square, destination: Square) -> Option<Piece> {
        let piece = self.cells[source.index()].take();
        assert!(piece.is_some(), "Trying to move from an empty square {source}!");
        trace!("Moving {:?} {source} -> {destination}", piece);
        std::mem::replace(&mut self.cells[destination.index()], piece)
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }
}

impl Default for Board {
    /// Standard initial placement.
    fn default() -> Self {
        let mut board = Board::new();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                let col = col as u8;
                if let Some(square) = Square::from_coords(color.back_row(), col) {
                    board.place(square, Piece::new(kind, color));
                }
                if let Some(square) = Square::from_coords(color.home_row(), col) {
                    board.place(square, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        board
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_LEN {
            write!(f, "{} ", BOARD_LEN - row)?;
            for col in 0..BOARD_LEN {
                let symbol = Square::from_coords(row, col)
                    .and_then(|square| self.piece_at(square))
                    .map(|piece| piece.symbol())
                    .unwrap_or('.');
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
