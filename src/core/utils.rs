use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::definitions::ParseSquareError;
use crate::core::engine::Board;

pub const BOARD_LEN: u8 = 8;

/** Board cell as `row * 8 + col`.
 * Row 0 is rank 8 (Black's back rank), col 0 is file a. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    pub fn new(index: u8) -> Option<Square> {
        (usize::from(index) < Self::COUNT).then_some(Square(index))
    }

    pub fn from_coords(row: u8, col: u8) -> Option<Square> {
        if row < BOARD_LEN && col < BOARD_LEN {
            Some(Square(compact_pos(row, col)))
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> u8 {
        unpack_pos(self.0).0
    }

    #[inline]
    pub fn col(self) -> u8 {
        unpack_pos(self.0).1
    }

    /// Square shifted by the given row/col steps, if it stays on the board.
    pub fn offset(self, row_step: i8, col_step: i8) -> Option<Square> {
        let row = self.row() as i8 + row_step;
        let col = self.col() as i8 + col_step;
        if (0..BOARD_LEN as i8).contains(&row) && (0..BOARD_LEN as i8).contains(&col) {
            Square::from_coords(row as u8, col as u8)
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = ParseSquareError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Square::new(value).ok_or(ParseSquareError::OutOfRange(value))
    }
}

impl From<Square> for u8 {
    fn from(value: Square) -> Self {
        value.0
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(pos_to_str(self.0))
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        POS_TO_STRING
            .iter()
            .position(|pos| *pos == name)
            .and_then(|index| Square::new(index as u8))
            .ok_or_else(|| ParseSquareError::BadName(s.to_owned()))
    }
}

/// Signed `(row, col)` displacement from `from` to `to`.
#[inline]
pub fn delta(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

#[derive(Debug)]
pub struct BetweenIterator {
    current: Option<Square>,
    target: Square,
    step: (i8, i8),
}

impl Iterator for BetweenIterator {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (row_step, col_step) = self.step;
        self.current = self
            .current
            .and_then(|square| square.offset(row_step, col_step))
            .filter(|square| *square != self.target);
        self.current
    }
}

/** Squares strictly between two aligned squares, walking from `from` to `to`. */
pub fn between(from: Square, to: Square) -> BetweenIterator {
    debug_assert!(
        is_in_straight_line(from, to) || is_in_diagonal_line(from, to),
        "Points can't form line to search between them!"
    );
    let (row_diff, col_diff) = delta(from, to);
    BetweenIterator {
        current: (from != to).then_some(from),
        target: to,
        step: (row_diff.signum(), col_diff.signum()),
    }
}

/** True when no piece stands strictly between `source` and `destination`.
 * The squares must share a row, a column or a diagonal. The destination
 * occupant is not looked at. */
pub fn is_clear(board: &Board, source: Square, destination: Square) -> bool {
    between(source, destination).all(|square| board.is_empty(square))
}

pub fn is_in_straight_line(a: Square, b: Square) -> bool {
    a.row() == b.row() || a.col() == b.col()
}

pub fn is_in_diagonal_line(a: Square, b: Square) -> bool {
    a.row().abs_diff(b.row()) == a.col().abs_diff(b.col())
}

#[inline]
pub fn compact_pos(row: u8, col: u8) -> u8 {
    row * BOARD_LEN + col
}

#[inline]
pub fn unpack_pos<T: From<u8>, V: Into<u8>>(pos: V) -> (T, T) {
    let pos: u8 = pos.into();
    ((pos / BOARD_LEN).into(), (pos % BOARD_LEN).into())
}

const POS_TO_STRING: [&str; 64] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

pub fn pos_to_str(pos: u8) -> &'static str {
    POS_TO_STRING.get(pos as usize).copied().unwrap_or("XX")
}
