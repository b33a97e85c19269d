use serde::{Deserialize, Serialize};

use crate::core::engine::Color;

/// Side to move. White opens the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub active_color: Color,
}

impl TurnState {
    pub fn new(active_color: Color) -> TurnState {
        TurnState { active_color }
    }

    #[inline]
    pub fn is_movers_turn(self, piece_color: Color) -> bool {
        self.active_color == piece_color
    }

    #[must_use]
    pub fn advance(self) -> TurnState {
        TurnState {
            active_color: self.active_color.opposite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_opens() {
        let turn = TurnState::default();
        assert!(turn.is_movers_turn(Color::White));
        assert!(!turn.is_movers_turn(Color::Black));
    }

    #[test]
    fn advance_alternates() {
        let turn = TurnState::default().advance();
        assert_eq!(turn.active_color, Color::Black);
        assert_eq!(turn.advance(), TurnState::new(Color::White));
    }
}
