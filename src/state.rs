// This file is part of the shakmaty-board library.
// Copyright (C) 2026 Niklas Fiekas <niklas.fiekas@backscattering.de>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use shakmaty::{Bitboard, Move, Role, Square};

use crate::errors::IllegalMoveError;

/// A move to the last rank that waits for the user to choose a piece.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
}

/// Transient interaction state of the board.
///
/// `selected` and `dragged` are not exclusive by construction, so both are
/// always cleared together when a gesture ends.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct UiState {
    /// Square selected by a click, waiting for a destination click.
    pub selected: Option<Square>,
    /// Source square of an ongoing drag.
    pub dragged: Option<Square>,
    /// Legal destinations of the active source. Empty if there is none.
    pub destinations: Bitboard,
    pub pending_promotion: Option<PendingPromotion>,
}

impl UiState {
    /// The square moves currently start from: the dragged square if any,
    /// otherwise the selected square.
    pub fn source(&self) -> Option<Square> {
        self.dragged.or(self.selected)
    }

    pub fn is_empty(&self) -> bool {
        *self == UiState::default()
    }

    pub fn clear(&mut self) {
        *self = UiState::default();
    }
}

/// What a gesture did to the board.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Transition {
    /// Nothing changed.
    Ignored,
    /// A piece was selected by a click, possibly replacing a previous
    /// selection.
    Selected {
        square: Square,
        destinations: Bitboard,
    },
    /// A drag was started.
    DragStarted {
        square: Square,
        destinations: Bitboard,
    },
    /// A move was played. The position was replaced.
    Moved { m: Move },
    /// A move attempt was rejected and the gesture ended.
    Rejected { error: IllegalMoveError },
    /// The move needs a promotion role before it can be played.
    PromotionPending { from: Square, to: Square },
    /// A drag or pending promotion was abandoned.
    Cancelled,
    /// The game was reset or a new position was loaded.
    Reset,
}

impl Transition {
    /// Tests if the position was replaced.
    pub fn is_move(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }

    /// Gets the promotion role of the played move, if any.
    pub fn promotion(&self) -> Option<Role> {
        match self {
            Transition::Moved { m } => m.promotion(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source() {
        let mut state = UiState::default();
        assert!(state.is_empty());
        assert_eq!(state.source(), None);

        state.selected = Some(Square::E2);
        assert_eq!(state.source(), Some(Square::E2));

        state.dragged = Some(Square::G1);
        assert_eq!(state.source(), Some(Square::G1));

        state.clear();
        assert!(state.is_empty());
    }
}
