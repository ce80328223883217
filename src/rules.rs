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

//! The rules engine seam.
//!
//! The board never decides anything about chess itself. It asks a
//! [`Rules`] implementation, which is provided for every
//! [`shakmaty::Position`] that can be set up from a FEN.

use arrayvec::ArrayVec;
use shakmaty::{
    fen::Fen,
    uci::UciMove,
    zobrist::{Zobrist64, ZobristHash},
    Bitboard, CastlingMode, Color, EnPassantMode, FromSetup, Move, Piece, Position, Role, Square,
};

use crate::errors::{IllegalMoveError, LoadPositionError};

/// Roles a pawn can promote to, in the order they are offered to the user.
///
/// `King` is only ever legal in antichess.
pub const PROMOTION_ROLES: [Role; 5] = [
    Role::Queen,
    Role::Rook,
    Role::Bishop,
    Role::Knight,
    Role::King,
];

/// Promotion roles that are legal for a particular move.
pub type PromotionChoices = ArrayVec<Role, 5>;

/// Reason for a drawn game (other than stalemate).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum DrawReason {
    /// Neither side can possibly deliver checkmate.
    InsufficientMaterial,
    /// 50 moves by each side without a capture or pawn move.
    FiftyMoveRule,
    /// The same position occurred for the third time.
    ThreefoldRepetition,
}

impl DrawReason {
    pub const fn label(self) -> &'static str {
        match self {
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::ThreefoldRepetition => "threefold repetition",
        }
    }
}

/// Everything the board needs to know about a chess position.
///
/// Positions are values. [`Rules::apply_move()`] returns a new position and
/// leaves `self` untouched.
///
/// # Examples
///
/// ```
/// use shakmaty::{Chess, Color, Square};
/// use shakmaty_board::Rules;
///
/// let pos = Chess::initial_position();
/// assert_eq!(pos.legal_destinations(Square::G1).count(), 2);
///
/// let (after, _) = pos.apply_move(Square::E2, Square::E4, None)?;
/// assert_eq!(pos.turn_to_move(), Color::White);
/// assert_eq!(after.turn_to_move(), Color::Black);
/// # Ok::<_, shakmaty_board::IllegalMoveError>(())
/// ```
pub trait Rules: Clone {
    /// The standard starting position.
    fn initial_position() -> Self;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn turn_to_move(&self) -> Color;

    /// Squares the piece on `from` can legally move to.
    ///
    /// Castling is reported as the two-square king move, e.g. `g1`, not as
    /// a move onto the rook.
    fn legal_destinations(&self, from: Square) -> Bitboard;

    /// Tests if the move from `from` to `to` is legal only together with a
    /// promotion role.
    fn needs_promotion(&self, from: Square, to: Square) -> bool;

    /// Legal promotion roles for the move from `from` to `to`, best first.
    fn promotion_choices(&self, from: Square, to: Square) -> PromotionChoices;

    /// Validates and plays a move.
    ///
    /// The `promotion` role is only used if the move actually is a
    /// promotion, so callers can pass their preferred role unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] if there is no such legal move.
    fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<(Self, Move), IllegalMoveError>;

    fn in_check(&self) -> bool;

    fn in_checkmate(&self) -> bool;

    fn in_stalemate(&self) -> bool;

    /// Draws that can be seen from the position alone. Repetitions need
    /// the game history and are tracked by the controller.
    fn draw_reason(&self) -> Option<DrawReason>;

    /// Key identifying the position for repetition detection.
    fn repetition_key(&self) -> u64;

    /// Serializes the position as FEN.
    fn to_fen(&self) -> String;

    /// Parses a position from FEN.
    ///
    /// # Errors
    ///
    /// Returns [`LoadPositionError`] if the FEN is malformed or describes
    /// an illegal position.
    fn from_fen(fen: &str) -> Result<Self, LoadPositionError>;
}

impl<P> Rules for P
where
    P: Position + FromSetup + Default + Clone,
{
    fn initial_position() -> P {
        P::default()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board().piece_at(square)
    }

    fn turn_to_move(&self) -> Color {
        self.turn()
    }

    fn legal_destinations(&self, from: Square) -> Bitboard {
        let mut destinations = Bitboard::EMPTY;
        for m in self.legal_moves() {
            if m.from() != Some(from) {
                continue;
            }
            if let UciMove::Normal { to, .. } = UciMove::from_move(&m, CastlingMode::Standard) {
                destinations.add(to);
            }
        }
        destinations
    }

    fn needs_promotion(&self, from: Square, to: Square) -> bool {
        self.legal_moves()
            .iter()
            .any(|m| m.from() == Some(from) && m.to() == to && m.promotion().is_some())
    }

    fn promotion_choices(&self, from: Square, to: Square) -> PromotionChoices {
        let legals = self.legal_moves();
        PROMOTION_ROLES
            .into_iter()
            .filter(|&role| {
                legals.iter().any(|m| {
                    m.from() == Some(from) && m.to() == to && m.promotion() == Some(role)
                })
            })
            .collect()
    }

    fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<(P, Move), IllegalMoveError> {
        let promotion = promotion.filter(|_| self.needs_promotion(from, to));
        let uci = UciMove::Normal {
            from,
            to,
            promotion,
        };
        let m = uci.to_move(self).map_err(|_| IllegalMoveError { from, to })?;
        // Castling is only accepted on the king's two-square target, not
        // as a king move onto its own rook.
        if !matches!(
            UciMove::from_move(&m, CastlingMode::Standard),
            UciMove::Normal { to: target, .. } if target == to
        ) {
            return Err(IllegalMoveError { from, to });
        }
        let after = self
            .clone()
            .play(&m)
            .map_err(|_| IllegalMoveError { from, to })?;
        Ok((after, m))
    }

    fn in_check(&self) -> bool {
        self.is_check()
    }

    fn in_checkmate(&self) -> bool {
        self.is_checkmate()
    }

    fn in_stalemate(&self) -> bool {
        self.is_stalemate()
    }

    fn draw_reason(&self) -> Option<DrawReason> {
        if self.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.halfmoves() >= 100 {
            Some(DrawReason::FiftyMoveRule)
        } else {
            None
        }
    }

    fn repetition_key(&self) -> u64 {
        self.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0
    }

    fn to_fen(&self) -> String {
        Fen::from_position(self.clone(), EnPassantMode::Legal).to_string()
    }

    fn from_fen(fen: &str) -> Result<P, LoadPositionError> {
        let fen: Fen = fen.parse()?;
        fen.into_position(CastlingMode::Standard)
            .map_err(|err| LoadPositionError::Position(err.kinds()))
    }
}
