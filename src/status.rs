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

use std::fmt;

use shakmaty::Color;

use crate::rules::{DrawReason, Rules};

/// Coarse state of the game, derived from the position on every query.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    pub const fn is_game_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

/// [`GameStatus`] together with what is needed to describe it to the user.
///
/// # Examples
///
/// ```
/// use shakmaty::Chess;
/// use shakmaty_board::{GameStatus, Rules, Status};
///
/// let status = Status::of(&Chess::initial_position(), false);
/// assert_eq!(status.status, GameStatus::InProgress);
/// assert_eq!(status.to_string(), "White to move");
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Status {
    pub status: GameStatus,
    /// Side to move. The loser in case of checkmate.
    pub turn: Color,
    /// Set if and only if `status` is [`GameStatus::Draw`].
    pub draw_reason: Option<DrawReason>,
}

impl Status {
    /// Computes the status of a position.
    ///
    /// Priority is checkmate, draw, stalemate, check. A checkmate is
    /// reported even if a draw condition like the fifty-move rule holds at
    /// the same time. Stalemates with insufficient material are reported as
    /// draws.
    pub fn of<P: Rules>(pos: &P, repeated: bool) -> Status {
        let turn = pos.turn_to_move();
        let draw_reason = pos
            .draw_reason()
            .or(repeated.then_some(DrawReason::ThreefoldRepetition));

        let (status, draw_reason) = if pos.in_checkmate() {
            (GameStatus::Checkmate, None)
        } else if let Some(reason) = draw_reason {
            (GameStatus::Draw, Some(reason))
        } else if pos.in_stalemate() {
            (GameStatus::Stalemate, None)
        } else if pos.in_check() {
            (GameStatus::Check, None)
        } else {
            (GameStatus::InProgress, None)
        };

        Status {
            status,
            turn,
            draw_reason,
        }
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Color> {
        (self.status == GameStatus::Checkmate).then_some(!self.turn)
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Human readable label, like `Checkmate! Black wins`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turn = color_name(self.turn);
        match self.status {
            GameStatus::Checkmate => write!(f, "Checkmate! {} wins", color_name(!self.turn)),
            GameStatus::Draw => match self.draw_reason {
                Some(reason) => write!(f, "Draw ({})", reason.label()),
                None => f.write_str("Draw"),
            },
            GameStatus::Stalemate => f.write_str("Stalemate"),
            GameStatus::Check => write!(f, "Check! {turn} to move"),
            GameStatus::InProgress => write!(f, "{turn} to move"),
        }
    }
}
