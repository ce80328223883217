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

use std::{error::Error, fmt};

use shakmaty::{fen::ParseFenError, Color, PositionErrorKinds, Square};

/// Error when the rules engine rejects a move from one square to another.
///
/// The controller catches this error itself. It only decides whether a
/// click re-targets the selection or ends the gesture.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IllegalMoveError {
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move from {} to {}", self.from, self.to)
    }
}

impl Error for IllegalMoveError {}

/// Error when a drag can not start from a square.
///
/// The UI layer should cancel the native drag operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidSourceError {
    /// There is no piece on the square.
    Empty {
        #[allow(missing_docs)]
        square: Square,
    },
    /// The piece on the square does not belong to the side to move.
    WrongColor {
        #[allow(missing_docs)]
        square: Square,
        #[allow(missing_docs)]
        turn: Color,
    },
    /// A promotion piece has to be chosen first.
    PromotionPending,
}

impl fmt::Display for InvalidSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSourceError::Empty { square } => write!(f, "no piece on {square}"),
            InvalidSourceError::WrongColor { square, turn } => {
                write!(f, "piece on {square} can not move, {turn:?} to move")
            }
            InvalidSourceError::PromotionPending => write!(f, "promotion pending"),
        }
    }
}

impl Error for InvalidSourceError {}

/// Error when loading a position from FEN.
#[derive(Debug)]
pub enum LoadPositionError {
    /// Syntactically invalid FEN.
    Fen(ParseFenError),
    /// Well-formed FEN describing an illegal position.
    Position(PositionErrorKinds),
}

impl fmt::Display for LoadPositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadPositionError::Fen(err) => write!(f, "invalid fen: {err}"),
            LoadPositionError::Position(kinds) => write!(f, "illegal position: {kinds:?}"),
        }
    }
}

impl Error for LoadPositionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadPositionError::Fen(err) => Some(err),
            LoadPositionError::Position(_) => None,
        }
    }
}

impl From<ParseFenError> for LoadPositionError {
    fn from(err: ParseFenError) -> LoadPositionError {
        LoadPositionError::Fen(err)
    }
}
