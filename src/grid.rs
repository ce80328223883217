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

//! Mapping between squares and the rows and columns of the rendered grid.
//!
//! Row 0 is the top of the board. With [`Color::White`] at the bottom,
//! row 0 is rank 8 and column 0 is the a-file. With [`Color::Black`] at the
//! bottom the grid is rotated by 180 degrees.

use shakmaty::{Color, File, Rank, Square};

/// Position of a square in the rendered grid.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    /// Gets the grid cell of `square`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shakmaty::{Color, Square};
    /// use shakmaty_board::GridCoord;
    ///
    /// assert_eq!(GridCoord::of(Square::A8, Color::White), GridCoord { row: 0, col: 0 });
    /// assert_eq!(GridCoord::of(Square::E2, Color::White), GridCoord { row: 6, col: 4 });
    /// assert_eq!(GridCoord::of(Square::A8, Color::Black), GridCoord { row: 7, col: 7 });
    /// ```
    pub fn of(square: Square, orientation: Color) -> GridCoord {
        let file = square.file() as usize;
        let rank = square.rank() as usize;
        match orientation {
            Color::White => GridCoord {
                row: 7 - rank,
                col: file,
            },
            Color::Black => GridCoord {
                row: rank,
                col: 7 - file,
            },
        }
    }

    /// Gets the square in this grid cell, or `None` if the cell is
    /// outside of the board.
    pub fn square(self, orientation: Color) -> Option<Square> {
        (self.row < 8 && self.col < 8).then(|| self.square_in_range(orientation))
    }

    /// Like [`GridCoord::square()`], for cells known to be on the board.
    pub(crate) fn square_in_range(self, orientation: Color) -> Square {
        let (file, rank) = match orientation {
            Color::White => (self.col, 7 - self.row),
            Color::Black => (7 - self.col, self.row),
        };
        Square::from_coords(File::new(file as u32), Rank::new(rank as u32))
    }
}

/// Tests if `square` is a light square. `a1` is dark, `h1` is light.
pub fn is_light(square: Square) -> bool {
    (square.file() as usize + square.rank() as usize) % 2 == 1
}
