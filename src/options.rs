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

use shakmaty::{Color, Role};

/// What to do when a pawn reaches the last rank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum PromotionPolicy {
    /// Always promote to a queen, without asking.
    #[default]
    AutoQueen,
    /// Hold the move until a role is chosen with
    /// [`BoardController::choose_promotion()`](crate::BoardController::choose_promotion).
    Ask,
}

impl PromotionPolicy {
    /// Role to promote to if the move is applied right away.
    pub const fn default_role(self) -> Option<Role> {
        match self {
            PromotionPolicy::AutoQueen => Some(Role::Queen),
            PromotionPolicy::Ask => None,
        }
    }
}

/// Board configuration.
///
/// # Examples
///
/// ```
/// use shakmaty::Color;
/// use shakmaty_board::{BoardOptions, PromotionPolicy};
///
/// let options = BoardOptions::default()
///     .with_orientation(Color::Black)
///     .with_promotion(PromotionPolicy::Ask);
///
/// assert!(options.show_coordinates);
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct BoardOptions {
    /// Color at the bottom of the board.
    pub orientation: Color,
    pub promotion: PromotionPolicy,
    /// Render file and rank labels on the board edge.
    pub show_coordinates: bool,
    /// Highlight legal destinations of the selected or dragged piece.
    pub show_destinations: bool,
}

impl Default for BoardOptions {
    fn default() -> BoardOptions {
        BoardOptions {
            orientation: Color::White,
            promotion: PromotionPolicy::AutoQueen,
            show_coordinates: true,
            show_destinations: true,
        }
    }
}

impl BoardOptions {
    #[must_use]
    pub fn with_orientation(mut self, orientation: Color) -> BoardOptions {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_promotion(mut self, promotion: PromotionPolicy) -> BoardOptions {
        self.promotion = promotion;
        self
    }

    #[must_use]
    pub fn with_coordinates(mut self, show_coordinates: bool) -> BoardOptions {
        self.show_coordinates = show_coordinates;
        self
    }

    #[must_use]
    pub fn with_destinations(mut self, show_destinations: bool) -> BoardOptions {
        self.show_destinations = show_destinations;
        self
    }
}
