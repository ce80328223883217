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

//! Pure rendering of a board.
//!
//! A [`BoardView`] is computed from the position, the interaction state and
//! the options, and holds everything needed to draw the board. Its
//! [`Display`](fmt::Display) implementation writes HTML markup.

use std::{array, fmt};

use bitflags::bitflags;
use shakmaty::{Color, Piece, Role, Square};

use crate::{
    grid::{is_light, GridCoord},
    options::BoardOptions,
    rules::{PromotionChoices, Rules},
    state::{PendingPromotion, UiState},
    status::{GameStatus, Status},
};

bitflags! {
    /// Visual classes of a square.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
    pub struct Highlight: u8 {
        const LIGHT = 1 << 0;
        const SELECTED = 1 << 1;
        const DRAG_SOURCE = 1 << 2;
        const DESTINATION = 1 << 3;
        /// Destination occupied by an enemy piece.
        const CAPTURE = 1 << 4;
        /// King of the side to move, in check.
        const CHECK = 1 << 5;
    }
}

impl Highlight {
    /// CSS class names, in a fixed order.
    pub fn class_names(self) -> impl Iterator<Item = &'static str> {
        [
            (Highlight::SELECTED, "selected"),
            (Highlight::DRAG_SOURCE, "drag-source"),
            (Highlight::DESTINATION, "destination"),
            (Highlight::CAPTURE, "capture"),
            (Highlight::CHECK, "check"),
        ]
        .into_iter()
        .filter(move |&(flag, _)| self.contains(flag))
        .map(|(_, name)| name)
    }
}

/// Unicode chess symbol for a piece.
///
/// # Examples
///
/// ```
/// use shakmaty::Color;
/// use shakmaty_board::glyph;
///
/// assert_eq!(glyph(Color::White.king()), '♔');
/// assert_eq!(glyph(Color::Black.pawn()), '♟');
/// ```
pub const fn glyph(piece: Piece) -> char {
    match (piece.color, piece.role) {
        (Color::White, Role::King) => '♔',
        (Color::White, Role::Queen) => '♕',
        (Color::White, Role::Rook) => '♖',
        (Color::White, Role::Bishop) => '♗',
        (Color::White, Role::Knight) => '♘',
        (Color::White, Role::Pawn) => '♙',
        (Color::Black, Role::King) => '♚',
        (Color::Black, Role::Queen) => '♛',
        (Color::Black, Role::Rook) => '♜',
        (Color::Black, Role::Bishop) => '♝',
        (Color::Black, Role::Knight) => '♞',
        (Color::Black, Role::Pawn) => '♟',
    }
}

/// A single cell of the rendered grid.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct SquareView {
    pub square: Square,
    pub coord: GridCoord,
    pub piece: Option<Piece>,
    pub highlight: Highlight,
    /// The piece may be picked up.
    pub draggable: bool,
    /// Set on the bottom row.
    pub file_label: Option<char>,
    /// Set on the leftmost column.
    pub rank_label: Option<char>,
}

impl SquareView {
    pub fn is_light(&self) -> bool {
        self.highlight.contains(Highlight::LIGHT)
    }
}

/// Snapshot of everything that is drawn.
#[derive(Clone, Debug)]
pub struct BoardView {
    rows: [[SquareView; 8]; 8],
    orientation: Color,
    status: Status,
    promotion: Option<(PendingPromotion, PromotionChoices)>,
}

impl BoardView {
    pub fn new<P: Rules>(
        pos: &P,
        ui: &UiState,
        options: &BoardOptions,
        status: Status,
    ) -> BoardView {
        let turn = pos.turn_to_move();
        let in_check = matches!(status.status, GameStatus::Check | GameStatus::Checkmate);
        let destinations = if options.show_destinations {
            ui.destinations
        } else {
            Default::default()
        };

        let rows = array::from_fn(|row| {
            array::from_fn(|col| {
                let coord = GridCoord { row, col };
                let square = coord.square_in_range(options.orientation);
                let piece = pos.piece_at(square);

                let mut highlight = Highlight::empty();
                highlight.set(Highlight::LIGHT, is_light(square));
                highlight.set(Highlight::SELECTED, ui.selected == Some(square));
                highlight.set(Highlight::DRAG_SOURCE, ui.dragged == Some(square));
                highlight.set(Highlight::DESTINATION, destinations.contains(square));
                highlight.set(
                    Highlight::CAPTURE,
                    destinations.contains(square) && piece.is_some_and(|p| p.color != turn),
                );
                highlight.set(Highlight::CHECK, in_check && piece == Some(turn.king()));

                SquareView {
                    square,
                    coord,
                    piece,
                    highlight,
                    draggable: ui.pending_promotion.is_none()
                        && piece.is_some_and(|p| p.color == turn),
                    file_label: (options.show_coordinates && row == 7)
                        .then(|| square.file().char()),
                    rank_label: (options.show_coordinates && col == 0)
                        .then(|| square.rank().char()),
                }
            })
        });

        BoardView {
            rows,
            orientation: options.orientation,
            status,
            promotion: ui
                .pending_promotion
                .map(|pending| (pending, pos.promotion_choices(pending.from, pending.to))),
        }
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> &[[SquareView; 8]; 8] {
        &self.rows
    }

    /// All squares, row by row.
    pub fn squares(&self) -> impl Iterator<Item = &SquareView> {
        self.rows.iter().flatten()
    }

    pub fn square(&self, square: Square) -> &SquareView {
        let GridCoord { row, col } = GridCoord::of(square, self.orientation);
        &self.rows[row][col]
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The pending promotion and the roles to choose from.
    pub fn promotion(&self) -> Option<&(PendingPromotion, PromotionChoices)> {
        self.promotion.as_ref()
    }
}

fn status_class(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "in-progress",
        GameStatus::Check => "check",
        GameStatus::Checkmate => "checkmate",
        GameStatus::Stalemate => "stalemate",
        GameStatus::Draw => "draw",
    }
}

fn color_class(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

impl fmt::Display for SquareView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<div class=\"square ")?;
        f.write_str(if self.is_light() { "light" } else { "dark" })?;
        for name in self.highlight.class_names() {
            write!(f, " {name}")?;
        }
        write!(f, "\" data-square=\"{}\">", self.square)?;

        if let Some(piece) = self.piece {
            write!(
                f,
                "<span class=\"piece {}\" data-piece=\"{}\" draggable=\"{}\">{}</span>",
                color_class(piece.color),
                piece.char(),
                self.draggable,
                glyph(piece)
            )?;
        }
        if let Some(label) = self.rank_label {
            write!(f, "<span class=\"coord rank\">{label}</span>")?;
        }
        if let Some(label) = self.file_label {
            write!(f, "<span class=\"coord file\">{label}</span>")?;
        }

        f.write_str("</div>")
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<div class=\"board orientation-{}\">",
            color_class(self.orientation)
        )?;
        for row in &self.rows {
            f.write_str("<div class=\"board-row\">")?;
            for square in row {
                write!(f, "{square}")?;
            }
            f.write_str("</div>\n")?;
        }
        f.write_str("</div>\n")?;

        if let Some((pending, choices)) = &self.promotion {
            write!(f, "<div class=\"promotion\" data-square=\"{}\">", pending.to)?;
            for &role in choices {
                let piece = role.of(self.status.turn);
                write!(
                    f,
                    "<button data-role=\"{}\">{}</button>",
                    role.char(),
                    glyph(piece)
                )?;
            }
            f.write_str("</div>\n")?;
        }

        writeln!(
            f,
            "<div class=\"status {}\">{}</div>",
            status_class(self.status.status),
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use shakmaty::{Bitboard, Chess};

    use super::*;

    fn board_view(ui: &UiState, options: &BoardOptions) -> BoardView {
        let pos = Chess::initial_position();
        BoardView::new(&pos, ui, options, Status::of(&pos, false))
    }

    #[test]
    fn test_initial_grid() {
        let view = board_view(&UiState::default(), &BoardOptions::default());
        let corner = &view.rows()[0][0];
        assert_eq!(corner.square, Square::A8);
        assert_eq!(corner.piece, Some(Color::Black.rook()));
        assert!(corner.is_light());
        assert!(!corner.draggable);
        assert_eq!(corner.rank_label, Some('8'));
        assert_eq!(corner.file_label, None);

        let corner = &view.rows()[7][0];
        assert_eq!(corner.square, Square::A1);
        assert!(!corner.is_light());
        assert!(corner.draggable);
        assert_eq!(corner.rank_label, Some('1'));
        assert_eq!(corner.file_label, Some('a'));

        assert_eq!(view.squares().count(), 64);
        assert_eq!(view.squares().filter(|s| s.piece.is_some()).count(), 32);
        assert_eq!(view.squares().filter(|s| s.draggable).count(), 16);
        assert_eq!(view.squares().filter(|s| s.file_label.is_some()).count(), 8);
        assert_eq!(view.squares().filter(|s| s.rank_label.is_some()).count(), 8);
    }

    #[test]
    fn test_flipped() {
        let view = board_view(
            &UiState::default(),
            &BoardOptions::default().with_orientation(Color::Black),
        );
        assert_eq!(view.rows()[0][0].square, Square::H1);
        assert_eq!(view.rows()[7][7].square, Square::A8);
        assert_eq!(view.square(Square::E2).coord, GridCoord { row: 1, col: 3 });
        assert_eq!(view.rows()[7][0].file_label, Some('h'));
    }

    #[test]
    fn test_highlights() {
        let ui = UiState {
            selected: Some(Square::E2),
            destinations: Bitboard::from(Square::E3) | Bitboard::from(Square::E4),
            ..UiState::default()
        };
        let view = board_view(&ui, &BoardOptions::default());
        assert!(view.square(Square::E2).highlight.contains(Highlight::SELECTED));
        assert!(view.square(Square::E4).highlight.contains(Highlight::DESTINATION));
        assert!(!view.square(Square::E4).highlight.contains(Highlight::CAPTURE));
        assert_eq!(
            view.squares()
                .filter(|s| s.highlight.contains(Highlight::DESTINATION))
                .count(),
            2
        );

        let view = board_view(&ui, &BoardOptions::default().with_destinations(false));
        assert!(view.squares().all(|s| !s.highlight.contains(Highlight::DESTINATION)));
    }

    #[test]
    fn test_no_coordinates() {
        let view = board_view(
            &UiState::default(),
            &BoardOptions::default().with_coordinates(false),
        );
        assert!(view
            .squares()
            .all(|s| s.file_label.is_none() && s.rank_label.is_none()));
    }

    #[test]
    fn test_class_names() {
        let highlight = Highlight::LIGHT | Highlight::DESTINATION | Highlight::CAPTURE;
        assert_eq!(
            highlight.class_names().collect::<Vec<_>>(),
            ["destination", "capture"]
        );
        assert_eq!(Highlight::empty().class_names().count(), 0);
    }

    #[test]
    fn test_markup() {
        let ui = UiState {
            dragged: Some(Square::G1),
            destinations: Bitboard::from(Square::F3) | Bitboard::from(Square::H3),
            ..UiState::default()
        };
        let html = board_view(&ui, &BoardOptions::default()).to_string();
        assert!(html.starts_with("<div class=\"board orientation-white\">"));
        assert_eq!(html.matches("class=\"board-row\"").count(), 8);
        assert_eq!(html.matches("data-square=").count(), 64);
        assert!(html.contains("<div class=\"square dark drag-source\" data-square=\"g1\">"));
        assert!(html.contains("<div class=\"square light destination\" data-square=\"f3\">"));
        assert!(html.contains("data-piece=\"N\" draggable=\"true\">♘</span>"));
        assert!(html.contains("data-piece=\"q\" draggable=\"false\">♛</span>"));
        assert!(html.contains("<div class=\"status in-progress\">White to move</div>"));
    }
}
