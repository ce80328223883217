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

//! Browser bindings.
//!
//! DOM event handlers read the `data-square` attribute of the square under
//! the pointer and pass it to [`WebBoard`]. Rendering is done by replacing
//! the board element's `innerHTML` with [`WebBoard::render()`].

use shakmaty::{Role, Square};
use wasm_bindgen::prelude::*;

use crate::{BoardController, BoardOptions, PromotionPolicy, Transition};

fn square_from_name(name: &str) -> Option<Square> {
    Square::from_ascii(name.as_bytes()).ok()
}

/// Promotion role from a lowercase or uppercase piece letter.
fn role_from_name(name: &str) -> Option<Role> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Role::from_char(ch),
        _ => None,
    }
}

fn parse_square(name: &str) -> Result<Square, JsError> {
    square_from_name(name).ok_or_else(|| JsError::new(&format!("invalid square: {name:?}")))
}

/// A board that can be driven from JavaScript.
#[wasm_bindgen]
#[derive(Debug)]
pub struct WebBoard {
    inner: BoardController,
}

#[wasm_bindgen]
impl WebBoard {
    /// Creates a board with the standard starting position.
    ///
    /// With `askPromotion`, pawn moves to the last rank wait for
    /// `choosePromotion()` instead of promoting to a queen.
    #[wasm_bindgen(constructor)]
    pub fn new(flipped: bool, ask_promotion: bool) -> WebBoard {
        let options = BoardOptions::default()
            .with_orientation(if flipped {
                shakmaty::Color::Black
            } else {
                shakmaty::Color::White
            })
            .with_promotion(if ask_promotion {
                PromotionPolicy::Ask
            } else {
                PromotionPolicy::AutoQueen
            });
        WebBoard {
            inner: BoardController::with_options(options),
        }
    }

    /// Handles a click. Returns `true` if the board needs to be redrawn.
    pub fn click(&mut self, square: &str) -> Result<bool, JsError> {
        let square = parse_square(square)?;
        Ok(self.inner.select_or_move(square) != Transition::Ignored)
    }

    /// Handles `dragstart`. Returns `false` if the native drag must be
    /// cancelled with `preventDefault()`.
    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, square: &str) -> Result<bool, JsError> {
        let square = parse_square(square)?;
        Ok(self.inner.begin_drag(square).is_ok())
    }

    /// Handles `drop`. Returns `true` if the board needs to be redrawn,
    /// which includes a move waiting for `choosePromotion()`.
    pub fn drop(&mut self, square: &str) -> Result<bool, JsError> {
        let square = parse_square(square)?;
        Ok(self.inner.drop_on(square) != Transition::Ignored)
    }

    /// Handles `dragend` without a drop on the board.
    #[wasm_bindgen(js_name = dragEnd)]
    pub fn drag_end(&mut self) {
        self.inner.cancel_drag();
    }

    /// Completes a pending promotion. `role` is one of `q`, `r`, `b`, `n`.
    #[wasm_bindgen(js_name = choosePromotion)]
    pub fn choose_promotion(&mut self, role: &str) -> Result<bool, JsError> {
        let role =
            role_from_name(role).ok_or_else(|| JsError::new(&format!("invalid role: {role:?}")))?;
        Ok(self.inner.choose_promotion(role).is_move())
    }

    #[wasm_bindgen(js_name = cancelPromotion)]
    pub fn cancel_promotion(&mut self) {
        self.inner.cancel_promotion();
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Board markup.
    pub fn render(&self) -> String {
        self.inner.view().to_string()
    }

    /// Status label, like `White to move`.
    pub fn status(&self) -> String {
        self.inner.status().label()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.status().is_game_over()
    }

    pub fn fen(&self) -> String {
        self.inner.fen()
    }

    #[wasm_bindgen(js_name = loadFen)]
    pub fn load_fen(&mut self, fen: &str) -> Result<(), JsError> {
        self.inner
            .load_fen(fen)
            .map(|_| ())
            .map_err(|err| JsError::new(&err.to_string()))
    }
}

impl Default for WebBoard {
    fn default() -> WebBoard {
        WebBoard::new(false, false)
    }
}

#[cfg(test)]
mod tests {
    use shakmaty::Color;

    use super::*;

    const INITIAL: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const PROMOTION: &str = "1n4k1/P7/8/8/8/8/8/4K3 w - - 0 1";

    #[test]
    fn test_square_from_name() {
        assert_eq!(square_from_name("e4"), Some(Square::E4));
        assert_eq!(square_from_name("h8"), Some(Square::H8));
        assert_eq!(square_from_name(""), None);
        assert_eq!(square_from_name("e9"), None);
        assert_eq!(square_from_name("i1"), None);
        assert_eq!(square_from_name("e44"), None);
    }

    #[test]
    fn test_role_from_name() {
        assert_eq!(role_from_name("q"), Some(Role::Queen));
        assert_eq!(role_from_name("N"), Some(Role::Knight));
        assert_eq!(role_from_name("r"), Some(Role::Rook));
        assert_eq!(role_from_name("b"), Some(Role::Bishop));
        assert_eq!(role_from_name("x"), None);
        assert_eq!(role_from_name("qq"), None);
        assert_eq!(role_from_name(""), None);
    }

    #[test]
    fn test_new_options() {
        let board = WebBoard::new(false, false);
        assert_eq!(board.inner.options().orientation, Color::White);
        assert_eq!(board.inner.options().promotion, PromotionPolicy::AutoQueen);

        let board = WebBoard::new(true, true);
        assert_eq!(board.inner.options().orientation, Color::Black);
        assert_eq!(board.inner.options().promotion, PromotionPolicy::Ask);
        assert!(board.render().contains("orientation-black"));
    }

    #[test]
    fn test_click_and_drag() {
        let mut board = WebBoard::default();
        assert!(!board.click("e5").unwrap());
        assert!(board.click("e2").unwrap());
        assert!(board.click("e4").unwrap());
        assert_eq!(board.status(), "Black to move");

        assert!(!board.drag_start("e2").unwrap());
        assert!(!board.drag_start("d2").unwrap());
        assert!(board.drag_start("e7").unwrap());
        assert!(board.drop("e5").unwrap());
        assert!(board.inner.ui_state().is_empty());

        assert!(board.drag_start("g1").unwrap());
        board.drag_end();
        assert!(board.inner.ui_state().is_empty());
        assert!(!board.drop("f3").unwrap());
    }

    #[test]
    fn test_promotion_by_drop() {
        let mut board = WebBoard::new(false, true);
        board.load_fen(PROMOTION).unwrap();
        assert!(board.drag_start("a7").unwrap());
        assert!(board.drop("a8").unwrap());
        assert!(board.inner.ui_state().pending_promotion.is_some());
        assert!(board.render().contains("promotion"));

        assert!(board.choose_promotion("n").unwrap());
        assert_eq!(
            board.inner.position().piece_at(Square::A8),
            Some(Color::White.knight())
        );
        assert_eq!(board.fen(), "Nn4k1/8/8/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn test_cancel_promotion_and_reset() {
        let mut board = WebBoard::new(false, true);
        board.load_fen(PROMOTION).unwrap();
        board.click("a7").unwrap();
        assert!(board.click("b8").unwrap());
        board.cancel_promotion();
        assert!(board.inner.ui_state().is_empty());
        assert_eq!(board.fen(), PROMOTION);

        board.reset();
        assert!(!board.is_game_over());
        assert_eq!(board.fen(), INITIAL);
    }
}
