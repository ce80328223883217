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

//! An interactive chessboard on top of [`shakmaty`].
//!
//! The board does not know any chess rules. It keeps track of what the user
//! selected or is dragging, asks the rules engine for legal destinations,
//! and hands completed gestures to the rules engine to validate and play.
//!
//! # Examples
//!
//! ```
//! use shakmaty::Square;
//! use shakmaty_board::{BoardController, GameStatus};
//!
//! let mut board = BoardController::new();
//!
//! // 1. f3 e5 2. g4 Qh4#
//! for (from, to) in [
//!     (Square::F2, Square::F3),
//!     (Square::E7, Square::E5),
//!     (Square::G2, Square::G4),
//!     (Square::D8, Square::H4),
//! ] {
//!     board.select_or_move(from);
//!     assert!(board.select_or_move(to).is_move());
//! }
//!
//! assert_eq!(board.status().status, GameStatus::Checkmate);
//! assert_eq!(board.status().to_string(), "Checkmate! Black wins");
//!
//! // Markup for the page.
//! let html = board.view().to_string();
//! assert!(html.contains("data-square=\"h4\""));
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html)
//!   for status and option enums.
//! * `wasm`: Browser bindings with
//!   [`wasm-bindgen`](https://docs.rs/wasm-bindgen/0.2).

#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod controller;
mod errors;
mod grid;
mod options;
mod repetition;
mod rules;
mod state;
mod status;
mod view;

#[cfg(feature = "wasm")]
pub mod web;

pub use shakmaty;

pub use controller::BoardController;
pub use errors::{IllegalMoveError, InvalidSourceError, LoadPositionError};
pub use grid::{is_light, GridCoord};
pub use options::{BoardOptions, PromotionPolicy};
pub use rules::{DrawReason, PromotionChoices, Rules, PROMOTION_ROLES};
pub use state::{PendingPromotion, Transition, UiState};
pub use status::{GameStatus, Status};
pub use view::{glyph, BoardView, Highlight, SquareView};
