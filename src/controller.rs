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

//! The board-interaction controller.

use shakmaty::{Bitboard, Chess, Move, Piece, Role, Square};
use tracing::{debug, trace};

use crate::{
    errors::{IllegalMoveError, InvalidSourceError, LoadPositionError},
    options::{BoardOptions, PromotionPolicy},
    repetition::Repetitions,
    rules::{PromotionChoices, Rules},
    state::{PendingPromotion, Transition, UiState},
    status::Status,
    view::BoardView,
};

/// Owns the position and the interaction state of a board, and turns
/// clicks and drags into moves.
///
/// Every gesture handler runs to completion and reports what happened as a
/// [`Transition`]. The position is only ever replaced as a whole, by the
/// result of [`Rules::apply_move()`], [`BoardController::reset()`] or
/// [`BoardController::load_fen()`].
///
/// # Examples
///
/// Click-click moves:
///
/// ```
/// use shakmaty::{Color, Square};
/// use shakmaty_board::{BoardController, Rules, Transition};
///
/// let mut board = BoardController::new();
///
/// assert!(matches!(board.select_or_move(Square::E2), Transition::Selected { .. }));
/// assert!(board.select_or_move(Square::E4).is_move());
///
/// assert_eq!(board.position().turn_to_move(), Color::Black);
/// assert!(board.ui_state().is_empty());
/// ```
///
/// Drag and drop:
///
/// ```
/// use shakmaty::Square;
/// use shakmaty_board::BoardController;
///
/// let mut board = BoardController::new();
///
/// // Black pieces can not be dragged while White is to move.
/// assert!(board.begin_drag(Square::E7).is_err());
///
/// board.begin_drag(Square::G1)?;
/// assert!(board.drop_on(Square::F3).is_move());
/// # Ok::<_, shakmaty_board::InvalidSourceError>(())
/// ```
#[derive(Clone, Debug)]
pub struct BoardController<P = Chess> {
    position: P,
    ui: UiState,
    options: BoardOptions,
    repetitions: Repetitions,
}

impl BoardController<Chess> {
    /// Board with the standard starting position and default options.
    pub fn new() -> BoardController<Chess> {
        BoardController::with_options(BoardOptions::default())
    }
}

impl Default for BoardController<Chess> {
    fn default() -> BoardController<Chess> {
        BoardController::new()
    }
}

impl<P: Rules> BoardController<P> {
    /// Board with the starting position of `P`.
    pub fn with_options(options: BoardOptions) -> BoardController<P> {
        BoardController::from_position(P::initial_position(), options)
    }

    pub fn from_position(position: P, options: BoardOptions) -> BoardController<P> {
        let mut repetitions = Repetitions::default();
        repetitions.record(position.repetition_key());
        BoardController {
            position,
            ui: UiState::default(),
            options,
            repetitions,
        }
    }

    /// Board set up from a FEN.
    ///
    /// # Errors
    ///
    /// Returns [`LoadPositionError`] if the FEN is malformed or the position
    /// is illegal.
    pub fn from_fen(
        fen: &str,
        options: BoardOptions,
    ) -> Result<BoardController<P>, LoadPositionError> {
        Ok(BoardController::from_position(P::from_fen(fen)?, options))
    }

    /// The current position.
    pub fn position(&self) -> &P {
        &self.position
    }

    /// The current interaction state.
    pub fn ui_state(&self) -> &UiState {
        &self.ui
    }

    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    /// Replaces the options. A pending promotion is abandoned if promotions
    /// are no longer asked for.
    pub fn set_options(&mut self, options: BoardOptions) {
        if options.promotion != PromotionPolicy::Ask && self.ui.pending_promotion.is_some() {
            self.ui.clear();
        }
        self.options = options;
    }

    /// The current position as FEN.
    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Status of the game, computed from the current position.
    pub fn status(&self) -> Status {
        let repeated = self.repetitions.count(self.position.repetition_key()) >= 3;
        Status::of(&self.position, repeated)
    }

    /// Everything needed to draw the board.
    pub fn view(&self) -> BoardView {
        BoardView::new(&self.position, &self.ui, &self.options, self.status())
    }

    /// Handles a click on `square`.
    ///
    /// Without an active source, a piece of the side to move is selected.
    /// Clicks on empty squares or enemy pieces are ignored.
    ///
    /// With an active source, a move to `square` is attempted. If the move
    /// is illegal but `square` holds another piece of the side to move, the
    /// selection moves there. Otherwise the gesture ends.
    pub fn select_or_move(&mut self, square: Square) -> Transition {
        if self.ui.pending_promotion.is_some() {
            trace!(%square, "click ignored while promotion is pending");
            return Transition::Ignored;
        }

        let Some(from) = self.ui.source() else {
            return self.select(square);
        };

        match self.try_move(from, square) {
            Ok(transition) => transition,
            Err(error) => {
                debug!(%error, "move rejected");
                if self.movable_piece(square).is_ok() {
                    self.ui.clear();
                    self.select(square)
                } else {
                    self.ui.clear();
                    Transition::Rejected { error }
                }
            }
        }
    }

    /// Starts dragging the piece on `square`.
    ///
    /// Any click selection is dropped, so that the legal destinations belong
    /// to the dragged piece.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSourceError`] if there is no piece of the side to
    /// move on `square`, or a promotion is pending. Nothing changes and the
    /// native drag should be cancelled.
    pub fn begin_drag(&mut self, square: Square) -> Result<Transition, InvalidSourceError> {
        if self.ui.pending_promotion.is_some() {
            return Err(InvalidSourceError::PromotionPending);
        }

        if let Err(err) = self.movable_piece(square) {
            debug!(%err, "drag refused");
            return Err(err);
        }

        let destinations = self.position.legal_destinations(square);
        self.ui.selected = None;
        self.ui.dragged = Some(square);
        self.ui.destinations = destinations;
        trace!(%square, destinations = destinations.count(), "drag started");
        Ok(Transition::DragStarted {
            square,
            destinations,
        })
    }

    /// Drops the dragged piece on `square`.
    ///
    /// The gesture ends whether the move was legal or not. Without an
    /// ongoing drag this does nothing.
    pub fn drop_on(&mut self, square: Square) -> Transition {
        let Some(from) = self.ui.dragged else {
            return Transition::Ignored;
        };

        let transition = match self.try_move(from, square) {
            Ok(transition) => transition,
            Err(error) => {
                debug!(%error, "drop rejected");
                Transition::Rejected { error }
            }
        };

        // A pending promotion outlives the drag.
        self.ui.dragged = None;
        self.ui.selected = None;
        self.ui.destinations = Bitboard::EMPTY;
        transition
    }

    /// Abandons an ongoing drag, for example when the piece was released
    /// outside of the board.
    pub fn cancel_drag(&mut self) -> Transition {
        if self.ui.dragged.is_none() {
            return Transition::Ignored;
        }
        self.ui.clear();
        Transition::Cancelled
    }

    /// Completes a pending promotion with `role`.
    pub fn choose_promotion(&mut self, role: Role) -> Transition {
        let Some(PendingPromotion { from, to }) = self.ui.pending_promotion else {
            return Transition::Ignored;
        };

        self.ui.clear();
        match self.position.apply_move(from, to, Some(role)) {
            Ok((after, m)) => self.commit(after, m),
            Err(error) => {
                debug!(%error, ?role, "promotion rejected");
                Transition::Rejected { error }
            }
        }
    }

    /// Abandons a pending promotion. The move is not played.
    pub fn cancel_promotion(&mut self) -> Transition {
        if self.ui.pending_promotion.is_none() {
            return Transition::Ignored;
        }
        self.ui.clear();
        Transition::Cancelled
    }

    /// Roles the user can choose from for the pending promotion.
    pub fn promotion_choices(&self) -> PromotionChoices {
        self.ui
            .pending_promotion
            .map(|PendingPromotion { from, to }| self.position.promotion_choices(from, to))
            .unwrap_or_default()
    }

    /// Starts a new game from the initial position.
    pub fn reset(&mut self) -> Transition {
        self.set_position(P::initial_position())
    }

    /// Replaces the position and starts counting repetitions anew.
    pub fn set_position(&mut self, position: P) -> Transition {
        self.position = position;
        self.ui.clear();
        self.repetitions.clear();
        self.repetitions.record(self.position.repetition_key());
        Transition::Reset
    }

    /// Replaces the position by one parsed from FEN.
    ///
    /// # Errors
    ///
    /// Returns [`LoadPositionError`] if the FEN is malformed or the position
    /// is illegal. The board is left unchanged.
    pub fn load_fen(&mut self, fen: &str) -> Result<Transition, LoadPositionError> {
        let position = P::from_fen(fen)?;
        Ok(self.set_position(position))
    }

    fn movable_piece(&self, square: Square) -> Result<Piece, InvalidSourceError> {
        let turn = self.position.turn_to_move();
        match self.position.piece_at(square) {
            None => Err(InvalidSourceError::Empty { square }),
            Some(piece) if piece.color != turn => {
                Err(InvalidSourceError::WrongColor { square, turn })
            }
            Some(piece) => Ok(piece),
        }
    }

    fn select(&mut self, square: Square) -> Transition {
        if let Err(err) = self.movable_piece(square) {
            trace!(%err, "nothing to select");
            return Transition::Ignored;
        }

        let destinations = self.position.legal_destinations(square);
        self.ui.selected = Some(square);
        self.ui.destinations = destinations;
        trace!(%square, destinations = destinations.count(), "selected");
        Transition::Selected {
            square,
            destinations,
        }
    }

    fn try_move(&mut self, from: Square, to: Square) -> Result<Transition, IllegalMoveError> {
        if self.options.promotion == PromotionPolicy::Ask && self.position.needs_promotion(from, to)
        {
            self.ui.clear();
            self.ui.pending_promotion = Some(PendingPromotion { from, to });
            debug!(%from, %to, "waiting for promotion choice");
            return Ok(Transition::PromotionPending { from, to });
        }

        let (after, m) = self
            .position
            .apply_move(from, to, self.options.promotion.default_role())?;
        Ok(self.commit(after, m))
    }

    fn commit(&mut self, after: P, m: Move) -> Transition {
        self.position = after;
        self.ui.clear();
        let occurrences = self.repetitions.record(self.position.repetition_key());
        debug!(?m, occurrences, "move played");
        Transition::Moved { m }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_own_piece() {
        let mut board = BoardController::new();
        let transition = board.select_or_move(Square::G1);
        assert_eq!(
            transition,
            Transition::Selected {
                square: Square::G1,
                destinations: Bitboard::from(Square::F3) | Bitboard::from(Square::H3),
            }
        );
        assert_eq!(board.ui_state().selected, Some(Square::G1));
        assert_eq!(board.ui_state().dragged, None);
    }

    #[test]
    fn test_click_ignored() {
        let mut board = BoardController::new();
        assert_eq!(board.select_or_move(Square::E4), Transition::Ignored);
        assert_eq!(board.select_or_move(Square::E7), Transition::Ignored);
        assert!(board.ui_state().is_empty());
    }

    #[test]
    fn test_retarget() {
        let mut board = BoardController::new();
        board.select_or_move(Square::E2);
        let transition = board.select_or_move(Square::D2);
        assert!(matches!(transition, Transition::Selected { square: Square::D2, .. }));
        assert_eq!(board.ui_state().selected, Some(Square::D2));
        assert_eq!(
            board.ui_state().destinations,
            board.position().legal_destinations(Square::D2)
        );
    }

    #[test]
    fn test_abandon() {
        let mut board = BoardController::new();
        let fen = board.fen();
        board.select_or_move(Square::E2);
        let transition = board.select_or_move(Square::E5);
        assert_eq!(
            transition,
            Transition::Rejected {
                error: IllegalMoveError {
                    from: Square::E2,
                    to: Square::E5
                }
            }
        );
        assert!(board.ui_state().is_empty());
        assert_eq!(board.fen(), fen);
    }

    #[test]
    fn test_drag_clears_selection() {
        let mut board = BoardController::new();
        board.select_or_move(Square::E2);
        board.begin_drag(Square::B1).expect("own knight");
        assert_eq!(board.ui_state().selected, None);
        assert_eq!(board.ui_state().dragged, Some(Square::B1));
        assert_eq!(
            board.ui_state().destinations,
            Bitboard::from(Square::A3) | Bitboard::from(Square::C3)
        );
    }

    #[test]
    fn test_drag_refused() {
        let mut board = BoardController::new();
        assert_eq!(
            board.begin_drag(Square::E4),
            Err(InvalidSourceError::Empty { square: Square::E4 })
        );
        assert_eq!(
            board.begin_drag(Square::E7),
            Err(InvalidSourceError::WrongColor {
                square: Square::E7,
                turn: shakmaty::Color::White
            })
        );
        assert!(board.ui_state().is_empty());
    }

    #[test]
    fn test_drop_without_drag() {
        let mut board = BoardController::new();
        board.select_or_move(Square::E2);
        assert_eq!(board.drop_on(Square::E4), Transition::Ignored);
        assert_eq!(board.ui_state().selected, Some(Square::E2));
    }

    #[test]
    fn test_cancel_drag() {
        let mut board = BoardController::new();
        assert_eq!(board.cancel_drag(), Transition::Ignored);
        board.begin_drag(Square::E2).unwrap();
        assert_eq!(board.cancel_drag(), Transition::Cancelled);
        assert!(board.ui_state().is_empty());
    }

    #[test]
    fn test_set_options_drops_pending_promotion() {
        let mut board: BoardController = BoardController::from_fen(
            "8/4P1k1/8/8/8/8/8/4K3 w - - 0 1",
            BoardOptions::default().with_promotion(PromotionPolicy::Ask),
        )
        .unwrap();
        board.select_or_move(Square::E7);
        assert!(matches!(
            board.select_or_move(Square::E8),
            Transition::PromotionPending { .. }
        ));
        board.set_options(BoardOptions::default());
        assert!(board.ui_state().is_empty());
    }
}
