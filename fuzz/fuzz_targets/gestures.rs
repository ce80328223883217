#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shakmaty_board::{
    BoardController, BoardOptions, PromotionPolicy, Rules, Transition,
    shakmaty::{Chess, Color, Role, Square},
};

#[derive(Arbitrary, Debug)]
enum Gesture {
    Click(u8),
    DragStart(u8),
    Drop(u8),
    DragEnd,
    Promote(u8),
    CancelPromotion,
    Reset,
}

fn square(index: u8) -> Square {
    Square::new(u32::from(index % 64))
}

#[derive(Arbitrary, Debug)]
struct Data {
    ask: bool,
    flipped: bool,
    gestures: Vec<Gesture>,
}

fuzz_target!(|data: Data| {
    let mut options = BoardOptions::default();
    if data.ask {
        options = options.with_promotion(PromotionPolicy::Ask);
    }
    if data.flipped {
        options = options.with_orientation(Color::Black);
    }
    let mut board = BoardController::<Chess>::with_options(options);

    for gesture in data.gestures {
        let before = board.position().clone();
        let transition = match gesture {
            Gesture::Click(sq) => board.select_or_move(square(sq)),
            Gesture::DragStart(sq) => board
                .begin_drag(square(sq))
                .unwrap_or(Transition::Ignored),
            Gesture::Drop(sq) => board.drop_on(square(sq)),
            Gesture::DragEnd => board.cancel_drag(),
            Gesture::Promote(role) => {
                let role = [Role::Pawn, Role::Knight, Role::Bishop, Role::Rook, Role::Queen, Role::King]
                    [usize::from(role % 6)];
                board.choose_promotion(role)
            }
            Gesture::CancelPromotion => board.cancel_promotion(),
            Gesture::Reset => board.reset(),
        };

        let ui = board.ui_state();
        if !transition.is_move() && !matches!(transition, Transition::Reset) {
            assert_eq!(board.position().to_fen(), before.to_fen());
        }
        if ui.pending_promotion.is_some() {
            assert!(ui.selected.is_none() && ui.dragged.is_none());
        }
        match ui.source() {
            Some(source) => {
                assert_eq!(ui.destinations, board.position().legal_destinations(source));
                let piece = board.position().piece_at(source).expect("source has a piece");
                assert_eq!(piece.color, board.position().turn_to_move());
            }
            None => assert!(ui.destinations.is_empty()),
        }

        let _ = board.view().to_string();
    }
});
