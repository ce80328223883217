#![no_main]

use libfuzzer_sys::fuzz_target;
use shakmaty_board::{BoardController, Rules};

fuzz_target!(|data: &[u8]| {
    let Ok(fen) = std::str::from_utf8(data) else {
        return;
    };
    let mut board = BoardController::new();
    let Ok(_) = board.load_fen(fen) else {
        return;
    };
    assert!(board.ui_state().is_empty());
    let roundtripped = BoardController::new().load_fen(&board.fen()).map(|_| ());
    assert!(roundtripped.is_ok());
    let _ = board.position().to_fen();
    let _ = board.view().to_string();
});
