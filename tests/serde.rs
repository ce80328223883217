#![cfg(feature = "serde")]

use shakmaty_board::{DrawReason, GameStatus, PromotionPolicy};

#[test]
fn status_json() {
    assert_eq!(
        serde_json::to_string(&GameStatus::Checkmate).unwrap(),
        "\"Checkmate\""
    );
    assert_eq!(
        serde_json::from_str::<DrawReason>("\"ThreefoldRepetition\"").unwrap(),
        DrawReason::ThreefoldRepetition
    );
}

#[test]
fn promotion_policy_json() {
    let json = serde_json::to_string(&PromotionPolicy::Ask).unwrap();
    assert_eq!(
        serde_json::from_str::<PromotionPolicy>(&json).unwrap(),
        PromotionPolicy::Ask
    );
}
