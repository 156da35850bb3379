use damas_core::board::Board;
use damas_core::memo::{Memo, MemoError, MemoizedRules};
use damas_core::movegen::legal_moves;
use damas_core::notation::parse_board;
use damas_core::transition::is_valid_transition;
use damas_core::types::{Player, Square};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("valid square")
}

#[test]
fn get_counts_hits_and_misses_fail_explicitly() {
    let mut memo: Memo<&str, i32> = Memo::new();
    assert_eq!(memo.get(&"missing"), Err(MemoError::KeyNotFound));

    memo.insert("answer", 42);
    assert!(memo.contains(&"answer"));
    assert_eq!(memo.hits(&"answer"), Some(0));

    assert_eq!(memo.get(&"answer"), Ok(&42));
    assert_eq!(memo.get(&"answer"), Ok(&42));
    assert_eq!(memo.hits(&"answer"), Some(2));
}

#[test]
fn overwriting_resets_the_hit_counter() {
    let mut memo: Memo<&str, i32> = Memo::new();
    memo.insert("key", 1);
    let _ = memo.get(&"key");
    let _ = memo.get(&"key");
    assert_eq!(memo.hits(&"key"), Some(2));

    memo.insert("key", 2);
    assert_eq!(memo.hits(&"key"), Some(0));
    assert_eq!(memo.get(&"key"), Ok(&2));
}

#[test]
fn remove_is_strict_about_missing_keys() {
    let mut memo: Memo<u32, u32> = Memo::new();
    memo.insert(1, 10);
    assert_eq!(memo.remove(&1), Ok(10));
    assert_eq!(memo.remove(&1), Err(MemoError::KeyNotFound));
    assert!(memo.is_empty());
}

#[test]
fn trim_evicts_the_least_used_ninety_percent() {
    let mut memo: Memo<u32, u32> = Memo::new();
    for key in 0..10u32 {
        memo.insert(key, key * 100);
        for _ in 0..key {
            let _ = memo.get(&key);
        }
    }
    assert_eq!(memo.len(), 10);

    let evicted = memo.trim();
    assert_eq!(evicted, 9);
    assert_eq!(memo.len(), 1);
    // only the hottest key survives
    assert!(memo.contains(&9));
}

#[test]
fn trim_of_a_tiny_cache_removes_nothing() {
    let mut memo: Memo<u32, u32> = Memo::new();
    memo.insert(1, 1);
    assert_eq!(memo.trim(), 0);
    assert_eq!(memo.len(), 1);
}

#[test]
fn memoized_generation_matches_the_direct_call() {
    let board = Board::new();
    let mut rules = MemoizedRules::new();

    let first = rules.legal_moves(&board, Player::White);
    let second = rules.legal_moves(&board, Player::White);
    assert_eq!(first, second);
    assert_eq!(first, legal_moves(&board, Player::White));

    // distinct players are distinct keys
    let _ = rules.legal_moves(&board, Player::Black);
    assert_eq!(rules.len(), 2);
}

#[test]
fn memoized_validation_is_idempotent() {
    let before = parse_board(
        "x.x.x.x./.x.x.x.x/x.x.x.x./.x.x.x.x/x.x.x.x./.xbx.x.x/x.xwx.x./.x.x.x.x",
    )
    .unwrap();
    let after = parse_board(
        "x.x.x.x./.x.x.x.x/x.x.x.x./.x.x.x.x/xwx.x.x./.x.x.x.x/x.x.x.x./.x.x.x.x",
    )
    .unwrap();

    let mut rules = MemoizedRules::new();
    let direct = is_valid_transition(&before, &after, sq(6, 3), sq(4, 1));
    for _ in 0..5 {
        assert_eq!(
            rules.is_valid_transition(&before, &after, sq(6, 3), sq(4, 1)),
            direct
        );
    }
    assert!(direct);

    // a rejected transition caches the rejection, not an error
    let bogus = rules.is_valid_transition(&before, &after, sq(6, 3), sq(4, 3));
    assert!(!bogus);
    assert_eq!(
        rules.is_valid_transition(&before, &after, sq(6, 3), sq(4, 3)),
        bogus
    );
}

#[test]
fn memoized_rules_trim_keeps_working() {
    let board = Board::new();
    let mut rules = MemoizedRules::new();
    let baseline = rules.legal_moves(&board, Player::White);

    // single-entry caches are below the trim floor
    assert_eq!(rules.trim(), 0);
    assert_eq!(rules.legal_moves(&board, Player::White), baseline);
}
