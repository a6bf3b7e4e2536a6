//! Memory engine integration tests.

use pocket_arcade::core::{GameRng, MemoryConfig};
use pocket_arcade::games::memory::POINTS_PER_MATCH;
use pocket_arcade::games::MemoryState;
use proptest::prelude::*;

/// Index of the other card with the same value as `index`.
fn partner(state: &MemoryState, index: usize) -> usize {
    let value = state.cards()[index].value;
    state
        .cards()
        .iter()
        .position(|c| c.value == value && c.id != state.cards()[index].id)
        .unwrap()
}

/// Flip and resolve every pair in deck order.
fn solve(mut state: MemoryState) -> MemoryState {
    for i in 0..state.cards().len() {
        if state.cards()[i].is_matched {
            continue;
        }
        let j = partner(&state, i);
        state = state.flip(i).flip(j).resolve();
    }
    state
}

#[derive(Clone, Debug)]
enum Op {
    Flip(usize),
    Resolve,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..20).prop_map(Op::Flip),
        1 => Just(Op::Resolve),
    ]
}

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn test_deal_has_every_value_twice() {
    let state = MemoryState::new(&MemoryConfig::default(), 0, GameRng::new(8));
    assert_eq!(state.cards().len(), 16);

    let mut values: Vec<u32> = state.cards().iter().map(|c| c.value).collect();
    values.sort_unstable();
    let expected: Vec<u32> = (1..=8).flat_map(|v| [v, v]).collect();
    assert_eq!(values, expected);
    assert!(state.cards().iter().all(|c| c.is_selectable()));
}

#[test]
fn test_deal_depends_on_seed() {
    let config = MemoryConfig::default();
    let a = MemoryState::new(&config, 0, GameRng::new(1));
    let b = MemoryState::new(&config, 0, GameRng::new(1));
    let c = MemoryState::new(&config, 0, GameRng::new(2));

    assert_eq!(a, b);
    assert_ne!(a.cards(), c.cards());
}

// =============================================================================
// Flip and Resolve
// =============================================================================

#[test]
fn test_match_keeps_cards_up() {
    let state = MemoryState::from_values(&[1, 2, 1, 2], 0);
    let after = state.flip(0).flip(2).resolve();

    assert!(after.cards()[0].is_matched && after.cards()[2].is_matched);
    assert!(after.cards()[0].is_flipped);
    assert!(after.flipped().is_empty());
    assert_eq!(after.score(), POINTS_PER_MATCH);
    assert_eq!(after.matched_pairs(), 1);
}

#[test]
fn test_mismatch_turns_cards_back() {
    let state = MemoryState::from_values(&[1, 2, 1, 2], 0);
    let after = state.flip(0).flip(1).resolve();

    assert!(after.cards().iter().all(|c| !c.is_flipped && !c.is_matched));
    assert!(after.flipped().is_empty());
    assert_eq!(after.score(), 0);
    assert_eq!(after.moves(), 2);
}

#[test]
fn test_third_flip_waits_for_resolve() {
    let state = MemoryState::from_values(&[1, 2, 1, 2], 0).flip(0).flip(1);
    assert!(state.is_resolution_pending());
    assert_eq!(state.flip(2), state);
}

#[test]
fn test_cleared_board_ignores_flips() {
    let done = solve(MemoryState::new(&MemoryConfig::default(), 30, GameRng::new(4)));

    assert!(done.is_game_over());
    assert_eq!(done.matched_pairs(), 8);
    assert_eq!(done.score(), 8 * POINTS_PER_MATCH);
    assert_eq!(done.high_score(), 80);
    assert_eq!(done.moves(), 16);

    for i in 0..done.cards().len() {
        assert_eq!(done.flip(i), done);
    }
}

#[test]
fn test_custom_pair_count() {
    let config = MemoryConfig::default().with_pair_count(3);
    let done = solve(MemoryState::new(&config, 0, GameRng::new(12)));
    assert_eq!(done.cards().len(), 6);
    assert!(done.is_game_over());
    assert_eq!(done.score(), 30);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_flipped_never_exceeds_two(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..200)) {
        let mut state = MemoryState::new(&MemoryConfig::default(), 0, GameRng::new(seed));
        for op in ops {
            let next = match op {
                Op::Flip(i) => state.flip(i),
                Op::Resolve => state.resolve(),
            };

            prop_assert!(next.flipped().len() <= 2);
            if let Op::Flip(_) = op {
                if state.flipped().len() == 2 {
                    prop_assert_eq!(&next, &state);
                }
            }
            prop_assert!(next.score() >= state.score());
            prop_assert_eq!(next.score(), next.matched_pairs() as u32 * POINTS_PER_MATCH);
            prop_assert_eq!(next.is_game_over(), next.cards().iter().all(|c| c.is_matched));

            state = next;
        }
    }
}
