//! AES-128 forward cipher over a single state.

use crate::block::Block;
use crate::key::{RoundKeySchedule, ROUNDS};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::state::State;

/// Runs the full 10-round forward cipher on `state` in place.
///
/// Round 0 is a bare key addition, rounds 1..=9 apply all four primitives and
/// the final round skips MixColumns.
pub fn encrypt_state(state: &mut State, round_keys: &RoundKeySchedule) {
    add_round_key(state, round_keys, 0);

    for round in 1..ROUNDS {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, round_keys, round);
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, round_keys, ROUNDS);
}

/// Encrypts a single 16-byte block given in conventional byte order.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeySchedule) -> Block {
    let mut state = State::from_bytes(*block);
    encrypt_state(&mut state, round_keys);
    state.into_bytes()
}
