//! AES round transformations.

use crate::block::xor_in_place;
use crate::key::RoundKeySchedule;
use crate::sbox::sbox;
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.as_bytes_mut().iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        let mut values = state.row(row);
        values.rotate_left(row);
        state.set_row(row, values);
    }
}

/// Multiplies by `x` in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mut column = state.column(col);
        mix_single_column(&mut column);
        state.set_column(col, column);
    }
}

/// Adds (XORs) round key `round` into the state.
///
/// Byte `(row, col)` meets schedule byte `round * 16 + col * 4 + row`.
#[inline]
pub fn add_round_key(state: &mut State, schedule: &RoundKeySchedule, round: usize) {
    xor_in_place(state.as_bytes_mut(), schedule.get(round));
}
