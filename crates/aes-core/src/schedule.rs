//! AES-128 key expansion.

use crate::key::{Aes128Key, RoundKeySchedule, KEY_LEN, ROUNDS};
use crate::sbox::{rcon, sbox};

/// Words per round key (Nb).
const NB: usize = 4;
/// Words in the cipher key (Nk).
const NK: usize = KEY_LEN / 4;
/// Words in the full schedule.
const WORDS: usize = NB * (ROUNDS + 1);

type Word = [u8; 4];

fn rot_word(mut word: Word) -> Word {
    word.rotate_left(1);
    word
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

/// Expands a 128-bit key into 11 round keys.
///
/// Round key 0 is the key itself; each later word is the word four positions
/// back XORed with its predecessor, which is rotated, substituted and mixed
/// with the round constant at the start of every round key.
pub fn expand_key(key: &Aes128Key) -> RoundKeySchedule {
    let mut w = [[0u8; 4]; WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in NK..WORDS {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= rcon(i / NK);
        }
        let back = w[i - NK];
        w[i] = core::array::from_fn(|b| back[b] ^ temp[b]);
    }

    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(NB)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(word);
        }
    }

    log::debug!("expanded AES-128 key schedule into {} round keys", ROUNDS + 1);
    RoundKeySchedule(round_keys)
}
