//! Conversion between packed 128-bit blocks and the cipher state.
//!
//! A packed block is read most significant byte first. Byte `i` of that
//! sequence belongs to word `i / 4`; words are assigned to state columns in
//! reverse (word 0 becomes column 3) while each word's bytes fill its column
//! top to bottom. [`pack`] is the exact inverse of [`unpack`].

use crate::block::{PackedBlock, BLOCK_LEN};
use crate::error::{Error, Result};
use crate::state::State;

/// Spreads a packed block over a fresh state.
pub fn unpack(block: PackedBlock) -> State {
    let bytes = block.to_be_bytes();
    let mut state = State::default();
    for (i, &byte) in bytes.iter().enumerate() {
        state.set(i % 4, 3 - i / 4, byte);
    }
    state
}

/// Collects a state back into a packed block.
pub fn pack(state: &State) -> PackedBlock {
    let mut bytes = [0u8; BLOCK_LEN];
    for col in 0..4 {
        for row in 0..4 {
            bytes[(3 - col) * 4 + row] = state.get(row, col);
        }
    }
    PackedBlock::from_be_bytes(bytes)
}

/// Reads one packed block from its 16-byte big-endian serialization.
pub fn packed_from_slice(bytes: &[u8]) -> Result<PackedBlock> {
    let bytes: [u8; BLOCK_LEN] = bytes.try_into().map_err(|_| Error::InvalidBlockLength {
        expected: BLOCK_LEN,
        actual: bytes.len(),
    })?;
    Ok(PackedBlock::from_be_bytes(bytes))
}

/// Splits a buffer into packed blocks.
///
/// The whole buffer is validated before anything is returned: a trailing
/// partial block is rejected with its length.
pub fn blocks_from_bytes(data: &[u8]) -> Result<Vec<PackedBlock>> {
    let tail = data.len() % BLOCK_LEN;
    if tail != 0 {
        return Err(Error::InvalidBlockLength {
            expected: BLOCK_LEN,
            actual: tail,
        });
    }
    data.chunks_exact(BLOCK_LEN).map(packed_from_slice).collect()
}

/// Serializes packed blocks back to big-endian bytes.
pub fn blocks_to_bytes(blocks: &[PackedBlock]) -> Vec<u8> {
    blocks.iter().flat_map(|block| block.to_be_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn unpack_places_words_in_reverse_columns() {
        let state = unpack(0x0001_0203_0405_0607_0809_0a0b_0c0d_0e0f);
        assert_eq!(state.column(3), [0x00, 0x01, 0x02, 0x03]);
        assert_eq!(state.column(2), [0x04, 0x05, 0x06, 0x07]);
        assert_eq!(state.column(0), [0x0c, 0x0d, 0x0e, 0x0f]);
        assert_eq!(state.get(1, 3), 0x01);
    }

    #[test]
    fn packed_nist_plaintext_lands_in_fips_order() {
        let state = unpack(0x7393172a_e93d7e11_2e409f96_6bc1bee2);
        assert_eq!(
            hex::encode(state.as_bytes()),
            "6bc1bee22e409f96e93d7e117393172a"
        );
    }

    #[test]
    fn pack_reverses_words_of_fips_ciphertext() {
        let bytes: [u8; 16] = hex::decode("3ad77bb40d7a3660a89ecaf32466ef97")
            .unwrap()
            .try_into()
            .unwrap();
        assert_eq!(
            pack(&State::from_bytes(bytes)),
            0x2466ef97_a89ecaf3_0d7a3660_3ad77bb4
        );
    }

    #[test]
    fn pack_unpack_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..256 {
            let mut bytes = [0u8; 16];
            rng.fill_bytes(&mut bytes);
            let value = u128::from_le_bytes(bytes);
            assert_eq!(pack(&unpack(value)), value);
        }
        assert_eq!(pack(&unpack(0)), 0);
        assert_eq!(pack(&unpack(u128::MAX)), u128::MAX);
    }

    #[test]
    fn buffer_must_hold_whole_blocks() {
        assert_eq!(
            blocks_from_bytes(&[0u8; 33]),
            Err(Error::InvalidBlockLength {
                expected: 16,
                actual: 1
            })
        );
        assert_eq!(blocks_from_bytes(&[]), Ok(Vec::new()));
        assert_eq!(
            packed_from_slice(&[0u8; 8]).unwrap_err(),
            Error::InvalidBlockLength {
                expected: 16,
                actual: 8
            }
        );
    }

    #[test]
    fn buffer_blocks_are_big_endian() {
        let mut data = vec![0u8; 32];
        data[15] = 0x01;
        data[16] = 0x80;
        let blocks = blocks_from_bytes(&data).unwrap();
        assert_eq!(blocks, vec![1u128, 1u128 << 127]);
        assert_eq!(blocks_to_bytes(&blocks), data);
    }
}
