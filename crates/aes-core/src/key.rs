//! Key types for AES-128.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::error::{Error, Result};

/// Key length in bytes.
pub const KEY_LEN: usize = 16;

/// Number of rounds for AES-128.
pub const ROUNDS: usize = 10;

/// AES-128 key wrapper, bytes in conventional FIPS-197 order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aes128Key(pub [u8; KEY_LEN]);

impl Aes128Key {
    /// Builds a key from its packed 128-bit form, see [`unpack_key`].
    pub fn from_packed(packed: u128) -> Self {
        Self(unpack_key(packed))
    }

    /// Borrows the key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for Aes128Key {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LEN] = value.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: KEY_LEN,
            actual: value.len(),
        })?;
        Ok(Self(bytes))
    }
}

/// Extracts key bytes from a packed 128-bit key.
///
/// The packed value is read most significant byte first and split into four
/// 4-byte words. The words land in reverse order while the bytes inside each
/// word keep their order: word `w` goes to key offset `(3 - w) * 4`.
pub fn unpack_key(packed: u128) -> [u8; KEY_LEN] {
    let bytes = packed.to_be_bytes();
    let mut key = [0u8; KEY_LEN];
    for (word, chunk) in bytes.chunks_exact(4).enumerate() {
        let offset = (3 - word) * 4;
        key[offset..offset + 4].copy_from_slice(chunk);
    }
    key
}

/// Reads a packed key from its 16-byte big-endian serialization.
pub fn packed_key_from_slice(bytes: &[u8]) -> Result<u128> {
    let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|_| Error::InvalidKeyLength {
        expected: KEY_LEN,
        actual: bytes.len(),
    })?;
    Ok(u128::from_be_bytes(bytes))
}

/// Expanded round keys for AES-128, one 16-byte group per round `0..=10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundKeySchedule(pub [Block; ROUNDS + 1]);

impl RoundKeySchedule {
    /// Total schedule size in bytes.
    pub const LEN: usize = (ROUNDS + 1) * KEY_LEN;

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates over the round keys in round order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }

    /// Flattens the schedule into its 176-byte form.
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut out = [0u8; Self::LEN];
        for (dst, round_key) in out.chunks_exact_mut(KEY_LEN).zip(self.0.iter()) {
            dst.copy_from_slice(round_key);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpack_key_reverses_word_order_only() {
        let key = unpack_key(0x0001_0203_0405_0607_0809_0a0b_0c0d_0e0f);
        assert_eq!(
            key,
            [
                0x0c, 0x0d, 0x0e, 0x0f, 0x08, 0x09, 0x0a, 0x0b, 0x04, 0x05, 0x06, 0x07, 0x00, 0x01,
                0x02, 0x03
            ]
        );
    }

    #[test]
    fn packed_nist_key_unpacks_to_conventional_bytes() {
        let key = Aes128Key::from_packed(0x09cf4f3c_abf71588_28aed2a6_2b7e1516);
        assert_eq!(
            key.as_bytes().as_slice(),
            hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap()
        );
    }

    #[test]
    fn key_from_slice_checks_length() {
        assert_eq!(
            Aes128Key::try_from([0u8; 15].as_slice()),
            Err(Error::InvalidKeyLength {
                expected: 16,
                actual: 15
            })
        );
        assert_eq!(
            Aes128Key::try_from([0u8; 17].as_slice()).unwrap_err(),
            Error::InvalidKeyLength {
                expected: 16,
                actual: 17
            }
        );
        let key = Aes128Key::try_from([7u8; 16].as_slice()).unwrap();
        assert_eq!(key, Aes128Key::from([7u8; 16]));
    }

    #[test]
    fn schedule_flattens_in_round_order() {
        let schedule = RoundKeySchedule(core::array::from_fn(|round| [round as u8; 16]));
        let flat = schedule.to_bytes();
        assert_eq!(flat.len(), 176);
        assert_eq!(&flat[..16], &[0u8; 16]);
        assert_eq!(&flat[160..], &[10u8; 16]);
        assert_eq!(schedule.iter().count(), 11);
    }
}
