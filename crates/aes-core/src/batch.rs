//! Encryption of packed block batches under one key.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::block::PackedBlock;
use crate::cipher::encrypt_state;
use crate::error::Result;
use crate::key::{packed_key_from_slice, Aes128Key, RoundKeySchedule};
use crate::marshal::{blocks_from_bytes, blocks_to_bytes, pack, unpack};
use crate::schedule::expand_key;

/// Encrypts one packed block: unpack, run the cipher, pack.
#[inline]
pub fn encrypt_packed_block(block: PackedBlock, round_keys: &RoundKeySchedule) -> PackedBlock {
    let mut state = unpack(block);
    encrypt_state(&mut state, round_keys);
    pack(&state)
}

/// Encrypts every block independently, in input order.
pub fn encrypt_blocks_with(
    round_keys: &RoundKeySchedule,
    blocks: &[PackedBlock],
) -> Vec<PackedBlock> {
    log::trace!("encrypting {} block(s) sequentially", blocks.len());
    blocks
        .iter()
        .map(|&block| encrypt_packed_block(block, round_keys))
        .collect()
}

/// Parallel counterpart of [`encrypt_blocks_with`] on the rayon pool.
///
/// Output order and values are identical to the sequential path.
#[cfg(feature = "parallel")]
pub fn par_encrypt_blocks(
    round_keys: &RoundKeySchedule,
    blocks: &[PackedBlock],
) -> Vec<PackedBlock> {
    log::trace!("encrypting {} block(s) in parallel", blocks.len());
    blocks
        .par_iter()
        .map(|&block| encrypt_packed_block(block, round_keys))
        .collect()
}

/// Expands `key` once and encrypts `blocks` in ECB fashion.
pub fn encrypt_blocks(key: &Aes128Key, blocks: &[PackedBlock]) -> Vec<PackedBlock> {
    Aes128::new(key).encrypt_blocks(blocks)
}

/// Encrypts a buffer of packed blocks under a packed key.
///
/// `key` is the big-endian serialization of a packed key and `data` a
/// sequence of big-endian packed blocks. Both lengths are checked before any
/// block is encrypted.
pub fn encrypt_packed_bytes(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes128::from_packed_key(packed_key_from_slice(key)?);
    let blocks = blocks_from_bytes(data)?;
    Ok(blocks_to_bytes(&cipher.encrypt_blocks(&blocks)))
}

/// AES-128 encryptor holding an expanded key schedule.
#[derive(Clone, Debug)]
pub struct Aes128 {
    round_keys: RoundKeySchedule,
}

impl Aes128 {
    /// Expands `key` into a ready-to-use cipher.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Builds a cipher from a packed 128-bit key.
    pub fn from_packed_key(key: PackedBlock) -> Self {
        Self::new(&Aes128Key::from_packed(key))
    }

    /// Returns the expanded schedule.
    pub fn round_keys(&self) -> &RoundKeySchedule {
        &self.round_keys
    }

    /// Encrypts a single packed block.
    pub fn encrypt_packed(&self, block: PackedBlock) -> PackedBlock {
        encrypt_packed_block(block, &self.round_keys)
    }

    /// Encrypts blocks sequentially.
    pub fn encrypt_blocks(&self, blocks: &[PackedBlock]) -> Vec<PackedBlock> {
        log::debug!("batch of {} block(s)", blocks.len());
        encrypt_blocks_with(&self.round_keys, blocks)
    }

    /// Encrypts blocks on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn par_encrypt_blocks(&self, blocks: &[PackedBlock]) -> Vec<PackedBlock> {
        log::debug!("parallel batch of {} block(s)", blocks.len());
        par_encrypt_blocks(&self.round_keys, blocks)
    }
}
