//! AES-128 forward cipher over packed 128-bit blocks.
//!
//! This crate mirrors FIPS-197 and provides:
//! - Key schedule for AES-128.
//! - The four round primitives over an explicit 4x4 byte state.
//! - Single-block encryption, in conventional byte order or through the
//!   packed-block marshaller.
//! - ECB-style batch encryption, optionally spread over a rayon pool.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod batch;
mod block;
mod cipher;
mod error;
mod key;
pub mod marshal;
pub mod round;
pub mod sbox;
mod schedule;
mod state;

#[cfg(feature = "parallel")]
pub use crate::batch::par_encrypt_blocks;
pub use crate::batch::{
    encrypt_blocks, encrypt_blocks_with, encrypt_packed_block, encrypt_packed_bytes, Aes128,
};
pub use crate::block::{Block, PackedBlock, BLOCK_LEN};
pub use crate::cipher::{encrypt_block, encrypt_state};
pub use crate::error::{Error, Result};
pub use crate::key::{
    packed_key_from_slice, unpack_key, Aes128Key, RoundKeySchedule, KEY_LEN, ROUNDS,
};
pub use crate::schedule::expand_key;
pub use crate::state::State;
