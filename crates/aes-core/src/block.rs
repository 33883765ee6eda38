//! Block representation helpers.

/// AES block of 16 bytes in conventional FIPS-197 order.
pub type Block = [u8; 16];

/// A block packed into one 128-bit word, as it crosses the external interface.
pub type PackedBlock = u128;

/// Block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
