//! The 4x4 byte matrix the round functions operate on.

use crate::block::{Block, BLOCK_LEN};

/// Cipher state for one block, stored column by column.
///
/// Byte `(row, col)` lives at offset `col * 4 + row`, so the backing array is
/// exactly the conventional AES byte order of the block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State(Block);

impl State {
    /// Wraps bytes given in conventional block order.
    #[inline]
    pub const fn from_bytes(bytes: Block) -> Self {
        Self(bytes)
    }

    /// Returns the bytes in conventional block order.
    #[inline]
    pub const fn into_bytes(self) -> Block {
        self.0
    }

    /// Borrows the backing bytes.
    #[inline]
    pub fn as_bytes(&self) -> &Block {
        &self.0
    }

    /// Mutably borrows the backing bytes.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut Block {
        &mut self.0
    }

    /// Offset of `(row, col)` in the backing array.
    #[inline]
    pub const fn offset(row: usize, col: usize) -> usize {
        debug_assert!(row < 4 && col < 4);
        col * 4 + row
    }

    /// Reads the byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[Self::offset(row, col)]
    }

    /// Writes the byte at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.0[Self::offset(row, col)] = value;
    }

    /// Copies out column `col`, top row first.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        let start = Self::offset(0, col);
        [
            self.0[start],
            self.0[start + 1],
            self.0[start + 2],
            self.0[start + 3],
        ]
    }

    /// Overwrites column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: [u8; 4]) {
        let start = Self::offset(0, col);
        self.0[start..start + 4].copy_from_slice(&column);
    }

    /// Copies out row `row`, leftmost column first.
    #[inline]
    pub fn row(&self, row: usize) -> [u8; 4] {
        core::array::from_fn(|col| self.get(row, col))
    }

    /// Overwrites row `row`.
    #[inline]
    pub fn set_row(&mut self, row: usize, values: [u8; 4]) {
        for (col, value) in values.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }
}

impl From<Block> for State {
    fn from(bytes: Block) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.into_bytes()
    }
}

const _: () = assert!(State::offset(3, 3) == BLOCK_LEN - 1);

#[cfg(test)]
mod tests {
    use super::*;

    fn counting() -> State {
        State::from_bytes(core::array::from_fn(|i| i as u8))
    }

    #[test]
    fn columns_are_contiguous() {
        let state = counting();
        assert_eq!(state.column(0), [0, 1, 2, 3]);
        assert_eq!(state.column(3), [12, 13, 14, 15]);
    }

    #[test]
    fn rows_stride_across_columns() {
        let state = counting();
        assert_eq!(state.row(0), [0, 4, 8, 12]);
        assert_eq!(state.row(2), [2, 6, 10, 14]);
        assert_eq!(state.get(1, 2), 9);
    }

    #[test]
    fn set_row_and_column_write_through() {
        let mut state = State::default();
        state.set_row(1, [0xa0, 0xa1, 0xa2, 0xa3]);
        state.set_column(3, [0xb0, 0xb1, 0xb2, 0xb3]);
        assert_eq!(state.get(1, 0), 0xa0);
        assert_eq!(state.get(1, 3), 0xb1);
        assert_eq!(state.as_bytes()[State::offset(1, 3)], 0xb1);
        assert_eq!(state.as_bytes()[State::offset(2, 2)], 0);
    }
}
