use std::fmt::{self, Debug, Formatter, Write as _};

use bitvec::{slice::BitSlice, vec::BitVec};

use crate::error::GraphError;

/// Square 0/1 adjacency matrix.
///
/// Entries are stored in a single row-major bitvec: entry `(row, col)` lives
/// at bit `row * size + col`.  The bitvec always holds exactly `size * size`
/// bits, so every row is a contiguous slice and the matrix is square by
/// construction.  Growing or shrinking the matrix rebuilds the storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    bits: BitVec,
    size: usize,
}

impl AdjacencyMatrix {
    /// Creates a new, empty (0×0) adjacency matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an all-zero matrix with `size` rows and columns.
    pub fn with_size(size: usize) -> Self {
        let mut bits = BitVec::with_capacity(size * size);
        bits.resize(size * size, false);
        AdjacencyMatrix { bits, size }
    }

    /// Builds a matrix from rows of 0/1 values.
    ///
    /// Every row must have exactly as many cells as there are rows, and every
    /// cell must be `0` or `1`.
    pub fn try_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GraphError> {
        let size = rows.len();
        let mut matrix = Self::with_size(size);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(GraphError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                match value {
                    0 => {}
                    1 => {
                        let idx = matrix.unchecked_index(row, col);
                        matrix.bits.set(idx, true);
                    }
                    _ => return Err(GraphError::InvalidCell { row, col, value }),
                }
            }
        }
        Ok(matrix)
    }

    /// Returns the number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| self.unchecked_index(row, col))
    }

    fn unchecked_index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn row_bits(&self, row: usize) -> &BitSlice {
        let start = self.unchecked_index(row, 0);
        &self.bits[start..start + self.size]
    }

    /// Returns `true` if the entry at `row` and `col` is set.  Entries
    /// outside the matrix read as unset.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|idx| self.bits[idx])
    }

    /// Sets the entry at `row` and `col` to `value`.  Returns the previous
    /// value, or `None` if the coordinates are outside the matrix, in which
    /// case nothing changes.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Option<bool> {
        let idx = self.index(row, col)?;
        Some(self.bits.replace(idx, value))
    }

    /// Appends one all-zero column to every row and one all-zero row at the
    /// bottom.  Returns the index of the new row/column.
    pub fn grow(&mut self) -> usize {
        let old_size = self.size;
        let mut grown = Self::with_size(old_size + 1);
        for row in 0..old_size {
            let start = grown.unchecked_index(row, 0);
            grown.bits[start..start + old_size].copy_from_bitslice(self.row_bits(row));
        }
        *self = grown;
        old_size
    }

    /// Deletes row `index` and column `index`, shifting every later row and
    /// column down by one.  The remaining entries keep their relative order.
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn remove_row_and_column(&mut self, index: usize) -> bool {
        if index >= self.size {
            return false;
        }
        let mut shrunk = Self::with_size(self.size - 1);
        let new_size = shrunk.size;
        for (new_row, old_row) in (0..self.size).filter(|&row| row != index).enumerate() {
            let source = self.row_bits(old_row);
            let start = shrunk.unchecked_index(new_row, 0);
            let target = &mut shrunk.bits[start..start + new_size];
            target[..index].copy_from_bitslice(&source[..index]);
            target[index..].copy_from_bitslice(&source[index + 1..]);
        }
        *self = shrunk;
        true
    }

    /// Returns the given row as a bit slice, if it exists.
    pub fn row(&self, row: usize) -> Option<&BitSlice> {
        (row < self.size).then(|| self.row_bits(row))
    }

    /// Iterates over all rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &BitSlice> + '_ {
        (0..self.size).map(|row| self.row_bits(row))
    }

    /// Iterates, in ascending order, over the columns set in the given row.
    pub fn entries_in_row(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(row).into_iter().flat_map(|bits| bits.iter_ones())
    }

    /// Iterates, in ascending order, over the rows set in the given column.
    pub fn entries_in_col(&self, col: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&row| self.get(row, col))
    }

    /// Number of set entries in a row (the out-degree of its vertex).
    pub fn row_sum(&self, row: usize) -> usize {
        self.row(row).map_or(0, |bits| bits.count_ones())
    }

    /// Number of set entries in a column (the in-degree of its vertex).
    pub fn col_sum(&self, col: usize) -> usize {
        self.entries_in_col(col).count()
    }

    /// Total number of set entries.
    pub fn entry_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterates over all set entries as `(row, col)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bits
            .iter_ones()
            .map(|idx| (idx / self.size, idx % self.size))
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair of indices.
    /// An empty matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Copies the matrix out as rows of `0`/`1` values.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|bit| u8::from(*bit)).collect())
            .collect()
    }

    /// Formats the matrix as a list of bit strings, one per row.
    pub(crate) fn format_rows(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows().map(RowBits)).finish()
    }
}

/// Debug-formats a row as a string of `0`s and `1`s.
struct RowBits<'a>(&'a BitSlice);

impl Debug for RowBits<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|bit| f.write_char(if *bit { '1' } else { '0' }))
    }
}
