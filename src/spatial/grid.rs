//! Block grid geometry for the resized target image

/// One grid cell of the target image, identified by row and column
///
/// A block owns no pixel data, only coordinates; its average color is
/// derived by the sampler when needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    /// Zero-based row index
    pub row: u32,
    /// Zero-based column index
    pub col: u32,
}

/// Partition of the target image into equal square blocks
///
/// Row and column counts are floor divisions of the target dimensions by
/// the block size; any remainder margin on the right and bottom edges is
/// ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockGrid {
    rows: u32,
    cols: u32,
    block_size: u32,
}

impl BlockGrid {
    /// Partition a `width` x `height` target into `block_size` blocks
    ///
    /// # Panics
    ///
    /// Panics if `block_size` is zero; configuration validation rejects
    /// that before a grid is ever built.
    pub const fn new(width: u32, height: u32, block_size: u32) -> Self {
        Self {
            rows: height / block_size,
            cols: width / block_size,
            block_size,
        }
    }

    /// Number of block rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of block columns
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Block edge length in pixels
    pub const fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Total number of blocks
    pub const fn block_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Pixel origin (left, top) of a block
    pub const fn origin(&self, block: Block) -> (u32, u32) {
        (block.col * self.block_size, block.row * self.block_size)
    }

    /// Row-major iterator over all blocks
    pub fn blocks(self) -> impl Iterator<Item = Block> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Block { row, col }))
    }
}
