//! Arrangement of cells in a symbol.
//!
//! Every cell belongs to exactly one [Region]. Finder and timing cells form
//! a fixed skeleton which is identical for all payloads, the remaining data
//! cells are filled from the encoded sequence (see [synthesize_grid]).
//!
//! The result is a [Bitmap], which also contains helpers for rendering.
use tracing::trace;

use crate::symbol_size::{FinderCorner, SymbolSize, FINDER_LEN, TIMING_LINE};

/// Structural role of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Part of the 7×7 finder region in the given corner.
    Finder(FinderCorner),
    /// On the timing row or column, always filled.
    Timing,
    /// Filled depending on the payload.
    Data,
}

/// Classify the cell at `(row, col)`.
pub fn classify_cell(row: usize, col: usize, size: SymbolSize) -> Region {
    if let Some(corner) = size.finder_at(row, col) {
        Region::Finder(corner)
    } else if row == TIMING_LINE || col == TIMING_LINE {
        Region::Timing
    } else {
        Region::Data
    }
}

/// Check if `(row, col)` is dark in the finder region starting at `origin`.
///
/// A finder region is a filled 7×7 border around a filled 3×3 center,
/// separated by an empty ring. Cells outside the region are never filled.
pub fn is_finder_filled(row: usize, col: usize, origin: (usize, usize)) -> bool {
    let (Some(r), Some(c)) = (row.checked_sub(origin.0), col.checked_sub(origin.1)) else {
        return false;
    };
    if r >= FINDER_LEN || c >= FINDER_LEN {
        return false;
    }
    let last = FINDER_LEN - 1;
    let outer = r == 0 || c == 0 || r == last || c == last;
    let inner = (2..=4).contains(&r) && (2..=4).contains(&c);
    outer || inner
}

/// Build the cell grid for an encoded sequence.
///
/// A data cell at `(row, col)` uses the code unit at index
/// `(row * cells + col) mod len` of `encoded` (counted in UTF-16 code units)
/// and is filled if that unit is even. An empty sequence leaves all data
/// cells empty.
pub fn synthesize_grid(encoded: &str, size: SymbolSize) -> Bitmap {
    let units: Vec<u16> = encoded.encode_utf16().collect();
    let cells = size.cells();

    let bits: Vec<bool> = (0..size.num_cells())
        .map(|idx| {
            let (row, col) = (idx / cells, idx % cells);
            match classify_cell(row, col, size) {
                Region::Finder(corner) => is_finder_filled(row, col, corner.origin(size)),
                Region::Timing => true,
                Region::Data if units.is_empty() => false,
                Region::Data => units[idx % units.len()] % 2 == 0,
            }
        })
        .collect();

    let bitmap = Bitmap { width: cells, bits };
    trace!(
        cells,
        filled = bitmap.pixels().count(),
        sequence_len = units.len(),
        "synthesized grid"
    );
    bitmap
}

/// A square grid of cells, `true` meaning dark.
///
/// For rendering targets which use something similar to pixels try
/// [pixels()](Self::pixels), for a terminal [unicode()](Self::unicode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    bits: Vec<bool>,
}

impl Bitmap {
    /// Return the width of the bitmap (no quiet zone included).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Return the height of the bitmap (no quiet zone included).
    pub fn height(&self) -> usize {
        self.bits.len() / self.width
    }

    /// Check if the cell at `(row, col)` is dark.
    ///
    /// Cells outside the bitmap are light.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.height() || col >= self.width {
            return false;
        }
        self.bits[row * self.width + col]
    }

    /// Get an iterator over the dark cells' coordinates `(x, y)`.
    ///
    /// The coordinate system is centered in the top left corner starting
    /// in `(0, 0)` with a horizontal x-axis and vertical y-axis, so `x` is
    /// the column and `y` the row. The cells are returned in order,
    /// incrementing x before y.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use ticketqr::{encode, synthesize_grid, SymbolSize};
    /// let bitmap = synthesize_grid(&encode("Foo"), SymbolSize::STANDARD);
    /// for (x, y) in bitmap.pixels() {
    ///     // place a square at (x, y) to render the symbol
    /// }
    /// ```
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.width;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_i, b)| **b)
            .map(move |(i, _b)| (i % w, i / w))
    }

    /// Compute a unicode representation ("ASCII art").
    ///
    /// Two rows are packed into one line of half blocks, surrounded by a
    /// quiet zone of one cell. It might look weird if the line height is
    /// wrong or if you are not using a monospaced font.
    pub fn unicode(&self) -> String {
        const BORDER: usize = 1;
        const CHAR: [char; 4] = [' ', '▄', '▀', '█'];
        let height = self.height();
        let get = |i: usize, j: usize| -> usize {
            let inside = (BORDER..BORDER + height).contains(&i)
                && (BORDER..BORDER + self.width).contains(&j);
            usize::from(inside && self.get(i - BORDER, j - BORDER))
        };
        let mut out =
            String::with_capacity((height + 2 * BORDER) * (self.width + 1 + 2 * BORDER) * 3 / 2);
        for i in (0..height + 2 * BORDER).step_by(2) {
            for j in 0..(self.width + 2 * BORDER) {
                out.push(CHAR[(get(i, j) << 1) | get(i + 1, j)]);
            }
            out.push('\n');
        }
        out
    }
}
