use crate::error::RenderError;

/// Side length of a finder region.
pub const FINDER_LEN: usize = 7;

/// Row and column index of the timing lines.
pub const TIMING_LINE: usize = 6;

/// Smallest side length where the three finder regions do not overlap.
pub const MIN_CELLS: usize = 2 * FINDER_LEN;

/// Largest side length, the size of the biggest QR code.
pub const MAX_CELLS: usize = 177;

/// Number of cells per side of a square symbol.
///
/// The default is [SymbolSize::STANDARD], a 21×21 symbol mirroring the
/// smallest real-world QR code.
///
/// ```rust
/// # use ticketqr::SymbolSize;
/// let size = SymbolSize::new(25).unwrap();
/// assert_eq!(size.cells(), 25);
/// assert!(SymbolSize::new(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolSize(usize);

impl SymbolSize {
    pub const STANDARD: Self = Self(21);

    /// Create a symbol size between [MIN_CELLS] and [MAX_CELLS].
    pub fn new(cells: usize) -> Result<Self, RenderError> {
        if !(MIN_CELLS..=MAX_CELLS).contains(&cells) {
            return Err(RenderError::InvalidCells(cells));
        }
        Ok(Self(cells))
    }

    /// Number of cells per side.
    pub fn cells(&self) -> usize {
        self.0
    }

    /// Total number of cells in the symbol.
    pub fn num_cells(&self) -> usize {
        self.0 * self.0
    }

    /// The finder region containing `(row, col)`, if any.
    ///
    /// Corners are checked in the order of [FinderCorner::ALL].
    pub fn finder_at(&self, row: usize, col: usize) -> Option<FinderCorner> {
        FinderCorner::ALL.into_iter().find(|corner| {
            let (r0, c0) = corner.origin(*self);
            (r0..r0 + FINDER_LEN).contains(&row) && (c0..c0 + FINDER_LEN).contains(&col)
        })
    }
}

impl Default for SymbolSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<usize> for SymbolSize {
    type Error = RenderError;

    fn try_from(cells: usize) -> Result<Self, Self::Error> {
        Self::new(cells)
    }
}

/// The three corners carrying a finder region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinderCorner {
    TopLeft,
    TopRight,
    BottomLeft,
}

impl FinderCorner {
    pub const ALL: [Self; 3] = [Self::TopLeft, Self::TopRight, Self::BottomLeft];

    /// Top left cell `(row, col)` of this corner's 7×7 region.
    pub fn origin(self, size: SymbolSize) -> (usize, usize) {
        let far = size.cells() - FINDER_LEN;
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (0, far),
            Self::BottomLeft => (far, 0),
        }
    }
}
