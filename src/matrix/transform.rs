//! Square boolean matrix with the reshaping operations used for placement
//!
//! Rotation mutates the matrix in place and is tracked against a canonical
//! grid. Magnification, bordering and vertical mirroring always return a new
//! matrix and leave the receiver untouched.

use crate::io::configuration::MAX_MATRIX_DIMENSION;
use crate::io::error::{PlacementError, Result, invalid_argument, non_negative};
use crate::matrix::rotation::{Rotation, rotate_clockwise, rotate_counter_clockwise};
use bitvec::slice::BitSlice;
use ndarray::{Array2, s};

/// QR code cells, `true` for foreground (dark) modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixTransform {
    canonical: Array2<bool>,
    cells: Array2<bool>,
    rotation: Rotation,
}

impl MatrixTransform {
    /// Wrap a square grid indexed `[row, column]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidMatrix` if the grid is empty or not square, and
    /// `InvalidArgument` if it exceeds the maximum matrix dimension
    pub fn new(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || rows != cols {
            return Err(PlacementError::InvalidMatrix {
                reason: format!("expected a non-empty square grid, got {rows}x{cols}"),
            });
        }
        check_dimension("size", rows)?;
        Ok(Self::derived(cells))
    }

    /// Build from rows of cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidMatrix` if the rows do not form a non-empty square
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(PlacementError::InvalidMatrix {
                reason: format!("every row must hold {size} cells"),
            });
        }
        let flat: Vec<bool> = rows.iter().flatten().copied().collect();
        let cells =
            Array2::from_shape_vec((size, size), flat).map_err(|e| PlacementError::InvalidMatrix {
                reason: e.to_string(),
            })?;
        Self::new(cells)
    }

    /// Build from packed row-major modules, as emitted by QR encoders
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` exceeds the maximum matrix
    /// dimension, and `InvalidMatrix` if `bits` does not hold exactly
    /// `size * size` modules
    pub fn from_bits(size: usize, bits: &BitSlice) -> Result<Self> {
        check_dimension("size", size)?;
        if bits.len() != size * size {
            return Err(PlacementError::InvalidMatrix {
                reason: format!(
                    "{} modules cannot fill a {size}x{size} matrix",
                    bits.len()
                ),
            });
        }
        let cells = Array2::from_shape_fn((size, size), |(row, col)| {
            bits.get(row * size + col).is_some_and(|bit| *bit)
        });
        Self::new(cells)
    }

    // Fresh matrix whose canonical form is its current grid
    fn derived(cells: Array2<bool>) -> Self {
        Self {
            canonical: cells.clone(),
            cells,
            rotation: Rotation::Deg0,
        }
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Cell at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.cells.get((y, x)).copied()
    }

    /// Underlying grid indexed `[row, column]`
    pub const fn grid(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Every cell as `(x, y, value)`, row by row
    ///
    /// `x` is the column and `y` the row; each cell is produced exactly once.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &value)| (col, row, value))
    }

    /// Replicate every cell into a `factor x factor` block
    ///
    /// A factor of zero produces an empty matrix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `factor` is negative or the result would
    /// exceed the maximum matrix dimension
    pub fn magnify(&self, factor: i32) -> Result<Self> {
        let factor = non_negative("magnifier", factor)?;
        let size = check_dimension("magnifier", self.size().saturating_mul(factor))?;
        if factor == 0 {
            return Ok(Self::derived(Array2::from_elem((0, 0), false)));
        }

        let cells = Array2::from_shape_fn((size, size), |(row, col)| {
            self.cells
                .get((row / factor, col / factor))
                .copied()
                .unwrap_or(false)
        });
        Ok(Self::derived(cells))
    }

    /// Surround the matrix with `width` background cells on every side
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `width` is negative or the result would
    /// exceed the maximum matrix dimension
    pub fn border(&self, width: i32) -> Result<Self> {
        let width = non_negative("border size", width)?;
        let inner = self.size();
        let size = check_dimension(
            "border size",
            inner.saturating_add(width.saturating_mul(2)),
        )?;

        let mut cells = Array2::from_elem((size, size), false);
        cells
            .slice_mut(s![width..width + inner, width..width + inner])
            .assign(&self.cells);
        Ok(Self::derived(cells))
    }

    /// Rotate a quarter turn clockwise in place
    pub fn rotate(&mut self) {
        self.cells = rotate_clockwise(&self.cells);
        self.rotation = self.rotation.clockwise();
    }

    /// Rotate a quarter turn counter-clockwise in place
    pub fn rotate_ccw(&mut self) {
        self.cells = rotate_counter_clockwise(&self.cells);
        self.rotation = self.rotation.counter_clockwise();
    }

    /// Current rotation relative to the canonical grid
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Jump to an absolute rotation, re-deriving cells from the canonical grid
    pub fn set_rotation(&mut self, rotation: Rotation) {
        if rotation != self.rotation {
            self.cells = rotation.apply(&self.canonical);
            self.rotation = rotation;
        }
    }

    /// Copy with the rows in reverse order
    #[must_use]
    pub fn turn_vertically(&self) -> Self {
        Self::derived(self.cells.slice(s![..;-1, ..]).to_owned())
    }
}

fn check_dimension(parameter: &'static str, size: usize) -> Result<usize> {
    if size > MAX_MATRIX_DIMENSION {
        return Err(invalid_argument(
            parameter,
            &size,
            &format!("matrix side would exceed {MAX_MATRIX_DIMENSION}"),
        ));
    }
    Ok(size)
}
