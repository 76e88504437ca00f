//! Pieces module - Tetromino catalog and rotation
//!
//! Each piece is a square binary mask (2x2, 3x3 or 4x4) in its local frame.
//! Rotation replaces the mask with its 90° clockwise transform; there are no
//! rotation states and no kick tables.

use crate::rng::PiecePicker;
use crate::types::PieceKind;

/// Largest mask edge (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square binary mask of a piece in its local frame.
///
/// Only the top-left `size x size` corner of `mask` is meaningful; the rest
/// stays `false` so shapes of the same kind compare equal after rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    mask: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Rows must form a square of edge 1..=4.
    ///
    /// ```
    /// use retro_tetris_core::Shape;
    ///
    /// let o = Shape::from_rows(&[&[1, 1], &[1, 1]]);
    /// assert_eq!(o.size(), 2);
    /// assert_eq!(o.cells().count(), 4);
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&size),
            "shape edge must be 1..=4, got {}",
            size
        );
        let mut mask = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "shape must be square");
            for (c, &v) in row.iter().enumerate() {
                mask[r][c] = v != 0;
            }
        }
        Self {
            size: size as u8,
            mask,
        }
    }

    /// Edge length N of the N x N mask
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether `(row, col)` of the local frame is occupied
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.mask[row][col]
    }

    /// Occupied `(row, col)` pairs in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        (0..n)
            .flat_map(move |r| (0..n).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.mask[r][c])
    }

    /// 90° clockwise rotation: transpose, then reverse each row.
    ///
    /// `new[r][c] = old[n - 1 - c][r]`
    pub fn rotated_cw(&self) -> Self {
        let n = self.size();
        let mut mask = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in mask.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.mask[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            mask,
        }
    }

    /// Rows of the mask as 0/1 values (for tests and text views)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size())
            .map(|r| (0..self.size()).map(|c| self.mask[r][c] as u8).collect())
            .collect()
    }
}

/// Get the spawn-orientation mask for a piece kind
pub fn shape_for(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
    }
}

/// A piece: its kind (which is also its color) plus its current mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl Piece {
    /// Fresh piece in spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_for(kind),
        }
    }

    /// Same piece with its mask rotated clockwise
    pub fn rotated(&self) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.rotated_cw(),
        }
    }
}

/// Draw a piece uniformly at random from the catalog
pub fn pick_random_piece(picker: &mut PiecePicker) -> Piece {
    Piece::new(picker.pick())
}
