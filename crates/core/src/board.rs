//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for cache locality; the type is `Copy`-cheap to clone, so
//! the lock step works on new boards (`merged`, `cleared`) instead of patching
//! the live one in place.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

/// Result of removing full rows from a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    /// Board with full rows removed and empty rows inserted at the top
    pub board: Board,
    /// Indices of the removed rows in the input board, top to bottom
    pub rows: ArrayVec<u8, { BOARD_HEIGHT as usize }>,
}

impl LineClear {
    pub fn count(&self) -> u32 {
        self.rows.len() as u32
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Whether any row is full
    pub fn has_full_row(&self) -> bool {
        (0..BOARD_HEIGHT as usize).any(|y| self.is_row_full(y))
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether `shape` placed at `pos` overlaps a wall, the floor, or a filled cell.
    ///
    /// See [`collides`].
    pub fn collides(&self, shape: &Shape, pos: Position) -> bool {
        shape.cells().any(|(row, col)| {
            let x = pos.x as i16 + col as i16;
            let y = pos.y as i16 + row as i16;
            if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
                return true;
            }
            // Above the top edge is open space.
            y >= 0 && self.is_occupied(x as i8, y as i8)
        })
    }

    /// New board with `shape` fused in at `pos`, tagged with `kind`.
    ///
    /// Cells that fall outside the grid (above the top edge in practice) are
    /// dropped silently.
    pub fn merged(&self, shape: &Shape, pos: Position, kind: PieceKind) -> Board {
        let mut out = self.clone();
        for (row, col) in shape.cells() {
            let x = pos.x as i16 + col as i16;
            let y = pos.y as i16 + row as i16;
            if (0..BOARD_WIDTH as i16).contains(&x) && (0..BOARD_HEIGHT as i16).contains(&y) {
                out.set(x as i8, y as i8, Some(kind));
            }
        }
        out
    }

    /// New board with every full row removed.
    ///
    /// Remaining rows keep their relative order and sink to the bottom; the
    /// same number of empty rows appear at the top, so the height never changes.
    pub fn cleared(&self) -> LineClear {
        let width = BOARD_WIDTH as usize;
        let mut board = Board::new();
        let mut rows = ArrayVec::new();
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top, copying surviving rows downwards.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                rows.push(read_y as u8);
                continue;
            }
            write_y -= 1;
            let src = read_y * width;
            let dst = write_y * width;
            board.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }

        rows.reverse();
        LineClear { board, rows }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, top to bottom.
    ///
    /// `.` is empty, a piece letter fills the cell with that kind and any other
    /// character fills it with `I`. Missing rows at the top are empty, so tests
    /// can describe only the bottom of the well.
    ///
    /// ```
    /// use retro_tetris_core::Board;
    ///
    /// let board = Board::from_text(&["TTTTTTTTT."]);
    /// assert!(board.is_occupied(0, 19));
    /// assert!(!board.is_occupied(9, 19));
    /// ```
    pub fn from_text(rows: &[&str]) -> Self {
        assert!(rows.len() <= BOARD_HEIGHT as usize, "too many rows");
        let mut board = Board::new();
        let top = BOARD_HEIGHT as usize - rows.len();
        for (i, line) in rows.iter().enumerate() {
            assert_eq!(
                line.chars().count(),
                BOARD_WIDTH as usize,
                "row {} must be {} wide",
                i,
                BOARD_WIDTH
            );
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    other => Some(PieceKind::from_str(&other.to_string()).unwrap_or(PieceKind::I)),
                };
                board.set(x as i8, (top + i) as i8, cell);
            }
        }
        board
    }

    /// Render as text rows (inverse of [`Board::from_text`] for full boards)
    pub fn to_text(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|c| c.map(|k| k.letter()).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Test whether `shape` at `position` overlaps the board's walls, floor or content.
///
/// For every occupied `(row, col)` of the shape the board coordinates are
/// `(position.y + row, position.x + col)`. The result is true if the column is
/// outside `[0, width)`, the row is `>= height`, or the row is on the board and
/// the cell is filled. Rows above the top (`row < 0`) never collide; spawn
/// checks and game over rely on that.
pub fn collides(shape: &Shape, board: &Board, position: Position) -> bool {
    board.collides(shape, position)
}
