use crate::pieces::Shape;
use crate::scoring::LineClearSummary;
use crate::types::{
    Cell, GameStatus, PieceKind, Position, BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH, START_LEVEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl ActiveSnapshot {
    /// Whether the piece covers board cell `(x, y)`
    pub fn covers(&self, x: i16, y: i16) -> bool {
        let col = x - self.position.x as i16;
        let row = y - self.position.y as i16;
        row >= 0 && col >= 0 && self.shape.is_filled(row as usize, col as usize)
    }
}

/// Everything a view needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub status: GameStatus,
    pub session_id: u32,
    pub seed: u32,
    pub pieces_locked: u32,
    pub last_clear: Option<LineClearSummary>,
}

impl GameSnapshot {
    /// Board cell `(x, y)` with the active piece drawn over it
    pub fn cell_with_active(&self, x: usize, y: usize) -> Cell {
        let locked = self.board[y][x];
        if locked.is_some() {
            return locked;
        }
        match self.active {
            Some(a) if a.covers(x as i16, y as i16) => Some(a.kind),
            _ => None,
        }
    }

    pub fn playable(&self) -> bool {
        self.status.is_playing()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            score: 0,
            lines: 0,
            level: START_LEVEL,
            drop_interval_ms: BASE_DROP_MS,
            status: GameStatus::Start,
            session_id: 0,
            seed: 0,
            pieces_locked: 0,
            last_clear: None,
        }
    }
}
