//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, so they can be used by the engine,
//! the terminal front-end, the audio layer and the event log alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (3, 0) for every piece
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity at level 1 |
//! | `DROP_INTERVAL_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Interval floor |
//! | `SOFT_DROP_REPEAT_MS` | 100 | Repeat cadence while soft drop is held |
//!
//! # Drop Intervals by Level
//!
//! `max(100, 1000 - (level - 1) * 100)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use retro_tetris_types::{Color, Direction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Every piece has its own color
//! assert_eq!(PieceKind::I.color(), Color::new(0x00, 0xf0, 0xf0));
//!
//! // Directions map to board deltas
//! assert_eq!(Direction::Down.delta(), (0, 1));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column of a piece's local origin (horizontally centered)
pub const SPAWN_X: i8 = 3;

/// Spawn row of a piece's local origin
pub const SPAWN_Y: i8 = 0;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level gained
pub const DROP_INTERVAL_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Cadence of repeated soft-drop requests while the control is held
pub const SOFT_DROP_REPEAT_MS: u32 = 100;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level of a fresh session
pub const START_LEVEL: u32 = 1;

/// Line clear scoring table, indexed by `lines_cleared - 1`
///
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points (Tetris!)
///
/// Points are multiplied by the current level.
pub const LINE_SCORES: [u32; 4] = [40, 100, 300, 1200];

/// Number of lines that make a "tetris"
pub const TETRIS_LINES: u32 = 4;


/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color (Game Boy Color palette):
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use retro_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter used in text views
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// The color a locked cell of this kind is drawn with
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::new(0x00, 0xf0, 0xf0),
            PieceKind::O => Color::new(0xf0, 0xf0, 0x00),
            PieceKind::T => Color::new(0xa0, 0x00, 0xf0),
            PieceKind::L => Color::new(0xf0, 0xa0, 0x00),
            PieceKind::J => Color::new(0x00, 0x00, 0xf0),
            PieceKind::S => Color::new(0x00, 0xf0, 0x00),
            PieceKind::Z => Color::new(0xf0, 0x00, 0x00),
        }
    }
}

/// 24-bit RGB color identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece; the kind is the color tag
pub type Cell = Option<PieceKind>;

/// Offset of a piece's local origin on the board
///
/// `x` is the column, `y` the row. Both may be negative: a piece can sit
/// partly left of a wall during a rejected move check, or above the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Where every new piece appears
pub const SPAWN_POSITION: Position = Position::new(SPAWN_X, SPAWN_Y);

/// Movement directions accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Board delta `(dx, dy)` for one step
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Requests that input sources send to the engine
///
/// Keyboard, touch and on-screen buttons all funnel into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (locks when blocked)
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a new session (also restarts after game over)
    Start,
}

/// Session lifecycle
///
/// `Start` → `Playing` ⇄ `Paused`, `Playing` → `GameOver`.
/// A new session can be started from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GameStatus {
    /// Idle, nothing in play
    #[default]
    Start,
    /// Active piece falling
    Playing,
    /// Frozen
    Paused,
    /// Terminal until the next start
    GameOver,
}

impl GameStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }
}

/// Discrete engine events, consumed by audio cues and the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum GameEvent {
    /// A new session began
    Started { session: u32 },
    /// The player moved the active piece one cell
    Moved { direction: Direction },
    /// Gravity pulled the active piece down one row
    Fell,
    /// The active piece rotated
    Rotated,
    /// The active piece was dropped `distance` rows ahead of its lock
    HardDropped { distance: u8 },
    /// The active piece fused into the board
    Locked { kind: PieceKind },
    /// One to three rows were removed
    LinesCleared { lines: u32, points: u32 },
    /// Four rows were removed at once
    Tetris { points: u32 },
    /// Level increased after a clear
    LevelUp { level: u32, drop_interval_ms: u32 },
    Paused,
    Resumed,
    /// The freshly spawned piece collided; the session is over
    GameOver { score: u32, lines: u32, level: u32 },
}
