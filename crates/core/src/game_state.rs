//! Game state module - the session state machine
//!
//! This module ties together the board, the piece catalog, the random picker and
//! scoring. It has no notion of time: gravity is a call to [`GameSession::tick`],
//! made by whoever owns the clock.
//!
//! Every mutation that matters to the outside world is recorded as a
//! [`GameEvent`] in a pending list the caller drains with
//! [`GameSession::take_events`].

use crate::board::Board;
use crate::pieces::{pick_random_piece, Piece};
use crate::rng::PiecePicker;
use crate::scoring::{LineClearSummary, ScoreState};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Direction, GameAction, GameEvent, GameStatus, Position, SPAWN_POSITION};

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The piece moved one cell
    Moved,
    /// The move was blocked (or nothing is in play); no state changed
    Rejected,
    /// A blocked downward move locked the piece
    Locked,
}

/// The falling piece and where it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    pub position: Position,
}

impl ActivePiece {
    /// `piece` at the spawn position
    pub fn spawn(piece: Piece) -> Self {
        Self {
            piece,
            position: SPAWN_POSITION,
        }
    }

    /// Board coordinates of the occupied cells, as `(x, y)`
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.piece.shape.cells().map(move |(row, col)| {
            (
                self.position.x as i16 + col as i16,
                self.position.y as i16 + row as i16,
            )
        })
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<ActivePiece>,
    next: Option<Piece>,
    picker: PiecePicker,
    totals: ScoreState,
    status: GameStatus,
    /// Pending events (drained by the driver).
    events: Vec<GameEvent>,
    /// Most recent lock that cleared lines, for the score banner.
    last_clear: Option<LineClearSummary>,
    /// Monotonic session counter (increments on every start).
    session_id: u32,
    /// Pieces locked in the current session.
    pieces_locked: u32,
}

impl GameSession {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            picker: PiecePicker::new(seed),
            totals: ScoreState::new(),
            status: GameStatus::Start,
            events: Vec::new(),
            last_clear: None,
            session_id: 0,
            pieces_locked: 0,
        }
    }

    /// Begin a fresh session, from any state.
    ///
    /// The random picker carries on from where it was, so consecutive games
    /// from one seed differ but remain reproducible.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.totals = ScoreState::new();
        self.last_clear = None;
        self.pieces_locked = 0;
        self.session_id = self.session_id.wrapping_add(1);

        let current = pick_random_piece(&mut self.picker);
        self.next = Some(pick_random_piece(&mut self.picker));
        self.active = Some(ActivePiece::spawn(current));
        self.status = GameStatus::Playing;

        self.events.push(GameEvent::Started {
            session: self.session_id,
        });
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_piece(&self) -> Option<Piece> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.totals.score
    }

    pub fn lines(&self) -> u32 {
        self.totals.lines
    }

    pub fn level(&self) -> u32 {
        self.totals.level
    }

    /// Current gravity interval in milliseconds
    pub fn drop_interval_ms(&self) -> u32 {
        self.totals.drop_interval_ms
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn seed(&self) -> u32 {
        self.picker.seed()
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn last_clear(&self) -> Option<LineClearSummary> {
        self.last_clear
    }

    /// Events recorded since the last [`GameSession::take_events`]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Hand over pending events, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replace the playing field of a running session.
    ///
    /// Puts `current` at the spawn position in spawn orientation and queues
    /// `next`. Setup hook for tests and benchmarks only; a no-op unless the
    /// session is playing.
    #[cfg(any(test, feature = "test-support"))]
    pub fn arrange(
        &mut self,
        board: Board,
        current: crate::types::PieceKind,
        next: crate::types::PieceKind,
    ) {
        if !self.status.is_playing() {
            return;
        }
        self.board = board;
        self.active = Some(ActivePiece::spawn(Piece::new(current)));
        self.next = Some(Piece::new(next));
    }

    /// Move the active piece one cell.
    ///
    /// A blocked `Down` locks the piece; a blocked `Left`/`Right` is rejected.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        self.step(direction, true)
    }

    /// Automatic descent: the same as a downward move request
    pub fn tick(&mut self) -> MoveOutcome {
        self.step(Direction::Down, false)
    }

    fn step(&mut self, direction: Direction, by_player: bool) -> MoveOutcome {
        if !self.status.is_playing() {
            return MoveOutcome::Rejected;
        }
        let Some(active) = self.active else {
            return MoveOutcome::Rejected;
        };

        let (dx, dy) = direction.delta();
        let candidate = active.position.offset(dx, dy);

        if !self.board.collides(&active.piece.shape, candidate) {
            self.active = Some(ActivePiece {
                position: candidate,
                ..active
            });
            self.events.push(if by_player {
                GameEvent::Moved { direction }
            } else {
                GameEvent::Fell
            });
            return MoveOutcome::Moved;
        }

        if direction == Direction::Down {
            self.lock_piece();
            return MoveOutcome::Locked;
        }

        MoveOutcome::Rejected
    }

    /// Rotate the active piece 90° clockwise in place.
    ///
    /// No wall kicks: if the rotated mask collides the request is rejected.
    pub fn attempt_rotate(&mut self) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.piece.rotated();
        if self.board.collides(&rotated.shape, active.position) {
            return false;
        }

        self.active = Some(ActivePiece {
            piece: rotated,
            ..active
        });
        self.events.push(GameEvent::Rotated);
        true
    }

    /// Rows the active piece can fall before it rests
    pub fn drop_distance(&self) -> u8 {
        let Some(active) = self.active else {
            return 0;
        };

        let mut distance: u8 = 0;
        while !self
            .board
            .collides(&active.piece.shape, active.position.offset(0, distance as i8 + 1))
        {
            distance += 1;
        }
        distance
    }

    /// Drop the active piece to its resting row and lock it
    pub fn hard_drop(&mut self) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let distance = self.drop_distance();
        self.active = Some(ActivePiece {
            position: active.position.offset(0, distance as i8),
            ..active
        });
        self.events.push(GameEvent::HardDropped { distance });
        self.lock_piece();
        true
    }

    /// Fuse the active piece into the board, clear lines, score and spawn the next.
    ///
    /// The new board is computed in full before it replaces the old one.
    pub fn lock_piece(&mut self) {
        if !self.status.is_playing() {
            return;
        }
        let Some(active) = self.active.take() else {
            return;
        };

        let merged = self
            .board
            .merged(&active.piece.shape, active.position, active.piece.kind);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        self.events.push(GameEvent::Locked {
            kind: active.piece.kind,
        });

        let clear = merged.cleared();
        let cleared = clear.count();
        self.board = clear.board;

        if let Some((summary, level_up)) = self.totals.apply_clear(cleared) {
            self.last_clear = Some(summary);
            self.events.push(if summary.tetris {
                GameEvent::Tetris {
                    points: summary.points,
                }
            } else {
                GameEvent::LinesCleared {
                    lines: summary.lines,
                    points: summary.points,
                }
            });
            if level_up {
                self.events.push(GameEvent::LevelUp {
                    level: self.totals.level,
                    drop_interval_ms: self.totals.drop_interval_ms,
                });
            }
        }

        self.spawn_next();
    }

    /// Promote next to current and draw a new next; game over if it does not fit
    fn spawn_next(&mut self) {
        let current = match self.next.take() {
            Some(piece) => piece,
            None => pick_random_piece(&mut self.picker),
        };
        self.next = Some(pick_random_piece(&mut self.picker));

        let spawned = ActivePiece::spawn(current);
        // The blocked piece stays visible on the final board.
        self.active = Some(spawned);

        if self.board.collides(&spawned.piece.shape, spawned.position) {
            self.status = GameStatus::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.totals.score,
                lines: self.totals.lines,
                level: self.totals.level,
            });
        }
    }

    /// Toggle between playing and paused; no-op in other states
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                self.events.push(GameEvent::Paused);
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Playing;
                self.events.push(GameEvent::Resumed);
                true
            }
            GameStatus::Start | GameStatus::GameOver => false,
        }
    }

    /// Apply a game action; returns whether it was accepted
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.attempt_move(Direction::Left) != MoveOutcome::Rejected,
            GameAction::MoveRight => self.attempt_move(Direction::Right) != MoveOutcome::Rejected,
            GameAction::SoftDrop => self.attempt_move(Direction::Down) != MoveOutcome::Rejected,
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.attempt_rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (y, row) in self.board.rows().enumerate() {
            out.board[y].copy_from_slice(row);
        }

        out.active = self.active.map(|a| ActiveSnapshot {
            kind: a.piece.kind,
            shape: a.piece.shape,
            position: a.position,
        });
        out.next = self.next.map(|p| p.kind);
        out.score = self.totals.score;
        out.lines = self.totals.lines;
        out.level = self.totals.level;
        out.drop_interval_ms = self.totals.drop_interval_ms;
        out.status = self.status;
        out.session_id = self.session_id;
        out.seed = self.picker.seed();
        out.pieces_locked = self.pieces_locked;
        out.last_clear = self.last_clear;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_for;
    use crate::types::{PieceKind, BOARD_HEIGHT};

    fn playing(current: PieceKind, next: PieceKind) -> GameSession {
        let mut game = GameSession::new(12345);
        game.start();
        game.arrange(Board::new(), current, next);
        game.take_events();
        game
    }

    impl GameSession {
        fn lock_piece_at_rest(&mut self) {
            let distance = self.drop_distance();
            if let Some(active) = self.active.as_mut() {
                active.position = active.position.offset(0, distance as i8);
            }
            self.lock_piece();
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let game = GameSession::new(12345);
        assert_eq!(game.status(), GameStatus::Start);
        assert!(game.active().is_none());
        assert!(game.next_piece().is_none());
        assert_eq!(game.score(), 0);
        assert_eq!(game.session_id(), 0);
    }

    #[test]
    fn test_start_initializes_session() {
        let mut game = GameSession::new(12345);
        game.start();

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.drop_interval_ms(), 1000);
        assert_eq!(game.active().unwrap().position, Position::new(3, 0));
        assert!(game.next_piece().is_some());
        assert_eq!(game.board().filled_count(), 0);
        assert_eq!(game.take_events(), vec![GameEvent::Started { session: 1 }]);
    }

    #[test]
    fn test_restart_resets_totals_and_bumps_session() {
        let mut game = GameSession::new(7);
        game.start();
        game.hard_drop();
        assert_eq!(game.pieces_locked(), 1);

        game.apply_action(GameAction::Start);
        assert_eq!(game.session_id(), 2);
        assert_eq!(game.pieces_locked(), 0);
        assert_eq!(game.board().filled_count(), 0);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_move_left_right() {
        let mut game = playing(PieceKind::T, PieceKind::O);
        assert_eq!(game.attempt_move(Direction::Left), MoveOutcome::Moved);
        assert_eq!(game.active().unwrap().position, Position::new(2, 0));
        assert_eq!(game.attempt_move(Direction::Right), MoveOutcome::Moved);
        assert_eq!(game.attempt_move(Direction::Right), MoveOutcome::Moved);
        assert_eq!(game.active().unwrap().position, Position::new(4, 0));
        assert_eq!(
            game.take_events(),
            vec![
                GameEvent::Moved { direction: Direction::Left },
                GameEvent::Moved { direction: Direction::Right },
                GameEvent::Moved { direction: Direction::Right },
            ]
        );
    }

    #[test]
    fn test_move_blocked_by_wall_is_rejected() {
        let mut game = playing(PieceKind::O, PieceKind::O);
        for _ in 0..3 {
            assert_eq!(game.attempt_move(Direction::Left), MoveOutcome::Moved);
        }
        let before = game.active();
        assert_eq!(game.attempt_move(Direction::Left), MoveOutcome::Rejected);
        assert_eq!(game.active(), before);
    }

    #[test]
    fn test_downs_reach_floor_then_lock() {
        let mut game = playing(PieceKind::O, PieceKind::T);
        // O occupies rows y and y+1, so it rests at y = 18.
        for _ in 0..18 {
            assert_eq!(game.attempt_move(Direction::Down), MoveOutcome::Moved);
        }
        assert_eq!(game.active().unwrap().position, Position::new(3, 18));
        assert_eq!(game.attempt_move(Direction::Down), MoveOutcome::Locked);

        assert!(game.board().is_occupied(3, 18));
        assert!(game.board().is_occupied(4, 19));
        let active = game.active().unwrap();
        assert_eq!(active.piece.kind, PieceKind::T);
        assert_eq!(active.position, Position::new(3, 0));
        assert_eq!(game.pieces_locked(), 1);
    }

    #[test]
    fn test_tick_matches_move_down() {
        let mut a = playing(PieceKind::L, PieceKind::S);
        let mut b = a.clone();
        for _ in 0..30 {
            a.tick();
            b.attempt_move(Direction::Down);
            assert_eq!(a.board(), b.board());
            assert_eq!(a.active(), b.active());
        }
    }

    #[test]
    fn test_tick_emits_fell() {
        let mut game = playing(PieceKind::T, PieceKind::T);
        assert_eq!(game.tick(), MoveOutcome::Moved);
        assert_eq!(game.take_events(), vec![GameEvent::Fell]);
    }

    #[test]
    fn test_rotate_in_open_space() {
        let mut game = playing(PieceKind::T, PieceKind::O);
        game.attempt_move(Direction::Down);
        assert!(game.attempt_rotate());
        assert_eq!(
            game.active().unwrap().piece.shape,
            shape_for(PieceKind::T).rotated_cw()
        );
    }

    #[test]
    fn test_rotate_against_wall_is_rejected() {
        let mut game = playing(PieceKind::I, PieceKind::O);
        assert!(game.attempt_rotate());
        // Vertical I occupies column x + 2; push it flush with the right wall.
        while game.attempt_move(Direction::Right) == MoveOutcome::Moved {}
        assert_eq!(game.active().unwrap().position.x, 7);
        game.take_events();

        // Back to horizontal would need columns 7..=10.
        let before = game.active();
        assert!(!game.attempt_rotate());
        assert_eq!(game.active(), before);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_hard_drop_locks_at_resting_row() {
        let mut game = playing(PieceKind::I, PieceKind::O);
        assert!(game.hard_drop());

        // Horizontal I mask is on row 1, so it rests at origin y = 18.
        for x in 3..7 {
            assert!(game.board().is_occupied(x, 19));
        }
        let events = game.take_events();
        assert_eq!(events[0], GameEvent::HardDropped { distance: 18 });
        assert_eq!(events[1], GameEvent::Locked { kind: PieceKind::I });
    }

    #[test]
    fn test_completing_bottom_row_clears_one_line() {
        let mut game = playing(PieceKind::I, PieceKind::O);
        let board = Board::from_text(&["J.........", "ZZZ....ZZZ"]);
        game.arrange(board, PieceKind::I, PieceKind::O);

        assert!(game.hard_drop());

        assert_eq!(game.lines(), 1);
        assert_eq!(game.score(), 40);
        assert!(!game.board().has_full_row());
        // The surviving row sank; the top row is empty.
        assert!(game.board().is_occupied(0, 19));
        assert_eq!(game.board().filled_count(), 1);
        assert_eq!(
            game.last_clear(),
            Some(LineClearSummary {
                lines: 1,
                points: 40,
                tetris: false,
                level: 1
            })
        );
        assert!(game
            .take_events()
            .contains(&GameEvent::LinesCleared { lines: 1, points: 40 }));
    }

    #[test]
    fn test_lock_swaps_in_cleared_board() {
        let mut game = playing(PieceKind::I, PieceKind::O);
        // The I rests on row 18 and fills it; row 19 stays as it was.
        let board = Board::from_text(&["ZZZ....ZZZ", "J.J.J.J.J."]);
        game.arrange(board, PieceKind::I, PieceKind::O);
        game.lock_piece_at_rest();

        let text = game.board().to_text();
        assert_eq!(text[19], "J.J.J.J.J.");
        assert!(text[..19].iter().all(|row| row == ".........."));
        assert_eq!(game.lines(), 1);
        assert_eq!(game.last_clear().map(|c| c.lines), Some(1));
        assert_eq!(game.active().unwrap().piece.kind, PieceKind::O);
    }

    #[test]
    fn test_tetris_at_level_three() {
        let mut game = playing(PieceKind::I, PieceKind::O);
        game.totals = ScoreState {
            score: 0,
            lines: 20,
            level: 3,
            drop_interval_ms: 800,
        };
        let board = Board::from_text(&[
            "ZZZZZZZZ.Z",
            "ZZZZZZZZ.Z",
            "ZZZZZZZZ.Z",
            "ZZZZZZZZ.Z",
        ]);
        game.arrange(board, PieceKind::I, PieceKind::O);

        assert!(game.attempt_rotate());
        // Vertical I sits in column x + 2; column 8 needs x = 6.
        for _ in 0..3 {
            game.attempt_move(Direction::Right);
        }
        game.take_events();
        assert!(game.hard_drop());

        assert_eq!(game.score(), 3600);
        assert_eq!(game.lines(), 24);
        assert_eq!(game.board().filled_count(), 0);
        assert!(game.take_events().contains(&GameEvent::Tetris { points: 3600 }));
        assert!(game.last_clear().unwrap().tetris);
    }

    #[test]
    fn test_level_up_on_tenth_line() {
        let mut game = playing(PieceKind::I, PieceKind::O);
        game.totals.lines = 9;
        game.arrange(Board::from_text(&["ZZZ....ZZZ"]), PieceKind::I, PieceKind::O);
        game.hard_drop();

        assert_eq!(game.lines(), 10);
        assert_eq!(game.level(), 2);
        assert_eq!(game.drop_interval_ms(), 900);
        assert!(game.take_events().contains(&GameEvent::LevelUp {
            level: 2,
            drop_interval_ms: 900
        }));
    }

    #[test]
    fn test_lock_without_clear_keeps_totals() {
        let mut game = playing(PieceKind::T, PieceKind::O);
        game.hard_drop();
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines(), 0);
        assert_eq!(game.level(), 1);
        assert!(game.last_clear().is_none());
    }

    #[test]
    fn test_lock_clips_cells_above_top() {
        let mut game = playing(PieceKind::O, PieceKind::O);
        // Column stack up to row 1 under the spawn area, leaving row 0 open.
        for y in 1..BOARD_HEIGHT as i8 {
            game.board_mut().set(3, y, Some(PieceKind::Z));
            game.board_mut().set(4, y, Some(PieceKind::Z));
        }
        game.active = Some(ActivePiece {
            piece: Piece::new(PieceKind::O),
            position: Position::new(3, -1),
        });
        game.lock_piece();

        // Only the bottom half of the O landed on row 0.
        assert!(game.board().is_occupied(3, 0));
        assert!(game.board().is_occupied(4, 0));
        assert_eq!(game.status(), GameStatus::GameOver);
    }

    #[test]
    fn test_spawn_collision_ends_game() {
        let mut game = playing(PieceKind::O, PieceKind::T);
        // Clear of the O's columns, but inside the T's spawn footprint.
        game.board_mut().set(5, 1, Some(PieceKind::J));
        game.hard_drop();

        assert_eq!(game.status(), GameStatus::GameOver);
        let events = game.take_events();
        assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
        // The blocked piece is kept for display.
        assert_eq!(game.active().unwrap().piece.kind, PieceKind::T);

        // Read-only from here.
        let board = game.board().clone();
        assert_eq!(game.attempt_move(Direction::Left), MoveOutcome::Rejected);
        assert_eq!(game.attempt_move(Direction::Down), MoveOutcome::Rejected);
        assert!(!game.attempt_rotate());
        assert!(!game.hard_drop());
        assert!(!game.toggle_pause());
        assert_eq!(game.board(), &board);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut game = playing(PieceKind::T, PieceKind::O);
        assert!(game.toggle_pause());
        assert_eq!(game.status(), GameStatus::Paused);

        let before = game.active();
        assert_eq!(game.tick(), MoveOutcome::Rejected);
        assert_eq!(game.attempt_move(Direction::Left), MoveOutcome::Rejected);
        assert!(!game.attempt_rotate());
        assert!(!game.hard_drop());
        assert_eq!(game.active(), before);

        assert!(game.toggle_pause());
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.take_events(), vec![GameEvent::Paused, GameEvent::Resumed]);
    }

    #[test]
    fn test_idle_session_ignores_requests() {
        let mut game = GameSession::new(1);
        assert!(!game.apply_action(GameAction::MoveLeft));
        assert!(!game.apply_action(GameAction::Rotate));
        assert!(!game.apply_action(GameAction::HardDrop));
        assert!(!game.apply_action(GameAction::Pause));
        assert_eq!(game.tick(), MoveOutcome::Rejected);
        assert!(game.events().is_empty());
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut game = playing(PieceKind::T, PieceKind::O);
        assert!(game.apply_action(GameAction::MoveLeft));
        assert!(game.apply_action(GameAction::MoveRight));
        assert!(game.apply_action(GameAction::SoftDrop));
        assert!(game.apply_action(GameAction::Rotate));
        assert_eq!(game.active().unwrap().position, Position::new(3, 1));
        assert!(game.apply_action(GameAction::HardDrop));
        assert_eq!(game.pieces_locked(), 1);
        assert!(game.apply_action(GameAction::Pause));
        assert_eq!(game.status(), GameStatus::Paused);
    }

    #[test]
    fn test_snapshot_reflects_session() {
        let mut game = playing(PieceKind::S, PieceKind::Z);
        game.attempt_move(Direction::Down);
        let snap = game.snapshot();

        assert_eq!(snap.status, GameStatus::Playing);
        assert_eq!(snap.next, Some(PieceKind::Z));
        let active = snap.active.unwrap();
        assert_eq!(active.kind, PieceKind::S);
        assert_eq!(active.position, Position::new(3, 1));
        assert_eq!(snap.level, 1);
        assert_eq!(snap.drop_interval_ms, 1000);
        assert_eq!(snap.seed, 12345);
        assert_eq!(snap.session_id, 1);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameSession::new(99);
        let mut b = GameSession::new(99);
        a.start();
        b.start();
        for _ in 0..25 {
            a.hard_drop();
            b.hard_drop();
        }
        assert_eq!(a.board(), b.board());
        assert_eq!(a.score(), b.score());
        assert_eq!(a.status(), b.status());
    }
}
