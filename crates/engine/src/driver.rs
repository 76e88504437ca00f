//! Session driver: the session plus its gravity clock and soft-drop repeater.
//!
//! Every entry point mutates the session and then re-synchronizes the timers
//! with it:
//! - not playing: gravity stopped, soft drop released
//! - playing after a start or resume: gravity restarted from zero
//! - drop interval changed: gravity rescheduled at the new cadence

use retro_tetris_core::{GameSession, GameSnapshot};

use crate::clock::DropClock;
use crate::repeat::HoldRepeater;
use crate::types::{Direction, GameAction, GameEvent};

/// Receives engine events after each driver step
pub trait GameObserver {
    fn on_event(&mut self, session: u32, event: &GameEvent);
}

/// Collects events in order (handy in tests and headless runs)
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, _session: u32, event: &GameEvent) {
        self.push(*event);
    }
}

#[derive(Debug, Clone)]
pub struct GameDriver {
    session: GameSession,
    gravity: DropClock,
    soft_drop: HoldRepeater,
    /// Session the gravity clock was last started for.
    clocked_session: u32,
}

impl GameDriver {
    pub fn new(seed: u32) -> Self {
        let session = GameSession::new(seed);
        let gravity = DropClock::new(session.drop_interval_ms());
        Self {
            session,
            gravity,
            soft_drop: HoldRepeater::soft_drop(),
            clocked_session: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn gravity(&self) -> &DropClock {
        &self.gravity
    }

    pub fn soft_drop(&self) -> &HoldRepeater {
        &self.soft_drop
    }

    /// Replace the playing field (see [`GameSession::arrange`])
    #[cfg(any(test, feature = "test-support"))]
    pub fn arrange(
        &mut self,
        board: retro_tetris_core::Board,
        current: crate::types::PieceKind,
        next: crate::types::PieceKind,
    ) {
        self.session.arrange(board, current, next);
        self.sync();
    }

    /// Apply a one-shot action; returns whether the session accepted it
    pub fn apply(&mut self, action: GameAction) -> bool {
        let accepted = self.session.apply_action(action);
        self.sync();
        accepted
    }

    /// Soft-drop control went down: one step now, then repeats from [`advance`].
    ///
    /// [`advance`]: GameDriver::advance
    pub fn press_soft_drop(&mut self) -> bool {
        if !self.session.status().is_playing() || !self.soft_drop.press() {
            return false;
        }
        self.session.attempt_move(Direction::Down);
        self.sync();
        true
    }

    pub fn release_soft_drop(&mut self) {
        self.soft_drop.release();
    }

    /// Let `elapsed_ms` of wall time pass
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.sync();

        self.gravity.advance(elapsed_ms);
        while self.gravity.take_due() {
            self.session.tick();
            self.sync();
        }

        let repeats = self.soft_drop.advance(elapsed_ms);
        for _ in 0..repeats {
            if !self.session.status().is_playing() {
                break;
            }
            self.session.attempt_move(Direction::Down);
            self.sync();
        }
    }

    /// Milliseconds until a timer next needs service
    pub fn next_deadline_ms(&self) -> Option<u32> {
        match (self.gravity.remaining_ms(), self.soft_drop.remaining_ms()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Hand pending events to `observer`, oldest first
    pub fn dispatch<O: GameObserver + ?Sized>(&mut self, observer: &mut O) {
        let session = self.session.session_id();
        for event in self.session.take_events() {
            observer.on_event(session, &event);
        }
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.session.take_events()
    }

    fn sync(&mut self) {
        let status = self.session.status();
        if !status.is_playing() {
            self.gravity.stop();
            self.soft_drop.release();
            return;
        }

        let interval = self.session.drop_interval_ms();
        let session_id = self.session.session_id();
        if !self.gravity.is_running() || self.clocked_session != session_id {
            self.gravity.reschedule(interval);
            self.gravity.start();
            self.clocked_session = session_id;
        } else if self.gravity.interval_ms() != interval {
            self.gravity.reschedule(interval);
        }
    }
}

impl Default for GameDriver {
    fn default() -> Self {
        Self::new(1)
    }
}
