//! Screen flow around the game driver.
//!
//! `App` owns everything except the terminal: key handling per screen,
//! initials entry, the tetris banner timer, high scores, audio cues and the
//! event log. `main` feeds it keys and elapsed time and draws what it says.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::audio;
use crate::config::AppConfig;
use crate::engine::{GameDriver, GameObserver};
use crate::event_log::EventLog;
use crate::input::{
    handle_key_event, is_interrupt, is_soft_drop_key, should_quit, HoldSignal, InputHandler,
};
use crate::records::{
    normalize_initials, today, HighScoreEntry, HighScoreTable, ScoreStore, MAX_INITIALS,
};
use crate::term::{
    render_game_over, render_start_screen, FrameBuffer, GameOverView, GameView, InitialsPrompt,
    StartPage, Viewport,
};
use crate::types::{GameAction, GameEvent, GameStatus};

/// How long the "TETRIS!" banner stays up
pub const TETRIS_BANNER_MS: u32 = 1500;

/// Upper bound for one input wait
pub const MAX_POLL_MS: u32 = 250;

/// Input wait while soft drop is held, so the auto-release is timely
const HELD_POLL_MS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Banner {
    points: u32,
    remaining_ms: u32,
}

/// Game-over initials entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct InitialsEntry {
    text: String,
    /// `Some(rank)` once submitted
    saved: Option<Option<usize>>,
}

pub struct App<W: std::io::Write = std::io::BufWriter<std::fs::File>> {
    driver: GameDriver,
    store: ScoreStore,
    scores: HighScoreTable,
    start_page: StartPage,
    initials: InitialsEntry,
    banner: Option<Banner>,
    hold: InputHandler,
    log: EventLog<W>,
    quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let log = EventLog::open_or_disabled(config.log_path.as_deref());
        App::with_log(config, log)
    }
}

impl<W: std::io::Write> App<W> {
    pub fn with_log(config: &AppConfig, log: EventLog<W>) -> Self {
        audio::set_muted(config.muted);
        let store = ScoreStore::new(&config.scores_path);
        let scores = store.load_or_default();
        Self {
            driver: GameDriver::new(config.seed_or_clock()),
            store,
            scores,
            start_page: StartPage::Controls,
            initials: InitialsEntry::default(),
            banner: None,
            hold: InputHandler::new(),
            log,
            quit: false,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.driver.session().status()
    }

    pub fn driver(&self) -> &GameDriver {
        &self.driver
    }

    pub fn scores(&self) -> &HighScoreTable {
        &self.scores
    }

    pub fn start_page(&self) -> StartPage {
        self.start_page
    }

    pub fn initials(&self) -> &str {
        &self.initials.text
    }

    /// Rank of the saved entry: `None` while still typing
    pub fn saved_rank(&self) -> Option<Option<usize>> {
        self.initials.saved
    }

    pub fn banner_points(&self) -> Option<u32> {
        self.banner.map(|b| b.points)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn into_log(self) -> EventLog<W> {
        self.log
    }

    /// A key went down (or auto-repeated)
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            self.handle_key_release(key.code);
            return;
        }
        if is_interrupt(key) {
            self.quit = true;
            return;
        }

        match self.status() {
            GameStatus::Start => self.start_screen_key(key),
            GameStatus::GameOver => self.game_over_key(key),
            GameStatus::Playing | GameStatus::Paused => self.game_key(key),
        }
        self.pump_events();
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if self.hold.handle_key_release(code) == Some(HoldSignal::Release) {
            self.driver.release_soft_drop();
        }
    }

    /// Let `elapsed_ms` of wall time pass
    pub fn advance(&mut self, elapsed_ms: u32) {
        for signal in self.hold.update(elapsed_ms) {
            if signal == HoldSignal::Release {
                self.driver.release_soft_drop();
            }
        }
        self.driver.advance(elapsed_ms);

        if let Some(banner) = self.banner.as_mut() {
            banner.remaining_ms = banner.remaining_ms.saturating_sub(elapsed_ms);
            if banner.remaining_ms == 0 {
                self.banner = None;
            }
        }
        self.pump_events();
    }

    /// How long the main loop may wait for input before calling `advance`
    pub fn poll_timeout_ms(&self) -> u32 {
        let mut timeout = MAX_POLL_MS;
        if let Some(ms) = self.driver.next_deadline_ms() {
            timeout = timeout.min(ms);
        }
        if let Some(b) = self.banner {
            timeout = timeout.min(b.remaining_ms);
        }
        if self.hold.is_held() {
            timeout = timeout.min(HELD_POLL_MS);
        }
        timeout
    }

    pub fn render(&self, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        let snap = self.driver.snapshot();
        if snap.status == GameStatus::Start {
            render_start_screen(self.start_page, &self.scores, viewport, fb);
            return;
        }

        let frame = view.render_into(&snap, self.banner_points(), viewport, fb);
        if snap.status == GameStatus::GameOver {
            let prompt = match self.initials.saved {
                Some(rank) => InitialsPrompt::Saved { rank },
                None => InitialsPrompt::Editing(&self.initials.text),
            };
            let over = GameOverView {
                score: snap.score,
                lines: snap.lines,
                level: snap.level,
                prompt,
                scores: &self.scores,
            };
            render_game_over(&over, frame, viewport, fb);
        }
    }

    fn start_screen_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.start_page = match self.start_page {
                    StartPage::Controls => StartPage::HighScores,
                    StartPage::HighScores => StartPage::Controls,
                };
            }
            _ if should_quit(key) => self.quit = true,
            _ => {
                if let Some(action) = handle_key_event(key, GameStatus::Start) {
                    self.apply(action);
                }
            }
        }
    }

    fn game_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            self.quit = true;
            return;
        }
        if is_soft_drop_key(key.code) {
            // Auto-repeats only refresh the hold; the repeater does the stepping.
            if self.status().is_playing()
                && self.hold.handle_key_press(key.code) == Some(HoldSignal::Press)
            {
                self.driver.press_soft_drop();
            }
            return;
        }
        if let Some(action) = handle_key_event(key, self.status()) {
            self.apply(action);
        }
    }

    fn game_over_key(&mut self, key: KeyEvent) {
        let editing = self.initials.saved.is_none();
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(' ') => self.apply(GameAction::Start),
            KeyCode::Enter if editing => self.submit_initials(),
            KeyCode::Enter => self.apply(GameAction::Start),
            KeyCode::Backspace if editing => {
                self.initials.text.pop();
            }
            KeyCode::Char(c)
                if editing
                    && c.is_ascii_alphanumeric()
                    && !key.modifiers.contains(KeyModifiers::CONTROL)
                    && self.initials.text.chars().count() < MAX_INITIALS =>
            {
                self.initials.text.push(c.to_ascii_uppercase());
            }
            KeyCode::Char('q') | KeyCode::Char('Q') if !editing => self.quit = true,
            _ => {}
        }
    }

    fn apply(&mut self, action: GameAction) {
        if action == GameAction::Start {
            // First user action: safe point to bring up audio.
            audio::init_audio();
        }
        self.driver.apply(action);
    }

    /// Save the typed initials with the final score
    pub fn submit_initials(&mut self) {
        if self.status() != GameStatus::GameOver || self.initials.saved.is_some() {
            return;
        }
        let Some(initials) = normalize_initials(&self.initials.text) else {
            return;
        };
        let snap = self.driver.snapshot();
        let Some(entry) = HighScoreEntry::new(&initials, snap.score, snap.lines, snap.level, today())
        else {
            return;
        };

        let rank = match self.store.submit(entry.clone()) {
            Ok((table, rank)) => {
                self.scores = table;
                rank
            }
            Err(e) => {
                eprintln!("[Records] Could not save high score: {:#}", e);
                self.scores.insert(entry)
            }
        };
        self.initials.saved = Some(rank);
    }

    fn pump_events(&mut self) {
        let session = self.driver.session().session_id();
        for event in self.driver.take_events() {
            self.log.on_event(session, &event);
            audio::play_event(&event);
            match event {
                GameEvent::Started { .. } => {
                    self.banner = None;
                    self.initials = InitialsEntry::default();
                    self.hold.reset();
                }
                // The driver drops the repeater on pause; the key hold goes with it.
                GameEvent::Paused => self.hold.reset(),
                GameEvent::Tetris { points } => {
                    self.banner = Some(Banner {
                        points,
                        remaining_ms: TETRIS_BANNER_MS,
                    });
                }
                GameEvent::GameOver { .. } => {
                    self.banner = None;
                    self.hold.reset();
                    self.initials = InitialsEntry::default();
                    self.scores = self.store.load_or_default();
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::types::PieceKind;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_scores(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("retro_tetris_app_{name}_{nanos}.json"))
    }

    fn app(name: &str) -> App<Vec<u8>> {
        let config = AppConfig {
            scores_path: temp_scores(name),
            seed: Some(7),
            muted: true,
            ..AppConfig::default()
        };
        App::with_log(&config, EventLog::from_writer(Vec::new()))
    }

    fn press(app: &mut App<Vec<u8>>, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn play_until_over(app: &mut App<Vec<u8>>) {
        for _ in 0..500 {
            if app.status() == GameStatus::GameOver {
                return;
            }
            press(app, KeyCode::Enter);
        }
        panic!("stacking hard drops never ended the game");
    }

    #[test]
    fn test_start_screen_toggles_scores_page() {
        let mut a = app("toggle");
        assert_eq!(a.status(), GameStatus::Start);
        press(&mut a, KeyCode::Char('h'));
        assert_eq!(a.start_page(), StartPage::HighScores);
        press(&mut a, KeyCode::Char('H'));
        assert_eq!(a.start_page(), StartPage::Controls);
    }

    #[test]
    fn test_space_starts_and_q_quits() {
        let mut a = app("start");
        press(&mut a, KeyCode::Char(' '));
        assert_eq!(a.status(), GameStatus::Playing);
        assert!(!a.should_quit());
        press(&mut a, KeyCode::Char('q'));
        assert!(a.should_quit());
    }

    #[test]
    fn test_held_soft_drop_releases_after_idle() {
        let mut a = app("hold");
        press(&mut a, KeyCode::Char(' '));
        press(&mut a, KeyCode::Down);
        assert!(a.driver().soft_drop().is_held());
        assert_eq!(a.poll_timeout_ms(), HELD_POLL_MS);

        a.advance(200);
        assert!(!a.driver().soft_drop().is_held());
    }

    #[test]
    fn test_soft_drop_works_after_quick_pause() {
        let mut a = app("pause_hold");
        press(&mut a, KeyCode::Char(' '));
        press(&mut a, KeyCode::Down);
        press(&mut a, KeyCode::Char('p'));
        a.advance(50);
        press(&mut a, KeyCode::Char('p'));
        assert_eq!(a.status(), GameStatus::Playing);

        let y0 = a.driver().session().active().unwrap().position.y;
        for _ in 0..20 {
            a.handle_key(KeyEvent::new_with_kind(
                KeyCode::Down,
                KeyModifiers::NONE,
                KeyEventKind::Repeat,
            ));
            a.advance(30);
        }
        assert!(a.driver().soft_drop().is_held());
        let y1 = a.driver().session().active().unwrap().position.y;
        assert!(y1 >= y0 + 5, "soft drop stalled: {} -> {}", y0, y1);
    }

    #[test]
    fn test_tetris_banner_times_out() {
        let mut a = app("banner");
        press(&mut a, KeyCode::Char(' '));
        // Rows 16-19 full except column 0; a vertical I fills them.
        let rows = ".#########";
        let board = Board::from_text(&[rows, rows, rows, rows]);
        a.driver.arrange(board, PieceKind::I, PieceKind::O);
        press(&mut a, KeyCode::Up);
        // Vertical I sits in mask column 2; five steps put it on column 0.
        for _ in 0..5 {
            press(&mut a, KeyCode::Left);
        }
        press(&mut a, KeyCode::Enter);

        assert_eq!(a.banner_points(), Some(1200));
        assert!(a.poll_timeout_ms() <= MAX_POLL_MS);
        a.advance(TETRIS_BANNER_MS - 1);
        assert_eq!(a.banner_points(), Some(1200));
        a.advance(1);
        assert_eq!(a.banner_points(), None);
    }

    #[test]
    fn test_game_over_saves_initials_and_restarts() {
        let mut a = app("save");
        press(&mut a, KeyCode::Char(' '));
        play_until_over(&mut a);

        // Letters only while editing; the fourth is ignored.
        for c in ['a', 'b', 'c', 'd'] {
            press(&mut a, KeyCode::Char(c));
        }
        assert_eq!(a.initials(), "ABC");
        press(&mut a, KeyCode::Backspace);
        press(&mut a, KeyCode::Char('z'));
        assert_eq!(a.initials(), "ABZ");

        press(&mut a, KeyCode::Enter);
        assert_eq!(a.saved_rank(), Some(Some(0)));
        assert_eq!(a.scores().entries()[0].initials, "ABZ");

        let path = a.store.path().to_path_buf();
        assert_eq!(ScoreStore::new(&path).load().unwrap().len(), 1);

        press(&mut a, KeyCode::Char(' '));
        assert_eq!(a.status(), GameStatus::Playing);
        assert_eq!(a.initials(), "");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_empty_initials_are_not_saved() {
        let mut a = app("empty");
        press(&mut a, KeyCode::Char(' '));
        play_until_over(&mut a);
        press(&mut a, KeyCode::Enter);
        assert_eq!(a.saved_rank(), None);
        assert!(a.scores().is_empty());
    }

    #[test]
    fn test_events_reach_the_log() {
        let mut a = app("log");
        press(&mut a, KeyCode::Char(' '));
        press(&mut a, KeyCode::Left);
        let bytes = a.into_log().into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.lines().count() >= 2);
        assert!(text.contains("\"started\""));
    }

    #[test]
    fn test_renders_each_screen() {
        let mut a = app("render");
        let view = GameView::default();
        let vp = Viewport::new(70, 26);
        let mut fb = FrameBuffer::new(1, 1);

        a.render(&view, vp, &mut fb);
        assert!(fb.contains_text("RETRO TETRIS"));

        press(&mut a, KeyCode::Char(' '));
        a.render(&view, vp, &mut fb);
        assert!(fb.contains_text("SCORE"));

        press(&mut a, KeyCode::Char('p'));
        a.render(&view, vp, &mut fb);
        assert!(fb.contains_text("PAUSED"));
        press(&mut a, KeyCode::Char('p'));

        play_until_over(&mut a);
        a.render(&view, vp, &mut fb);
        assert!(fb.contains_text("GAME OVER"));
        assert!(fb.contains_text("Enter your initials:"));
    }
}
