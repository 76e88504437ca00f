//! Terminal Tetris runner.
//!
//! crossterm for input, the framebuffer renderer for output. The loop waits
//! for input no longer than the next timer deadline, then advances the game by
//! the wall time that actually passed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use retro_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use retro_tetris::{App, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let mut app = App::new(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let exit = term.exit();
    result.and(exit)
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    while !app.should_quit() {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render(&view, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = Duration::from_millis(u64::from(app.poll_timeout_ms()));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Whole milliseconds only; the remainder carries into the next frame.
        let elapsed_ms = u32::try_from(last.elapsed().as_millis()).unwrap_or(u32::MAX);
        if elapsed_ms > 0 {
            last += Duration::from_millis(u64::from(elapsed_ms));
            app.advance(elapsed_ms);
        }
    }
    Ok(())
}
