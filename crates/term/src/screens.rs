//! Start and game-over screens.

use crate::fb::{CellStyle, FrameBuffer, Rgb, ACCENT, BACKDROP};
use crate::game_view::{FrameRect, Viewport};
use crate::records::HighScoreTable;

const TITLE: &str = "RETRO TETRIS";

const KEY_HELP: [(&str, &str); 5] = [
    ("← →", "Move left/right"),
    ("↑ / Space", "Rotate"),
    ("↓", "Soft drop"),
    ("Enter", "Hard drop"),
    ("P", "Pause"),
];

const TOUCH_HELP: [&str; 3] = ["Swipe left/right: Move", "Tap: Rotate", "Swipe down: Drop"];

fn title_style() -> CellStyle {
    CellStyle::new(ACCENT, BACKDROP).bold()
}

fn hint_style() -> CellStyle {
    CellStyle::new(Rgb::new(150, 150, 150), BACKDROP)
}

/// What the start screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPage {
    Controls,
    HighScores,
}

pub fn render_start_screen(
    page: StartPage,
    scores: &HighScoreTable,
    viewport: Viewport,
    fb: &mut FrameBuffer,
) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(Default::default());

    let w = viewport.width;
    let mut y = viewport.height.saturating_sub(22) / 2;
    fb.put_str_centered(0, y, w, TITLE, title_style());
    y += 2;

    match page {
        StartPage::Controls => {
            fb.put_str_centered(0, y, w, "Keyboard Controls", title_style());
            y += 2;
            let col = w.saturating_sub(30) / 2;
            for (key, action) in KEY_HELP {
                fb.put_str(col, y, key, CellStyle::default().bold());
                fb.put_str(col + 12, y, action, CellStyle::default());
                y += 1;
            }
            y += 1;
            fb.put_str_centered(0, y, w, "Touch Controls", title_style());
            y += 2;
            for line in TOUCH_HELP {
                fb.put_str_centered(0, y, w, line, hint_style());
                y += 1;
            }
            y += 1;
            fb.put_str_centered(0, y, w, "Press SPACE to Start", title_style());
            fb.put_str_centered(0, y + 1, w, "H: High Scores   Q: Quit", hint_style());
        }
        StartPage::HighScores => {
            y = draw_score_table(fb, 0, y, w, scores, None);
            fb.put_str_centered(0, y + 1, w, "H: Back   SPACE: Start", hint_style());
        }
    }
}

/// Where the player is in saving a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialsPrompt<'a> {
    Editing(&'a str),
    /// Saved at `rank`; `None` if it fell off the table
    Saved { rank: Option<usize> },
}

#[derive(Debug, Clone, Copy)]
pub struct GameOverView<'a> {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub prompt: InitialsPrompt<'a>,
    pub scores: &'a HighScoreTable,
}

/// Draw the game-over panel over whatever `fb` already holds (normally the
/// final board), centered on `frame`.
pub fn render_game_over(
    view: &GameOverView<'_>,
    frame: FrameRect,
    viewport: Viewport,
    fb: &mut FrameBuffer,
) {
    let panel_w = 36.min(viewport.width);
    let panel_h = 24.min(viewport.height);
    let x = (frame.x + frame.w / 2).saturating_sub(panel_w / 2);
    let x = x.min(viewport.width.saturating_sub(panel_w));
    let top = viewport.height.saturating_sub(panel_h) / 2;

    let border = CellStyle::new(ACCENT, BACKDROP);
    fb.fill_rect(x, top, panel_w, panel_h, ' ', CellStyle::default());
    fb.draw_box(x, top, panel_w, panel_h, border);

    let mut y = top + 1;
    let red = CellStyle::new(Rgb::new(255, 68, 68), BACKDROP).bold();
    fb.put_str_centered(x, y, panel_w, "GAME OVER", red);
    y += 2;

    let label_x = x + 3;
    for (label, n) in [
        ("Final Score:", view.score),
        ("Lines:", view.lines),
        ("Level:", view.level),
    ] {
        fb.put_str(label_x, y, label, CellStyle::default());
        fb.put_u32(label_x + 14, y, n, CellStyle::default().bold());
        y += 1;
    }
    y += 1;

    let highlight = match view.prompt {
        InitialsPrompt::Editing(initials) => {
            fb.put_str(label_x, y, "Enter your initials:", CellStyle::default());
            let shown = format!("[{:<3}]", initials);
            fb.put_str(label_x + 21, y, &shown, title_style());
            fb.put_str_centered(x, y + 1, panel_w, "Enter: Save", hint_style());
            y += 3;
            None
        }
        InitialsPrompt::Saved { rank } => {
            fb.put_str_centered(x, y, panel_w, "Score saved!", title_style());
            y += 2;
            rank
        }
    };

    draw_score_table(fb, x, y, panel_w, view.scores, highlight);
    fb.put_str_centered(
        x,
        top + panel_h.saturating_sub(2),
        panel_w,
        "SPACE: Play Again   Esc: Quit",
        hint_style(),
    );
}

/// Draws the table, returns the row after it
fn draw_score_table(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    w: u16,
    scores: &HighScoreTable,
    highlight: Option<usize>,
) -> u16 {
    fb.put_str_centered(x, y, w, "HIGH SCORES", title_style());
    let mut y = y + 1;
    if scores.is_empty() {
        fb.put_str_centered(x, y, w, "No high scores yet!", hint_style());
        return y + 1;
    }

    let header = format!(
        "{:>2}  {:<4} {:>7} {:>5} {:>5}",
        "#", "Name", "Score", "Lines", "Level"
    );
    fb.put_str_centered(x, y, w, &header, CellStyle::default().bold());
    y += 1;
    for (i, e) in scores.entries().iter().enumerate() {
        let row = format!(
            "{:>2}  {:<4} {:>7} {:>5} {:>5}",
            i + 1,
            e.initials,
            e.score,
            e.lines,
            e.level
        );
        let style = if highlight == Some(i) {
            CellStyle::new(BACKDROP, ACCENT).bold()
        } else {
            CellStyle::default()
        };
        fb.put_str_centered(x, y, w, &row, style);
        y += 1;
    }
    y
}
