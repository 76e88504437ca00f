//! GameView: draws a `GameSnapshot` into a framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::{shape_for, GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb, ACCENT, BACKDROP, FIELD_BG};
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame landed, for views drawn on top of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

const BLOCK: char = '█';
const EMPTY: char = '·';
const SIDE_PANEL_MIN_W: u16 = 12;

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up cells in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Board frame placement for `viewport` (board centered, panel to the right)
    pub fn frame_rect(&self, viewport: Viewport) -> FrameRect {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        FrameRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Draw one frame into `fb`, reusing its allocation.
    ///
    /// `tetris_banner` carries the points of a tetris whose banner is still
    /// showing; the caller owns its timer.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        tetris_banner: Option<u32>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> FrameRect {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let frame = self.frame_rect(viewport);
        let border = CellStyle::new(ACCENT, BACKDROP);
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, border);

        // The piece is hidden while paused so the pause can't be used to plan.
        let show_active = snap.status != GameStatus::Paused;

        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                let cell = if show_active {
                    snap.cell_with_active(x, y)
                } else {
                    snap.board[y][x]
                };
                match cell {
                    Some(kind) => self.draw_block(fb, frame, x as u16, y as u16, kind),
                    None => self.draw_empty(fb, frame, x as u16, y as u16),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.status {
            GameStatus::Paused => {
                self.draw_overlay(fb, frame, "PAUSED", Some("Press P to resume"));
            }
            GameStatus::Playing => {
                if let Some(points) = tetris_banner {
                    let sub = format!("+{} pts", points);
                    self.draw_overlay(fb, frame, "TETRIS!", Some(&sub));
                }
            }
            GameStatus::Start | GameStatus::GameOver => {}
        }
        frame
    }

    /// Allocating variant of [`GameView::render_into`]
    pub fn render(
        &self,
        snap: &GameSnapshot,
        tetris_banner: Option<u32>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, tetris_banner, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, frame: FrameRect, x: u16, y: u16) -> (u16, u16) {
        (
            frame.x + 1 + x * self.cell_w,
            frame.y + 1 + y * self.cell_h,
        )
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: FrameRect, x: u16, y: u16, kind: PieceKind) {
        let (px, py) = self.cell_origin(frame, x, y);
        let style = CellStyle::new(Rgb::from(kind.color()), FIELD_BG).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: FrameRect, x: u16, y: u16) {
        let (px, py) = self.cell_origin(frame, x, y);
        let style = CellStyle::new(Rgb::new(70, 70, 90), FIELD_BG).dim();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, EMPTY, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: FrameRect,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < SIDE_PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(ACCENT, BACKDROP).bold();
        let value = CellStyle::default();

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(kind) = snap.next {
            self.draw_mini_shape(fb, panel_x, y + 1, kind, &shape_for(kind));
        }
    }

    fn draw_mini_shape(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, shape: &Shape) {
        let style = CellStyle::new(Rgb::from(kind.color()), BACKDROP).bold();
        for (row, col) in shape.cells() {
            fb.fill_rect(x + col as u16 * 2, y + row as u16, 2, 1, BLOCK, style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: FrameRect, title: &str, sub: Option<&str>) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let box_style = CellStyle::new(ACCENT, BACKDROP);
        let inner_w = frame.w.saturating_sub(4);
        fb.fill_rect(frame.x + 2, mid_y - 2, inner_w, 5, ' ', box_style);
        fb.draw_box(frame.x + 2, mid_y - 2, inner_w, 5, box_style);
        fb.put_str_centered(frame.x, mid_y - 1, frame.w, title, box_style.bold());
        if let Some(sub) = sub {
            fb.put_str_centered(frame.x, mid_y + 1, frame.w, sub, CellStyle::default());
        }
    }
}
