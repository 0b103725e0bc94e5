//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The core counts field rows upward from the floor; the screen counts rows
//! downward from the top. [`GameView::screen_row`] is the only place the two
//! meet.

use crate::core::{GameSnapshot, Phase, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Side length (in cells) of the next-piece preview box
const PREVIEW_CELLS: u16 = 4;

/// Digits shown for the score
const SCORE_DIGITS: u8 = 8;

const TITLE: &str = "BLOCKFALL";
const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const MIDGROUND: Rgb = Rgb::new(48, 12, 12);
const FOREGROUND: Rgb = Rgb::new(255, 255, 255);
const GROUND_LINE: Rgb = Rgb::new(0, 160, 0);
const BLOCK_ACTIVE: Rgb = Rgb::new(70, 110, 255);
const BLOCK_FROZEN: Rgb = Rgb::new(160, 160, 0);
const GRID_DOT: Rgb = Rgb::new(96, 64, 64);

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

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
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

    /// Screen row offset (from the top of the play area) of a field row.
    ///
    /// Field row 0 is the floor, so it lands on the last screen row.
    pub fn screen_row(field_row: i8) -> Option<u16> {
        if field_row < 0 || field_row >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((BOARD_HEIGHT as i8 - 1 - field_row) as u16)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(FOREGROUND, BACKGROUND).into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        if snap.phase == Phase::Idle {
            self.draw_splash(fb, viewport);
            return;
        }

        // Play area and its walls.
        let bg = CellStyle::new(GRID_DOT, MIDGROUND);
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        fb.draw_border(
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(GROUND_LINE, BACKGROUND),
        );

        // Frozen field cells.
        for (row, cells) in snap.field.iter().enumerate() {
            for (col, &filled) in cells.iter().enumerate() {
                let (row, col) = (row as i8, col as i8);
                if filled {
                    self.draw_block(fb, start_x, start_y, row, col, BLOCK_FROZEN);
                } else {
                    self.draw_empty_cell(fb, start_x, start_y, row, col);
                }
            }
        }

        // Falling piece.
        if let Some(active) = snap.active {
            for (row, col) in active.cells() {
                self.draw_block(fb, start_x, start_y, row, col, BLOCK_ACTIVE);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.phase == Phase::GameOver {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_splash(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let title = CellStyle::new(FOREGROUND, BACKGROUND).bold();
        let hint = CellStyle::new(FOREGROUND, BACKGROUND).dim();

        let mid_y = viewport.height / 2;
        put_centered(fb, viewport.width, mid_y.saturating_sub(1), TITLE, title);
        put_centered(fb, viewport.width, mid_y.saturating_add(1), "press any key", hint);
        put_centered(fb, viewport.width, mid_y.saturating_add(2), "esc to quit", hint);
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: i8, col: i8) {
        let style = CellStyle::new(GRID_DOT, MIDGROUND).dim();
        self.fill_cell_rect(fb, start_x, start_y, row, col, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: i8, col: i8, fg: Rgb) {
        let style = CellStyle::new(fg, MIDGROUND).bold();
        self.fill_cell_rect(fb, start_x, start_y, row, col, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: i8,
        col: i8,
        ch: char,
        style: CellStyle,
    ) {
        let Some(screen_row) = Self::screen_row(row) else {
            return;
        };
        if col < 0 || col >= BOARD_WIDTH as i8 {
            return;
        }
        let px = start_x + 1 + col as u16 * self.cell_w;
        let py = start_y + 1 + screen_row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(FOREGROUND, BACKGROUND).bold();
        let value = CellStyle::new(FOREGROUND, BACKGROUND);

        let mut y = start_y;
        fb.put_str(panel_x, y, "Score:", label);
        y = y.saturating_add(1);
        fb.put_u32_padded(panel_x, y, snap.score, SCORE_DIGITS, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "Level:", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.level, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "Lines:", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "Next:", label);
        y = y.saturating_add(1);
        if let Some(next) = snap.next {
            self.draw_preview(fb, panel_x, y, &next);
        }

        let version_y = start_y.saturating_add(BOARD_HEIGHT as u16 * self.cell_h + 1);
        fb.put_str(panel_x, version_y, VERSION, value.dim());
    }

    /// Next piece in a framed 4x4 box, top-left aligned.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: &PieceSnapshot) {
        let box_w = PREVIEW_CELLS * self.cell_w + 2;
        let box_h = PREVIEW_CELLS * self.cell_h + 2;
        fb.draw_border(x, y, box_w, box_h, CellStyle::new(FOREGROUND, BACKGROUND));

        let style = CellStyle::new(BLOCK_ACTIVE, BACKGROUND).bold();
        for (r, c) in next.matrix.filled() {
            let px = x + 1 + c as u16 * self.cell_w;
            let py = y + 1 + r as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::new(FOREGROUND, BACKGROUND).bold());
    }
}

fn put_centered(fb: &mut FrameBuffer, width: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(width.saturating_sub(text_w) / 2, y, text, style);
}
