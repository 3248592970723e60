//! GameView: maps a `core::GridSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GridSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{tile_value, GameStatus, Position};

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

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Background per exponent; exponents past the end reuse the last entry.
const TILE_COLORS: [Rgb; 12] = [
    Rgb::new(205, 193, 180), // empty
    Rgb::new(238, 228, 218), // 2
    Rgb::new(237, 224, 200), // 4
    Rgb::new(242, 177, 121), // 8
    Rgb::new(245, 149, 99),  // 16
    Rgb::new(246, 124, 95),  // 32
    Rgb::new(246, 94, 59),   // 64
    Rgb::new(237, 207, 114), // 128
    Rgb::new(237, 204, 97),  // 256
    Rgb::new(237, 200, 80),  // 512
    Rgb::new(237, 197, 63),  // 1024
    Rgb::new(237, 194, 46),  // 2048 and up
];

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a right-aligned 5-digit value with a column of padding on each side.
        Self::new(7, 3)
    }
}

impl GameView {
    /// Tile size in terminal cells; zero dimensions are raised to 1.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered board for a snapshot, in terminal cells.
    pub fn frame_size(&self, snap: &GridSnapshot) -> (u16, u16) {
        (
            (snap.cols as u16).saturating_mul(self.cell_w).saturating_add(2),
            (snap.rows as u16).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and cleared first.
    pub fn render_into(&self, snap: &GridSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let exponent = snap.exponent(Position::new(row, col));
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, exponent);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.status {
            GameStatus::Won => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WIN")
            }
            GameStatus::Lost => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        exponent: u8,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        let bg = tile_color(exponent);

        // Leave a one-column gutter on the right so neighbouring tiles stay apart.
        let inner_w = self.cell_w.saturating_sub(1).max(1);
        fb.fill_rect(px, py, inner_w, self.cell_h, ' ', CellStyle::new(bg, bg));

        if exponent == 0 {
            return;
        }
        let fg = if exponent <= 2 {
            Rgb::new(119, 110, 101)
        } else {
            Rgb::new(249, 246, 242)
        };
        let text = tile_value(exponent).to_string();
        let text_y = py + self.cell_h / 2;
        let field_w = inner_w.saturating_sub(1).max(1);
        fb.put_str_right(px, text_y, field_w, &text, CellStyle::new(fg, bg).bold());
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GridSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MAX", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.max_value, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "arrows", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "q quit", value);
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
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn tile_color(exponent: u8) -> Rgb {
    TILE_COLORS[(exponent as usize).min(TILE_COLORS.len() - 1)]
}
