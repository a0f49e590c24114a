//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GamePhase, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

const BOARD_BG: Rgb = Rgb::new(60, 58, 50);
const EMPTY_BG: Rgb = Rgb::new(80, 76, 68);
const DARK_TEXT: Rgb = Rgb::new(70, 64, 58);
const LIGHT_TEXT: Rgb = Rgb::new(250, 246, 240);

/// Tile backgrounds indexed by log2(value) - 1 (2, 4, 8, ... 2048).
const TILE_BG: [Rgb; 11] = [
    Rgb::new(238, 228, 218),
    Rgb::new(237, 224, 200),
    Rgb::new(242, 177, 121),
    Rgb::new(245, 149, 99),
    Rgb::new(246, 124, 95),
    Rgb::new(246, 94, 59),
    Rgb::new(237, 207, 114),
    Rgb::new(237, 204, 97),
    Rgb::new(237, 200, 80),
    Rgb::new(237, 197, 63),
    Rgb::new(237, 194, 46),
];

/// Anything past 2048.
const SUPER_TILE_BG: Rgb = Rgb::new(60, 58, 50);

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square and fits six digits.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let n = snap.size as u16;
        let frame_w = n * self.cell_w + 2;
        let frame_h = n * self.cell_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + SIDE_PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG);
        fb.fill_rect(start_x, start_y, frame_w, frame_h, ' ', border);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snap.size as usize {
            for col in 0..snap.size as usize {
                let value = snap.value(row, col);
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + 2, start_y);

        if snap.phase == GamePhase::Lost {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " GAME OVER ");
        }

        let help = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0));
        let help_text = if snap.playable() {
            "arrows/hjkl/wasd move  r restart  q quit"
        } else {
            "r new game  q quit"
        };
        fb.put_str(
            start_x,
            start_y.saturating_add(frame_h).saturating_add(1),
            help_text,
            help,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_str(x, y, "╭", style);
        fb.put_str(x + w - 1, y, "╮", style);
        fb.put_str(x, y + h - 1, "╰", style);
        fb.put_str(x + w - 1, y + h - 1, "╯", style);

        for dx in 1..w - 1 {
            fb.put_str(x + dx, y, "─", style);
            fb.put_str(x + dx, y + h - 1, "─", style);
        }
        for dy in 1..h - 1 {
            fb.put_str(x, y + dy, "│", style);
            fb.put_str(x + w - 1, y + dy, "│", style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        // One column of board background between tiles.
        let w = self.cell_w - 1;
        let mid_y = py + self.cell_h / 2;

        if value == 0 {
            let style = CellStyle::new(Rgb::new(120, 114, 104), EMPTY_BG);
            fb.fill_rect(px, py, w, self.cell_h, ' ', style);
            fb.put_str(px + w / 2, mid_y, "·", style);
            return;
        }

        let exp = value.trailing_zeros();
        let bg = TILE_BG
            .get(exp.saturating_sub(1) as usize)
            .copied()
            .unwrap_or(SUPER_TILE_BG);
        let fg = if exp <= 2 { DARK_TEXT } else { LIGHT_TEXT };
        let style = CellStyle::new(fg, bg).bold();
        fb.fill_rect(px, py, w, self.cell_h, ' ', style);

        let digits = digit_count(value as u64);
        if digits <= w {
            fb.put_u64(px + (w - digits) / 2, mid_y, value as u64, style);
        } else {
            // Too wide: show as a power of two.
            let label_w = 2 + digit_count(exp as u64);
            let x = px + w.saturating_sub(label_w) / 2;
            fb.put_str(x, mid_y, "2^", style);
            fb.put_u64(x + 2, mid_y, exp as u64, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= fb.width() {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", snap.best.max(snap.score)),
            ("MOVES", snap.moves as u64),
            ("GOAL", snap.win_value as u64),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u64(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        let status = match snap.phase {
            GamePhase::NotStarted => "",
            GamePhase::Playing => "",
            GamePhase::Won => "YOU WIN! keep going",
            GamePhase::Lost => "no moves left",
        };
        let status_style = CellStyle::new(Rgb::new(237, 194, 46), Rgb::new(0, 0, 0)).bold();
        fb.put_str(panel_x, y, status, status_style);
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
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Columns reserved right of the board for the score panel.
const SIDE_PANEL_W: u16 = 22;

fn digit_count(mut n: u64) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
