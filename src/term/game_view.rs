//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Tile;

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

/// Caller-side numbers shown next to the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudInfo {
    pub high_score: u32,
    pub play_time_secs: u64,
}

/// A lightweight terminal view for the tile grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square in typical terminal fonts and
        // leaves room for four-digit values.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into a framebuffer.
    pub fn render(&self, snapshot: &GameSnapshot, hud: &HudInfo, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let size = snapshot.size as u16;
        let board_w = size * self.cell_w;
        let board_h = size * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // Three header rows above the frame, two footer rows below.
        let start_y = viewport
            .height
            .saturating_sub(frame_h + 5)
            / 2
            + 3;

        self.draw_header(&mut fb, snapshot, hud, start_x, frame_w, start_y);
        self.draw_frame(&mut fb, start_x, start_y, frame_w, frame_h);

        for (y, row) in snapshot.board.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                self.draw_tile(&mut fb, start_x + 1, start_y + 1, x as u16, y as u16, value);
            }
        }

        self.draw_footer(&mut fb, snapshot, hud, start_x, frame_w, start_y + frame_h);

        if snapshot.game_won {
            self.draw_overlay(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "2048 ACHIEVED!",
                "c continue endless | n new game",
            );
        } else if snapshot.game_over {
            self.draw_overlay(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "GAME OVER",
                "n new game | q quit",
            );
        }

        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        hud: &HudInfo,
        start_x: u16,
        frame_w: u16,
        start_y: u16,
    ) {
        // Title in the four signature colors, one per digit.
        let title_colors = [
            Rgb::new(255, 59, 48),
            Rgb::new(52, 199, 89),
            Rgb::new(0, 122, 255),
            Rgb::new(255, 149, 0),
        ];
        let title = "2048";
        let title_x = start_x + frame_w.saturating_sub(title.len() as u16) / 2;
        let title_y = start_y.saturating_sub(3);
        for (i, (ch, color)) in title.chars().zip(title_colors).enumerate() {
            let style = CellStyle {
                fg: color,
                bg: Rgb::default(),
                bold: true,
            };
            fb.set(title_x + i as u16, title_y, Cell { ch, style });
        }

        let score_line = format!(
            "SCORE {}  BEST {}",
            format_score(snapshot.score),
            format_score(hud.high_score)
        );
        let score_x = start_x + frame_w.saturating_sub(score_line.len() as u16) / 2;
        fb.put_str(score_x, start_y.saturating_sub(2), &score_line, CellStyle::default());

        if snapshot.endless_mode {
            let banner = "ENDLESS MODE";
            let banner_x = start_x + frame_w.saturating_sub(banner.len() as u16) / 2;
            let style = CellStyle {
                fg: Rgb::new(255, 59, 48),
                bg: Rgb::default(),
                bold: true,
            };
            fb.put_str(banner_x, start_y.saturating_sub(1), banner, style);
        }
    }

    fn draw_footer(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        hud: &HudInfo,
        start_x: u16,
        frame_w: u16,
        y: u16,
    ) {
        let status = format!(
            "Time {}  Moves {}",
            format_time(hud.play_time_secs),
            snapshot.move_count
        );
        let status_x = start_x + frame_w.saturating_sub(status.len() as u16) / 2;
        fb.put_str(status_x, y, &status, CellStyle::default());

        let hints = "arrows move | n new game | q quit";
        let hints_x = start_x + frame_w.saturating_sub(hints.len() as u16) / 2;
        let dim = CellStyle {
            fg: Rgb::new(130, 130, 130),
            bg: Rgb::default(),
            bold: false,
        };
        fb.put_str(hints_x, y + 1, hints, dim);
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::default(),
            bold: false,
        };
        for dx in 1..w - 1 {
            fb.set(x + dx, y, Cell { ch: '─', style });
            fb.set(x + dx, y + h - 1, Cell { ch: '─', style });
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, Cell { ch: '│', style });
            fb.set(x + w - 1, y + dy, Cell { ch: '│', style });
        }
        fb.set(x, y, Cell { ch: '┌', style });
        fb.set(x + w - 1, y, Cell { ch: '┐', style });
        fb.set(x, y + h - 1, Cell { ch: '└', style });
        fb.set(x + w - 1, y + h - 1, Cell { ch: '┘', style });
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        value: Tile,
    ) {
        let px = origin_x + x * self.cell_w;
        let py = origin_y + y * self.cell_h;
        let style = tile_style(value);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        if value != 0 {
            let label = value.to_string();
            let label_x = px + self.cell_w.saturating_sub(label.len() as u16) / 2;
            let label_y = py + self.cell_h / 2;
            fb.put_str(label_x, label_y, &label, style);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        headline: &str,
        hint: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(40, 40, 40),
            bold: true,
        };
        let mid_y = y + h / 2;
        fb.fill_rect(x + 1, mid_y.saturating_sub(1), w.saturating_sub(2), 3, ' ', style);

        let headline_x = x + w.saturating_sub(headline.len() as u16) / 2;
        fb.put_str(headline_x, mid_y.saturating_sub(1), headline, style);

        let hint_x = x + w.saturating_sub(hint.len() as u16) / 2;
        let hint_style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(40, 40, 40),
            bold: false,
        };
        fb.put_str(hint_x, mid_y + 1, hint, hint_style);
    }
}

/// Tile background/foreground colors, following the mobile palette.
fn tile_style(value: Tile) -> CellStyle {
    let bg = match value {
        0 => Rgb::new(55, 52, 48),
        2 => Rgb::new(237, 224, 199),
        4 => Rgb::new(235, 217, 184),
        8 => Rgb::new(255, 149, 0),
        16 => Rgb::new(255, 59, 48),
        32 => Rgb::new(50, 173, 230),
        64 => Rgb::new(175, 82, 222),
        128 | 256 | 512 | 1024 | 2048 => Rgb::new(255, 204, 0),
        4096 => Rgb::new(50, 173, 230),
        _ => Rgb::new(142, 142, 147),
    };
    let fg = if value < 8 {
        Rgb::new(0, 0, 0)
    } else {
        Rgb::new(255, 255, 255)
    };
    CellStyle {
        fg,
        bg,
        bold: value != 0,
    }
}

/// Format seconds as HH:MM:SS.
pub fn format_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format a score, abbreviating thousands as "1.2K".
pub fn format_score(score: u32) -> String {
    if score > 999 {
        format!("{:.1}K", f64::from(score) / 1000.0)
    } else {
        score.to_string()
    }
}
