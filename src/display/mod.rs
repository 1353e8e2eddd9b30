//! Terminal drawing.
//!
//! Receives a mutable writer and a finished [`Frame`]. No game logic is
//! performed; this module only rasterizes canvas paths into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use star_box::entities::Rgba;
use star_box::render::Frame;
use star_box::vector::Vector2;

// ── Palette ───────────────────────────────────────────────────────────────────

/// Black strokes are meant for a light canvas; on a terminal they become this.
const INK: (u8, u8, u8) = (200, 200, 200);
/// Opacity is multiplied by this before it dims a stroke.
const ALPHA_GAIN: f64 = 4.0;
/// Strokes dimmer than this are not drawn at all.
const MIN_LEVEL: u8 = 12;

const STROKE: &str = "•";
const COORD_LIMIT: f64 = 1.0e9;
const MAX_LINE_STEPS: i64 = 20_000;
const C_MESSAGE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// Draws one frame, scaled from the canvas to the terminal.
pub fn render<W: Write>(out: &mut W, frame: &Frame) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let mut cells = Cells::new(width, height.saturating_sub(1));

    let scale = Vector2::new(
        f64::from(cells.width) / frame.width,
        f64::from(cells.height) / frame.height,
    );
    for path in &frame.paths {
        if let Some(color) = shade(path.color, frame.brightness) {
            cells.stroke(&path.points, scale, color);
        }
    }

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_cells(out, &cells)?;
    if let Some(message) = frame.message {
        draw_message(out, message, width, height)?;
    }
    draw_controls_hint(out, height)?;

    // keep the cursor off the scene
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Rasterizer ────────────────────────────────────────────────────────────────

/// The terminal grid. The first path to claim a cell keeps it, so models
/// listed earlier in the frame stay on top.
struct Cells {
    width: u16,
    height: u16,
    colors: Vec<Option<Color>>,
}

impl Cells {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            colors: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let cell = &mut self.colors[y as usize * usize::from(self.width) + x as usize];
        if cell.is_none() {
            *cell = Some(color);
        }
    }

    /// Closed polyline through `points`, scaled from canvas to cells.
    fn stroke(&mut self, points: &[Vector2], scale: Vector2, color: Color) {
        let to_cell = |v: f64, s: f64| (v * s).round().clamp(-COORD_LIMIT, COORD_LIMIT) as i64;
        let cells: Vec<(i64, i64)> = points
            .iter()
            .map(|p| (to_cell(p.x, scale.x), to_cell(p.y, scale.y)))
            .collect();
        for (from, to) in edges(cells.len()) {
            self.line(cells[from], cells[to], color);
        }
    }

    /// Bresenham's line.
    fn line(&mut self, (mut x0, mut y0): (i64, i64), (x1, y1): (i64, i64), color: Color) {
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        if (x0 < 0 && x1 < 0) || (x0 >= w && x1 >= w) || (y0 < 0 && y1 < 0) || (y0 >= h && y1 >= h) {
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        // faces grazing the camera plane project absurdly far
        if dx - dy > MAX_LINE_STEPS {
            return;
        }

        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Index pairs of the edges to draw. Polygons are closed; a two-point line
/// segment is an open stroke and is drawn once.
fn edges(len: usize) -> impl Iterator<Item = (usize, usize)> {
    let count = if len > 2 { len } else { len.saturating_sub(1) };
    (0..count).map(move |i| (i, (i + 1) % len))
}

/// The terminal color for a stroke, or `None` when it would be invisible.
fn shade(color: Rgba, brightness: f64) -> Option<Color> {
    let (r, g, b) = if (color.r, color.g, color.b) == (0, 0, 0) {
        INK
    } else {
        (color.r, color.g, color.b)
    };
    let level = (color.a * ALPHA_GAIN).clamp(0.0, 1.0) * brightness.clamp(0.0, 1.0);
    let dim = |c: u8| (f64::from(c) * level).round() as u8;

    let (r, g, b) = (dim(r), dim(g), dim(b));
    if r.max(g).max(b) < MIN_LEVEL {
        return None;
    }
    Some(Color::Rgb { r, g, b })
}

fn draw_cells<W: Write>(out: &mut W, cells: &Cells) -> std::io::Result<()> {
    let mut current = None;
    for y in 0..cells.height {
        for x in 0..cells.width {
            let Some(color) = cells.colors[usize::from(y) * usize::from(cells.width) + usize::from(x)] else {
                continue;
            };
            if current != Some(color) {
                out.queue(style::SetForegroundColor(color))?;
                current = Some(color);
            }
            out.queue(cursor::MoveTo(x, y))?;
            out.queue(Print(STROKE))?;
        }
    }
    Ok(())
}

// ── Message overlay ───────────────────────────────────────────────────────────

fn draw_message<W: Write>(out: &mut W, message: &str, width: u16, height: u16) -> std::io::Result<()> {
    let inner = message.chars().count() + 8;
    let lines = [
        format!("╔{}╗", "═".repeat(inner)),
        format!("║{:^inner$}║", message),
        format!("╚{}╝", "═".repeat(inner)),
        "R - Play Again  Q - Quit".to_string(),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);
    out.queue(style::SetForegroundColor(C_MESSAGE))?;
    for (i, line) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

// ── Controls hint ─────────────────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← ↑ → ↓ / W A S D : Steer   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygons_are_closed() {
        assert_eq!(edges(4).collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(edges(3).count(), 3);
    }

    #[test]
    fn line_segment_is_drawn_once() {
        assert_eq!(edges(2).collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn degenerate_paths_have_no_edges() {
        assert_eq!(edges(1).count(), 0);
        assert_eq!(edges(0).count(), 0);
    }
}
