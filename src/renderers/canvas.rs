//! Canvas — 2D character grid the text renderer paints on.
//!
//! Coordinates are signed; anything painted outside the grid is dropped.

use super::charset::{Arms, BoxChars, CharSet};

// ─── Rect ─────────────────────────────────────────────────────────────────────

/// A rectangle in character-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width - 1
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height - 1
    }
}

// ─── Canvas ───────────────────────────────────────────────────────────────────

pub struct Canvas {
    width: usize,
    height: usize,
    charset: CharSet,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, charset: CharSet) -> Self {
        Self {
            width,
            height,
            charset,
            cells: vec![vec![' '; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn charset(&self) -> CharSet {
        self.charset
    }

    fn cell(&self, col: i64, row: i64) -> Option<(usize, usize)> {
        let c = usize::try_from(col).ok()?;
        let r = usize::try_from(row).ok()?;
        (c < self.width && r < self.height).then_some((c, r))
    }

    pub fn get(&self, col: i64, row: i64) -> char {
        self.cell(col, row).map_or(' ', |(c, r)| self.cells[r][c])
    }

    pub fn set(&mut self, col: i64, row: i64, ch: char) {
        if let Some((c, r)) = self.cell(col, row) {
            self.cells[r][c] = ch;
        }
    }

    /// Add line arms to a cell, joining with whatever line already runs
    /// through it. Text in the cell is overwritten.
    pub fn merge_arms(&mut self, col: i64, row: i64, arms: Arms) {
        let existing = Arms::from_char(self.get(col, row)).unwrap_or_default();
        let ch = existing.union(arms).to_char(self.charset);
        self.set(col, row, ch);
    }

    /// Horizontal line between two columns (inclusive) on `row`.
    pub fn hline(&mut self, row: i64, from: i64, to: i64) {
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        for col in lo..=hi {
            let mut arms = Arms::NONE;
            if col > lo {
                arms = arms | Arms::LEFT;
            }
            if col < hi {
                arms = arms | Arms::RIGHT;
            }
            self.merge_arms(col, row, arms);
        }
    }

    /// Vertical line between two rows (inclusive) in `col`.
    pub fn vline(&mut self, col: i64, from: i64, to: i64) {
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        for row in lo..=hi {
            let mut arms = Arms::NONE;
            if row > lo {
                arms = arms | Arms::UP;
            }
            if row < hi {
                arms = arms | Arms::DOWN;
            }
            self.merge_arms(col, row, arms);
        }
    }

    pub fn draw_box(&mut self, rect: Rect, bc: &BoxChars) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
        self.set(x0, y0, bc.top_left);
        self.set(x1, y0, bc.top_right);
        self.set(x0, y1, bc.bottom_left);
        self.set(x1, y1, bc.bottom_right);
        for col in (x0 + 1)..x1 {
            self.set(col, y0, bc.horizontal);
            self.set(col, y1, bc.horizontal);
        }
        for row in (y0 + 1)..y1 {
            self.set(x0, row, bc.vertical);
            self.set(x1, row, bc.vertical);
        }
    }

    pub fn write_str(&mut self, col: i64, row: i64, s: &str) {
        for (i, ch) in (0i64..).zip(s.chars()) {
            self.set(col + i, row, ch);
        }
    }

    /// Render the canvas to a string, trimming trailing whitespace per line
    /// and trailing empty lines.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return String::new();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
