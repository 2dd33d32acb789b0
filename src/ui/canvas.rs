/// Shared display canvas: a height × width grid of glyph cells.
///
/// Every write is clipped to the grid, and the single bottom-right cell is
/// never written: curses-style backends throw when that cell is addressed,
/// and the skip keeps visual parity with them. Clipping is policy, not an
/// error: paint calls cannot fail.

use crate::domain::frame::Frame;

/// Rendering weight of a cell, mapped to a terminal color by the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Brightness {
    Dim,
    Normal,
    Bold,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub ch: char,
    pub bright: Brightness,
}

impl Cell {
    pub const BLANK: Cell = Cell { ch: ' ', bright: Brightness::Normal };
}

pub struct Canvas {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(height: usize, width: usize) -> Self {
        Canvas {
            height,
            width,
            cells: vec![Cell::BLANK; height * width],
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col]
        } else {
            Cell::BLANK
        }
    }

    /// Glyph currently at (row, col). Out-of-bounds reads as blank.
    #[cfg(test)]
    pub fn glyph_at(&self, row: usize, col: usize) -> char {
        self.cell(row, col).ch
    }

    #[cfg(test)]
    pub fn brightness_at(&self, row: usize, col: usize) -> Brightness {
        self.cell(row, col).bright
    }

    /// Paint (or erase) a multi-line frame with its top-left corner at
    /// (row, col). Coordinates may be negative or past the far edge; the
    /// out-of-grid portion is silently dropped.
    pub fn draw_frame(&mut self, row: i32, col: i32, frame: &Frame, erase: bool) {
        for (dr, line) in frame.lines().iter().enumerate() {
            for (dc, ch) in line.chars().enumerate() {
                let ch = if erase { ' ' } else { ch };
                self.put(row + dr as i32, col + dc as i32, ch, Brightness::Normal);
            }
        }
    }

    /// Paint (or erase) a single glyph at the given brightness.
    pub fn draw_glyph(&mut self, row: i32, col: i32, ch: char, bright: Brightness, erase: bool) {
        if erase {
            self.put(row, col, ' ', Brightness::Normal);
        } else {
            self.put(row, col, ch, bright);
        }
    }

    /// Frame the field with a one-cell border, drawn once at startup.
    /// Writes go through `put`, so the bottom-right corner stays untouched.
    pub fn draw_border(&mut self) {
        let (h, w) = (self.height as i32, self.width as i32);
        for col in 0..w {
            self.put(0, col, '-', Brightness::Normal);
            self.put(h - 1, col, '-', Brightness::Normal);
        }
        for row in 0..h {
            self.put(row, 0, '|', Brightness::Normal);
            self.put(row, w - 1, '|', Brightness::Normal);
        }
        self.put(0, 0, '+', Brightness::Normal);
        self.put(0, w - 1, '+', Brightness::Normal);
        self.put(h - 1, 0, '+', Brightness::Normal);
    }

    // ── Internal ──

    fn put(&mut self, row: i32, col: i32, ch: char, bright: Brightness) {
        if row < 0 || col < 0 {
            return;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return;
        }
        // Backend quirk: the last visible cell must never be addressed
        if row == self.height - 1 && col == self.width - 1 {
            return;
        }
        self.cells[row * self.width + col] = Cell { ch, bright };
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
