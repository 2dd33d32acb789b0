/// Frame: an immutable multi-line text shape.
/// Size is derived once at construction; lines are never mutated afterward,
/// so draw and erase calls always cover the same bounding box.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame '{0}' is empty")]
    Empty(String),
}

#[derive(Clone, Debug)]
pub struct Frame {
    lines: Vec<String>,
    rows: usize,
    cols: usize,
}

impl Frame {
    /// Parse a raw text blob into a frame.
    /// Rejects text with no visible content: a zero-sized bounding box would
    /// poison the sprite clamp downstream (negative-size arithmetic).
    pub fn parse(name: &str, text: &str) -> Result<Frame, FrameError> {
        let lines: Vec<String> = text.lines().map(|l| l.to_string()).collect();
        let rows = lines.len();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        if rows == 0 || cols == 0 {
            return Err(FrameError::Empty(name.to_string()));
        }

        Ok(Frame { lines, rows, cols })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Bounding box as (rows, cols). Always >= 1 on both axes.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
