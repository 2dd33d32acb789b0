/// Presentation layer: diff-based terminal backend for the canvas.
///
/// The canvas already is the frame being shown (units paint and erase it
/// in place), so presenting is: compare every cell with the copy from the
/// previous present, queue terminal commands for the changed ones only,
/// flush once. Brightness maps to a foreground color rather than the
/// Dim/Bold attributes, which render inconsistently across terminals.
///
/// The renderer is an RAII guard for the terminal state: `cleanup` runs
/// on drop as well, so an unwinding panic anywhere in the tick loop still
/// leaves the user's terminal restored.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::ui::canvas::{Brightness, Canvas, Cell};

fn color_for(bright: Brightness) -> Color {
    match bright {
        Brightness::Dim => Color::DarkGrey,
        Brightness::Normal => Color::Grey,
        Brightness::Bold => Color::White,
    }
}

pub struct Renderer {
    writer: BufWriter<io::Stdout>,
    /// Cells as of the previous present; None until the first frame,
    /// forcing a full paint.
    shown: Option<Vec<Cell>>,
    height: usize,
    width: usize,
    /// True between a successful `init` and the matching `cleanup`.
    active: bool,
}

impl Renderer {
    /// Current terminal dimensions as (height, width); the canvas is sized
    /// from this once, before init.
    pub fn screen_size() -> (usize, usize) {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        (rows as usize, cols as usize)
    }

    pub fn new(height: usize, width: usize) -> Self {
        Renderer {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            shown: None,
            height,
            width,
            active: false,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        self.active = true;
        Ok(())
    }

    /// Restore the terminal. Idempotent, and a no-op before `init`, so the
    /// explicit call on the normal exit path and the drop guard compose.
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    /// Flush the canvas to the terminal, emitting only changed cells.
    pub fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        let current = collect_cells(canvas, self.height, self.width);
        emit_diff(&mut self.writer, &current, self.shown.as_deref(), self.height, self.width)?;
        self.writer.flush()?;
        self.shown = Some(current);
        Ok(())
    }
}

impl Drop for Renderer {
    /// Restore the terminal on unwind too; a no-op when `cleanup` already
    /// ran on the normal exit path.
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn collect_cells(canvas: &Canvas, height: usize, width: usize) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(height * width);
    for row in 0..height {
        for col in 0..width {
            cells.push(canvas.cell(row, col));
        }
    }
    cells
}

/// Queue commands for every cell of `current` that differs from `shown`
/// (all of them when `shown` is None). The bottom-right cell is never
/// addressed: printing it can scroll auto-wrap terminals and desync the
/// diff, the same quirk the canvas honors on the write side.
fn emit_diff(
    writer: &mut impl Write,
    current: &[Cell],
    shown: Option<&[Cell]>,
    height: usize,
    width: usize,
) -> io::Result<()> {
    let mut last_color: Option<Color> = None;

    for row in 0..height {
        for col in 0..width {
            if row == height - 1 && col == width - 1 {
                continue;
            }
            let idx = row * width + col;
            let cell = current[idx];
            if let Some(shown) = shown {
                if shown[idx] == cell {
                    continue;
                }
            }

            queue!(writer, MoveTo(col as u16, row as u16))?;
            let color = color_for(cell.bright);
            if last_color != Some(color) {
                queue!(writer, SetForegroundColor(color))?;
                last_color = Some(color);
            }
            queue!(writer, Print(cell.ch))?;
        }
    }

    Ok(())
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
