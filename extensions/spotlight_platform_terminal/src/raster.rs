//! Character-cell rasterizer
//!
//! Replays recorded paint commands onto a fixed grid. Each glyph of a text
//! draw covers exactly one cell; the cell is painted when the glyph's center
//! lies inside the clip recorded with the draw. Later draws overwrite
//! earlier ones.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use spotlight_paint::{Color, FillStyle, PaintCommand, Point, Rect};

/// One character cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    /// Foreground color, `None` for the terminal default
    pub fg: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', fg: None }
    }
}

/// A grid of character cells with a fixed pixel pitch
#[derive(Clone, Debug)]
pub struct CellCanvas {
    cols: u16,
    rows: u16,
    cell_width: f32,
    cell_height: f32,
    cells: Vec<Cell>,
}

impl CellCanvas {
    /// Create a blank canvas. Cell sizes below one pixel are raised to one.
    pub fn new(cols: u16, rows: u16, cell_width: f32, cell_height: f32) -> Self {
        Self {
            cols,
            rows,
            cell_width: cell_width.max(1.0),
            cell_height: cell_height.max(1.0),
            cells: vec![Cell::default(); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// The canvas area in pixels, origin at the top-left cell
    pub fn pixel_bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f32::from(self.cols) * self.cell_width,
            f32::from(self.rows) * self.cell_height,
        )
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(self.index(col, row))
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Replay recorded commands. Returns the number of cells written.
    ///
    /// Only text draws touch the grid; clip commands are already folded into
    /// the clip each draw was recorded with.
    pub fn replay(&mut self, commands: &[PaintCommand]) -> usize {
        commands
            .iter()
            .map(|command| match command {
                PaintCommand::DrawText {
                    text,
                    origin,
                    style,
                    clip,
                    ..
                } => self.draw_text(text, *origin, style, *clip),
                _ => 0,
            })
            .sum()
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &FillStyle, clip: Option<Rect>) -> usize {
        let center_y = origin.y + self.cell_height / 2.0;
        let row = (center_y / self.cell_height).floor();
        if row < 0.0 || row >= f32::from(self.rows) {
            return 0;
        }

        let mut written = 0;
        for (i, ch) in text.chars().enumerate() {
            let center = Point::new(origin.x + (i as f32 + 0.5) * self.cell_width, center_y);
            if clip.is_some_and(|clip| !clip.contains(center)) {
                continue;
            }

            let col = (center.x / self.cell_width).floor();
            if col < 0.0 || col >= f32::from(self.cols) {
                continue;
            }

            let index = self.index(col as u16, row as u16);
            self.cells[index] = Cell {
                ch,
                fg: Some(style.color_at(center)),
            };
            written += 1;
        }
        written
    }

    fn index(&self, col: u16, row: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    fn row_cells(&self, row: u16) -> &[Cell] {
        let start = self.index(0, row);
        &self.cells[start..start + self.cols as usize]
    }

    /// Rows as plain text, trailing blanks trimmed
    pub fn to_plain_lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                let line: String = self.row_cells(row).iter().map(|cell| cell.ch).collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Rows as colored text, one string per row
    pub fn to_ansi_lines(&self) -> io::Result<Vec<String>> {
        (0..self.rows)
            .map(|row| {
                let mut buf = Vec::new();
                self.queue_row(&mut buf, row)?;
                Ok(String::from_utf8_lossy(&buf).into_owned())
            })
            .collect()
    }

    /// Write the full grid, positioning the cursor at the start of each row
    pub fn write_ansi<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in 0..self.rows {
            queue!(out, MoveTo(0, row))?;
            self.queue_row(out, row)?;
        }
        Ok(())
    }

    fn queue_row<W: Write>(&self, out: &mut W, row: u16) -> io::Result<()> {
        let mut current: Option<Color> = None;
        for cell in self.row_cells(row) {
            if cell.fg != current {
                match cell.fg {
                    Some(color) => queue!(out, SetForegroundColor(term_color(color)))?,
                    None => queue!(out, ResetColor)?,
                }
                current = cell.fg;
            }
            queue!(out, Print(cell.ch))?;
        }
        queue!(out, ResetColor)
    }
}

fn term_color(color: Color) -> TermColor {
    let [r, g, b, _] = color.to_rgba8();
    TermColor::Rgb { r, g, b }
}
