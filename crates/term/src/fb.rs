//! Framebuffer and style types for terminal rendering.

/// Semantic tint of a cell; the renderer maps these to actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Default,
    /// Top bar background
    Bar,
    /// Falling candidate labels
    Accent,
    /// `+1` flash
    Good,
    /// `-1` / `game over` flash
    Bad,
    Dim,
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tint: Tint,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            tint: Tint::Default,
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Out-of-bounds writes are clipped.
    pub fn set(&mut self, x: u16, y: u16, ch: char, tint: Tint) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = Cell { ch, tint };
    }

    pub fn put_str(&mut self, x: u16, y: u16, text: &str, tint: Tint) {
        for (offset, ch) in text.chars().enumerate() {
            self.set(x + offset as u16, y, ch, tint);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, tint: Tint) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, ch, tint);
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Text content of one row, for tests.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    /// Whether `needle` appears on any row, for tests.
    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }
}
