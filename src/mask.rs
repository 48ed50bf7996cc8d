// The masked-original-color buffer: a same-dimension companion to the
// surface that remembers what each pixel looked like before tape covered it.

use crate::color::Color;
use crate::error::Error;

/// Each cell holds either `Color::TAPE` (the sentinel: nothing cached, the
/// surface pixel was not covered at stripe time) or the color the pixel held
/// before a stripe covered it. Resized in lockstep with the surface.
pub struct MaskBuffer {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl MaskBuffer {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }

    /// Reallocate to `width` x `height` with every cell back at the sentinel.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![Color::TAPE.0; width * height];
    }

    /// Record `observed` as the original color at (x, y), unless `observed`
    /// is itself the tape color, in which case the existing entry is kept.
    /// Re-taping an already-taped pixel must not replace the oldest original
    /// with tape. Called once per touched pixel, before the overwrite;
    /// (x, y) must already be clamped to the grid.
    pub fn cache_if_uncovered(&mut self, x: usize, y: usize, observed: Color) {
        if observed == Color::TAPE {
            return;
        }
        self.cells[y * self.width + x] = observed.0;
    }

    /// Invoke `on_each` for every cached original, resetting that cell to
    /// the sentinel as it goes. Restore and clear in one traversal; an error
    /// from the callback stops the drain where it stands.
    pub fn drain_and_reset<F>(&mut self, mut on_each: F) -> Result<(), Error>
    where
        F: FnMut(usize, usize, Color) -> Result<(), Error>,
    {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let cell = Color(self.cells[idx]);
                if cell != Color::TAPE {
                    on_each(x, y, cell)?;
                    self.cells[idx] = Color::TAPE.0;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
impl MaskBuffer {
    pub fn cell(&self, x: usize, y: usize) -> Color {
        Color(self.cells[y * self.width + x])
    }

    pub fn is_all_sentinel(&self) -> bool {
        self.cells.iter().all(|&c| c == Color::TAPE.0)
    }
}
