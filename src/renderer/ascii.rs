//! Character-grid render target for terminal hosts
//!
//! Each cell is sampled at its center in arena coordinates. Brighter colors
//! map to denser glyphs. Clones share the same grid.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;

use super::RenderTarget;
use crate::sim::{Color, vector};

/// Glyph ramp from dim to bright
const RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

#[derive(Debug)]
struct Grid {
    cols: usize,
    rows: usize,
    /// Arena units per cell
    cell: DVec2,
    cells: Vec<char>,
}

/// Terminal-friendly render target
#[derive(Debug, Clone)]
pub struct AsciiTarget {
    grid: Rc<RefCell<Grid>>,
}

impl AsciiTarget {
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            grid: Rc::new(RefCell::new(Grid {
                cols,
                rows,
                cell: DVec2::ONE,
                cells: vec![' '; cols * rows],
            })),
        }
    }

    /// Glyph for a fill color
    fn glyph(color: Color) -> char {
        let idx = (color.luminance() * (RAMP.len() - 1) as f64).round() as usize;
        RAMP[idx.min(RAMP.len() - 1)]
    }

    /// Current frame, one line per row
    pub fn frame(&self) -> String {
        let grid = self.grid.borrow();
        let mut out = String::with_capacity((grid.cols + 1) * grid.rows);
        for row in grid.cells.chunks(grid.cols) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl RenderTarget for AsciiTarget {
    fn clear(&mut self, width: f64, height: f64) {
        let mut grid = self.grid.borrow_mut();
        grid.cell = DVec2::new(width / grid.cols as f64, height / grid.rows as f64);
        grid.cells.fill(' ');
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        let mut grid = self.grid.borrow_mut();
        let glyph = Self::glyph(color);

        // Only visit cells inside the circle's bounding box
        let col_lo = ((center.x - radius) / grid.cell.x).floor().max(0.0) as usize;
        let row_lo = ((center.y - radius) / grid.cell.y).floor().max(0.0) as usize;
        let col_hi = (((center.x + radius) / grid.cell.x).ceil().max(0.0) as usize).min(grid.cols);
        let row_hi = (((center.y + radius) / grid.cell.y).ceil().max(0.0) as usize).min(grid.rows);

        for row in row_lo..row_hi {
            for col in col_lo..col_hi {
                let sample = DVec2::new(
                    (col as f64 + 0.5) * grid.cell.x,
                    (row as f64 + 0.5) * grid.cell.y,
                );
                if vector::distance(sample, center) <= radius {
                    let idx = row * grid.cols + col;
                    grid.cells[idx] = glyph;
                }
            }
        }
    }
}
