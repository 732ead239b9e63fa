use std::collections::BTreeSet;

use crate::{error::LevelError, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tile coordinate. Rows grow downward: the cell below `(x, y)` is `(x, y + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn left(self) -> Cell {
        Cell::new(self.x - 1, self.y)
    }

    pub const fn right(self) -> Cell {
        Cell::new(self.x + 1, self.y)
    }

    pub const fn above(self) -> Cell {
        Cell::new(self.x, self.y - 1)
    }

    pub const fn below(self) -> Cell {
        Cell::new(self.x, self.y + 1)
    }

    /// Euclidean distance in cell units.
    pub fn distance(self, other: Cell) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Occupancy and coordinate mapping for a tile layer.
///
/// The navigation build only reads through this trait; any tile storage that
/// can enumerate its solid cells and answer point queries can back a graph.
pub trait TileGrid {
    /// Whether `cell` holds a solid tile. Cells outside the layout are open.
    fn is_solid(&self, cell: Cell) -> bool;

    /// World position of the cell's center.
    fn cell_to_world(&self, cell: Cell) -> Vec2;

    fn world_to_cell(&self, position: Vec2) -> Cell;

    /// Every solid cell, in a deterministic order.
    fn solid_cells(&self) -> Vec<Cell>;
}

/// Sparse tile map with a uniform cell size.
///
/// Unbounded: cells that were never inserted are open, including cells outside
/// any rectangle the solid set happens to span.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileMap {
    cell_size: f32,
    solid: BTreeSet<Cell>,
}

impl TileMap {
    pub fn new(cell_size: f32) -> Self {
        assert!(cell_size > 0.0, "cell_size must be > 0");
        Self {
            cell_size,
            solid: BTreeSet::new(),
        }
    }

    /// Parse a level from ASCII rows: `#` is solid, `.` is open.
    ///
    /// Blank lines at either end are ignored; row 0 is the topmost non-blank
    /// line. Any other glyph fails with its location.
    pub fn from_ascii(text: &str, cell_size: f32) -> Result<Self, LevelError> {
        let mut map = TileMap::new(cell_size);

        let lines: Vec<&str> = text
            .lines()
            .skip_while(|l| l.trim().is_empty())
            .collect();
        let lines = match lines.iter().rposition(|l| !l.trim().is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(LevelError::Empty),
        };

        for (y, line) in lines.iter().enumerate() {
            for (x, glyph) in line.chars().enumerate() {
                match glyph {
                    '#' => {
                        map.insert(Cell::new(x as i32, y as i32));
                    }
                    '.' | ' ' => {}
                    _ => {
                        return Err(LevelError::UnknownGlyph {
                            glyph,
                            row: y,
                            col: x,
                        })
                    }
                }
            }
        }

        Ok(map)
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn insert(&mut self, cell: Cell) {
        self.solid.insert(cell);
    }

    pub fn remove(&mut self, cell: Cell) {
        self.solid.remove(&cell);
    }

    pub fn len(&self) -> usize {
        self.solid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solid.is_empty()
    }
}

impl TileGrid for TileMap {
    fn is_solid(&self, cell: Cell) -> bool {
        self.solid.contains(&cell)
    }

    fn cell_to_world(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            (cell.x as f32 + 0.5) * self.cell_size,
            (cell.y as f32 + 0.5) * self.cell_size,
        )
    }

    fn world_to_cell(&self, position: Vec2) -> Cell {
        Cell::new(
            (position.x / self.cell_size).floor() as i32,
            (position.y / self.cell_size).floor() as i32,
        )
    }

    fn solid_cells(&self) -> Vec<Cell> {
        self.solid.iter().copied().collect()
    }
}
