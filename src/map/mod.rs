use std::collections::HashSet;

use bracket_geometry::prelude::Point;
use bracket_terminal::prelude::{FontCharType, to_cp437};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Impassable cells of a scene, collected once from its layout grid.
#[derive(Clone, Debug, Default)]
pub struct WallMap {
    cells: HashSet<Point>,
}

impl WallMap {
    pub fn from_grid(grid: &[&str]) -> Self {
        Self::from_grid_at(grid, Point::new(0, 0))
    }

    /// Registers every non-blank glyph of `grid` as a wall, shifted by
    /// `offset`. Short rows simply contribute fewer cells.
    pub fn from_grid_at(grid: &[&str], offset: Point) -> Self {
        let mut cells = HashSet::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                if glyph != ' ' {
                    cells.insert(Point::new(offset.x + x as i32, offset.y + y as i32));
                }
            }
        }
        Self { cells }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }
}

/// A character surface owned by one scene: a room window or an oversized
/// maze backing. `origin` places it on the physical display.
#[derive(Clone, Debug)]
pub struct Surface {
    pub width: i32,
    pub height: i32,
    pub origin: Point,
    cells: Vec<FontCharType>,
}

impl Surface {
    pub fn blank(width: i32, height: i32, origin: Point) -> Self {
        Self::filled(width, height, origin, ' ')
    }

    pub fn filled(width: i32, height: i32, origin: Point, glyph: char) -> Self {
        let size = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            origin,
            cells: vec![to_cp437(glyph); size],
        }
    }

    fn idx(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some((point.y * self.width + point.x) as usize)
        } else {
            None
        }
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    /// Copies `grid` onto the surface, spaces included. Cells falling outside
    /// the surface are dropped.
    pub fn stamp(&mut self, grid: &[&str], offset: Point) {
        for (y, row) in grid.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let point = Point::new(offset.x + x as i32, offset.y + y as i32);
                self.set_glyph(point, glyph);
            }
        }
    }

    pub fn set_glyph(&mut self, point: Point, glyph: char) {
        if let Some(idx) = self.idx(point) {
            self.cells[idx] = to_cp437(glyph);
        }
    }

    pub fn glyph_at(&self, point: Point) -> Option<FontCharType> {
        self.idx(point).map(|idx| self.cells[idx])
    }

    pub fn to_global(&self, local: Point) -> Point {
        Point::new(local.x + self.origin.x, local.y + self.origin.y)
    }

    /// `None` when `global` is too far from the origin to be expressed.
    pub fn to_local(&self, global: Point) -> Option<Point> {
        let x = global.x.checked_sub(self.origin.x)?;
        let y = global.y.checked_sub(self.origin.y)?;
        Some(Point::new(x, y))
    }
}
