use bracket_geometry::prelude::Point;

use crate::map::{Direction, Surface, WallMap};

/// The controllable avatar, positioned in the local coordinates of the
/// surface that owns it.
#[derive(Clone, Debug)]
pub struct Entity {
    point: Point,
    glyph: char,
    width: i32,
    height: i32,
    origin: Point,
}

impl Entity {
    pub fn new(surface: &Surface, start: Point, glyph: char) -> Self {
        Self {
            point: start,
            glyph,
            width: surface.width,
            height: surface.height,
            origin: surface.origin,
        }
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn local(&self) -> Point {
        self.point
    }

    /// Position on the physical display.
    pub fn position(&self) -> Point {
        Point::new(self.point.x + self.origin.x, self.point.y + self.origin.y)
    }

    /// A cell is occupiable when it is off the frame and not a wall.
    pub fn can_occupy(&self, candidate: Point, walls: &WallMap) -> bool {
        candidate.x > 0
            && candidate.x < self.width - 1
            && candidate.y > 0
            && candidate.y < self.height - 1
            && !walls.contains(candidate)
    }

    /// Takes one step. Returns the cell that was vacated, or `None` when the
    /// step was blocked and nothing changed.
    pub fn step(&mut self, direction: Direction, walls: &WallMap) -> Option<Point> {
        let delta = direction.delta();
        let candidate = Point::new(self.point.x + delta.x, self.point.y + delta.y);
        if !self.can_occupy(candidate, walls) {
            return None;
        }
        let previous = self.point;
        self.point = candidate;
        Some(previous)
    }

    /// Teleports to `local` if it is occupiable.
    pub fn place(&mut self, local: Point, walls: &WallMap) -> bool {
        if !self.can_occupy(local, walls) {
            return false;
        }
        self.point = local;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn room(width: i32, height: i32) -> Surface {
        Surface::blank(width, height, Point::new(0, 0))
    }

    #[test]
    fn wall_blocks_step() {
        let surface = room(6, 6);
        let mut walls = WallMap::from_grid(&["", "", "  #"]);
        assert!(walls.contains(Point::new(2, 2)));
        let mut entity = Entity::new(&surface, Point::new(1, 2), '@');
        assert_eq!(entity.step(Direction::Right, &walls), None);
        assert_eq!(entity.local(), Point::new(1, 2));

        walls = WallMap::default();
        assert_eq!(entity.step(Direction::Right, &walls), Some(Point::new(1, 2)));
        assert_eq!(entity.local(), Point::new(2, 2));
    }

    #[test]
    fn frame_rows_and_columns_are_never_entered() {
        let surface = room(4, 4);
        let walls = WallMap::default();
        let mut entity = Entity::new(&surface, Point::new(1, 1), '@');
        assert_eq!(entity.step(Direction::Up, &walls), None);
        assert_eq!(entity.step(Direction::Left, &walls), None);
        assert!(entity.step(Direction::Right, &walls).is_some());
        assert_eq!(entity.step(Direction::Right, &walls), None);
        assert!(entity.step(Direction::Down, &walls).is_some());
        assert_eq!(entity.step(Direction::Down, &walls), None);
        assert_eq!(entity.local(), Point::new(2, 2));
    }

    #[test]
    fn every_reachable_state_stays_inside_and_off_walls() {
        let surface = room(9, 7);
        let walls = WallMap::from_grid(&["", " ## ", "   #  #", "  #", "", " #####"]);
        let mut entity = Entity::new(&surface, Point::new(1, 3), '@');
        let mut seed = 17u32;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let direction = DIRECTIONS[(seed >> 16) as usize % 4];
            entity.step(direction, &walls);
            let point = entity.local();
            assert!(!walls.contains(point));
            assert!(point.y > 0 && point.y < surface.height - 1);
            assert!(point.x > 0 && point.x < surface.width - 1);
        }
    }

    #[test]
    fn position_adds_surface_origin() {
        let left = Surface::blank(10, 10, Point::new(0, 0));
        let right = Surface::blank(10, 10, Point::new(10, 0));
        let a = Entity::new(&left, Point::new(3, 3), '@');
        let b = Entity::new(&right, Point::new(3, 3), '@');
        assert_eq!(a.position(), Point::new(3, 3));
        assert_eq!(b.position(), Point::new(13, 3));
        assert_ne!(a.position(), b.position());
    }

    #[test]
    fn place_rejects_walls() {
        let surface = room(6, 6);
        let walls = WallMap::from_grid(&["", " #"]);
        let mut entity = Entity::new(&surface, Point::new(2, 2), '@');
        assert!(!entity.place(Point::new(1, 1), &walls));
        assert!(!entity.place(Point::new(0, 3), &walls));
        assert!(entity.place(Point::new(4, 4), &walls));
        assert_eq!(entity.local(), Point::new(4, 4));
    }
}
