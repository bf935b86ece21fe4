use bracket_geometry::prelude::Point;

pub const MARGIN_Y: i32 = 5;
pub const MARGIN_X: i32 = 25;

/// Scrolling camera over a backing surface larger than the physical window.
///
/// `view` is the top-left backing cell currently shown at `anchor` on the
/// display. Offsets always stay within `0..=backing - size` on each axis.
#[derive(Clone, Debug)]
pub struct Viewport {
    view: Point,
    pub width: i32,
    pub height: i32,
    backing_width: i32,
    backing_height: i32,
    anchor: Point,
    margin: Point,
}

impl Viewport {
    pub fn new(
        view: Point,
        width: i32,
        height: i32,
        backing_width: i32,
        backing_height: i32,
        anchor: Point,
    ) -> Self {
        let mut viewport = Self {
            view,
            width,
            height,
            backing_width,
            backing_height,
            anchor,
            margin: Point::new(MARGIN_X, MARGIN_Y),
        };
        viewport.view = viewport.clamp(view);
        viewport
    }

    pub fn offset(&self) -> Point {
        self.view
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn max_offset(&self) -> Point {
        Point::new(
            (self.backing_width - self.width).max(0),
            (self.backing_height - self.height).max(0),
        )
    }

    fn clamp(&self, view: Point) -> Point {
        let max = self.max_offset();
        Point::new(view.x.clamp(0, max.x), view.y.clamp(0, max.y))
    }

    /// Scrolls at most one cell per axis so that `entity` drifts back inside
    /// the margin band. Called once after every successful move.
    pub fn follow(&mut self, entity: Point) {
        let max = self.max_offset();

        let screen_y = entity.y + self.anchor.y - self.view.y;
        if entity.y - self.view.y < self.margin.y && self.view.y > 0 {
            self.view.y -= 1;
        } else if screen_y > self.anchor.y + self.height - self.margin.y && self.view.y < max.y {
            self.view.y += 1;
        }

        let screen_x = entity.x + self.anchor.x - self.view.x;
        if entity.x - self.view.x < self.margin.x && self.view.x > 0 {
            self.view.x -= 1;
        } else if screen_x > self.anchor.x + self.width - self.margin.x && self.view.x < max.x {
            self.view.x += 1;
        }
    }

    /// Jumps so that `entity` sits in the middle of the window, clamped to
    /// the backing. Used when resuming somewhere other than the start.
    pub fn focus(&mut self, entity: Point) {
        self.view = self.clamp(Point::new(
            entity.x - self.width / 2,
            entity.y - self.height / 2,
        ));
    }

    /// Screen cell for a backing cell, if it is currently visible.
    pub fn to_screen(&self, backing: Point) -> Option<Point> {
        let rel_x = backing.x - self.view.x;
        let rel_y = backing.y - self.view.y;
        if rel_x < 0 || rel_y < 0 || rel_x >= self.width || rel_y >= self.height {
            return None;
        }
        Some(Point::new(self.anchor.x + rel_x, self.anchor.y + rel_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze_viewport(view: Point) -> Viewport {
        // 40 x 120 grid, backed at twice its size.
        Viewport::new(view, 64, 18, 240, 80, Point::new(8, 9))
    }

    fn assert_in_bounds(viewport: &Viewport) {
        let offset = viewport.offset();
        let max = viewport.max_offset();
        assert!((0..=max.x).contains(&offset.x), "x offset {offset:?}");
        assert!((0..=max.y).contains(&offset.y), "y offset {offset:?}");
    }

    #[test]
    fn construction_clamps_offsets() {
        let viewport = maze_viewport(Point::new(-4, 500));
        assert_eq!(viewport.offset(), Point::new(0, 62));
    }

    #[test]
    fn top_edge_never_scrolls_past_zero() {
        let mut viewport = maze_viewport(Point::new(30, 0));
        let mut entity = Point::new(50, 10);
        for _ in 0..6 {
            entity.y -= 1;
            viewport.follow(entity);
            assert_eq!(viewport.offset().y, 0);
        }
    }

    #[test]
    fn moving_up_scrolls_one_row_per_step_past_the_margin() {
        let mut viewport = maze_viewport(Point::new(30, 8));
        let mut entity = Point::new(50, 14);
        let mut offsets = Vec::new();
        for _ in 0..6 {
            entity.y -= 1;
            viewport.follow(entity);
            offsets.push(viewport.offset().y);
        }
        assert_eq!(offsets, vec![8, 7, 6, 5, 4, 3]);
        assert_eq!(entity.y - viewport.offset().y, MARGIN_Y);
    }

    #[test]
    fn moving_down_scrolls_once_the_lower_band_is_crossed() {
        let mut viewport = maze_viewport(Point::new(0, 0));
        let mut entity = Point::new(40, 12);
        entity.y += 1;
        viewport.follow(entity);
        assert_eq!(viewport.offset().y, 0);
        entity.y += 1;
        viewport.follow(entity);
        assert_eq!(viewport.offset().y, 1);
    }

    #[test]
    fn monotonic_motion_never_reverses_scroll() {
        let mut viewport = maze_viewport(Point::new(0, 0));
        let mut entity = Point::new(30, 8);
        let mut previous = viewport.offset().x;
        for _ in 0..200 {
            entity.x += 1;
            viewport.follow(entity);
            let current = viewport.offset().x;
            assert!(current >= previous);
            assert!(current - previous <= 1);
            assert_in_bounds(&viewport);
            previous = current;
        }
        assert_eq!(viewport.offset().x, viewport.max_offset().x);

        for _ in 0..200 {
            entity.x -= 1;
            viewport.follow(entity);
            let current = viewport.offset().x;
            assert!(current <= previous);
            assert!(previous - current <= 1);
            assert_in_bounds(&viewport);
            previous = current;
        }
    }

    #[test]
    fn custom_margins_change_the_band() {
        let mut viewport = maze_viewport(Point::new(10, 10));
        viewport.margin = Point::new(2, 2);
        viewport.follow(Point::new(12, 12));
        assert_eq!(viewport.offset(), Point::new(10, 10));
        viewport.follow(Point::new(11, 11));
        assert_eq!(viewport.offset(), Point::new(9, 9));
    }

    #[test]
    fn focus_centres_and_clamps() {
        let mut viewport = maze_viewport(Point::new(0, 0));
        viewport.focus(Point::new(100, 40));
        assert_eq!(viewport.offset(), Point::new(68, 31));
        viewport.focus(Point::new(1, 1));
        assert_eq!(viewport.offset(), Point::new(0, 0));
        viewport.focus(Point::new(239, 79));
        assert_eq!(viewport.offset(), viewport.max_offset());
    }

    #[test]
    fn to_screen_maps_visible_cells_only() {
        let viewport = maze_viewport(Point::new(10, 5));
        assert_eq!(viewport.to_screen(Point::new(10, 5)), Some(Point::new(8, 9)));
        assert_eq!(viewport.to_screen(Point::new(73, 22)), Some(Point::new(71, 26)));
        assert_eq!(viewport.to_screen(Point::new(74, 22)), None);
        assert_eq!(viewport.to_screen(Point::new(9, 5)), None);
    }
}
