use crate::{Config, Side};
use glam::Vec2;

/// Axis-aligned rectangle, anchored at its top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size * 0.5;
    }

    pub fn set_center_y(&mut self, y: f32) {
        self.pos.y = y - self.size.y * 0.5;
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// The playfield; fixed for the lifetime of a match
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.screen_width, config.screen_height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ball rectangle centred on the playfield
    pub fn ball_spawn(&self, size: f32) -> Rect {
        Rect::from_center_size(self.center(), Vec2::splat(size))
    }

    /// Paddle rectangle for `side`, vertically centred
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Rect {
        let mut rect = Rect::new(
            Vec2::new(config.paddle_x(side), 0.0),
            Vec2::new(config.paddle_width, config.paddle_height),
        );
        rect.set_center_y(self.height / 2.0);
        rect
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_rect_setters_keep_size() {
        let mut rect = Rect::new(Vec2::ZERO, Vec2::new(10.0, 140.0));
        rect.set_bottom(480.0);
        assert_eq!(rect.top(), 340.0);
        rect.set_right(630.0);
        assert_eq!(rect.left(), 620.0);
        rect.set_center_y(240.0);
        assert_eq!(rect.top(), 170.0);
        assert_eq!(rect.size, Vec2::new(10.0, 140.0));
    }

    #[test]
    fn test_rect_intersects_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_spawns_are_centred() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        assert_eq!(map.ball_spawn(30.0).center(), Vec2::new(320.0, 240.0));

        let near = map.paddle_spawn(Side::Near, &config);
        assert_eq!(near.pos, Vec2::new(620.0, 170.0));
        let far = map.paddle_spawn(Side::Far, &config);
        assert_eq!(far.pos, Vec2::new(10.0, 170.0));
    }
}
