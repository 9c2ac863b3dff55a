use glam::Vec2;

use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// The playfield: a fixed-size rectangle with the origin at the top left
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a Y coordinate so a body with the given half extent stays inside
    pub fn clamp_y(&self, y: f32, half_extent: f32) -> f32 {
        y.clamp(half_extent, self.height - half_extent)
    }

    /// Paddle spawn point (vertically centered on its side)
    pub fn paddle_spawn_y(&self) -> f32 {
        self.height / 2.0
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_center() {
        let map = GameMap::new();
        assert_eq!(map.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_map_clamp_y() {
        let map = GameMap::new();
        assert_eq!(map.clamp_y(-5.0, 50.0), 50.0);
        assert_eq!(map.clamp_y(700.0, 50.0), 550.0);
        assert_eq!(map.clamp_y(300.0, 50.0), 300.0);
    }

    #[test]
    fn test_aabb_from_center_size() {
        let aabb = Aabb::from_center_size(Vec2::new(10.0, 20.0), Vec2::new(4.0, 8.0));
        assert_eq!(aabb.min, Vec2::new(8.0, 16.0));
        assert_eq!(aabb.max, Vec2::new(12.0, 24.0));
    }

    #[test]
    fn test_aabb_contains() {
        let aabb = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(aabb.contains(Vec2::new(5.0, 5.0)));
        assert!(aabb.contains(Vec2::new(0.0, 10.0)));
        assert!(!aabb.contains(Vec2::new(11.0, 5.0)));
    }
}
