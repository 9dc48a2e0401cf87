//! The game object hierarchy the factories build.

use std::fmt::Debug;

/// Capabilities shared by every object a factory can produce.
///
/// # Architecture Note
/// Factories hand out `Box<dyn GameObject>`, so the caller only ever sees this
/// capability set. The concrete type is chosen at runtime from a discriminator.
pub trait GameObject: Debug {
    /// Lowercase name of the variant (`"plane"`, `"boat"`, ...).
    fn kind(&self) -> &'static str;

    /// Current grid position as `(x, y)`.
    fn position(&self) -> (i32, i32);

    /// Name of the animation the object plays when idle.
    fn play_default_animation(&self) -> &'static str;

    /// Advances the object one move in the world.
    fn move_in_game(&mut self);

    /// Advances the object's internal clock by one tick.
    fn update(&mut self);

    fn render(&self) -> String;
}

/// A plane flies diagonally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plane {
    x: i32,
    y: i32,
    ticks: u64,
}

impl Plane {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, ticks: 0 }
    }

    /// Creation callback suitable for [`GameObjectFactory::register`](super::GameObjectFactory::register).
    pub fn create() -> Box<dyn GameObject> {
        Box::new(Self::new(0, 0))
    }
}

impl GameObject for Plane {
    fn kind(&self) -> &'static str {
        "plane"
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn play_default_animation(&self) -> &'static str {
        "propeller-spin"
    }

    fn move_in_game(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.y = self.y.wrapping_add(1);
    }

    fn update(&mut self) {
        self.ticks += 1;
    }

    fn render(&self) -> String {
        format!("Plane at ({}, {}) tick {}", self.x, self.y, self.ticks)
    }
}

/// A boat sails along the x axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boat {
    x: i32,
    y: i32,
    ticks: u64,
}

impl Boat {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, ticks: 0 }
    }

    /// Creation callback suitable for [`GameObjectFactory::register`](super::GameObjectFactory::register).
    pub fn create() -> Box<dyn GameObject> {
        Box::new(Self::new(0, 0))
    }
}

impl GameObject for Boat {
    fn kind(&self) -> &'static str {
        "boat"
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn play_default_animation(&self) -> &'static str {
        "bobbing"
    }

    fn move_in_game(&mut self) {
        self.x = self.x.wrapping_add(1);
    }

    fn update(&mut self) {
        self.ticks += 1;
    }

    fn render(&self) -> String {
        format!("Boat at ({}, {}) tick {}", self.x, self.y, self.ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_moves_diagonally() {
        let mut plane = Plane::create();
        plane.move_in_game();
        plane.move_in_game();
        assert_eq!(plane.position(), (2, 2));
    }

    #[test]
    fn test_boat_moves_along_x() {
        let mut boat = Boat::new(1, 5);
        boat.move_in_game();
        assert_eq!(boat.position(), (2, 5));
    }

    #[test]
    fn test_update_advances_render() {
        let mut boat = Boat::create();
        boat.update();
        assert_eq!(boat.render(), "Boat at (0, 0) tick 1");
        assert_eq!(boat.play_default_animation(), "bobbing");
    }

    #[test]
    fn test_moving_at_the_edge_of_the_map_wraps() {
        let mut plane = Plane::new(i32::MAX, i32::MAX);
        plane.move_in_game();
        assert_eq!(plane.position(), (i32::MIN, i32::MIN));

        let mut boat = Boat::new(i32::MAX, 3);
        boat.move_in_game();
        assert_eq!(boat.position(), (i32::MIN, 3));
    }
}
