//! Movement domain: components, contact state and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::ProbeLayout;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    /// Horizontal sign pointing away from this wall.
    pub fn away(self) -> f32 {
        match self {
            WallSide::Left => 1.0,
            WallSide::Right => -1.0,
        }
    }
}

/// Ground and wall contact for the current tick. Rebuilt from scratch every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactState {
    pub on_ground: bool,
    pub on_wall_left: bool,
    pub on_wall_right: bool,
}

impl ContactState {
    pub fn on_wall(&self) -> bool {
        self.on_wall_left || self.on_wall_right
    }

    /// The wall a wall jump pushes off from. The right wall wins when squeezed between both.
    pub fn wall_side(&self) -> Option<WallSide> {
        if self.on_wall_right {
            Some(WallSide::Right)
        } else if self.on_wall_left {
            Some(WallSide::Left)
        } else {
            None
        }
    }

    /// True when horizontal intent points into a wall we are touching.
    pub fn pressing_into_wall(&self, intent_x: f32) -> bool {
        (self.on_wall_left && intent_x < 0.0) || (self.on_wall_right && intent_x > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedFlags {
    pub is_falling: bool,
    pub is_wall_sliding: bool,
}

impl DerivedFlags {
    pub fn derive(contact: &ContactState, velocity: Vec2, intent_x: f32) -> Self {
        Self {
            is_falling: velocity.y < 0.0,
            is_wall_sliding: !contact.on_ground
                && contact.on_wall()
                && velocity.y <= 0.0
                && contact.pressing_into_wall(intent_x),
        }
    }
}

/// Facing direction plus the probe base anchor, which mirrors with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub facing_right: bool,
    pub base_offset: Vec2,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(&ProbeLayout::default())
    }
}

impl Orientation {
    pub fn new(layout: &ProbeLayout) -> Self {
        Self {
            facing_right: true,
            base_offset: layout.base_offset,
        }
    }

    pub fn flip(&mut self) {
        self.facing_right = !self.facing_right;
        self.base_offset.x = -self.base_offset.x;
    }
}
