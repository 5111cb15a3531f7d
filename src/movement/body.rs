//! Movement domain: the rigid-body operations the controller drives.

use avian2d::prelude::*;
use bevy::prelude::*;

pub trait PhysicsBody {
    fn linear_velocity(&self) -> Vec2;
    fn set_linear_velocity(&mut self, velocity: Vec2);
    fn set_gravity_scale(&mut self, scale: f32);
    /// Instantaneous change of momentum. Visible to `linear_velocity` immediately.
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// Borrowed view over an avian rigid body for one fixed tick.
pub struct AvianBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub gravity_scale: &'a mut GravityScale,
    pub inverse_mass: f32,
}

impl PhysicsBody for AvianBody<'_> {
    fn linear_velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }
}
