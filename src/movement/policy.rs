//! Movement domain: gravity scaling and horizontal run/stop policy.
//!
//! Damping is applied per fixed tick, so the feel depends on the fixed
//! timestep rate (50 Hz).

use bevy::prelude::*;

use crate::movement::{ContactState, MovementTuning, PhysicsBody, TimerBank};

/// Later rules override earlier ones: ground, air, wall slide, jump cut.
pub fn gravity_scale(
    contact: &ContactState,
    is_falling: bool,
    intent_x: f32,
    velocity_y: f32,
    jump_held: bool,
    tuning: &MovementTuning,
) -> f32 {
    let mut scale = if contact.on_ground {
        1.0
    } else if is_falling {
        tuning.fall_gravity
    } else {
        tuning.jump_gravity
    };

    if !contact.on_ground && is_falling && contact.pressing_into_wall(intent_x) {
        scale = tuning.wall_slide_gravity;
    }

    // Releasing jump while rising cuts the jump short
    if velocity_y > 0.0 && !jump_held {
        scale = tuning.jump_cut_gravity();
    }

    scale
}

/// Idle or reversing input bleeds speed faster than driving input.
pub fn select_decay(intent_x: f32, velocity_x: f32, tuning: &MovementTuning) -> f32 {
    let changing_direction =
        (intent_x > 0.0 && velocity_x < 0.0) || (intent_x < 0.0 && velocity_x > 0.0);

    if changing_direction || intent_x == 0.0 {
        tuning.idle_decay
    } else {
        tuning.normal_decay
    }
}

pub fn clamp_velocity(velocity: Vec2, tuning: &MovementTuning) -> Vec2 {
    Vec2::new(
        velocity.x.clamp(-tuning.max_speed, tuning.max_speed),
        velocity.y.max(tuning.max_fall_speed),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalMotion {
    /// Velocity after decay, impulse and clamping
    pub velocity: Vec2,
    /// Horizontal intent after lockout masking
    pub effective_intent: f32,
    pub flip_requested: bool,
}

pub fn apply_horizontal_motion(
    body: &mut impl PhysicsBody,
    intent_x: f32,
    timers: &TimerBank,
    facing_right: bool,
    tuning: &MovementTuning,
) -> HorizontalMotion {
    let horizontal = timers.mask_intent(intent_x);
    let mut velocity = body.linear_velocity();
    let decay = select_decay(horizontal, velocity.x, tuning);

    if horizontal == 0.0 && velocity.x.abs() < tuning.stop_threshold {
        velocity.x = 0.0;
    }

    velocity.x *= decay;
    body.set_linear_velocity(velocity);
    body.apply_impulse(Vec2::X * horizontal * tuning.move_speed);

    let flip_requested = (horizontal > 0.0 && !facing_right) || (horizontal < 0.0 && facing_right);

    // Clamp reads the post-impulse velocity
    let clamped = clamp_velocity(body.linear_velocity(), tuning);
    body.set_linear_velocity(clamped);

    HorizontalMotion {
        velocity: clamped,
        effective_intent: horizontal,
        flip_requested,
    }
}
