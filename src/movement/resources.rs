//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal impulse per tick at full stick deflection
    pub move_speed: f32,
    pub max_speed: f32,
    /// Floor for vertical velocity (negative)
    pub max_fall_speed: f32,
    /// Per-tick horizontal damping while driving in the direction of travel
    pub normal_decay: f32,
    /// Per-tick horizontal damping while idle or reversing
    pub idle_decay: f32,
    pub stop_threshold: f32,
    pub jump_speed: f32,
    /// Seconds a jump press stays buffered waiting for contact
    pub jump_delay: f32,
    pub jump_gravity: f32,
    pub fall_gravity: f32,
    pub wall_slide_gravity: f32,
    /// Applied to jump_gravity while rising with the jump button released
    pub jump_cut_multiplier: f32,
    /// Wall jump push-off, as a multiple of move_speed
    pub wall_jump_push_multiplier: f32,
    /// Seconds of wall-jump lockout
    pub stop_horizontal_timer: f32,
    pub probes: ProbeLayout,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            max_speed: 15.0,
            max_fall_speed: -30.0,
            normal_decay: 0.975,
            idle_decay: 0.92,
            stop_threshold: 2.0,
            jump_speed: 20.0,
            jump_delay: 0.25,
            jump_gravity: 6.0,
            fall_gravity: 9.0,
            wall_slide_gravity: 1.5,
            jump_cut_multiplier: 2.5,
            wall_jump_push_multiplier: 20.0,
            stop_horizontal_timer: 0.25,
            probes: ProbeLayout::default(),
        }
    }
}

impl MovementTuning {
    /// Horizontal impulse of a wall jump push-off.
    pub fn wall_jump_push(&self) -> f32 {
        self.move_speed * self.wall_jump_push_multiplier
    }

    /// Gravity scale while rising with the jump button released (short hop).
    pub fn jump_cut_gravity(&self) -> f32 {
        self.jump_gravity * self.jump_cut_multiplier
    }
}

/// Body-relative anchors and lengths of the contact probes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeLayout {
    /// Anchor at the feet; mirrored in X when the character flips
    pub base_offset: Vec2,
    /// Raises wall probes from the base anchor
    pub foot_offset: Vec2,
    /// Spread of the two ground probes either side of the base anchor
    pub down_probe_offset: Vec2,
    /// Sideways displacement of each wall probe origin
    pub wall_probe_offset: Vec2,
    pub down_len: f32,
    pub wall_len: f32,
}

impl Default for ProbeLayout {
    fn default() -> Self {
        Self {
            base_offset: Vec2::new(0.0, -1.0),
            foot_offset: Vec2::new(0.0, 0.13),
            down_probe_offset: Vec2::new(0.5, 0.0),
            wall_probe_offset: Vec2::new(0.89, 0.0),
            down_len: 0.2,
            wall_len: 0.3,
        }
    }
}

/// One tick of player intent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputIntent {
    /// Horizontal and vertical axis, each in [-1, 1]. Vertical is sampled but unused.
    pub axis: Vec2,
    /// True only on the tick the jump button goes down
    pub jump_pressed: bool,
    pub jump_held: bool,
}

impl InputIntent {
    pub fn horizontal(x: f32) -> Self {
        Self {
            axis: Vec2::new(x, 0.0),
            ..default()
        }
    }
}

#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct MovementInput(pub InputIntent);
