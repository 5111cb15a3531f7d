//! Movement domain: the per-character controller and its two tick entry points.
//!
//! `on_variable_tick` runs once per frame: it latches input, senses contact,
//! derives flags and updates timers. `on_fixed_tick` runs once per physics
//! step, before integration: it sets gravity, drives horizontal motion and
//! fires buffered jumps.

use bevy::prelude::*;

use crate::movement::policy::{apply_horizontal_motion, clamp_velocity, gravity_scale};
use crate::movement::sensor::{ProbeCaster, sense_contacts};
use crate::movement::{
    ContactState, DerivedFlags, InputIntent, MovementTuning, Orientation, PhysicsBody,
    ProbeLayout, TimerBank, WallSide,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    /// Pushed off the wall on this side
    Wall(WallSide),
}

/// Position and velocity read from the body at the start of a variable tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodySample {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// What a fixed tick did to the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTickReport {
    pub gravity_scale: f32,
    pub effective_intent: f32,
    pub flipped: bool,
    pub jump: Option<JumpKind>,
}

#[derive(Component, Debug, Clone, Default)]
pub struct CharacterController {
    pub contact: ContactState,
    pub flags: DerivedFlags,
    pub timers: TimerBank,
    pub orientation: Orientation,
    /// Intent latched by the last variable tick
    pub intent: InputIntent,
}

impl CharacterController {
    pub fn new(layout: &ProbeLayout) -> Self {
        Self {
            orientation: Orientation::new(layout),
            ..default()
        }
    }

    pub fn on_variable_tick(
        &mut self,
        dt: f32,
        now: f32,
        sample: BodySample,
        input: InputIntent,
        tuning: &MovementTuning,
        caster: &impl ProbeCaster,
    ) {
        self.intent = input;
        self.contact = sense_contacts(
            sample.position,
            self.orientation.base_offset,
            &tuning.probes,
            caster,
        );
        self.flags = DerivedFlags::derive(&self.contact, sample.velocity, input.axis.x);

        self.timers
            .on_contact(self.contact.on_ground, self.contact.on_wall());
        self.timers.advance(dt);

        if input.jump_pressed {
            self.timers.on_jump_pressed(now, tuning.jump_delay);
        }
    }

    pub fn on_fixed_tick(
        &mut self,
        now: f32,
        body: &mut impl PhysicsBody,
        tuning: &MovementTuning,
    ) -> FixedTickReport {
        let scale = gravity_scale(
            &self.contact,
            self.flags.is_falling,
            self.intent.axis.x,
            body.linear_velocity().y,
            self.intent.jump_held,
            tuning,
        );
        body.set_gravity_scale(scale);

        let motion = apply_horizontal_motion(
            body,
            self.intent.axis.x,
            &self.timers,
            self.orientation.facing_right,
            tuning,
        );
        if motion.flip_requested {
            self.orientation.flip();
        }

        let jump = if self.timers.consume_jump_buffer(
            now,
            self.contact.on_ground,
            self.contact.on_wall(),
        ) {
            self.jump(body, tuning)
        } else {
            None
        };

        if jump.is_some() {
            // Wall push-off can exceed max speed
            body.set_linear_velocity(clamp_velocity(body.linear_velocity(), tuning));
        }

        FixedTickReport {
            gravity_scale: scale,
            effective_intent: motion.effective_intent,
            flipped: motion.flip_requested,
            jump,
        }
    }

    /// Ground jumps win over wall jumps when both contacts hold.
    fn jump(&mut self, body: &mut impl PhysicsBody, tuning: &MovementTuning) -> Option<JumpKind> {
        if self.contact.on_ground {
            let velocity = body.linear_velocity();
            body.set_linear_velocity(Vec2::new(velocity.x, 0.0));
            body.apply_impulse(Vec2::Y * tuning.jump_speed);
            return Some(JumpKind::Ground);
        }

        let side = self.contact.wall_side()?;
        body.set_linear_velocity(Vec2::ZERO);
        body.apply_impulse(Vec2::Y * tuning.jump_speed);
        body.apply_impulse(Vec2::X * side.away() * tuning.wall_jump_push());
        self.timers
            .on_wall_jump_pushoff(side, tuning.stop_horizontal_timer);

        Some(JumpKind::Wall(side))
    }
}
