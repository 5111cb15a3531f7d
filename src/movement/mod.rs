//! Movement domain: platformer character controller plugin wiring and public exports.

mod body;
mod bootstrap;
mod components;
mod controller;
mod dev;
mod policy;
mod resources;
mod sensor;
mod systems;
mod timers;


pub use body::{AvianBody, PhysicsBody};
pub use components::{
    ContactState, DerivedFlags, GameLayer, Ground, Orientation, Player, Wall, WallSide,
};
pub use controller::{BodySample, CharacterController, FixedTickReport, JumpKind};
pub use policy::{
    HorizontalMotion, apply_horizontal_motion, clamp_velocity, gravity_scale, select_decay,
};
pub use resources::{InputIntent, MovementInput, MovementTuning, ProbeLayout};
pub use sensor::{ProbeCaster, ProbeRay, ProbeSet, sense_contacts};
pub use timers::TimerBank;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{apply_motion, read_input, sync_facing, track_contacts};

/// Fixed simulation rate the decay constants are tuned for.
pub const FIXED_TICK_HZ: f64 = 50.0;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ))
            .add_systems(Startup, (spawn_test_room, spawn_player))
            // Variable-rate phase: input, contact and timers
            .add_systems(Update, (read_input, track_contacts).chain())
            // Fixed-rate phase: runs before avian integrates in FixedPostUpdate
            .add_systems(FixedUpdate, (apply_motion, sync_facing).chain());

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_probe_gizmos.after(track_contacts));
    }
}
