//! Movement domain: ground and wall detection against the avian spatial query.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    BodySample, CharacterController, GameLayer, MovementInput, MovementTuning, Player,
    ProbeCaster,
};

/// Casts contact probes against terrain (ground and wall layers).
pub(crate) struct TerrainProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> TerrainProbe<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]),
        }
    }
}

impl ProbeCaster for TerrainProbe<'_, '_, '_> {
    fn probe(&self, origin: Vec2, direction: Dir2, length: f32) -> bool {
        self.spatial_query
            .cast_ray(origin, direction, length, true, &self.filter)
            .is_some()
    }
}

/// Variable-rate half of the controller: contact, flags, timers and the jump buffer.
pub(crate) fn track_contacts(
    time: Res<Time<Virtual>>,
    spatial_query: SpatialQuery,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &LinearVelocity, &mut CharacterController), With<Player>>,
) {
    let probe = TerrainProbe::new(&spatial_query);
    let dt = time.delta_secs();
    let now = time.elapsed_secs();

    for (transform, velocity, mut controller) in &mut query {
        let previous = controller.contact;
        let sample = BodySample {
            position: transform.translation.truncate(),
            velocity: velocity.0,
        };

        controller.on_variable_tick(dt, now, sample, input.0, &tuning, &probe);

        let contact = controller.contact;
        if contact.on_ground && !previous.on_ground {
            debug!("Landed: vy={:.2}", velocity.y);
        } else if !contact.on_ground && previous.on_ground {
            debug!("Left ground: vy={:.2}", velocity.y);
        }
        if contact.on_wall() && !previous.on_wall() {
            debug!(
                "Touched wall: left={}, right={}",
                contact.on_wall_left, contact.on_wall_right
            );
        }
        if input.jump_pressed {
            debug!("Jump buffered until t={:.3}", controller.timers.jump_timer);
        }
    }
}
