//! Movement domain: mirrors the sprite to match controller facing.

use bevy::prelude::*;

use crate::movement::{CharacterController, Player};

pub(crate) fn sync_facing(mut query: Query<(&CharacterController, &mut Sprite), With<Player>>) {
    for (controller, mut sprite) in &mut query {
        let flip_x = !controller.orientation.facing_right;
        if sprite.flip_x != flip_x {
            sprite.flip_x = flip_x;
            debug!(
                "Flip: facing_right={}, base_offset={:?}",
                controller.orientation.facing_right, controller.orientation.base_offset
            );
        }
    }
}
