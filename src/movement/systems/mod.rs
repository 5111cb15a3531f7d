//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod orientation;

pub(crate) use collisions::track_contacts;
pub(crate) use input::read_input;
pub(crate) use movement::apply_motion;
pub(crate) use orientation::sync_facing;
