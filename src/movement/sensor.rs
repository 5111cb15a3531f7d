//! Movement domain: ground and wall contact probes.

use bevy::prelude::*;

use crate::movement::{ContactState, ProbeLayout};

/// Answers segment queries against the terrain collision mask.
pub trait ProbeCaster {
    fn probe(&self, origin: Vec2, direction: Dir2, length: f32) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeRay {
    pub origin: Vec2,
    pub direction: Dir2,
    pub length: f32,
}

impl ProbeRay {
    pub fn end(&self) -> Vec2 {
        self.origin + *self.direction * self.length
    }

    fn cast(&self, caster: &impl ProbeCaster) -> bool {
        caster.probe(self.origin, self.direction, self.length)
    }
}

/// The four contact probes for a body at `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSet {
    pub ground_right: ProbeRay,
    pub ground_left: ProbeRay,
    pub wall_right: ProbeRay,
    pub wall_left: ProbeRay,
}

impl ProbeSet {
    pub fn new(position: Vec2, base_offset: Vec2, layout: &ProbeLayout) -> Self {
        let base = position + base_offset;
        let foot = base + layout.foot_offset;

        Self {
            ground_right: ProbeRay {
                origin: base + layout.down_probe_offset,
                direction: Dir2::NEG_Y,
                length: layout.down_len,
            },
            ground_left: ProbeRay {
                origin: base - layout.down_probe_offset,
                direction: Dir2::NEG_Y,
                length: layout.down_len,
            },
            wall_right: ProbeRay {
                origin: foot + layout.wall_probe_offset,
                direction: Dir2::X,
                length: layout.wall_len,
            },
            wall_left: ProbeRay {
                origin: foot - layout.wall_probe_offset,
                direction: Dir2::NEG_X,
                length: layout.wall_len,
            },
        }
    }

    pub fn rays(&self) -> [ProbeRay; 4] {
        [
            self.ground_right,
            self.ground_left,
            self.wall_right,
            self.wall_left,
        ]
    }
}

/// Two ground probes so a body straddling a ledge still counts as grounded.
/// No hysteresis: a single missed probe is a lost contact.
pub fn sense_contacts(
    position: Vec2,
    base_offset: Vec2,
    layout: &ProbeLayout,
    caster: &impl ProbeCaster,
) -> ContactState {
    let probes = ProbeSet::new(position, base_offset, layout);

    ContactState {
        on_ground: probes.ground_right.cast(caster) || probes.ground_left.cast(caster),
        on_wall_left: probes.wall_left.cast(caster),
        on_wall_right: probes.wall_right.cast(caster),
    }
}
