//! Movement domain: jump buffer and wall-jump lockout timers.

use crate::movement::WallSide;

/// `jump_timer` is an absolute deadline in seconds of simulation time.
/// The two lockouts are relative countdowns; at most one is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimerBank {
    pub jump_timer: f32,
    /// Suppresses rightward intent after pushing off a right wall
    pub stop_left_timer: f32,
    /// Suppresses leftward intent after pushing off a left wall
    pub stop_right_timer: f32,
}

impl TimerBank {
    pub fn advance(&mut self, dt: f32) {
        for timer in [&mut self.stop_left_timer, &mut self.stop_right_timer] {
            if *timer > 0.0 {
                *timer = (*timer - dt).max(0.0);
            }
        }
    }

    /// Re-arms the jump buffer. The latest press wins.
    pub fn on_jump_pressed(&mut self, now: f32, jump_delay: f32) {
        self.jump_timer = now + jump_delay;
    }

    /// Landing or touching a wall cancels any lockout.
    pub fn on_contact(&mut self, grounded: bool, on_wall: bool) {
        if grounded || on_wall {
            self.stop_left_timer = 0.0;
            self.stop_right_timer = 0.0;
        }
    }

    /// Locks out intent back toward the wall we just jumped from.
    pub fn on_wall_jump_pushoff(&mut self, side: WallSide, lockout_seconds: f32) {
        match side {
            WallSide::Right => {
                self.stop_left_timer = lockout_seconds;
                self.stop_right_timer = 0.0;
            }
            WallSide::Left => {
                self.stop_right_timer = lockout_seconds;
                self.stop_left_timer = 0.0;
            }
        }
    }

    /// Fires a buffered jump if it has not expired and we have contact. Clears the buffer on success.
    pub fn consume_jump_buffer(&mut self, now: f32, grounded: bool, on_wall: bool) -> bool {
        if now < self.jump_timer && (grounded || on_wall) {
            self.jump_timer = 0.0;
            true
        } else {
            false
        }
    }

    pub fn mask_intent(&self, intent_x: f32) -> f32 {
        if self.stop_left_timer > 0.0 {
            intent_x.min(0.0)
        } else if self.stop_right_timer > 0.0 {
            intent_x.max(0.0)
        } else {
            intent_x
        }
    }

    pub fn locked_out(&self) -> bool {
        self.stop_left_timer > 0.0 || self.stop_right_timer > 0.0
    }
}
