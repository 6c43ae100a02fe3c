//! Throw state - the charge/flight lifecycle of a single throw
//!
//! idle -> charging (charge start) -> flying (release) -> idle (flight done).
//! Charging and flying are mutually exclusive. Power ramps on a fixed
//! interval while charging and wraps past 100 (sawtooth, not clamp). The
//! hoop type is frozen at release so the in-flight throw never changes
//! nature even if the background pre-roll runs again.

use crate::types::{ANGLE_MAX, ANGLE_MIN, FLIGHT_MS, POWER_MAX, POWER_STEP, POWER_TICK_MS};

/// Parameters frozen into a throw at release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowParams {
    pub power: f32,
    pub angle: f32,
    pub split: bool,
}

/// State of the in-progress throw
#[derive(Debug, Clone)]
pub struct ThrowState {
    charging: bool,
    flying: bool,
    power: f32,
    angle: f32,
    /// Hoop type of the in-flight (or last) throw, frozen at release
    split: bool,
    ramp_acc_ms: u32,
    flight_timer_ms: u32,
    /// Landing position of the last resolved throw, as (x%, y%)
    landing: Option<(f32, f32)>,
}

impl ThrowState {
    pub fn new() -> Self {
        Self {
            charging: false,
            flying: false,
            power: 0.0,
            angle: 0.0,
            split: false,
            ramp_acc_ms: 0,
            flight_timer_ms: 0,
            landing: None,
        }
    }

    pub fn charging(&self) -> bool {
        self.charging
    }

    pub fn flying(&self) -> bool {
        self.flying
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn split(&self) -> bool {
        self.split
    }

    pub fn landing(&self) -> Option<(f32, f32)> {
        self.landing
    }

    /// Begin charging. Ignored while already charging or flying.
    pub fn start_charge(&mut self) -> bool {
        if self.charging || self.flying {
            return false;
        }
        self.charging = true;
        self.power = 0.0;
        self.ramp_acc_ms = 0;
        true
    }

    /// Step the aim angle, clamped to its range. Ignored while flying.
    pub fn adjust_angle(&mut self, delta: f32) -> bool {
        if self.flying {
            return false;
        }
        self.angle = (self.angle + delta).clamp(ANGLE_MIN, ANGLE_MAX);
        true
    }

    /// Release the charge, freezing (power, angle, pending hoop type) into
    /// the flight. Returns None unless currently charging.
    pub fn release(&mut self, pending_split: bool) -> Option<ThrowParams> {
        if !self.charging {
            return None;
        }
        self.charging = false;
        self.flying = true;
        self.split = pending_split;
        self.flight_timer_ms = 0;
        Some(ThrowParams {
            power: self.power,
            angle: self.angle,
            split: pending_split,
        })
    }

    /// Advance timers. While charging the power ramps on its fixed interval;
    /// while flying the flight timer counts toward resolution. Returns true
    /// exactly when the flight completes (the caller resolves and settles).
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.charging {
            self.ramp_acc_ms += elapsed_ms;
            while self.ramp_acc_ms >= POWER_TICK_MS {
                self.ramp_acc_ms -= POWER_TICK_MS;
                self.power += POWER_STEP;
                if self.power > POWER_MAX {
                    self.power = 0.0;
                }
            }
            false
        } else if self.flying {
            self.flight_timer_ms += elapsed_ms;
            self.flight_timer_ms >= FLIGHT_MS
        } else {
            false
        }
    }

    /// Land the throw: back to idle with power reset and the landing
    /// position recorded.
    pub fn settle(&mut self, landing: (f32, f32)) {
        self.charging = false;
        self.flying = false;
        self.power = 0.0;
        self.ramp_acc_ms = 0;
        self.flight_timer_ms = 0;
        self.landing = Some(landing);
    }

    /// Reset for a fresh match (angle recentered, no landing marker)
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ThrowState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_gating() {
        let mut throw = ThrowState::new();
        assert!(throw.start_charge());
        // Already charging: ignored.
        assert!(!throw.start_charge());

        throw.release(false);
        // Flying: ignored.
        assert!(!throw.start_charge());
    }

    #[test]
    fn test_power_ramps_on_fixed_interval() {
        let mut throw = ThrowState::new();
        throw.start_charge();

        // Below one interval: no ramp yet.
        throw.tick(POWER_TICK_MS - 1);
        assert_eq!(throw.power(), 0.0);

        // Crossing the interval adds one step.
        throw.tick(1);
        assert!((throw.power() - POWER_STEP).abs() < 1e-3);

        // Several intervals in one tick accumulate.
        throw.tick(POWER_TICK_MS * 3);
        assert!((throw.power() - POWER_STEP * 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_power_wraps_sawtooth_past_max() {
        let mut throw = ThrowState::new();
        throw.start_charge();

        // 32 steps of 3.2 exceed 100 and wrap to zero.
        throw.tick(POWER_TICK_MS * 32);
        assert_eq!(throw.power(), 0.0);

        // The ramp restarts, not pegs.
        throw.tick(POWER_TICK_MS);
        assert!(throw.power() > 0.0);
    }

    #[test]
    fn test_angle_clamps_to_range() {
        let mut throw = ThrowState::new();
        for _ in 0..30 {
            throw.adjust_angle(4.0);
        }
        assert_eq!(throw.angle(), ANGLE_MAX);

        for _ in 0..60 {
            throw.adjust_angle(-4.0);
        }
        assert_eq!(throw.angle(), ANGLE_MIN);
    }

    #[test]
    fn test_angle_frozen_while_flying() {
        let mut throw = ThrowState::new();
        throw.start_charge();
        throw.release(false);

        assert!(!throw.adjust_angle(4.0));
        assert_eq!(throw.angle(), 0.0);
    }

    #[test]
    fn test_release_freezes_pending_hoop_type() {
        let mut throw = ThrowState::new();
        throw.start_charge();
        throw.tick(POWER_TICK_MS * 5);

        let params = throw.release(true).expect("was charging");
        assert!(params.split);
        assert!(throw.split());
        assert!(throw.flying());
        assert!(!throw.charging());
        assert!((params.power - POWER_STEP * 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_release_without_charge_is_ignored() {
        let mut throw = ThrowState::new();
        assert!(throw.release(false).is_none());
        assert!(!throw.flying());
    }

    #[test]
    fn test_flight_completes_after_fixed_duration() {
        let mut throw = ThrowState::new();
        throw.start_charge();
        throw.release(false);

        assert!(!throw.tick(FLIGHT_MS - 1));
        assert!(throw.tick(1));

        throw.settle((50.0, 50.0));
        assert!(!throw.flying());
        assert_eq!(throw.power(), 0.0);
        assert_eq!(throw.landing(), Some((50.0, 50.0)));
    }
}
