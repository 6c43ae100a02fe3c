//! Press/hold/release tracking for the charge and aim keys.
//!
//! Space drives the charge: press starts it, release (or a quiet period in
//! terminals that never emit release events) fires the throw. The aim keys
//! repeat while held using a DAS/ARR-style delay and rate.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::types::{ThrowAction, AIM_ARR_MS, AIM_DAS_MS};

/// Direction the aim key currently held, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AimDirection {
    Left,
    Right,
    None,
}

impl AimDirection {
    fn action(self) -> Option<ThrowAction> {
        match self {
            AimDirection::Left => Some(ThrowAction::AngleLeft),
            AimDirection::Right => Some(ThrowAction::AngleRight),
            AimDirection::None => None,
        }
    }
}

// In terminals without key-release events, a short timeout past the last
// repeat event stands in for the release. Auto-repeat typically fires well
// inside this window, so a held key stays held.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks held keys and synthesizes the hold semantics.
#[derive(Debug, Clone)]
pub struct InputTracker {
    aim: AimDirection,
    space_held: bool,
    last_key_time: std::time::Instant,
    aim_das_timer: u32,
    aim_arr_accumulator: u32,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::with_config(AIM_DAS_MS, AIM_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            aim: AimDirection::None,
            space_held: false,
            last_key_time: std::time::Instant::now(),
            aim_das_timer: 0,
            aim_arr_accumulator: 0,
            das_delay,
            arr_rate,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Map a key press to an action, updating held-key state.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<ThrowAction> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.last_key_time = std::time::Instant::now();
                if self.aim == AimDirection::Left {
                    None
                } else {
                    self.aim = AimDirection::Left;
                    self.aim_das_timer = 0;
                    self.aim_arr_accumulator = 0;
                    Some(ThrowAction::AngleLeft)
                }
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.last_key_time = std::time::Instant::now();
                if self.aim == AimDirection::Right {
                    None
                } else {
                    self.aim = AimDirection::Right;
                    self.aim_das_timer = 0;
                    self.aim_arr_accumulator = 0;
                    Some(ThrowAction::AngleRight)
                }
            }
            KeyCode::Char(' ') => {
                self.last_key_time = std::time::Instant::now();
                if self.space_held {
                    None
                } else {
                    self.space_held = true;
                    Some(ThrowAction::ChargeStart)
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(ThrowAction::Reset),
            _ => None,
        }
    }

    /// Refresh the hold timer for terminal auto-repeat events without
    /// producing an action.
    pub fn refresh_hold(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') if self.space_held => {
                self.last_key_time = std::time::Instant::now();
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A')
                if self.aim == AimDirection::Left =>
            {
                self.last_key_time = std::time::Instant::now();
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D')
                if self.aim == AimDirection::Right =>
            {
                self.last_key_time = std::time::Instant::now();
            }
            _ => {}
        }
    }

    /// Map a key release. Releasing Space fires the charge.
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<ThrowAction> {
        match code {
            KeyCode::Char(' ') => {
                if self.space_held {
                    self.space_held = false;
                    Some(ThrowAction::ChargeRelease)
                } else {
                    None
                }
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                if self.aim == AimDirection::Left {
                    self.aim = AimDirection::None;
                    self.aim_das_timer = 0;
                    self.aim_arr_accumulator = 0;
                }
                None
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                if self.aim == AimDirection::Right {
                    self.aim = AimDirection::None;
                    self.aim_das_timer = 0;
                    self.aim_arr_accumulator = 0;
                }
                None
            }
            _ => None,
        }
    }

    /// Per-tick update: aim repeats after the DAS delay, and held keys
    /// auto-release when no event has refreshed them within the timeout.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<ThrowAction, 8> {
        let mut actions = ArrayVec::<ThrowAction, 8>::new();

        let time_since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if time_since_last_key > self.key_release_timeout_ms {
            if self.space_held {
                self.space_held = false;
                let _ = actions.try_push(ThrowAction::ChargeRelease);
            }
            if self.aim != AimDirection::None {
                self.aim = AimDirection::None;
                self.aim_das_timer = 0;
                self.aim_arr_accumulator = 0;
            }
        }

        if let Some(action) = self.aim.action() {
            let prev_das = self.aim_das_timer;
            self.aim_das_timer += elapsed_ms;

            if self.aim_das_timer >= self.das_delay {
                let excess = if prev_das < self.das_delay {
                    self.aim_das_timer - self.das_delay
                } else {
                    elapsed_ms
                };
                self.aim_arr_accumulator += excess;

                while self.aim_arr_accumulator >= self.arr_rate {
                    let _ = actions.try_push(action);
                    self.aim_arr_accumulator -= self.arr_rate;
                }
            }
        } else {
            self.aim_das_timer = 0;
            self.aim_arr_accumulator = 0;
        }

        actions
    }

    pub fn reset(&mut self) {
        self.aim = AimDirection::None;
        self.space_held = false;
        self.last_key_time = std::time::Instant::now();
        self.aim_das_timer = 0;
        self.aim_arr_accumulator = 0;
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}
