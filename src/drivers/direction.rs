//! Direction bridge driver (IN1/IN2 pair on an L298N-style H-bridge).
//!
//! Forward drives IN1 HIGH / IN2 LOW, reverse the opposite. The two lines
//! are never both HIGH.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// Both lines LOW (power-on, before the first drive).
    Idle,
    Forward,
    Reverse,
}

pub struct DirectionBridge {
    state: BridgeState,
}

impl DirectionBridge {
    pub fn new() -> Self {
        Self {
            state: BridgeState::Idle,
        }
    }

    pub fn forward(&mut self) {
        // Release IN2 before raising IN1 so the lines never overlap HIGH.
        hw_init::gpio_write(pins::DIR_IN2_GPIO, false);
        hw_init::gpio_write(pins::DIR_IN1_GPIO, true);
        self.state = BridgeState::Forward;
    }

    pub fn reverse(&mut self) {
        hw_init::gpio_write(pins::DIR_IN1_GPIO, false);
        hw_init::gpio_write(pins::DIR_IN2_GPIO, true);
        self.state = BridgeState::Reverse;
    }

    /// Logical levels of (IN1, IN2).
    pub fn levels(&self) -> (bool, bool) {
        match self.state {
            BridgeState::Idle => (false, false),
            BridgeState::Forward => (true, false),
            BridgeState::Reverse => (false, true),
        }
    }
}
