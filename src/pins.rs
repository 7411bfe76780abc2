//! GPIO pin assignments for the BrailleBot controller board (ESP32-WROOM).
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Direction bridge (L298N-style IN1/IN2 pair)
// ---------------------------------------------------------------------------

/// IN1: HIGH while the latch is forward.
pub const DIR_IN1_GPIO: i32 = 25;
/// IN2: HIGH while the latch is reverse.
pub const DIR_IN2_GPIO: i32 = 33;

// ---------------------------------------------------------------------------
// Channel outputs ("motors" 1–6, active HIGH)
// ---------------------------------------------------------------------------

pub const CHANNEL_1_GPIO: i32 = 18;
pub const CHANNEL_2_GPIO: i32 = 23;
pub const CHANNEL_3_GPIO: i32 = 32;
pub const CHANNEL_4_GPIO: i32 = 22;
pub const CHANNEL_5_GPIO: i32 = 19;
pub const CHANNEL_6_GPIO: i32 = 21;

/// Channel GPIOs indexed by `ChannelId::index()` (channel 1 at index 0).
pub const CHANNEL_GPIOS: [i32; 6] = [
    CHANNEL_1_GPIO,
    CHANNEL_2_GPIO,
    CHANNEL_3_GPIO,
    CHANNEL_4_GPIO,
    CHANNEL_5_GPIO,
    CHANNEL_6_GPIO,
];

/// Every output line configured at boot.
pub const OUTPUT_GPIOS: [i32; 8] = [
    DIR_IN1_GPIO,
    DIR_IN2_GPIO,
    CHANNEL_1_GPIO,
    CHANNEL_2_GPIO,
    CHANNEL_3_GPIO,
    CHANNEL_4_GPIO,
    CHANNEL_5_GPIO,
    CHANNEL_6_GPIO,
];
