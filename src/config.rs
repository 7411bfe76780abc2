//! Firmware configuration parameters
//!
//! All tunable parameters for the BrailleBot controller. Values are
//! compile-time defaults; nothing is persisted across reboots.

use serde::{Deserialize, Serialize};

/// Maximum SSID length accepted by the Wi-Fi driver.
pub const SSID_MAX_LEN: usize = 32;
/// Maximum WPA2 passphrase length.
pub const PASSWORD_MAX_LEN: usize = 64;
/// Minimum WPA2 passphrase length (an empty passphrase means an open AP).
pub const PASSWORD_MIN_LEN: usize = 8;

/// Core firmware configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareConfig {
    // --- Access point ---
    /// Network name broadcast by the soft-AP
    pub ap_ssid: heapless::String<SSID_MAX_LEN>,
    /// WPA2 passphrase (empty = open network)
    pub ap_password: heapless::String<PASSWORD_MAX_LEN>,
    /// 2.4 GHz channel for the soft-AP
    pub ap_channel: u8,
    /// Maximum simultaneous stations
    pub max_ap_connections: u16,
    /// Settle time after each Wi-Fi reset step (milliseconds)
    pub wifi_settle_ms: u32,

    // --- HTTP ---
    /// Listening port for the control surface
    pub http_port: u16,

    // --- Timing ---
    /// Hold time between direction flips in the animation (milliseconds)
    pub animation_step_ms: u32,
    /// Reverse hold time for `/dir?d=2` before snapping back forward (milliseconds)
    pub reverse_pulse_ms: u32,
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self {
            // Access point
            ap_ssid: fixed("BrailleBot"),
            ap_password: fixed("braille123"),
            ap_channel: 1,
            max_ap_connections: 4,
            wifi_settle_ms: 100,

            // HTTP
            http_port: 80,

            // Timing
            animation_step_ms: 550,
            reverse_pulse_ms: 250,
        }
    }
}

impl FirmwareConfig {
    /// Range-check every field.  Returns the first offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.ap_ssid.is_empty() {
            return Err("ap_ssid: must not be empty");
        }
        if !self.ap_ssid.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
            return Err("ap_ssid: must be printable ASCII");
        }
        if !self.ap_password.is_empty() && self.ap_password.len() < PASSWORD_MIN_LEN {
            return Err("ap_password: must be 8-64 bytes or empty");
        }
        if !(1..=13).contains(&self.ap_channel) {
            return Err("ap_channel: must be 1-13");
        }
        if self.max_ap_connections == 0 {
            return Err("max_ap_connections: must be at least 1");
        }
        if self.http_port == 0 {
            return Err("http_port: must be non-zero");
        }
        if self.animation_step_ms == 0 {
            return Err("animation_step_ms: must be non-zero");
        }
        Ok(())
    }
}

fn fixed<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    let _ = out.push_str(&s[..s.len().min(N)]);
    out
}
