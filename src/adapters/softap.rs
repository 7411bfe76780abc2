//! Wi-Fi soft access-point adapter.
//!
//! Implements [`AccessPointPort`]: the hexagonal boundary for network
//! bring-up.  The control core never sees this; `main` starts the AP and
//! only needs the resulting address.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real ESP-IDF Wi-Fi driver via `esp_idf_svc::wifi`.
//! - **all other targets**: simulation stubs for host-side tests.
//!
//! ## Deterministic start
//!
//! [`AccessPointPort::start`] always resets first: any station link is
//! dropped, a running AP is stopped, and the driver's stored settings are
//! restored to defaults, with a settle delay after each step.  Reset
//! failures are logged and skipped; only configuration and start failures
//! are errors.

use core::fmt;
use std::net::Ipv4Addr;

use log::{info, warn};

use crate::config::{FirmwareConfig, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, SSID_MAX_LEN};

#[cfg(target_os = "espidf")]
use esp_idf_svc::wifi::{
    AccessPointConfiguration, AuthMethod, BlockingWifi, Configuration, EspWifi,
};

// ───────────────────────────────────────────────────────────────
// Port trait
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessPointError {
    InvalidSsid,
    InvalidPassword,
    /// The driver rejected the AP configuration (carries `esp_err_t`).
    ConfigRejected(i32),
    /// The driver failed to start or the netif never came up.
    StartFailed(i32),
}

impl fmt::Display for AccessPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSsid => write!(f, "SSID invalid (must be 1-32 printable ASCII bytes)"),
            Self::InvalidPassword => {
                write!(f, "password invalid (must be 8-64 bytes for WPA2, or empty for open)")
            }
            Self::ConfigRejected(rc) => write!(f, "AP configuration rejected (rc={})", rc),
            Self::StartFailed(rc) => write!(f, "AP start failed (rc={})", rc),
        }
    }
}

pub trait AccessPointPort {
    /// Reset, configure, and start the AP.  Returns the AP's own address.
    ///
    /// Calling it again on a running AP tears it down and starts afresh.
    fn start(&mut self) -> Result<Ipv4Addr, AccessPointError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApState {
    Stopped,
    Resetting,
    Running,
    Failed,
}

// ───────────────────────────────────────────────────────────────
// Validation
// ───────────────────────────────────────────────────────────────

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

fn validate_ssid(ssid: &str) -> Result<(), AccessPointError> {
    if ssid.is_empty() || ssid.len() > SSID_MAX_LEN || !is_printable_ascii(ssid) {
        return Err(AccessPointError::InvalidSsid);
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AccessPointError> {
    if password.is_empty() {
        return Ok(());
    }
    if password.len() < PASSWORD_MIN_LEN || password.len() > PASSWORD_MAX_LEN {
        return Err(AccessPointError::InvalidPassword);
    }
    Ok(())
}

// ───────────────────────────────────────────────────────────────
// Soft-AP adapter
// ───────────────────────────────────────────────────────────────

pub struct SoftApAdapter {
    state: ApState,
    ssid: heapless::String<SSID_MAX_LEN>,
    password: heapless::String<PASSWORD_MAX_LEN>,
    channel: u8,
    max_connections: u16,
    settle_ms: u32,
    #[cfg(target_os = "espidf")]
    wifi: BlockingWifi<EspWifi<'static>>,
    /// Simulation: how many reset sequences have run.
    #[cfg(not(target_os = "espidf"))]
    sim_resets: u32,
}

impl SoftApAdapter {
    #[cfg(target_os = "espidf")]
    pub fn new(
        wifi: BlockingWifi<EspWifi<'static>>,
        config: &FirmwareConfig,
    ) -> Result<Self, AccessPointError> {
        validate_ssid(&config.ap_ssid)?;
        validate_password(&config.ap_password)?;
        Ok(Self {
            state: ApState::Stopped,
            ssid: config.ap_ssid.clone(),
            password: config.ap_password.clone(),
            channel: config.ap_channel,
            max_connections: config.max_ap_connections,
            settle_ms: config.wifi_settle_ms,
            wifi,
        })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new(config: &FirmwareConfig) -> Result<Self, AccessPointError> {
        validate_ssid(&config.ap_ssid)?;
        validate_password(&config.ap_password)?;
        Ok(Self {
            state: ApState::Stopped,
            ssid: config.ap_ssid.clone(),
            password: config.ap_password.clone(),
            channel: config.ap_channel,
            max_connections: config.max_ap_connections,
            settle_ms: config.wifi_settle_ms,
            sim_resets: 0,
        })
    }

    pub fn state(&self) -> ApState {
        self.state
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    fn settle(&self) {
        use embedded_hal::delay::DelayNs;
        super::time::BlockingDelay.delay_ms(self.settle_ms);
    }

    // ── Platform-specific ─────────────────────────────────────

    #[cfg(target_os = "espidf")]
    fn platform_reset(&mut self) {
        // Station link first, so a stale association can't survive the restart.
        if let Err(e) = self.wifi.disconnect() {
            warn!("AP: station disconnect skipped ({})", e);
        }
        self.settle();

        if self.wifi.is_started().unwrap_or(false) {
            if let Err(e) = self.wifi.stop() {
                warn!("AP: stop before restart failed ({})", e);
            }
        }

        // SAFETY: the driver was initialised by EspWifi::new; restore only
        // rewrites its stored configuration to factory defaults.
        let rc = unsafe { esp_idf_sys::esp_wifi_restore() };
        if rc != esp_idf_sys::ESP_OK as i32 {
            warn!("AP: esp_wifi_restore failed (rc={})", rc);
        }
        self.settle();
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_reset(&mut self) {
        self.sim_resets += 1;
        self.settle();
        info!("AP(sim): reset #{}", self.sim_resets);
    }

    #[cfg(target_os = "espidf")]
    fn platform_start(&mut self) -> Result<Ipv4Addr, AccessPointError> {
        let ap = AccessPointConfiguration {
            ssid: self
                .ssid
                .as_str()
                .try_into()
                .map_err(|_| AccessPointError::InvalidSsid)?,
            password: self
                .password
                .as_str()
                .try_into()
                .map_err(|_| AccessPointError::InvalidPassword)?,
            auth_method: if self.password.is_empty() {
                AuthMethod::None
            } else {
                AuthMethod::WPA2Personal
            },
            channel: self.channel,
            max_connections: self.max_connections,
            ssid_hidden: false,
            ..Default::default()
        };

        self.wifi
            .set_configuration(&Configuration::AccessPoint(ap))
            .map_err(|e| AccessPointError::ConfigRejected(e.code()))?;
        self.wifi
            .start()
            .map_err(|e| AccessPointError::StartFailed(e.code()))?;
        self.wifi
            .wait_netif_up()
            .map_err(|e| AccessPointError::StartFailed(e.code()))?;

        let info = self
            .wifi
            .wifi()
            .ap_netif()
            .get_ip_info()
            .map_err(|e| AccessPointError::StartFailed(e.code()))?;
        Ok(info.ip)
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_start(&mut self) -> Result<Ipv4Addr, AccessPointError> {
        // ESP-IDF's default soft-AP netif address.
        Ok(Ipv4Addr::new(192, 168, 4, 1))
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn sim_resets(&self) -> u32 {
        self.sim_resets
    }
}

// ───────────────────────────────────────────────────────────────
// AccessPointPort
// ───────────────────────────────────────────────────────────────

impl AccessPointPort for SoftApAdapter {
    fn start(&mut self) -> Result<Ipv4Addr, AccessPointError> {
        if self.state == ApState::Running {
            info!("AP: restarting '{}'", self.ssid);
        }
        self.state = ApState::Resetting;
        self.platform_reset();

        info!("AP: starting '{}' on channel {}", self.ssid, self.channel);
        match self.platform_start() {
            Ok(ip) => {
                self.state = ApState::Running;
                info!("AP: started, IP {}", ip);
                Ok(ip)
            }
            Err(e) => {
                self.state = ApState::Failed;
                warn!("AP: start failed: {}", e);
                Err(e)
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
