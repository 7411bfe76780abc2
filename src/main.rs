//! BrailleBot Firmware: main entry point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter  LogEventSink  BlockingDelay            │
//! │  (OutputPort)     (EventSink)   (DelayNs)                │
//! │  SoftApAdapter    HttpServerAdapter                      │
//! │  (AccessPoint)    (route registry)                       │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ─────────────────  │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │          Controller / ControlService               │  │
//! │  │  OutputModel · Sequencer · Route handlers          │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, EspWifi};
use log::info;

use braillebot::adapters::hardware::HardwareAdapter;
use braillebot::adapters::http_server::HttpServerAdapter;
use braillebot::adapters::log_sink::LogEventSink;
use braillebot::adapters::softap::{AccessPointPort, SoftApAdapter};
use braillebot::adapters::time::BlockingDelay;
use braillebot::app::controller::Controller;
use braillebot::config::FirmwareConfig;
use braillebot::drivers::hw_init;
use braillebot::error::Error;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("BrailleBot v{}", env!("CARGO_PKG_VERSION"));

    let config = FirmwareConfig::default();
    config.validate().map_err(Error::Config)?;

    // ── 2. Outputs + welcome animation ────────────────────────
    hw_init::init_peripherals().map_err(Error::from)?;

    let mut controller = Controller::new(
        HardwareAdapter::new(),
        BlockingDelay,
        LogEventSink::new(),
        &config,
    );
    controller.boot();

    // ── 3. Soft-AP ────────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;
    let wifi = BlockingWifi::wrap(
        EspWifi::new(peripherals.modem, sysloop.clone(), Some(nvs))?,
        sysloop,
    )?;

    let mut ap = SoftApAdapter::new(wifi, &config).map_err(Error::from)?;
    let ip = ap.start().map_err(Error::from)?;
    info!("AP '{}' up. IP: {}", ap.ssid(), ip);

    // ── 4. HTTP control surface ───────────────────────────────
    let controller = Arc::new(Mutex::new(controller));
    let _server = HttpServerAdapter::start(config.http_port, controller)?;

    info!("System ready: http://{}:{}/", ip, config.http_port);

    // ── 5. Idle ───────────────────────────────────────────────
    // The httpd task serves requests; this task only keeps `ap` and
    // `_server` alive.
    loop {
        FreeRtos::delay_ms(1000);
    }
}
