//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements       | Connects to               |
//! |---------------|------------------|---------------------------|
//! | `hardware`    | OutputPort       | ESP32 GPIO (8 lines)      |
//! | `log_sink`    | EventSink        | Serial log output         |
//! | `time`        | DelayNs          | FreeRTOS delay / timer    |
//! | `softap`      | AccessPointPort  | ESP-IDF Wi-Fi soft-AP     |
//! | `http_server` | (route registry) | ESP-IDF httpd (espidf only)|

pub mod hardware;
#[cfg(target_os = "espidf")]
pub mod http_server;
pub mod log_sink;
pub mod softap;
pub mod time;
