//! Request-level façade over the control service.
//!
//! [`Controller`] bundles the service with the delay and event sink it
//! needs, so the HTTP adapter can keep a single object behind its mutex
//! and hand it raw URIs.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::config::FirmwareConfig;

use super::commands::ControlCommand;
use super::ports::{EventSink, OutputPort};
use super::query::Query;
use super::routes::{self, Response, Route};
use super::service::ControlService;

pub struct Controller<O: OutputPort, D: DelayNs, S: EventSink> {
    service: ControlService<O>,
    delay: D,
    sink: S,
}

impl<O: OutputPort, D: DelayNs, S: EventSink> Controller<O, D, S> {
    pub fn new(port: O, delay: D, sink: S, config: &FirmwareConfig) -> Self {
        Self::from_service(ControlService::new(port, config), delay, sink)
    }

    pub fn from_service(service: ControlService<O>, delay: D, sink: S) -> Self {
        Self {
            service,
            delay,
            sink,
        }
    }

    /// Boot-time welcome animation.  Blocks for the full sequence.
    pub fn boot(&mut self) {
        info!(
            "Controller: playing welcome animation ({} ms)",
            self.service.animation_ms()
        );
        self.service
            .handle_command(ControlCommand::Animate, &mut self.delay, &mut self.sink);
    }

    /// Dispatch a full request URI (`/path?query`).
    pub fn handle_uri(&mut self, uri: &str) -> Response {
        let (path, query) = Query::split_uri(uri);
        match Route::from_path(path) {
            Some(route) => self.handle(route, &query),
            None => Response::not_found(path),
        }
    }

    pub fn handle(&mut self, route: Route, query: &Query<'_>) -> Response {
        routes::handle(route, query, &mut self.service, &mut self.delay, &mut self.sink)
    }

    pub fn service(&self) -> &ControlService<O> {
        &self.service
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
