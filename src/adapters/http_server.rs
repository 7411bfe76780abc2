//! HTTP server adapter: registers every [`Route`] with `EspHttpServer`.
//!
//! The ESP-IDF server runs handlers on its own task, one request at a
//! time.  Handler closures must be `Send + 'static`, so the controller
//! sits behind an `Arc<Mutex<_>>`; the lock is never contended because
//! nothing else touches the controller once the server is up.

use std::sync::{Arc, Mutex};

use embedded_hal::delay::DelayNs;
use esp_idf_svc::http::Method;
use esp_idf_svc::http::server::{Configuration, EspHttpServer};
use esp_idf_svc::io::Write;
use log::{debug, info};

use crate::app::controller::Controller;
use crate::app::ports::{EventSink, OutputPort};
use crate::app::query::Query;
use crate::app::routes::Route;
use crate::error::Error;

use super::time::Esp32TimeAdapter;

pub struct HttpServerAdapter {
    _server: EspHttpServer<'static>,
}

impl HttpServerAdapter {
    pub fn start<O, D, S>(
        port: u16,
        controller: Arc<Mutex<Controller<O, D, S>>>,
    ) -> Result<Self, Error>
    where
        O: OutputPort + Send + 'static,
        D: DelayNs + Send + 'static,
        S: EventSink + Send + 'static,
    {
        let config = Configuration {
            http_port: port,
            // Lets the trailing `/*` fallback catch unregistered paths.
            uri_match_wildcard: true,
            ..Default::default()
        };
        let mut server =
            EspHttpServer::new(&config).map_err(|_| Error::Http("server start failed"))?;

        for route in Route::ALL {
            let controller = Arc::clone(&controller);
            server
                .fn_handler(route.path(), Method::Get, move |req| -> anyhow::Result<()> {
                    let clock = Esp32TimeAdapter::new();
                    let started = clock.uptime_ms();
                    let response = {
                        let (_, query) = Query::split_uri(req.uri());
                        let mut ctl = controller
                            .lock()
                            .map_err(|_| anyhow::anyhow!("controller mutex poisoned"))?;
                        ctl.handle(route, &query)
                    };
                    debug!(
                        "HTTP: GET {} -> {} ({} ms)",
                        route.path(),
                        response.status,
                        clock.uptime_ms().saturating_sub(started)
                    );

                    let headers = [("Content-Type", response.content_type)];
                    req.into_response(response.status, None, &headers)?
                        .write_all(response.body.as_bytes())?;
                    Ok(())
                })
                .map_err(|_| Error::Http("route registration failed"))?;
            info!("HTTP: registered GET {}", route.path());
        }

        // Registered last: httpd matches in registration order.
        let fallback = Arc::clone(&controller);
        server
            .fn_handler("/*", Method::Get, move |req| -> anyhow::Result<()> {
                let response = fallback
                    .lock()
                    .map_err(|_| anyhow::anyhow!("controller mutex poisoned"))?
                    .handle_uri(req.uri());
                debug!("HTTP: GET {} -> {}", req.uri(), response.status);

                let headers = [("Content-Type", response.content_type)];
                req.into_response(response.status, None, &headers)?
                    .write_all(response.body.as_bytes())?;
                Ok(())
            })
            .map_err(|_| Error::Http("fallback registration failed"))?;

        info!("HTTP: listening on port {}", port);
        Ok(Self { _server: server })
    }
}
