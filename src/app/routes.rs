//! Route handlers: request parameters in, fixed status/type/body out.
//!
//! Each handler translates its query into a [`ControlCommand`], runs it on
//! the [`ControlService`], and maps the outcome to a [`Response`].  They
//! never see the transport, so every route is testable on the host.
//!
//! | Route      | Response                                   |
//! |------------|--------------------------------------------|
//! | `/`        | 200 `text/html` control page               |
//! | `/motor`   | 200 `OK`                                   |
//! | `/dir`     | 200 `Direction Set`                        |
//! | `/pattern` | 200 description / refusal, 400 if none     |
//! | `/animate` | 200 `Animation Done`                       |
//! | `/state`   | 200 `application/json` output snapshot     |

use std::borrow::Cow;

use embedded_hal::delay::DelayNs;
use log::warn;

use super::commands::{ControlCommand, PatternOutcome};
use super::pattern::Pattern;
use super::ports::{EventSink, OutputPort};
use super::query::Query;
use super::service::ControlService;

pub const CONTENT_HTML: &str = "text/html";
pub const CONTENT_TEXT: &str = "text/plain";
pub const CONTENT_JSON: &str = "application/json";

pub const INDEX_HTML: &str = include_str!("../web/index.html");

pub const BODY_OK: &str = "OK";
pub const BODY_DIRECTION_SET: &str = "Direction Set";
pub const BODY_ANIMATION_DONE: &str = "Animation Done";
pub const BODY_INVALID_PATTERN: &str = "Invalid pattern";
pub const BODY_REVERSE_REFUSAL: &str = "Motors disabled in reverse direction";

// ───────────────────────────────────────────────────────────────
// Response
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Cow<'static, str>,
}

impl Response {
    pub fn text(status: u16, body: &'static str) -> Self {
        Self {
            status,
            content_type: CONTENT_TEXT,
            body: Cow::Borrowed(body),
        }
    }

    pub fn html(body: &'static str) -> Self {
        Self {
            status: 200,
            content_type: CONTENT_HTML,
            body: Cow::Borrowed(body),
        }
    }

    pub fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: CONTENT_JSON,
            body: Cow::Owned(body),
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self {
            status: 404,
            content_type: CONTENT_TEXT,
            body: Cow::Owned(format!("Not found: {path}")),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Route table
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    Motor,
    Direction,
    Pattern,
    Animate,
    State,
}

impl Route {
    /// Registration order for the HTTP server.
    pub const ALL: [Self; 6] = [
        Self::Index,
        Self::Motor,
        Self::Direction,
        Self::Pattern,
        Self::Animate,
        Self::State,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::Motor => "/motor",
            Self::Direction => "/dir",
            Self::Pattern => "/pattern",
            Self::Animate => "/animate",
            Self::State => "/state",
        }
    }

    /// Exact path match; the query must already be stripped.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

// ───────────────────────────────────────────────────────────────
// Dispatch
// ───────────────────────────────────────────────────────────────

pub fn handle<O: OutputPort>(
    route: Route,
    query: &Query<'_>,
    service: &mut ControlService<O>,
    delay: &mut impl DelayNs,
    sink: &mut impl EventSink,
) -> Response {
    match route {
        Route::Index => Response::html(INDEX_HTML),
        Route::Motor => handle_motor(query, service, delay, sink),
        Route::Direction => handle_direction(query, service, delay, sink),
        Route::Pattern => handle_pattern(query, service, sink),
        Route::Animate => handle_animate(service, delay, sink),
        Route::State => handle_state(service),
    }
}

/// `/motor?m=N`: toggles channel N; `OK` even when N is out of range.
pub fn handle_motor<O: OutputPort>(
    query: &Query<'_>,
    service: &mut ControlService<O>,
    delay: &mut impl DelayNs,
    sink: &mut impl EventSink,
) -> Response {
    let cmd = ControlCommand::ToggleChannel(query.int("m"));
    service.handle_command(cmd, delay, sink);
    Response::text(200, BODY_OK)
}

/// `/dir?d=N`: 1 latches forward, 2 pulses reverse (blocking).
pub fn handle_direction<O: OutputPort>(
    query: &Query<'_>,
    service: &mut ControlService<O>,
    delay: &mut impl DelayNs,
    sink: &mut impl EventSink,
) -> Response {
    let cmd = ControlCommand::Direction(query.int("d"));
    service.handle_command(cmd, delay, sink);
    Response::text(200, BODY_DIRECTION_SET)
}

pub fn handle_pattern<O: OutputPort>(
    query: &Query<'_>,
    service: &mut ControlService<O>,
    sink: &mut impl EventSink,
) -> Response {
    let selection = Pattern::ALL.into_iter().find(|p| query.has(p.param()));
    match service.apply_pattern(selection, sink) {
        PatternOutcome::Applied(pattern) => Response::text(200, pattern.description()),
        PatternOutcome::RefusedReverse => Response::text(200, BODY_REVERSE_REFUSAL),
        PatternOutcome::NoneSelected => Response::text(400, BODY_INVALID_PATTERN),
    }
}

/// `/animate`: blocks for the full sequence.
pub fn handle_animate<O: OutputPort>(
    service: &mut ControlService<O>,
    delay: &mut impl DelayNs,
    sink: &mut impl EventSink,
) -> Response {
    service.handle_command(ControlCommand::Animate, delay, sink);
    Response::text(200, BODY_ANIMATION_DONE)
}

pub fn handle_state<O: OutputPort>(service: &ControlService<O>) -> Response {
    match serde_json::to_string(&service.snapshot()) {
        Ok(json) => Response::json(json),
        Err(e) => {
            warn!("state: snapshot serialization failed: {}", e);
            Response::text(500, "Snapshot unavailable")
        }
    }
}
