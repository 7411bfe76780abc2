//! Control core: pure logic, zero I/O.
//!
//! The output state model, animation sequencer, and route handlers live
//! here.  All interaction with hardware happens through the port traits
//! in [`ports`] and `embedded_hal`'s `DelayNs`, keeping this layer fully
//! testable without real peripherals.

pub mod animation;
pub mod commands;
pub mod controller;
pub mod events;
pub mod outputs;
pub mod pattern;
pub mod ports;
pub mod query;
pub mod routes;
pub mod service;
