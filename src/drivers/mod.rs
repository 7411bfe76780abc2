//! Output drivers and one-shot peripheral initialisation.

pub mod channels;
pub mod direction;
pub mod hw_init;
