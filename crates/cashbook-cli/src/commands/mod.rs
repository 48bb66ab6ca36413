//! Command handlers, one module per command group.

pub mod entries;
pub mod interactive;
pub mod misc;
