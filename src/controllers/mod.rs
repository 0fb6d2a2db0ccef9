//! Application layer: the stateful engine that hosts drive, its
//! configuration, and the ports it exports frames through.

pub mod engine;
pub mod engine_config;
pub mod ports;
