//! Infrastructure: configuration, ports and seed loading.

pub mod config;
pub mod ports;
pub mod seed;
