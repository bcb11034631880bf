//! Outbound adapters implementing domain driven ports.

pub mod memory;
