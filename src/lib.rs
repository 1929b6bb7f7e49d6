//! Nerf Fleet - toy dart gun fleet simulation

pub mod core;
pub mod fleet;
