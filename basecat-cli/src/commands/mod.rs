//! CLI command implementations.

pub mod api;
pub mod export;
pub mod lookup;
pub mod network;
pub mod protocols;
pub mod validate;
