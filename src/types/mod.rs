//! Shared types for Biscoint API.

pub mod common;

pub use common::{DEFAULT_BASE, DEFAULT_QUOTE, Side};
