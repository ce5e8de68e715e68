//! Core infrastructure
//!
//! Logging macros shared by every module and the fixed-rate ticker that
//! paces the acquisition loop.

pub mod logging;
pub mod ticker;
