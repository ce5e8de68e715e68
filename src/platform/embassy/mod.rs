//! Embassy-backed platform implementations
//!
//! Only the timer is provided here; serial, radio and broker drivers are
//! board specific and implement the traits directly.

mod timer;

pub use timer::EmbassyTimer;
