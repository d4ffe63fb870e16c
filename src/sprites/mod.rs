//! Sprites module: animation state machine, clip playback and sheet lookups.

pub mod animation;
pub mod sheet;


pub use animation::*;
