//! Platform icon resolution: candidate names, probe formats, the resolution state machine, and
//! generated fallback badges.

pub mod badge;
pub mod formats;
pub mod names;
pub mod resolver;
