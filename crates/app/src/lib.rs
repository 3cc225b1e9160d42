//! Domain and upstream-client modules for the display-name relay.

pub mod context;
pub mod names;
pub mod upstream;
