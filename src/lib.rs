//! XToolBox library exports for the binary and tests

pub mod core;
pub mod logging;
pub mod net;
pub mod platform;
pub mod tui;

#[cfg(test)]
pub mod test_support;
