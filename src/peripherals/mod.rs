//! Mocked kiosk peripherals.
//!
//! The demo kiosk has no camera and no payment terminal; both are simulated
//! by tokio tasks that sleep through their script and report back through
//! the app message channel.

pub mod card_reader;
pub mod scanner;

pub use scanner::ScanEvent;
