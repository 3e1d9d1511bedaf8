//! LED Core - Platform-agnostic Effekt-Steuerung
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Hardware-Traits, die Effekt-Parameter und die
//! kooperative Zustandsmaschine für einen LED-Kanal.

#![no_std]

#[cfg(feature = "embedded-hal")]
pub mod adapters;
pub mod controller;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::LedController;
pub use logic::{WAIT_FOREVER, is_due, pin_write_for};
pub use traits::{Clock, LedError, LedOutput};
pub use types::{BlinkParams, Effect, EffectMode, PinWrite, PulseParams};

#[cfg(feature = "embedded-hal")]
pub use adapters::{DigitalLedOutput, PwmLedOutput};
