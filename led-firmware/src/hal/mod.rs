// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul verbindet die Traits aus led-core mit der ESP32 Hardware.
// LEDC-Kanal → PwmLedOutput (embedded-hal Adapter aus led-core)
// Embassy-Zeit → EmbassyClock

pub mod clock;
pub mod led_output;

pub use clock::EmbassyClock;
pub use led_output::{EffectController, LedcOutput, new_effect_controller};
