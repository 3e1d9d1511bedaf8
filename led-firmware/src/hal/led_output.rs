// LED-Ausgang über den ESP32 LEDC Peripheral
//
// Der LEDC-Kanal implementiert embedded-hal `SetDutyCycle`,
// daher genügt der generische PwmLedOutput aus led-core.

use esp_hal::ledc::LowSpeed;
use esp_hal::ledc::channel::Channel;
use led_core::{LedController, PwmLedOutput};

use crate::config::{LED_INITIAL_LEVEL, LED_REVERTED};
use crate::hal::EmbassyClock;

/// LEDC Low-Speed Kanal als LED-Ausgang
pub type LedcOutput = PwmLedOutput<Channel<'static, LowSpeed>>;

/// Effekt-Controller wie er im LED-Task läuft
pub type EffectController = LedController<LedcOutput, EmbassyClock>;

/// Erstellt den Controller für einen bereits konfigurierten LEDC-Kanal
///
/// Polarität und Startpegel kommen aus config.rs. Bei invertierter LED
/// ist high der neutrale Pegel, damit sie nach dem Freigeben aus bleibt.
pub fn new_effect_controller(channel: Channel<'static, LowSpeed>) -> EffectController {
    let output = PwmLedOutput::new(channel).with_neutral_high(LED_REVERTED);
    LedController::new(output, EmbassyClock, LED_REVERTED, LED_INITIAL_LEVEL)
}
