// Button Task - Schaltet per BOOT-Button durch die Effekt-Presets
use defmt::{info, warn};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Input;

use crate::config::{BUTTON_DEBOUNCE_MS, EFFECT_PRESETS};
use crate::{EffectSender, next_preset_index};

/// Button Task
///
/// Wartet auf eine fallende Flanke (Button gedrückt, Pull-Up aktiv),
/// entprellt und schickt das nächste Preset an den LED-Task.
///
/// # Parameter
/// - `button`: BOOT-Button als Input mit Pull-Up
/// - `effect_sender`: Channel Sender für Effekt-Kommandos
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>, effect_sender: EffectSender) {
    info!("Button: task started");
    // Preset 0 aktiviert der LED-Task beim Start selbst
    let mut preset = 0;

    loop {
        button.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if button.is_high() {
            // Nur ein Prellen
            continue;
        }

        preset = next_preset_index(preset, EFFECT_PRESETS.len());
        let effect = EFFECT_PRESETS[preset];
        info!("Button: preset {} -> {}", preset, effect);

        if effect_sender.try_send(effect).is_err() {
            warn!("Button: effect channel full, dropping preset {}", preset);
        }

        // Warten bis losgelassen, sonst zählt ein langer Druck mehrfach
        button.wait_for_high().await;
    }
}
