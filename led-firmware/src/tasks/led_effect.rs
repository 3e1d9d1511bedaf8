// LED Effekt Task - Treibt den Effekt-Controller kooperativ an
use defmt::info;
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Timer};
use led_core::{Clock, Effect, LedController, LedOutput};

use crate::EffectReceiver;
use crate::config::{EFFECT_PRESETS, POLL_INTERVAL_MS};
use crate::hal::EffectController;

/// LED Effekt Logic - Business Logic ohne Hardware-Abhängigkeit
///
/// Diese Funktion enthält die komplette Polling-Schleife:
/// - Übernimmt den Startpegel (`begin()`) und aktiviert das erste Preset
/// - Pollt die Zustandsmaschine im festen Intervall
/// - Wendet neue Effekte aus dem Channel sofort an
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen beliebige Ausgänge und Zeitquellen.
///
/// # Parameter
/// - `led`: Effekt-Controller (Hardware oder Mock)
/// - `initial_effect`: Effekt direkt nach `begin()`
/// - `effect_receiver`: Channel Receiver für Effekt-Kommandos
pub async fn led_effect_logic<O: LedOutput, C: Clock>(
    mut led: LedController<O, C>,
    initial_effect: Option<Effect>,
    effect_receiver: EffectReceiver,
) -> ! {
    led.begin();
    if let Some(effect) = initial_effect {
        led.set_effect(effect);
    }

    loop {
        // Entweder neuer Effekt oder Poll-Intervall abgelaufen
        match select(
            effect_receiver.receive(),
            Timer::after(Duration::from_millis(POLL_INTERVAL_MS)),
        )
        .await
        {
            Either::First(effect) => {
                info!("Effect received: {}", effect);
                led.set_effect(effect);
            }
            Either::Second(()) => led.poll(),
        }
    }
}

/// LED Effekt Task - Embassy Task für parallele Ausführung
///
/// Dieser Task bekommt den fertigen Controller (LEDC-Kanal bereits
/// konfiguriert) und ruft dann die `led_effect_logic()` Funktion auf.
///
/// # Parameter
/// - `led`: Effekt-Controller auf dem LEDC-Kanal
/// - `effect_receiver`: Channel Receiver für Effekt-Kommandos
#[embassy_executor::task]
pub async fn led_effect_task(led: EffectController, effect_receiver: EffectReceiver) {
    info!("LED: effect task started");
    led_effect_logic(led, EFFECT_PRESETS.first().copied(), effect_receiver).await
}
