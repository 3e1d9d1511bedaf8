//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{BlinkParams, PinWrite, PulseParams};

/// "Für immer warten" - größte darstellbare Verzögerung (ca. 49 Tage)
///
/// Echtes Unendlich gibt es nicht; der Wert liegt nur weit über jeder
/// realistischen Laufzeit zwischen zwei Effekt-Wechseln.
pub const WAIT_FOREVER: u32 = u32::MAX;

/// Bildet einen Pegel (0-255) auf den physischen Schreibzugriff ab
///
/// 0 und 255 sind reines Aus/An (binär), alles dazwischen ist abgestuft.
/// Bei invertierter LED (`reverted`) wird beides umgedreht.
///
/// # Beispiele
///
/// ```
/// # use led_core::{PinWrite, pin_write_for};
/// assert_eq!(pin_write_for(255, false), PinWrite::Digital(true));
/// assert_eq!(pin_write_for(255, true), PinWrite::Digital(false));
/// assert_eq!(pin_write_for(55, true), PinWrite::Analog(200));
/// ```
pub fn pin_write_for(level: u8, reverted: bool) -> PinWrite {
    match level {
        0 => PinWrite::Digital(reverted),
        255 => PinWrite::Digital(!reverted),
        _ if reverted => PinWrite::Analog(255 - level),
        _ => PinWrite::Analog(level),
    }
}

/// Ist die Verzögerung seit `last_change_ms` echt überschritten?
///
/// Vorzeichenlose Subtraktion, damit der Überlauf der Uhr korrekt
/// behandelt wird.
pub fn is_due(now_ms: u32, last_change_ms: u32, delay_ms: u32) -> bool {
    now_ms.wrapping_sub(last_change_ms) > delay_ms
}

/// Nächster Zustand einer Blink-Sequenz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkStep {
    pub level: u8,
    pub delay_ms: u32,
    pub blinks_done: u8,
}

/// Berechnet den Übergang einer fälligen Blink-Phase
pub fn next_blink_step(level: u8, blinks_done: u8, params: &BlinkParams) -> BlinkStep {
    if level == params.max_level {
        // LED ist an: Blink zählen, ausschalten
        BlinkStep {
            level: params.min_level,
            delay_ms: params.off_ms,
            blinks_done: blinks_done.saturating_add(1),
        }
    } else if blinks_done >= params.count {
        // Sequenz komplett: Pause zwischen zwei Sequenzen
        BlinkStep {
            level: params.min_level,
            delay_ms: params.wait_ms,
            blinks_done: 0,
        }
    } else {
        BlinkStep {
            level: params.max_level,
            delay_ms: params.on_ms,
            blinks_done,
        }
    }
}

/// Nächster Zustand beim Pulsieren
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseStep {
    pub level: u8,
    /// Aktuelle Sweep-Richtung: +1 oder -1
    pub increment: i8,
    pub delay_ms: u32,
}

/// Berechnet den Übergang einer fälligen Puls-Stufe
///
/// Am Richtungswechsel wird das Extrem erneut geschrieben. Die Pause
/// (`wait_ms`) liegt nur an dem Extrem, auf das der konfigurierte Start
/// zuläuft: oben bei `increase`, sonst unten.
pub fn next_pulse_step(level: u8, increment: i8, params: &PulseParams) -> PulseStep {
    // i16, damit Über-/Unterlauf erkennbar bleibt
    let new_level = i16::from(level) + i16::from(increment);

    if increment > 0 {
        if new_level > i16::from(params.max_level) {
            let delay_ms = if params.increase {
                params.wait_ms
            } else {
                params.down_ms
            };
            PulseStep {
                level: params.max_level,
                increment: -1,
                delay_ms,
            }
        } else {
            PulseStep {
                level: new_level as u8,
                increment,
                delay_ms: params.up_ms,
            }
        }
    } else if new_level < i16::from(params.min_level) {
        let delay_ms = if params.increase {
            params.up_ms
        } else {
            params.wait_ms
        };
        PulseStep {
            level: params.min_level,
            increment: 1,
            delay_ms,
        }
    } else {
        PulseStep {
            level: new_level as u8,
            increment,
            delay_ms: params.down_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_write_extremes_are_digital() {
        assert_eq!(pin_write_for(0, false), PinWrite::Digital(false));
        assert_eq!(pin_write_for(255, false), PinWrite::Digital(true));
    }

    #[test]
    fn test_pin_write_reverted_inverts_digital() {
        assert_eq!(pin_write_for(0, true), PinWrite::Digital(true));
        assert_eq!(pin_write_for(255, true), PinWrite::Digital(false));
    }

    #[test]
    fn test_pin_write_intermediate_is_analog() {
        assert_eq!(pin_write_for(1, false), PinWrite::Analog(1));
        assert_eq!(pin_write_for(128, false), PinWrite::Analog(128));
        assert_eq!(pin_write_for(254, true), PinWrite::Analog(1));
    }

    #[test]
    fn test_is_due_strictly_greater() {
        assert!(!is_due(100, 0, 100));
        assert!(is_due(101, 0, 100));
    }

    #[test]
    fn test_is_due_handles_clock_wraparound() {
        let last = u32::MAX - 5;
        assert!(!is_due(4, last, 10)); // 10 ms vergangen
        assert!(is_due(5, last, 10)); // 11 ms vergangen
    }

    #[test]
    fn test_wait_forever_never_due() {
        assert!(!is_due(u32::MAX, 0, WAIT_FOREVER));
        assert!(!is_due(12345, 12346, WAIT_FOREVER));
    }

    #[test]
    fn test_blink_on_goes_off_and_counts() {
        let params = BlinkParams::new(2, 100, 50, 500);
        let step = next_blink_step(255, 0, &params);
        assert_eq!(
            step,
            BlinkStep {
                level: 0,
                delay_ms: 50,
                blinks_done: 1
            }
        );
    }

    #[test]
    fn test_blink_off_with_remaining_goes_on() {
        let params = BlinkParams::new(2, 100, 50, 500);
        let step = next_blink_step(0, 1, &params);
        assert_eq!(step.level, 255);
        assert_eq!(step.delay_ms, 100);
        assert_eq!(step.blinks_done, 1);
    }

    #[test]
    fn test_blink_off_when_complete_waits_and_resets() {
        let params = BlinkParams::new(2, 100, 50, 500);
        let step = next_blink_step(0, 2, &params);
        assert_eq!(
            step,
            BlinkStep {
                level: 0,
                delay_ms: 500,
                blinks_done: 0
            }
        );
    }

    #[test]
    fn test_blink_custom_levels() {
        let params = BlinkParams::new(1, 10, 20, 30).with_levels(5, 120);
        assert_eq!(next_blink_step(120, 0, &params).level, 5);
        assert_eq!(next_blink_step(5, 0, &params).level, 120);
    }

    #[test]
    fn test_pulse_ascending_step() {
        let params = PulseParams::new(true, 20, 30, 1000).with_levels(0, 10);
        let step = next_pulse_step(4, 1, &params);
        assert_eq!(
            step,
            PulseStep {
                level: 5,
                increment: 1,
                delay_ms: 20
            }
        );
    }

    #[test]
    fn test_pulse_descending_step() {
        let params = PulseParams::new(true, 20, 30, 1000).with_levels(0, 10);
        let step = next_pulse_step(4, -1, &params);
        assert_eq!(step.level, 3);
        assert_eq!(step.increment, -1);
        assert_eq!(step.delay_ms, 30);
    }

    #[test]
    fn test_pulse_reversal_table() {
        let up = PulseParams::new(true, 20, 30, 1000).with_levels(0, 10);
        let down = PulseParams::new(false, 20, 30, 1000).with_levels(0, 10);

        // aufwärts am Maximum
        assert_eq!(next_pulse_step(10, 1, &up).delay_ms, 1000);
        assert_eq!(next_pulse_step(10, 1, &down).delay_ms, 30);

        // abwärts am Minimum
        assert_eq!(next_pulse_step(0, -1, &down).delay_ms, 1000);
        assert_eq!(next_pulse_step(0, -1, &up).delay_ms, 20);
    }

    #[test]
    fn test_pulse_reversal_clamps_and_flips() {
        let params = PulseParams::new(true, 1, 1, 1);
        let top = next_pulse_step(255, 1, &params);
        assert_eq!(top.level, 255);
        assert_eq!(top.increment, -1);

        let bottom = next_pulse_step(0, -1, &params);
        assert_eq!(bottom.level, 0);
        assert_eq!(bottom.increment, 1);
    }
}
