// Zeitquelle für den Effekt-Controller
//
// Embassy-Zeit in Millisekunden, auf u32 gekürzt.
// Der Überlauf nach ca. 49 Tagen wird von led-core per wrapping_sub behandelt.

use embassy_time::Instant;
use led_core::Clock;

/// Clock auf Basis von `embassy_time::Instant`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Abschneiden auf 32 Bit ist gewollt: entspricht dem Überlauf einer u32-Uhr
        Instant::now().as_millis() as u32
    }
}
