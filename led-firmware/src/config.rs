// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
// Keine Konfigurationsdatei, kein persistenter Zustand - alles zur Compile-Zeit

use led_core::{BlinkParams, Effect, PulseParams};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die LED (externe LED mit Vorwiderstand)
/// Muss zu `peripherals.GPIO5` in main.rs passen
pub const LED_GPIO_PIN: u8 = 5;

/// LED invertiert angeschlossen (leuchtet bei Pin low, z.B. gegen 3.3V)
pub const LED_REVERTED: bool = false;

/// Helligkeit direkt nach dem Start (0-255)
pub const LED_INITIAL_LEVEL: u8 = 0;

/// LEDC PWM-Frequenz in kHz
/// 24 kHz bei 8 Bit Auflösung liegt weit über der Flimmer-Grenze
pub const LEDC_FREQUENCY_KHZ: u32 = 24;

/// Poll-Intervall des Effekt-Tasks in Millisekunden
/// Muss kürzer sein als die kürzeste konfigurierte Phase
pub const POLL_INTERVAL_MS: u64 = 1;

// ============================================================================
// Button Konfiguration
// ============================================================================

/// GPIO-Pin des BOOT-Buttons (ESP32-C6 DevKit)
/// Muss zu `peripherals.GPIO9` in main.rs passen
pub const BUTTON_GPIO_PIN: u8 = 9;

/// Entprell-Zeit nach einem Tastendruck in Millisekunden
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

// ============================================================================
// Effekt-Presets
// ============================================================================

/// Effekte, die der Button der Reihe nach durchschaltet
/// Der erste Eintrag wird beim Start aktiviert
pub const EFFECT_PRESETS: [Effect; 6] = [
    // Herzschlag: langsam einblenden, Pause oben, ausblenden
    Effect::Pulse(PulseParams::new(true, 4, 4, 500)),
    // 3x kurz blinken, dann 1s Pause
    Effect::Blink(BlinkParams::new(3, 100, 50, 1000)),
    // Gedimmtes Dauerlicht
    Effect::Fixed(32),
    // Schnelles Pulsieren im mittleren Bereich, Pause unten
    Effect::Pulse(PulseParams::new(false, 2, 2, 200).with_levels(20, 180)),
    // Einzelner Blitz mit gedimmtem Grundlicht
    Effect::Blink(BlinkParams::new(1, 30, 0, 2000).with_levels(8, 255)),
    // Aus
    Effect::Fixed(0),
];

/// Kapazität des Effekt-Command-Channels
pub const EFFECT_CHANNEL_SIZE: usize = 2;
