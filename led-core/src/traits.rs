//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Pin-Zugriff und Zeitquelle
//! ohne konkrete Implementierung.

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
    ConfigFailed,
}

/// Trait für den Ausgang eines LED-Kanals
///
/// Abstrahiert einen GPIO- oder PWM-Pin.
///
/// # Implementierungen
/// - **Production:** PwmLedOutput (ESP32 LEDC via embedded-hal)
/// - **Testing:** MockLedOutput (zeichnet alle Schreibzugriffe auf)
pub trait LedOutput {
    /// Schreibt einen binären Pegel (`true` = Pin high)
    fn set_digital(&mut self, high: bool) -> Result<(), LedError>;

    /// Schreibt einen abgestuften Pegel (Duty 0-255)
    ///
    /// Rein binäre Ausgänge dürfen den Wert annähern.
    fn set_analog(&mut self, duty: u8) -> Result<(), LedError>;

    /// Konfiguriert den Pin als Ausgang
    fn configure_output(&mut self) -> Result<(), LedError>;

    /// Gibt den Pin frei (neutraler Zustand / Eingang)
    fn release(&mut self);
}

/// Monotone Millisekunden-Zeitquelle
///
/// Der Wert läuft nach `u32::MAX` über; Vergleiche erfolgen per
/// `wrapping_sub`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
