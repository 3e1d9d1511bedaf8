//! Core Types für die Effekt-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Aktiver Effekt-Modus eines LED-Kanals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectMode {
    /// Feste Helligkeit, keine autonome Änderung
    Fixed,
    /// Blink-Sequenz mit Pause
    Blink,
    /// Kontinuierliches Pulsieren
    Pulse,
}

/// Parameter für eine Blink-Sequenz
///
/// `count` mal an/aus, danach eine Pause von `wait_ms`, dann von vorne.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlinkParams {
    pub count: u8,
    pub on_ms: u32,
    pub off_ms: u32,
    pub wait_ms: u32,
    pub min_level: u8,
    pub max_level: u8,
}

impl BlinkParams {
    /// Blink-Sequenz über den vollen Helligkeitsbereich (0-255)
    pub const fn new(count: u8, on_ms: u32, off_ms: u32, wait_ms: u32) -> Self {
        Self {
            count,
            on_ms,
            off_ms,
            wait_ms,
            min_level: 0,
            max_level: 255,
        }
    }

    /// Setzt Aus- und An-Pegel (`min_level <= max_level` wird nicht geprüft)
    pub const fn with_levels(mut self, min_level: u8, max_level: u8) -> Self {
        self.min_level = min_level;
        self.max_level = max_level;
        self
    }
}

/// Parameter für das Pulsieren
///
/// `increase` legt fest, ob der Sweep bei `min_level` aufwärts oder bei
/// `max_level` abwärts beginnt. Pro Zyklus gibt es genau eine Pause, am
/// Extrem in Startrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PulseParams {
    pub increase: bool,
    pub up_ms: u32,
    pub down_ms: u32,
    pub wait_ms: u32,
    pub min_level: u8,
    pub max_level: u8,
}

impl PulseParams {
    /// Pulsieren über den vollen Helligkeitsbereich (0-255)
    pub const fn new(increase: bool, up_ms: u32, down_ms: u32, wait_ms: u32) -> Self {
        Self {
            increase,
            up_ms,
            down_ms,
            wait_ms,
            min_level: 0,
            max_level: 255,
        }
    }

    /// Setzt unteren und oberen Pegel (`min_level <= max_level` wird nicht geprüft)
    pub const fn with_levels(mut self, min_level: u8, max_level: u8) -> Self {
        self.min_level = min_level;
        self.max_level = max_level;
        self
    }
}

/// Kompletter Effekt als Wert
///
/// Wird z.B. über einen Channel an den LED-Task geschickt und dort mit
/// `LedController::set_effect()` angewendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    Fixed(u8),
    Blink(BlinkParams),
    Pulse(PulseParams),
}

impl Effect {
    pub const fn mode(&self) -> EffectMode {
        match self {
            Effect::Fixed(_) => EffectMode::Fixed,
            Effect::Blink(_) => EffectMode::Blink,
            Effect::Pulse(_) => EffectMode::Pulse,
        }
    }
}

/// Physischer Schreibzugriff, auf den ein Pegel abgebildet wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinWrite {
    /// Binär: `true` = Pin high
    Digital(bool),
    /// Abgestuft: Duty 1-254
    Analog(u8),
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for EffectMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            EffectMode::Fixed => defmt::write!(fmt, "Fixed"),
            EffectMode::Blink => defmt::write!(fmt, "Blink"),
            EffectMode::Pulse => defmt::write!(fmt, "Pulse"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BlinkParams {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Blink {{ count: {}, on: {}ms, off: {}ms, wait: {}ms, min: {}, max: {} }}",
            self.count,
            self.on_ms,
            self.off_ms,
            self.wait_ms,
            self.min_level,
            self.max_level
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PulseParams {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Pulse {{ increase: {}, up: {}ms, down: {}ms, wait: {}ms, min: {}, max: {} }}",
            self.increase,
            self.up_ms,
            self.down_ms,
            self.wait_ms,
            self.min_level,
            self.max_level
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Effect {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Effect::Fixed(level) => defmt::write!(fmt, "Fixed {{ level: {} }}", level),
            Effect::Blink(params) => defmt::write!(fmt, "{}", params),
            Effect::Pulse(params) => defmt::write!(fmt, "{}", params),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinWrite {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinWrite::Digital(high) => defmt::write!(fmt, "Digital({})", high),
            PinWrite::Analog(duty) => defmt::write!(fmt, "Analog({})", duty),
        }
    }
}
