// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von led-core
pub use led_core::{BlinkParams, Effect, EffectMode, LedController, PulseParams};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::EFFECT_CHANNEL_SIZE;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Button-Task und LED-Task laufen auf demselben Executor, daher reicht
// NoopRawMutex. Der LED-Task wendet empfangene Effekte selbst an, so dass
// set_*() und poll() immer im selben kooperativen Kontext laufen.

/// Channel für Effekt-Kommandos (Button → LED Task)
pub type EffectChannel = Channel<NoopRawMutex, Effect, EFFECT_CHANNEL_SIZE>;

/// Sender für Effekt-Kommandos
pub type EffectSender = Sender<'static, NoopRawMutex, Effect, EFFECT_CHANNEL_SIZE>;

/// Receiver für Effekt-Kommandos (LED Task empfängt)
pub type EffectReceiver = Receiver<'static, NoopRawMutex, Effect, EFFECT_CHANNEL_SIZE>;

/// Index des nächsten Presets (zyklisch)
pub fn next_preset_index(current: usize, preset_count: usize) -> usize {
    if preset_count == 0 {
        0
    } else {
        (current + 1) % preset_count
    }
}
