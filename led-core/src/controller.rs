//! Effekt-Controller für einen LED-Kanal
//!
//! Kooperative Zustandsmaschine: `poll()` wird von einer äußeren Schleife
//! häufig aufgerufen und entscheidet, ob die aktuelle Phase abgelaufen ist
//! und welcher Pegel als nächstes geschrieben wird. Nichts blockiert.

use crate::logic::{WAIT_FOREVER, is_due, next_blink_step, next_pulse_step, pin_write_for};
use crate::traits::{Clock, LedOutput};
use crate::types::{BlinkParams, Effect, EffectMode, PinWrite, PulseParams};

/// Laufzeit-Zustand des aktiven Modus
///
/// Parameter inaktiver Modi existieren nicht mehr und können daher auch
/// nicht versehentlich gelesen werden.
#[derive(Debug, Clone, Copy)]
enum EffectState {
    Fixed,
    Blink { params: BlinkParams, blinks_done: u8 },
    Pulse { params: PulseParams, increment: i8 },
}

/// Effekt-Controller
///
/// Besitzt Ausgang und Zeitquelle. Beim Drop wird der Pin freigegeben.
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (LEDC-Kanal + Embassy-Uhr) im Production-Code
/// - Mock-Ausgang und simulierte Uhr in Tests
pub struct LedController<O: LedOutput, C: Clock> {
    output: O,
    clock: C,
    reverted: bool,
    state: EffectState,
    level: u8,
    delay_ms: u32,
    last_change_ms: u32,
}

impl<O: LedOutput, C: Clock> LedController<O, C> {
    /// Erstellt einen Controller im Modus `Fixed`
    ///
    /// Schreibt noch nichts; erst `begin()` übernimmt den Pegel.
    ///
    /// # Parameter
    /// - `output`: LED-Ausgang (Hardware oder Mock)
    /// - `clock`: Millisekunden-Zeitquelle
    /// - `reverted`: LED leuchtet bei Pin low
    /// - `initial_level`: Pegel nach `begin()` (0-255)
    pub fn new(output: O, clock: C, reverted: bool, initial_level: u8) -> Self {
        Self {
            output,
            clock,
            reverted,
            state: EffectState::Fixed,
            level: initial_level,
            delay_ms: WAIT_FOREVER,
            last_change_ms: 0,
        }
    }

    /// Übernimmt den Startpegel und konfiguriert den Pin als Ausgang
    ///
    /// Einmal vor dem ersten `poll()` aufrufen.
    pub fn begin(&mut self) {
        self.commit(self.level, WAIT_FOREVER);
        if let Err(error) = self.output.configure_output() {
            #[cfg(feature = "defmt")]
            defmt::error!("LED: configure output failed: {}", error);
            #[cfg(not(feature = "defmt"))]
            let _ = error;
        }
    }

    /// Feste Helligkeit, keine autonome Änderung mehr
    pub fn set_fixed(&mut self, level: u8) {
        #[cfg(feature = "defmt")]
        defmt::info!("LED: set fixed level: {}", level);

        self.state = EffectState::Fixed;
        self.commit(level, WAIT_FOREVER);
    }

    /// Startet eine Blink-Sequenz
    ///
    /// Bei `count == 0` bleibt die LED dauerhaft auf `min_level` und
    /// wiederholt nur die Pause `wait_ms`.
    pub fn set_blink(&mut self, params: BlinkParams) {
        #[cfg(feature = "defmt")]
        defmt::info!("LED: set {}", params);

        self.state = EffectState::Blink {
            params,
            blinks_done: 0,
        };
        if params.count > 0 {
            self.commit(params.max_level, params.on_ms);
        } else {
            self.commit(params.min_level, params.wait_ms);
        }
    }

    /// Startet das Pulsieren
    pub fn set_pulse(&mut self, params: PulseParams) {
        #[cfg(feature = "defmt")]
        defmt::info!("LED: set {}", params);

        let (increment, level, delay_ms) = if params.increase {
            (1, params.min_level, params.up_ms)
        } else {
            (-1, params.max_level, params.down_ms)
        };
        self.state = EffectState::Pulse { params, increment };
        self.commit(level, delay_ms);
    }

    /// Wendet einen kompletten Effekt an
    pub fn set_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Fixed(level) => self.set_fixed(level),
            Effect::Blink(params) => self.set_blink(params),
            Effect::Pulse(params) => self.set_pulse(params),
        }
    }

    /// Ein Schritt der Zustandsmaschine
    ///
    /// Tut nichts, solange die aktuelle Verzögerung nicht echt überschritten
    /// ist. Verpasste Phasen werden nicht nachgeholt.
    pub fn poll(&mut self) {
        if !is_due(self.clock.now_ms(), self.last_change_ms, self.delay_ms) {
            return;
        }

        let (level, delay_ms) = match &mut self.state {
            EffectState::Fixed => return,
            EffectState::Blink {
                params,
                blinks_done,
            } => {
                let step = next_blink_step(self.level, *blinks_done, params);
                *blinks_done = step.blinks_done;
                (step.level, step.delay_ms)
            }
            EffectState::Pulse { params, increment } => {
                let step = next_pulse_step(self.level, *increment, params);
                *increment = step.increment;
                (step.level, step.delay_ms)
            }
        };
        self.commit(level, delay_ms);
    }

    pub fn mode(&self) -> EffectMode {
        match self.state {
            EffectState::Fixed => EffectMode::Fixed,
            EffectState::Blink { .. } => EffectMode::Blink,
            EffectState::Pulse { .. } => EffectMode::Pulse,
        }
    }

    /// Aktuell geschriebener Pegel (0-255)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Haltezeit des aktuellen Pegels, gezählt ab der letzten Änderung
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Erledigte Blinks der laufenden Sequenz (0 außerhalb von `Blink`)
    pub fn blinks_done(&self) -> u8 {
        match self.state {
            EffectState::Blink { blinks_done, .. } => blinks_done,
            _ => 0,
        }
    }

    pub fn is_reverted(&self) -> bool {
        self.reverted
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Schreibt einen Pegel und startet den Timer neu
    ///
    /// Schreibfehler werden geloggt, aber nicht weitergereicht.
    fn commit(&mut self, level: u8, delay_ms: u32) {
        self.level = level;
        self.delay_ms = delay_ms;
        self.last_change_ms = self.clock.now_ms();

        #[cfg(feature = "defmt")]
        defmt::trace!("LED: level {} for {}ms", level, delay_ms);

        let result = match pin_write_for(level, self.reverted) {
            PinWrite::Digital(high) => self.output.set_digital(high),
            PinWrite::Analog(duty) => self.output.set_analog(duty),
        };
        if let Err(error) = result {
            #[cfg(feature = "defmt")]
            defmt::error!("LED: write failed: {}", error);
            #[cfg(not(feature = "defmt"))]
            let _ = error;
        }
    }
}

impl<O: LedOutput, C: Clock> Drop for LedController<O, C> {
    fn drop(&mut self) {
        self.output.release();
    }
}
