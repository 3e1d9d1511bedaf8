//! Test-Hilfen für die Host-Tests
//!
//! `MockLedOutput` zeichnet jeden Schreibzugriff auf, `SimClock` ist eine
//! von Hand vorgestellte Uhr.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use led_core::{Clock, LedController, LedError, LedOutput, PinWrite};

// ============================================================================
// Mock LED Output
// ============================================================================

/// Ein aufgezeichneter Hardware-Zugriff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCall {
    Write { at_ms: u32, write: PinWrite },
    ConfigureOutput,
    Release,
}

/// Gemeinsames Protokoll, bleibt auch nach dem Drop des Controllers lesbar
pub type CallLog = Rc<RefCell<Vec<OutputCall>>>;

/// Mock-Ausgang mit Aufzeichnung
pub struct MockLedOutput<'a> {
    clock: &'a SimClock,
    pub calls: CallLog,
    pub fail_next_write: bool,
}

impl<'a> MockLedOutput<'a> {
    pub fn new(clock: &'a SimClock) -> Self {
        Self {
            clock,
            calls: Rc::new(RefCell::new(Vec::new())),
            fail_next_write: false,
        }
    }

    fn record_write(&mut self, write: PinWrite) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }
        self.calls.borrow_mut().push(OutputCall::Write {
            at_ms: self.clock.now_ms(),
            write,
        });
        Ok(())
    }

    /// Alle Schreibzugriffe mit Zeitstempel
    pub fn writes(&self) -> Vec<(u32, PinWrite)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                OutputCall::Write { at_ms, write } => Some((*at_ms, *write)),
                _ => None,
            })
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.writes().len()
    }

    pub fn last_write(&self) -> Option<PinWrite> {
        self.writes().last().map(|(_, write)| *write)
    }
}

impl LedOutput for MockLedOutput<'_> {
    fn set_digital(&mut self, high: bool) -> Result<(), LedError> {
        self.record_write(PinWrite::Digital(high))
    }

    fn set_analog(&mut self, duty: u8) -> Result<(), LedError> {
        self.record_write(PinWrite::Analog(duty))
    }

    fn configure_output(&mut self) -> Result<(), LedError> {
        self.calls.borrow_mut().push(OutputCall::ConfigureOutput);
        Ok(())
    }

    fn release(&mut self) {
        self.calls.borrow_mut().push(OutputCall::Release);
    }
}

// ============================================================================
// Simulierte Uhr
// ============================================================================

#[derive(Debug, Default)]
pub struct SimClock {
    now: Cell<u32>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now_ms: u32) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

// ============================================================================
// Simulation
// ============================================================================

pub type SimController<'a> = LedController<MockLedOutput<'a>, &'a SimClock>;

/// Controller mit Mock-Ausgang, `begin()` bereits aufgerufen
pub fn started_controller(clock: &SimClock, reverted: bool, initial_level: u8) -> SimController<'_> {
    let mut led = LedController::new(MockLedOutput::new(clock), clock, reverted, initial_level);
    led.begin();
    led
}

/// Lässt die Uhr `total_ms` lang in Schritten von `step_ms` laufen und
/// pollt nach jedem Schritt
pub fn run_for<O: LedOutput>(
    led: &mut LedController<O, &SimClock>,
    clock: &SimClock,
    total_ms: u32,
    step_ms: u32,
) {
    let mut elapsed = 0;
    while elapsed < total_ms {
        clock.advance(step_ms);
        led.poll();
        elapsed += step_ms;
    }
}

/// Pegel, die ein Schreibzugriff bei nicht invertierter LED bedeutet
pub fn level_of(write: PinWrite) -> u8 {
    match write {
        PinWrite::Digital(true) => 255,
        PinWrite::Digital(false) => 0,
        PinWrite::Analog(duty) => duty,
    }
}

/// Dauer jeder Phase: (Pegel, Zeit bis zum nächsten Schreibzugriff)
pub fn phases(writes: &[(u32, PinWrite)]) -> Vec<(u8, u32)> {
    writes
        .windows(2)
        .map(|pair| (level_of(pair[0].1), pair[1].0.wrapping_sub(pair[0].0)))
        .collect()
}
