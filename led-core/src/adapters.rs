//! embedded-hal 1.0 Adapter
//!
//! Verbinden beliebige HAL-Pins mit dem `LedOutput` Trait:
//! - `PwmLedOutput`: jeder `SetDutyCycle` Kanal (z.B. ESP32 LEDC)
//! - `DigitalLedOutput`: jeder `OutputPin`, abgestufte Pegel werden angenähert

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::traits::{LedError, LedOutput};

/// LED an einem PWM-Kanal
///
/// Der Kanal muss bereits konfiguriert sein (Timer, Frequenz);
/// `configure_output()` hat daher nichts mehr zu tun.
pub struct PwmLedOutput<P> {
    pwm: P,
    neutral_high: bool,
}

impl<P: SetDutyCycle> PwmLedOutput<P> {
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            neutral_high: false,
        }
    }

    /// Pegel, auf den `release()` den Kanal setzt (Standard: low)
    ///
    /// PWM-Kanäle lassen sich nicht in einen Eingang zurückschalten; bei
    /// invertierter LED sollte der neutrale Pegel daher high sein.
    pub fn with_neutral_high(mut self, neutral_high: bool) -> Self {
        self.neutral_high = neutral_high;
        self
    }

    pub fn inner(&self) -> &P {
        &self.pwm
    }
}

impl<P: SetDutyCycle> LedOutput for PwmLedOutput<P> {
    fn set_digital(&mut self, high: bool) -> Result<(), LedError> {
        let result = if high {
            self.pwm.set_duty_cycle_fully_on()
        } else {
            self.pwm.set_duty_cycle_fully_off()
        };
        result.map_err(|_| LedError::WriteFailed)
    }

    fn set_analog(&mut self, duty: u8) -> Result<(), LedError> {
        self.pwm
            .set_duty_cycle_fraction(u16::from(duty), 255)
            .map_err(|_| LedError::WriteFailed)
    }

    fn configure_output(&mut self) -> Result<(), LedError> {
        Ok(())
    }

    fn release(&mut self) {
        let _ = self.set_digital(self.neutral_high);
    }
}

/// LED an einem rein binären Pin
///
/// Abgestufte Pegel ab 128 gelten als an, darunter als aus.
pub struct DigitalLedOutput<P> {
    pin: P,
    neutral_high: bool,
}

impl<P: OutputPin> DigitalLedOutput<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            neutral_high: false,
        }
    }

    /// Pegel, auf den `release()` den Pin setzt (Standard: low)
    pub fn with_neutral_high(mut self, neutral_high: bool) -> Self {
        self.neutral_high = neutral_high;
        self
    }

    pub fn inner(&self) -> &P {
        &self.pin
    }
}

impl<P: OutputPin> LedOutput for DigitalLedOutput<P> {
    fn set_digital(&mut self, high: bool) -> Result<(), LedError> {
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| LedError::WriteFailed)
    }

    fn set_analog(&mut self, duty: u8) -> Result<(), LedError> {
        self.set_digital(duty >= 128)
    }

    fn configure_output(&mut self) -> Result<(), LedError> {
        Ok(())
    }

    fn release(&mut self) {
        let _ = self.set_digital(self.neutral_high);
    }
}
