//! Tests für die embedded-hal Adapter
//!
//! Mock-Implementierungen von `SetDutyCycle` und `OutputPin`

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use led_core::{
    BlinkParams, DigitalLedOutput, LedController, LedOutput, PulseParams, PwmLedOutput,
};
use led_tests::{SimClock, run_for};

// ============================================================================
// Mock PWM / Pin
// ============================================================================

const MOCK_MAX_DUTY: u16 = 1000;

#[derive(Default)]
struct MockPwm {
    duty: u16,
    history: Vec<u16>,
}

impl embedded_hal::pwm::ErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        MOCK_MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        self.history.push(duty);
        Ok(())
    }
}

#[derive(Default)]
struct MockPin {
    high: bool,
    history: Vec<bool>,
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.history.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.history.push(true);
        Ok(())
    }
}

// ============================================================================
// Tests: PwmLedOutput
// ============================================================================

#[test]
fn test_pwm_digital_is_fully_on_or_off() {
    let mut output = PwmLedOutput::new(MockPwm::default());

    output.set_digital(true).unwrap();
    assert_eq!(output.inner().duty, MOCK_MAX_DUTY);

    output.set_digital(false).unwrap();
    assert_eq!(output.inner().duty, 0);
}

#[test]
fn test_pwm_analog_scales_to_max_duty() {
    let mut output = PwmLedOutput::new(MockPwm::default());

    output.set_analog(255).unwrap();
    assert_eq!(output.inner().duty, MOCK_MAX_DUTY);

    output.set_analog(51).unwrap();
    assert_eq!(output.inner().duty, 200);
}

#[test]
fn test_pwm_release_uses_neutral_level() {
    let mut output = PwmLedOutput::new(MockPwm::default()).with_neutral_high(true);
    output.set_digital(false).unwrap();

    output.release();
    assert_eq!(output.inner().duty, MOCK_MAX_DUTY);
}

#[test]
fn test_pwm_pulse_through_controller() {
    let clock = SimClock::new();
    let mut led = LedController::new(PwmLedOutput::new(MockPwm::default()), &clock, false, 0);
    led.begin();
    led.set_pulse(PulseParams::new(true, 1, 1, 1).with_levels(0, 3));

    run_for(&mut led, &clock, 8, 2);

    // begin, Start bei 0, dann 1, 2, 3, Umkehr bei 3
    assert_eq!(led.output().inner().history, vec![0, 0, 3, 7, 11, 11]);
}

#[test]
fn test_pwm_reverted_blink() {
    let clock = SimClock::new();
    let mut led = LedController::new(PwmLedOutput::new(MockPwm::default()), &clock, true, 0);
    led.begin();
    assert_eq!(led.output().inner().duty, MOCK_MAX_DUTY);

    led.set_blink(BlinkParams::new(1, 10, 10, 10));
    assert_eq!(led.output().inner().duty, 0);
}

// ============================================================================
// Tests: DigitalLedOutput
// ============================================================================

#[test]
fn test_digital_approximates_analog() {
    let mut output = DigitalLedOutput::new(MockPin::default());

    output.set_analog(127).unwrap();
    assert!(!output.inner().high);

    output.set_analog(128).unwrap();
    assert!(output.inner().high);
}

#[test]
fn test_digital_configure_and_release() {
    let mut output = DigitalLedOutput::new(MockPin::default());
    assert_eq!(output.configure_output(), Ok(()));

    output.set_digital(true).unwrap();
    output.release();
    assert_eq!(output.inner().history, vec![true, false]);
}

#[test]
fn test_digital_blink_through_controller() {
    let clock = SimClock::new();
    let mut led = LedController::new(DigitalLedOutput::new(MockPin::default()), &clock, false, 0);
    led.begin();
    led.set_blink(BlinkParams::new(2, 5, 5, 20));

    run_for(&mut led, &clock, 6 * 4 + 21, 1);

    assert_eq!(
        led.output().inner().history,
        vec![false, true, false, true, false, false, true]
    );
}
