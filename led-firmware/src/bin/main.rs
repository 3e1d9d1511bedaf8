// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_led_effekte::EffectChannel;
use esp_led_effekte::config::{BUTTON_GPIO_PIN, LED_GPIO_PIN, LEDC_FREQUENCY_KHZ};
use esp_led_effekte::hal::new_effect_controller;
use esp_led_effekte::tasks::{button_task, led_effect_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware (LEDC, Button), startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // LEDC initialisieren
    // Timer und Kanal müssen 'static sein, da der Kanal in den LED-Task wandert
    static LEDC: static_cell::StaticCell<Ledc<'static>> = static_cell::StaticCell::new();
    let ledc = LEDC.init(Ledc::new(peripherals.LEDC));
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    static LEDC_TIMER: static_cell::StaticCell<timer::Timer<'static, LowSpeed>> =
        static_cell::StaticCell::new();
    let ledc_timer = LEDC_TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
    ledc_timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty8Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(LEDC_FREQUENCY_KHZ),
        })
        .expect("Failed to configure LEDC timer");
    let ledc_timer: &'static timer::Timer<'static, LowSpeed> = ledc_timer;

    // LED-Kanal: startet aus, begin() im LED-Task setzt den Startpegel
    let mut led_channel = ledc.channel(channel::Number::Channel0, peripherals.GPIO5);
    led_channel
        .configure(channel::config::Config {
            timer: ledc_timer,
            duty_pct: 0,
            pin_config: channel::config::PinConfig::PushPull,
        })
        .expect("Failed to configure LEDC channel");
    defmt::info!("LED: LEDC channel on GPIO{} ready", LED_GPIO_PIN);

    // BOOT-Button mit Pull-Up
    let button = Input::new(
        peripherals.GPIO9,
        InputConfig::default().with_pull(Pull::Up),
    );
    defmt::info!("Button: GPIO{} ready", BUTTON_GPIO_PIN);

    // Effekt-Channel erstellen (Button → LED Task)
    static EFFECT_CHANNEL: static_cell::StaticCell<EffectChannel> = static_cell::StaticCell::new();
    let effect_channel = &*EFFECT_CHANNEL.init(EffectChannel::new());

    // Spawn LED Effekt Task (besitzt den Controller exklusiv)
    let led = new_effect_controller(led_channel);
    spawner
        .spawn(led_effect_task(led, effect_channel.receiver()))
        .unwrap();

    // Spawn Button Task
    spawner
        .spawn(button_task(button, effect_channel.sender()))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
