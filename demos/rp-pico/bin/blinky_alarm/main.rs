#![no_std]
#![no_main]

use blink_controller::{
    AlarmBlinkRunner, AlarmClock, BlinkConfig, BlinkController, TickDuration,
};
use chrono::{NaiveDate, NaiveDateTime};
use cortex_m::delay::Delay;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{Clock, Sio, Timer, clocks::init_clocks_and_plls, pac, watchdog::Watchdog};
use rp_pico_demos::clock::SoftRtc;
use rp_pico_demos::diag::RttSink;
use rp_pico_demos::gpio::{GpioButton, GpioLed};
use rp_pico_demos::time::{Millis, SysTickDelay};
use rtt_target::{rprintln, rtt_init_print};

// Board wiring: LED on GPIO21, button on GPIO20.
const BLINK_PERIOD: u32 = 40;
const POLL_INTERVAL_MS: u64 = 100;

// The clock boots at 2024-04-18 11:30:24 with the alarm set eleven
// seconds later.
fn boot_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, 18)
        .unwrap()
        .and_hms_opt(11, 30, 24)
        .unwrap()
}

fn alarm_target() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, 18)
        .unwrap()
        .and_hms_opt(11, 30, 35)
        .unwrap()
}

#[entry]
fn main() -> ! {
    rtt_init_print!();

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);

    // Set the pins to their default state
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let led = GpioLed::new(pins.gpio21.into_push_pull_output());
    let button = GpioButton::new(pins.gpio20.into_pull_down_input());

    // Wall clock rides on the hardware timer.
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let mut alarm = AlarmClock::new(SoftRtc::new(timer));
    match alarm.init(boot_time()) {
        Ok(()) => {
            if let Err(err) = alarm.arm(alarm_target()) {
                rprintln!("alarm disabled: {}", err);
            }
        }
        // Degraded mode: keep blinking without a clock.
        Err(err) => rprintln!("clock disabled: {}", err),
    }

    let config = BlinkConfig::new(BLINK_PERIOD, Millis::from_millis(POLL_INTERVAL_MS)).unwrap();
    let controller = BlinkController::new(led, button, config);
    let mut runner = AlarmBlinkRunner::new(controller, alarm, RttSink);

    // Set up delay
    let mut delay = SysTickDelay::new(Delay::new(core.SYST, clocks.system_clock.freq().to_Hz()));

    rprintln!("Hello");
    runner.run_forever(&mut delay)
}
