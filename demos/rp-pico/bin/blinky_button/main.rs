#![no_std]
#![no_main]

use blink_controller::{BlinkConfig, BlinkController, BlinkRunner, TickDuration};
use cortex_m::delay::Delay;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{Clock, Sio, clocks::init_clocks_and_plls, pac, watchdog::Watchdog};
use rp_pico_demos::diag::RttSink;
use rp_pico_demos::gpio::{GpioButton, GpioLed};
use rp_pico_demos::time::{Millis, SysTickDelay};
use rtt_target::{rprintln, rtt_init_print};

// Board wiring: LED on GPIO21, button on GPIO20.
const BLINK_PERIOD: u32 = 40;
const POLL_INTERVAL_MS: u64 = 100;

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

    let config = BlinkConfig::new(BLINK_PERIOD, Millis::from_millis(POLL_INTERVAL_MS)).unwrap();
    let controller = BlinkController::new(led, button, config);
    let mut runner = BlinkRunner::new(controller, RttSink);

    // Set up delay
    let mut delay = SysTickDelay::new(Delay::new(core.SYST, clocks.system_clock.freq().to_Hz()));

    rprintln!("Hello");
    runner.run_forever(&mut delay)
}
