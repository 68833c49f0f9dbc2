#![no_std]
#![no_main]

use defmt::*;
use defmt_rtt as _;
use panic_probe as _;

use bsp::{
    entry,
    hal::{
        clocks::{init_clocks_and_plls, Clock},
        pac,
        watchdog::Watchdog,
        Adc, Sio,
    },
};
use rp_pico as bsp;

use fugit::MillisDurationU32;
use lm35_monitor::{DataLogger, FlashSink, Lm35Monitor, Lm35Sensor, MonitorConfig};

// Reference wiring: LM35 on GPIO28 (ADC channel 2), status LED on GPIO0.
const CONFIG: MonitorConfig = MonitorConfig {
    interval: MillisDurationU32::secs(1),
    logging: true,
};

#[entry]
fn main() -> ! {
    info!("Program start");
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

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

    let sio = Sio::new(pac.SIO);
    let pins = bsp::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

    let adc = Adc::new(pac.ADC, &mut pac.RESETS);
    let sensor = Lm35Sensor::new(adc, pins.gpio28.into_floating_input());
    let led = pins.gpio0.into_push_pull_output();

    // Erases the flash log region, so each boot starts with an empty log.
    let logger = DataLogger::new(FlashSink::new()).unwrap();

    let mut monitor = Lm35Monitor::new(sensor, logger, led, delay, CONFIG);
    match monitor.start() {
        Ok(never) => match never {},
        Err(e) => defmt::panic!("log sink failed: {}", e),
    }
}
