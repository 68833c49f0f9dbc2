use core::convert::Infallible;
use core::fmt::Debug;

use cortex_m::delay::Delay;
use defmt::info;
use embedded_hal::adc::Channel;
use embedded_hal::digital::v2::OutputPin;
use fugit::MillisDurationU32;
use rp_pico::hal::Adc;

use crate::format::format_celsius;
use crate::logger::{DataLogger, LogError, LogSink};
use crate::sensor::Lm35Sensor;

/// Startup configuration, injected by the entry point.
#[derive(Clone, Copy)]
pub struct MonitorConfig {
    /// Delay used before and after each LED toggle. One full cycle takes twice
    /// this long.
    pub interval: MillisDurationU32,
    pub logging: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            interval: MillisDurationU32::secs(1),
            logging: false,
        }
    }
}

/// The sampling loop: LED on, wait, sample, report, maybe log, LED off, wait.
pub struct Lm35Monitor<P, L, S>
where
    P: Channel<Adc, ID = u8>,
    L: OutputPin,
    L::Error: Debug,
    S: LogSink,
{
    sensor: Lm35Sensor<P>,
    logger: DataLogger<S>,
    led: L,
    delay: Delay,
    interval: MillisDurationU32,
    logging: bool,
}

impl<P, L, S> Lm35Monitor<P, L, S>
where
    P: Channel<Adc, ID = u8>,
    L: OutputPin,
    L::Error: Debug,
    S: LogSink,
{
    pub fn new(
        sensor: Lm35Sensor<P>,
        logger: DataLogger<S>,
        led: L,
        delay: Delay,
        config: MonitorConfig,
    ) -> Self {
        Lm35Monitor {
            sensor,
            logger,
            led,
            delay,
            interval: config.interval,
            logging: config.logging,
        }
    }

    pub fn set_interval(&mut self, interval: MillisDurationU32) {
        self.interval = interval;
    }

    /// Turns logging on. There is no way to turn it back off, matching the
    /// board this replaces.
    pub fn enable_logging(&mut self) {
        self.logging = true;
    }

    pub fn interval(&self) -> MillisDurationU32 {
        self.interval
    }

    pub fn logging_enabled(&self) -> bool {
        self.logging
    }

    pub fn logger(&self) -> &DataLogger<S> {
        &self.logger
    }

    /// One full cycle. Returns the rounded reading taken in its middle.
    pub fn run_cycle(&mut self) -> Result<f32, LogError> {
        self.led.set_high().unwrap();
        self.delay.delay_ms(self.interval.to_millis());

        let celsius = self.sensor.temperature_celsius();
        info!("Temperature - {=str}", format_celsius(celsius).as_str());
        if self.logging {
            self.logger.record(celsius)?;
        }

        self.led.set_low().unwrap();
        self.delay.delay_ms(self.interval.to_millis());
        Ok(celsius)
    }

    /// Runs cycles forever. Only a failing log sink gets out of here; the
    /// caller decides how loudly to die.
    pub fn start(&mut self) -> Result<Infallible, LogError> {
        info!(
            "LM35 monitor: ADC channel {}, interval {} ms, logging {}",
            self.sensor.channel(),
            self.interval.to_millis(),
            self.logging
        );
        loop {
            self.run_cycle()?;
        }
    }
}
