use embedded_hal::adc::{Channel, OneShot};
use micromath::F32Ext;
use rp_pico::hal::Adc;

const ADC_VREF: f32 = 3.3;
const ADC_COUNTS: f32 = 65536.0;
// LM35 diode offset, preset for the reference board
const OFFSET_VOLTAGE: f32 = 0.0330;
const MV_PER_CELSIUS: f32 = 10.0;

/// Converts a full-scale 16-bit sample to degrees Celsius.
///
/// The LM35 outputs 10 mV per degree; the fixed diode offset is subtracted
/// before scaling.
pub fn raw_to_celsius(raw: u16) -> f32 {
    let volts = (raw as f32 / ADC_COUNTS) * ADC_VREF;
    (volts - OFFSET_VOLTAGE) * 1000.0 / MV_PER_CELSIUS
}

pub fn round_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// An LM35 wired to one of the ADC-capable pins (GPIO26..=29).
pub struct Lm35Sensor<P>
where
    P: Channel<Adc, ID = u8>,
{
    adc: Adc,
    input: P,
}

impl<P> Lm35Sensor<P>
where
    P: Channel<Adc, ID = u8>,
{
    pub fn new(adc: Adc, input: P) -> Self {
        Lm35Sensor { adc, input }
    }

    /// ADC channel number of the input pin.
    pub fn channel(&self) -> u8 {
        P::channel()
    }

    /// One-shot conversion, scaled from the 12-bit counts to [0, 65535].
    pub fn read_raw(&mut self) -> u16 {
        let counts: u16 = self.adc.read(&mut self.input).unwrap();
        (counts << 4) | (counts >> 8)
    }

    pub fn compute_temperature(&mut self) -> f32 {
        raw_to_celsius(self.read_raw())
    }

    /// Temperature rounded to two decimal places.
    pub fn temperature_celsius(&mut self) -> f32 {
        round_hundredths(self.compute_temperature())
    }
}
