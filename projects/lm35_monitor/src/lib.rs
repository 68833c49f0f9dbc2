//! LM35 temperature monitor for the Raspberry Pi Pico.
//!
//! Samples an LM35 diode on one of the ADC pins, blinks a status LED in step
//! with the sampling cadence and optionally appends every reading to a log
//! region in the on-board flash.

#![no_std]

pub mod flash;
pub mod format;
pub mod logger;
pub mod monitor;
pub mod sensor;

pub use flash::FlashSink;
pub use logger::{DataLogger, LogError, LogSink, MemorySink};
pub use monitor::{Lm35Monitor, MonitorConfig};
pub use sensor::Lm35Sensor;
