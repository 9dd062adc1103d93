//! Collaborator interfaces the console talks to.
//!
//! The console never touches hardware directly. Each collaborator is a
//! narrow request/response trait so the firmware can back it with real
//! peripherals and tests can back it with plain structs.

use crate::clock::DateTime;
use crate::config::CODE_LENGTH;

/// Byte-level serial transport.
pub trait SerialPort {
    /// Returns the next received byte, if one is waiting. Never blocks.
    fn read_byte(&mut self) -> Option<u8>;

    fn write_bytes(&mut self, bytes: &[u8]);

    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }
}

pub trait Siren {
    fn siren_active(&self) -> bool;
}

pub trait Detectors {
    fn gas_detected(&self) -> bool;
    fn over_temperature_detected(&self) -> bool;
}

pub trait TemperatureSensor {
    fn temperature_celsius(&self) -> f32;

    fn temperature_fahrenheit(&self) -> f32 {
        celsius_to_fahrenheit(self.temperature_celsius())
    }
}

/// Persisted calendar clock.
pub trait Clock {
    fn now(&self) -> DateTime;

    /// Replaces the stored value in one write.
    fn set(&mut self, value: DateTime);
}

/// Persisted access code.
pub trait CodeStore {
    fn store_code(&mut self, code: &[u8; CODE_LENGTH]);
}

/// Persisted event log, oldest entry first.
pub trait EventLog {
    fn event_count(&self) -> usize;
    fn event(&self, index: usize) -> Option<&str>;
}

/// Everything the command table needs besides the serial port.
pub trait Devices: Siren + Detectors + TemperatureSensor + Clock + CodeStore + EventLog {}

impl<T> Devices for T where T: Siren + Detectors + TemperatureSensor + Clock + CodeStore + EventLog {}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}
