//! The controller as the serial console sees it: alarm, code store, clock
//! and event log behind the collaborator traits, plus the per-tick update
//! that runs them in order.

use crate::alarm::{AccessCode, AlarmState, CodeCheck};
use crate::clock::{ClockState, DateTime};
use crate::code::Code;
use crate::devices::{Clock, CodeStore, Detectors, EventLog, SerialPort, Siren, TemperatureSensor};
use crate::events::{EventMonitor, Observed, RamEventLog};
use crate::session::Session;

/// Converts a raw reading of the RP2040 on-die sensor (12-bit ADC, 3.3 V
/// reference) to degrees Celsius.
pub fn adc_to_celsius(raw: u16) -> f32 {
    let volts = f32::from(raw) * 3.3 / 4096.0;
    27.0 - (volts - 0.706) / 0.001721
}

pub struct HomeSystem {
    alarm: AlarmState,
    code: AccessCode,
    clock: ClockState,
    events: RamEventLog,
    monitor: EventMonitor,
    temperature_c: f32,
}

impl HomeSystem {
    pub fn new(now: DateTime, code: Code) -> Self {
        Self {
            alarm: AlarmState::new(),
            code: AccessCode::new(code),
            clock: ClockState::new(now),
            events: RamEventLog::new(),
            monitor: EventMonitor::new(),
            temperature_c: 0.0,
        }
    }

    pub fn alarm(&self) -> &AlarmState {
        &self.alarm
    }

    pub fn events(&self) -> &RamEventLog {
        &self.events
    }

    /// One-second clock tick.
    pub fn tick_second(&mut self) {
        self.clock.tick();
    }

    /// One system tick: sample detectors, consume a pending verify code,
    /// serve one console byte, then log any state changes.
    pub fn update<P: SerialPort>(
        &mut self,
        session: &mut Session,
        port: &mut P,
        gas_detected: bool,
        temperature_c: f32,
    ) {
        self.temperature_c = temperature_c;
        self.alarm.update(gas_detected, temperature_c);

        if self.alarm.check_code(session, &self.code) == CodeCheck::Rejected {
            port.write_str("Incorrect code\r\n");
        }

        session.update(port, self);

        let observed = Observed {
            alarm: self.alarm.is_active(),
            gas: self.alarm.gas_detected(),
            over_temperature: self.alarm.over_temperature(),
        };
        self.monitor.update(observed, self.clock.now(), &mut self.events);
    }
}

impl Siren for HomeSystem {
    fn siren_active(&self) -> bool {
        self.alarm.is_active()
    }
}

impl Detectors for HomeSystem {
    fn gas_detected(&self) -> bool {
        self.alarm.gas_detected()
    }

    fn over_temperature_detected(&self) -> bool {
        self.alarm.over_temperature()
    }
}

impl TemperatureSensor for HomeSystem {
    fn temperature_celsius(&self) -> f32 {
        self.temperature_c
    }
}

impl Clock for HomeSystem {
    fn now(&self) -> DateTime {
        self.clock.now()
    }

    fn set(&mut self, value: DateTime) {
        self.clock.set(value);
    }
}

impl CodeStore for HomeSystem {
    fn store_code(&mut self, code: &Code) {
        self.code.store_code(code);
    }
}

impl EventLog for HomeSystem {
    fn event_count(&self) -> usize {
        self.events.event_count()
    }

    fn event(&self, index: usize) -> Option<&str> {
        self.events.event(index)
    }
}
