//! Alarm latch and access-code store.
//!
//! The alarm turns on when gas or over-temperature is detected and stays on
//! until a completed verify-code entry matches the stored code.

use crate::code::Code;
use crate::config::{DEFAULT_CODE, OVER_TEMPERATURE_LIMIT_C};
use crate::devices::CodeStore;
use crate::session::Session;

pub struct AccessCode {
    code: Code,
}

impl AccessCode {
    pub const fn new(code: Code) -> Self {
        Self { code }
    }

    pub fn matches(&self, candidate: &Code) -> bool {
        self.code == *candidate
    }
}

impl Default for AccessCode {
    fn default() -> Self {
        Self::new(DEFAULT_CODE)
    }
}

impl CodeStore for AccessCode {
    fn store_code(&mut self, code: &Code) {
        self.code = *code;
    }
}

/// Outcome of consuming a completed verify-code entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodeCheck {
    /// No completed entry was waiting.
    NoEntry,
    Accepted,
    Rejected,
}

#[derive(Debug, Default)]
pub struct AlarmState {
    active: bool,
    gas_detected: bool,
    over_temperature: bool,
}

impl AlarmState {
    pub const fn new() -> Self {
        Self { active: false, gas_detected: false, over_temperature: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn gas_detected(&self) -> bool {
        self.gas_detected
    }

    pub fn over_temperature(&self) -> bool {
        self.over_temperature
    }

    /// Samples the detectors. Any detection latches the alarm on.
    pub fn update(&mut self, gas_detected: bool, temperature_c: f32) {
        self.gas_detected = gas_detected;
        self.over_temperature = temperature_c > OVER_TEMPERATURE_LIMIT_C;
        if (self.gas_detected || self.over_temperature) && !self.active {
            warn!("alarm activated");
            self.active = true;
        }
    }

    /// Consumes the session's code-complete flag and deactivates the alarm
    /// when the captured code matches.
    pub fn check_code(&mut self, session: &mut Session, store: &AccessCode) -> CodeCheck {
        let Some(code) = session.take_entered_code() else {
            return CodeCheck::NoEntry;
        };
        if store.matches(&code) {
            info!("alarm deactivated");
            self.active = false;
            CodeCheck::Accepted
        } else {
            warn!("incorrect code");
            CodeCheck::Rejected
        }
    }
}
