//! Serial command console for a home-security controller.
//!
//! The console is polled once per system tick and consumes at most one byte
//! per poll. It answers single-character status commands and runs two kinds
//! of multi-character entry: a four-character access code and a
//! field-by-field date/time entry with range checks. Hardware is reached only
//! through the traits in [`devices`], so all of the logic runs on the host
//! under test.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod alarm;
pub mod clock;
pub mod code;
pub mod commands;
pub mod config;
pub mod datetime;
pub mod devices;
pub mod error;
pub mod events;
pub mod field;
pub mod session;
pub mod system;

pub use alarm::{AccessCode, AlarmState, CodeCheck};
pub use clock::{ClockState, DateTime};
pub use code::{Code, CodeEntry, CodeEntryKind, CodeProgress};
pub use commands::Command;
pub use datetime::{DateTimeEntry, PendingDateTime, Progress};
pub use devices::{
    Clock, CodeStore, Detectors, Devices, EventLog, SerialPort, Siren, TemperatureSensor,
};
pub use error::InputError;
pub use events::{EventMonitor, Observed, RamEventLog};
pub use field::{DateTimeField, FieldSpec, FIELD_TABLE};
pub use session::{Session, SessionMode};
pub use system::HomeSystem;
