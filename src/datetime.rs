//! Date/time entry sub-machine.
//!
//! Digits are collected one field at a time in the order given by
//! [`FIELD_TABLE`](crate::field::FIELD_TABLE). A field only advances once
//! its digit group is complete and in range; the six validated values are
//! handed out together when the seconds field passes, so the clock is never
//! written with a partial value.
//!
//! [`DateTimeEntry::step`] is pure with respect to I/O: it reports what
//! happened and leaves echoes and prompts to the caller.

use heapless::Vec;

use crate::clock::DateTime;
use crate::error::InputError;
use crate::field::{DateTimeField, MAX_FIELD_DIGITS};

/// Values validated so far, waiting for the seconds field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PendingDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl PendingDateTime {
    fn record(&mut self, field: DateTimeField, value: u16) {
        match field {
            DateTimeField::Year => self.year = value,
            DateTimeField::Month => self.month = value as u8,
            DateTimeField::Day => self.day = value as u8,
            DateTimeField::Hour => self.hour = value as u8,
            DateTimeField::Minute => self.minute = value as u8,
            DateTimeField::Second | DateTimeField::Done => {}
        }
    }

    fn complete(self, second: u8) -> DateTime {
        DateTime::new(self.year, self.month, self.day, self.hour, self.minute, second)
    }
}

/// Result of feeding one character to the sub-machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Digit buffered; the field still needs more.
    Digit(u8),
    /// The field was accepted and entry moved on to the given field.
    Advanced(DateTimeField),
    /// Seconds accepted; the full value is ready to commit.
    Completed(DateTime),
    /// No entry in progress.
    Inactive,
}

pub struct DateTimeEntry {
    field: DateTimeField,
    buffer: Vec<u8, MAX_FIELD_DIGITS>,
    pending: PendingDateTime,
}

impl DateTimeEntry {
    pub const fn new() -> Self {
        Self {
            field: DateTimeField::Done,
            buffer: Vec::new(),
            pending: PendingDateTime {
                year: 0,
                month: 0,
                day: 0,
                hour: 0,
                minute: 0,
            },
        }
    }

    /// Begins a fresh entry at the year field.
    pub fn start(&mut self) {
        self.field = DateTimeField::FIRST;
        self.buffer.clear();
        self.pending = PendingDateTime::default();
    }

    /// Drops any entry in progress without producing a value.
    pub fn abandon(&mut self) {
        self.field = DateTimeField::Done;
        self.buffer.clear();
        self.pending = PendingDateTime::default();
    }

    pub fn field(&self) -> DateTimeField {
        self.field
    }

    /// Digits collected for the current field.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    pub fn pending(&self) -> &PendingDateTime {
        &self.pending
    }

    pub fn step(&mut self, byte: u8) -> Result<Progress, InputError> {
        let field = self.field;
        let Some(spec) = field.spec() else {
            return Ok(Progress::Inactive);
        };

        if !byte.is_ascii_digit() {
            self.buffer.clear();
            return Err(InputError::InvalidCharacter { field, byte });
        }

        if self.buffer.len() < spec.digits {
            // Cannot fail: the buffer holds the longest field.
            let _ = self.buffer.push(byte);
        }
        if self.buffer.len() < spec.digits {
            return Ok(Progress::Digit(byte));
        }

        let value = self
            .buffer
            .iter()
            .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));
        self.buffer.clear();

        if !spec.accepts(value) {
            return Err(InputError::OutOfRangeValue { field, value });
        }

        self.field = spec.next;
        if spec.next.is_done() {
            let value = self.pending.complete(value as u8);
            self.pending = PendingDateTime::default();
            Ok(Progress::Completed(value))
        } else {
            self.pending.record(field, value);
            Ok(Progress::Advanced(spec.next))
        }
    }
}

impl Default for DateTimeEntry {
    fn default() -> Self {
        Self::new()
    }
}
