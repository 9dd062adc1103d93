use core::fmt;

use crate::field::DateTimeField;

/// Recoverable input errors. Each one is resolved where it is detected by
/// reprompting; none of them ever leaves the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// A non-digit arrived while a date/time field expected digits.
    InvalidCharacter { field: DateTimeField, byte: u8 },
    /// A complete digit group parsed but falls outside the field's range.
    OutOfRangeValue { field: DateTimeField, value: u16 },
    /// Command character with no entry in the command table.
    UnknownCommand(u8),
    /// Code verification requested while the alarm is not active.
    PreconditionNotMet,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InputError::*;
        match self {
            InvalidCharacter { field, byte } => {
                write!(f, "invalid character 0x{:02x} for {}", byte, field.name())
            }
            OutOfRangeValue { field, value } => {
                write!(f, "{} out of range for {}", value, field.name())
            }
            UnknownCommand(byte) => write!(f, "unknown command 0x{:02x}", byte),
            PreconditionNotMet => write!(f, "alarm is not active"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let err = InputError::OutOfRangeValue { field: DateTimeField::Month, value: 13 };
        assert_eq!(err.to_string(), "13 out of range for month");

        let err = InputError::InvalidCharacter { field: DateTimeField::Day, byte: b'#' };
        assert_eq!(err.to_string(), "invalid character 0x23 for day");
    }
}
