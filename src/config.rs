//! Build-time configuration for the console and the board it runs on.

use crate::clock::DateTime;

/// Number of characters in an access code.
pub const CODE_LENGTH: usize = 4;

/// Character echoed back for every code character received.
pub const CODE_MASK: u8 = b'*';

/// Code stored at power-up until the operator configures a new one.
pub const DEFAULT_CODE: [u8; CODE_LENGTH] = *b"1805";

/// Period of the system tick that polls the serial port (10 ms).
pub const POLL_PERIOD_US: u32 = 10_000;

/// Period of the calendar clock tick (1 s).
pub const CLOCK_PERIOD_US: u32 = 1_000_000;

pub const UART_BAUD_RATE: u32 = 115_200;

/// Crystal on the Pico board.
pub const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Above this reading the over-temperature detector trips.
pub const OVER_TEMPERATURE_LIMIT_C: f32 = 50.0;

/// Entries kept by the RAM event log before the oldest is dropped.
pub const EVENT_LOG_CAPACITY: usize = 20;

/// Maximum length of a single rendered event line.
pub const EVENT_STR_LENGTH: usize = 64;

/// Scratch buffer used to render one formatted response line.
pub const RESPONSE_LEN: usize = 96;

/// Calendar value the clock starts from after power-up.
pub const INITIAL_DATE_TIME: DateTime = DateTime {
    year: 2024,
    month: 1,
    day: 1,
    hour: 0,
    minute: 0,
    second: 0,
};
