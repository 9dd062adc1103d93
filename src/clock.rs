use core::fmt;

use crate::devices::Clock;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar date and time of day, one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self { year, month, day, hour, minute, second }
    }

    /// Increments the second, rolling over into minutes.
    pub fn tick(&mut self) {
        self.second += 1;
        if self.second >= 60 {
            self.second = 0;
            self.add_minute();
        }
    }

    /// Increments the minute. Handles rollover to hours and days.
    pub fn add_minute(&mut self) {
        self.minute += 1;
        if self.minute >= 60 {
            self.minute = 0;
            self.hour += 1;
            if self.hour >= 24 {
                self.hour = 0;
                self.add_day();
            }
        }
    }

    fn add_day(&mut self) {
        self.day += 1;
        // Entry accepts day 31 for every month, so overshoot rolls too.
        if self.day > days_in_month(self.year, self.month) {
            self.day = 1;
            self.month += 1;
            if self.month > 12 {
                self.month = 1;
                self.year += 1;
            }
        }
    }

    /// Day of the week, 0 = Sunday.
    pub fn weekday(&self) -> u8 {
        const OFFSETS: [u16; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let month = self.month.clamp(1, 12) as usize;
        let year = if month < 3 { self.year.saturating_sub(1) } else { self.year };
        let day = u16::from(self.day);
        ((year + year / 4 - year / 100 + year / 400 + OFFSETS[month - 1] + day) % 7) as u8
    }
}

pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl fmt::Display for DateTime {
    /// Renders the classic `ctime` layout: `Mon Jan 15 08:30:45 2024`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = MONTHS[usize::from(self.month.clamp(1, 12)) - 1];
        write!(
            f,
            "{} {} {:2} {:02}:{:02}:{:02} {}",
            WEEKDAYS[usize::from(self.weekday())],
            month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.year
        )
    }
}

/// Shared state for the clock
pub struct ClockState {
    now: DateTime,
}

impl ClockState {
    pub fn new(now: DateTime) -> Self {
        Self { now }
    }

    pub fn tick(&mut self) {
        self.now.tick();
    }
}

impl Clock for ClockState {
    fn now(&self) -> DateTime {
        self.now
    }

    fn set(&mut self, value: DateTime) {
        self.now = value;
    }
}
