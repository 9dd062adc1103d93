use std::collections::VecDeque;

use alarm_console::commands::HELP_TEXT;
use alarm_console::{
    Clock, Code, CodeStore, DateTime, DateTimeField, Detectors, EventLog, SerialPort, Session,
    SessionMode, Siren, TemperatureSensor,
};

#[derive(Default)]
struct MockPort {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl MockPort {
    fn queue(&mut self, input: &str) {
        self.input.extend(input.bytes());
    }

    fn take_output(&mut self) -> String {
        String::from_utf8(std::mem::take(&mut self.output)).unwrap()
    }
}

impl SerialPort for MockPort {
    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
    }
}

struct MockDevices {
    siren: bool,
    gas: bool,
    over_temperature: bool,
    celsius: f32,
    now: DateTime,
    clock_writes: Vec<DateTime>,
    stored_codes: Vec<Code>,
    events: Vec<String>,
}

impl Default for MockDevices {
    fn default() -> Self {
        Self {
            siren: false,
            gas: false,
            over_temperature: false,
            celsius: 25.0,
            now: DateTime::new(2024, 1, 15, 8, 30, 45),
            clock_writes: Vec::new(),
            stored_codes: Vec::new(),
            events: Vec::new(),
        }
    }
}

impl Siren for MockDevices {
    fn siren_active(&self) -> bool {
        self.siren
    }
}

impl Detectors for MockDevices {
    fn gas_detected(&self) -> bool {
        self.gas
    }

    fn over_temperature_detected(&self) -> bool {
        self.over_temperature
    }
}

impl TemperatureSensor for MockDevices {
    fn temperature_celsius(&self) -> f32 {
        self.celsius
    }
}

impl Clock for MockDevices {
    fn now(&self) -> DateTime {
        self.now
    }

    fn set(&mut self, value: DateTime) {
        self.now = value;
        self.clock_writes.push(value);
    }
}

impl CodeStore for MockDevices {
    fn store_code(&mut self, code: &Code) {
        self.stored_codes.push(*code);
    }
}

impl EventLog for MockDevices {
    fn event_count(&self) -> usize {
        self.events.len()
    }

    fn event(&self, index: usize) -> Option<&str> {
        self.events.get(index).map(String::as_str)
    }
}

struct Harness {
    session: Session,
    port: MockPort,
    devices: MockDevices,
}

impl Harness {
    fn new() -> Self {
        Self {
            session: Session::new(),
            port: MockPort::default(),
            devices: MockDevices::default(),
        }
    }

    /// Feeds `input` one byte per tick and returns everything written.
    fn send(&mut self, input: &str) -> String {
        self.port.queue(input);
        while !self.port.input.is_empty() {
            self.session.update(&mut self.port, &mut self.devices);
        }
        self.port.take_output()
    }
}

#[test]
fn init_prints_help() {
    let mut h = Harness::new();
    h.session.init(&mut h.port);
    assert_eq!(h.port.take_output(), HELP_TEXT);
}

#[test]
fn idle_port_produces_nothing() {
    let mut h = Harness::new();
    h.session.update(&mut h.port, &mut h.devices);
    assert!(h.port.take_output().is_empty());
    assert_eq!(h.session.mode(), SessionMode::Commands);
}

#[test]
fn unknown_command_prints_help() {
    let mut h = Harness::new();
    assert_eq!(h.send("x"), HELP_TEXT);
    assert_eq!(h.send("\r"), HELP_TEXT);
}

#[test]
fn status_commands_report_collaborators() {
    let mut h = Harness::new();
    assert_eq!(h.send("1"), "The alarm is not activated\r\n");
    assert_eq!(h.send("2"), "Gas is not being detected\r\n");
    assert_eq!(h.send("3"), "Temperature is below the maximum level\r\n");

    h.devices.siren = true;
    h.devices.gas = true;
    h.devices.over_temperature = true;
    assert_eq!(h.send("1"), "The alarm is activated\r\n");
    assert_eq!(h.send("2"), "Gas is being detected\r\n");
    assert_eq!(h.send("3"), "Temperature is above the maximum level\r\n");
}

#[test]
fn temperature_in_both_units() {
    let mut h = Harness::new();
    assert_eq!(h.send("c"), "Temperature: 25.00 \u{b0}C\r\n");
    assert_eq!(h.send("F"), "Temperature: 77.00 \u{b0}F\r\n");
}

#[test]
fn show_date_time() {
    let mut h = Harness::new();
    assert_eq!(h.send("T"), "Date and Time = Mon Jan 15 08:30:45 2024\r\n");
}

#[test]
fn show_events_dumps_log() {
    let mut h = Harness::new();
    assert_eq!(h.send("e"), "There are no stored events\r\n");

    h.devices.events.push("Event = ALARM_ON".to_string());
    h.devices.events.push("Event = ALARM_OFF".to_string());
    assert_eq!(h.send("E"), "Event = ALARM_ON\r\nEvent = ALARM_OFF\r\n");
}

#[test]
fn verify_code_requires_active_alarm() {
    let mut h = Harness::new();
    h.session.set_code_complete(true);

    assert_eq!(h.send("4"), "Alarm is not activated.\r\n");
    assert_eq!(h.session.mode(), SessionMode::Commands);
    assert_eq!(h.session.code_cursor(), 0);
    // Flag untouched when the request is refused.
    assert!(h.session.code_complete());
}

#[test]
fn verify_code_completes_exactly_once() {
    let mut h = Harness::new();
    h.devices.siren = true;

    let out = h.send("4");
    assert!(out.starts_with("Please enter the four digits numeric code"));
    assert_eq!(h.session.mode(), SessionMode::AwaitingVerifyCode);
    assert!(!h.session.code_complete());

    assert_eq!(h.send("18"), "**");
    assert_eq!(h.session.code_cursor(), 2);
    assert!(!h.session.code_complete());

    assert_eq!(h.send("05"), "**");
    assert_eq!(h.session.mode(), SessionMode::Commands);
    assert_eq!(h.session.code_cursor(), 0);
    assert!(h.session.code_complete());
    assert_eq!(h.session.entered_code(), b"1805");
    assert!(h.devices.stored_codes.is_empty());

    assert_eq!(h.session.take_entered_code(), Some(*b"1805"));
    assert_eq!(h.session.take_entered_code(), None);

    // Back in command mode: the next character is a command again.
    assert_eq!(h.send("1"), "The alarm is activated\r\n");
}

#[test]
fn new_code_is_stored_once() {
    let mut h = Harness::new();
    let out = h.send("5");
    assert!(out.starts_with("Please enter the new four digits numeric code"));
    assert_eq!(h.session.mode(), SessionMode::AwaitingNewCode);

    assert_eq!(h.send("4#2a"), "****\r\nNew code configured\r\n\r\n");
    assert_eq!(h.devices.stored_codes, vec![*b"4#2a"]);
    assert_eq!(h.session.mode(), SessionMode::Commands);
    assert_eq!(h.session.code_cursor(), 0);
    assert!(!h.session.code_complete());
}

#[test]
fn set_date_time_commits_full_tuple_once() {
    let mut h = Harness::new();
    assert_eq!(h.send("s"), "\r\nType four digits for the current year (YYYY): ");
    assert_eq!(h.session.mode(), SessionMode::SettingDateTime);

    assert_eq!(h.send("2024"), "2024\r\nType two digits for the current month (01-12): ");
    assert_eq!(h.send("01"), "01\r\nType two digits for the current day (01-31): ");
    assert_eq!(h.send("15"), "15\r\nType two digits for the current hour (00-23): ");
    assert_eq!(h.send("08"), "08\r\nType two digits for the current minutes (00-59): ");
    assert_eq!(h.send("30"), "30\r\nType two digits for the current seconds (00-59): ");
    assert!(h.devices.clock_writes.is_empty());

    assert_eq!(h.send("45"), "45\r\nDate and time has been set\r\n");
    assert_eq!(h.devices.clock_writes, vec![DateTime::new(2024, 1, 15, 8, 30, 45)]);
    assert_eq!(h.session.mode(), SessionMode::Commands);
    assert_eq!(h.session.date_time_entry().field(), DateTimeField::Done);

    assert_eq!(h.send("t"), "Date and Time = Mon Jan 15 08:30:45 2024\r\n");
}

#[test]
fn out_of_range_year_is_reprompted() {
    let mut h = Harness::new();
    h.send("s");
    assert_eq!(h.send("1899"), "189\r\nInvalid year. Please try again (YYYY): ");
    assert_eq!(h.session.date_time_entry().field(), DateTimeField::Year);
    assert!(h.session.date_time_entry().buffered().is_empty());

    assert_eq!(h.send("2100"), "210\r\nInvalid year. Please try again (YYYY): ");
    assert_eq!(h.session.date_time_entry().field(), DateTimeField::Year);

    h.send("2024");
    assert_eq!(h.session.date_time_entry().field(), DateTimeField::Month);
    assert!(h.session.date_time_entry().buffered().is_empty());
}

#[test]
fn rejected_month_then_valid_month() {
    let mut h = Harness::new();
    h.send("s2024");
    assert_eq!(h.send("13"), "1\r\nInvalid month. Please try again (01-12): ");
    assert_eq!(h.send("05"), "05\r\nType two digits for the current day (01-31): ");
    assert_eq!(h.session.date_time_entry().field(), DateTimeField::Day);
    assert_eq!(h.session.date_time_entry().pending().month, 5);
}

#[test]
fn non_digit_in_day_reprompts() {
    let mut h = Harness::new();
    h.send("s202401");
    assert_eq!(h.send("3#"), "3\r\nInvalid input. Please try again (01-31): ");
    assert_eq!(h.session.date_time_entry().field(), DateTimeField::Day);
    assert!(h.session.date_time_entry().buffered().is_empty());
    assert_eq!(h.session.mode(), SessionMode::SettingDateTime);

    assert_eq!(h.send("31"), "31\r\nType two digits for the current hour (00-23): ");
}

#[test]
fn range_messages_name_each_field() {
    let mut h = Harness::new();
    h.send("s20240101");
    assert_eq!(h.send("24"), "2\r\nInvalid hour. Please try again (00-23): ");
    h.send("23");
    assert_eq!(h.send("60"), "6\r\nInvalid minutes. Please try again (00-59): ");
    h.send("59");
    assert_eq!(h.send("99"), "9\r\nInvalid seconds. Please try again (00-59): ");
    assert!(h.devices.clock_writes.is_empty());
    assert_eq!(h.session.mode(), SessionMode::SettingDateTime);

    h.send("59");
    assert_eq!(h.devices.clock_writes, vec![DateTime::new(2024, 1, 1, 23, 59, 59)]);
}

#[test]
fn reset_abandons_date_time_entry() {
    let mut h = Harness::new();
    h.send("s2024011508");
    h.session.reset();
    assert_eq!(h.session.mode(), SessionMode::Commands);
    assert!(h.devices.clock_writes.is_empty());
    assert_eq!(h.devices.now, DateTime::new(2024, 1, 15, 8, 30, 45));

    // A fresh entry starts from the year again.
    h.send("s");
    assert_eq!(h.session.date_time_entry().field(), DateTimeField::Year);
    h.send("19990228235959");
    assert_eq!(h.devices.clock_writes, vec![DateTime::new(1999, 2, 28, 23, 59, 59)]);
}

#[test]
fn reset_abandons_code_entry() {
    let mut h = Harness::new();
    h.send("512");
    h.session.reset();
    assert_eq!(h.session.code_cursor(), 0);
    assert_eq!(h.send("1"), "The alarm is not activated\r\n");
    assert!(h.devices.stored_codes.is_empty());
}

#[test]
fn one_byte_per_tick() {
    let mut h = Harness::new();
    h.port.queue("123");
    h.session.update(&mut h.port, &mut h.devices);
    assert_eq!(h.port.take_output(), "The alarm is not activated\r\n");
    assert_eq!(h.port.input.len(), 2);
}

#[test]
fn every_byte_has_a_visible_effect() {
    let mut h = Harness::new();
    h.devices.siren = true;
    for byte in "x1c5abcd4wxyzs2O20190101000000".bytes() {
        h.port.queue(&(byte as char).to_string());
        h.session.update(&mut h.port, &mut h.devices);
        assert!(!h.port.take_output().is_empty(), "no output for {:?}", byte as char);
    }
    assert_eq!(h.session.mode(), SessionMode::Commands);
}
