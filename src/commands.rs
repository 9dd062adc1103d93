//! Single-character command table.

use core::fmt;

use crate::config::RESPONSE_LEN;
use crate::devices::{Devices, SerialPort};
use crate::error::InputError;

pub const HELP_TEXT: &str = "Available commands:\r\n\
Press '1' to get the alarm state\r\n\
Press '2' to get the gas detector state\r\n\
Press '3' to get the over temperature detector state\r\n\
Press '4' to enter the code to deactivate the alarm\r\n\
Press '5' to enter a new code to deactivate the alarm\r\n\
Press 'f' or 'F' to get lm35 reading in Fahrenheit\r\n\
Press 'c' or 'C' to get lm35 reading in Celsius\r\n\
Press 's' or 'S' to set the date and time\r\n\
Press 't' or 'T' to get the date and time\r\n\
Press 'e' or 'E' to get the stored events\r\n\
\r\n";

pub const VERIFY_CODE_PROMPT: &str =
    "Please enter the four digits numeric code to deactivate the alarm: ";
pub const NEW_CODE_PROMPT: &str =
    "Please enter the new four digits numeric code to deactivate the alarm: ";
pub const ALARM_NOT_ACTIVE: &str = "Alarm is not activated.\r\n";
pub const NO_STORED_EVENTS: &str = "There are no stored events\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    AlarmState,
    GasDetectorState,
    OverTemperatureState,
    EnterVerifyCode,
    EnterNewCode,
    TemperatureCelsius,
    TemperatureFahrenheit,
    SetDateTime,
    ShowDateTime,
    ShowEvents,
}

impl TryFrom<u8> for Command {
    type Error = InputError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte.to_ascii_lowercase() {
            b'1' => Ok(Command::AlarmState),
            b'2' => Ok(Command::GasDetectorState),
            b'3' => Ok(Command::OverTemperatureState),
            b'4' => Ok(Command::EnterVerifyCode),
            b'5' => Ok(Command::EnterNewCode),
            b'c' => Ok(Command::TemperatureCelsius),
            b'f' => Ok(Command::TemperatureFahrenheit),
            b's' => Ok(Command::SetDateTime),
            b't' => Ok(Command::ShowDateTime),
            b'e' => Ok(Command::ShowEvents),
            _ => Err(InputError::UnknownCommand(byte)),
        }
    }
}

impl Command {
    /// Whether the command hands the console over to an entry sub-machine.
    pub fn changes_mode(self) -> bool {
        matches!(
            self,
            Command::EnterVerifyCode | Command::EnterNewCode | Command::SetDateTime
        )
    }
}

/// Answers a query command. Mode-changing commands are the session's job and
/// produce nothing here.
pub fn report<P: SerialPort, D: Devices>(command: Command, port: &mut P, devices: &D) {
    match command {
        Command::AlarmState => port.write_str(if devices.siren_active() {
            "The alarm is activated\r\n"
        } else {
            "The alarm is not activated\r\n"
        }),
        Command::GasDetectorState => port.write_str(if devices.gas_detected() {
            "Gas is being detected\r\n"
        } else {
            "Gas is not being detected\r\n"
        }),
        Command::OverTemperatureState => port.write_str(if devices.over_temperature_detected() {
            "Temperature is above the maximum level\r\n"
        } else {
            "Temperature is below the maximum level\r\n"
        }),
        Command::TemperatureCelsius => write_line(
            port,
            format_args!("Temperature: {:.2} \u{b0}C\r\n", devices.temperature_celsius()),
        ),
        Command::TemperatureFahrenheit => write_line(
            port,
            format_args!("Temperature: {:.2} \u{b0}F\r\n", devices.temperature_fahrenheit()),
        ),
        Command::ShowDateTime => {
            write_line(port, format_args!("Date and Time = {}\r\n", devices.now()))
        }
        Command::ShowEvents => show_events(port, devices),
        Command::EnterVerifyCode | Command::EnterNewCode | Command::SetDateTime => {}
    }
}

pub fn show_help<P: SerialPort>(port: &mut P) {
    port.write_str(HELP_TEXT);
}

fn show_events<P: SerialPort, D: Devices>(port: &mut P, devices: &D) {
    let count = devices.event_count();
    if count == 0 {
        port.write_str(NO_STORED_EVENTS);
        return;
    }
    for index in 0..count {
        if let Some(event) = devices.event(index) {
            port.write_str(event);
            port.write_str("\r\n");
        }
    }
}

/// Renders one response line into a scratch buffer and sends it.
pub(crate) fn write_line<P: SerialPort>(port: &mut P, args: fmt::Arguments<'_>) {
    let mut buf = [0u8; RESPONSE_LEN];
    match format_no_std::show(&mut buf, args) {
        Ok(line) => port.write_str(line),
        Err(_) => warn!("response line exceeds {} bytes, dropped", RESPONSE_LEN),
    }
}
