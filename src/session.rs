//! Serial console session: the top-level mode dispatcher.
//!
//! One byte is consumed per call to [`Session::update`]. Depending on the
//! current [`SessionMode`] it is looked up in the command table or handed to
//! the code-entry or date/time sub-machine. Every byte produces exactly one
//! visible reaction: an echo, a prompt, an error reprompt or a response.

use crate::code::{Code, CodeEntry, CodeEntryKind, CodeProgress};
use crate::commands::{self, Command};
use crate::config::{CODE_LENGTH, CODE_MASK};
use crate::datetime::{DateTimeEntry, Progress};
use crate::devices::{Devices, SerialPort};
use crate::error::InputError;
use crate::field::DateTimeField;

pub const NEW_CODE_CONFIGURED: &str = "\r\nNew code configured\r\n\r\n";
pub const DATE_TIME_SET: &str = "\r\nDate and time has been set\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionMode {
    Commands,
    AwaitingVerifyCode,
    AwaitingNewCode,
    SettingDateTime,
}

pub struct Session {
    mode: SessionMode,
    code_entry: CodeEntry,
    date_time: DateTimeEntry,
    entered_code: Code,
    code_complete: bool,
}

impl Session {
    pub const fn new() -> Self {
        Self {
            mode: SessionMode::Commands,
            code_entry: CodeEntry::new(),
            date_time: DateTimeEntry::new(),
            entered_code: [0; CODE_LENGTH],
            code_complete: false,
        }
    }

    /// Prints the command list once at power-up.
    pub fn init<P: SerialPort>(&mut self, port: &mut P) {
        commands::show_help(port);
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn date_time_entry(&self) -> &DateTimeEntry {
        &self.date_time
    }

    /// Characters of the code currently being typed.
    pub fn code_cursor(&self) -> usize {
        self.code_entry.received()
    }

    /// Set once a verify-code entry has collected all its characters.
    pub fn code_complete(&self) -> bool {
        self.code_complete
    }

    pub fn set_code_complete(&mut self, state: bool) {
        self.code_complete = state;
    }

    /// Last code captured by a verify-code entry.
    pub fn entered_code(&self) -> &Code {
        &self.entered_code
    }

    /// Clears the completion flag and hands out the captured code, if any.
    pub fn take_entered_code(&mut self) -> Option<Code> {
        if !self.code_complete {
            return None;
        }
        self.code_complete = false;
        Some(self.entered_code)
    }

    /// Abandons whatever entry is in progress and returns to command mode.
    /// Nothing is committed.
    pub fn reset(&mut self) {
        if self.mode != SessionMode::Commands {
            info!("session reset from {}", self.mode);
        }
        self.code_entry.reset();
        self.date_time.abandon();
        self.mode = SessionMode::Commands;
    }

    /// Polls the port for one byte and processes it.
    pub fn update<P: SerialPort, D: Devices>(&mut self, port: &mut P, devices: &mut D) {
        if let Some(byte) = port.read_byte() {
            self.dispatch(byte, port, devices);
        }
    }

    pub fn dispatch<P: SerialPort, D: Devices>(&mut self, byte: u8, port: &mut P, devices: &mut D) {
        trace!("rx {:#x} in {}", byte, self.mode);
        match self.mode {
            SessionMode::Commands => self.run_command(byte, port, devices),
            SessionMode::AwaitingVerifyCode => {
                self.enter_code_char(CodeEntryKind::Verify, byte, port, devices)
            }
            SessionMode::AwaitingNewCode => {
                self.enter_code_char(CodeEntryKind::SetNew, byte, port, devices)
            }
            SessionMode::SettingDateTime => self.enter_date_time_char(byte, port, devices),
        }
    }

    fn set_mode(&mut self, mode: SessionMode) {
        debug!("mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    fn run_command<P: SerialPort, D: Devices>(&mut self, byte: u8, port: &mut P, devices: &mut D) {
        let command = match Command::try_from(byte) {
            Ok(command) => command,
            Err(err) => {
                debug!("{}", err);
                commands::show_help(port);
                return;
            }
        };

        match command {
            Command::EnterVerifyCode => {
                if let Err(err) = self.begin_verify_code(port, devices) {
                    debug!("{}", err);
                    port.write_str(commands::ALARM_NOT_ACTIVE);
                }
            }
            Command::EnterNewCode => {
                port.write_str(commands::NEW_CODE_PROMPT);
                self.code_entry.reset();
                self.set_mode(SessionMode::AwaitingNewCode);
            }
            Command::SetDateTime => {
                self.date_time.start();
                self.set_mode(SessionMode::SettingDateTime);
                port.write_str("\r\n");
                Self::prompt(port, DateTimeField::FIRST);
            }
            query => commands::report(query, port, devices),
        }
    }

    fn begin_verify_code<P: SerialPort, D: Devices>(
        &mut self,
        port: &mut P,
        devices: &D,
    ) -> Result<(), InputError> {
        if !devices.siren_active() {
            return Err(InputError::PreconditionNotMet);
        }
        port.write_str(commands::VERIFY_CODE_PROMPT);
        self.code_complete = false;
        self.code_entry.reset();
        self.set_mode(SessionMode::AwaitingVerifyCode);
        Ok(())
    }

    fn enter_code_char<P: SerialPort, D: Devices>(
        &mut self,
        kind: CodeEntryKind,
        byte: u8,
        port: &mut P,
        devices: &mut D,
    ) {
        port.write_bytes(&[CODE_MASK]);
        let CodeProgress::Complete(code) = self.code_entry.push(byte) else {
            return;
        };

        self.set_mode(SessionMode::Commands);
        match kind {
            CodeEntryKind::Verify => {
                self.entered_code = code;
                self.code_complete = true;
                info!("verify code captured");
            }
            CodeEntryKind::SetNew => {
                devices.store_code(&code);
                port.write_str(NEW_CODE_CONFIGURED);
                info!("new code stored");
            }
        }
    }

    fn enter_date_time_char<P: SerialPort, D: Devices>(
        &mut self,
        byte: u8,
        port: &mut P,
        devices: &mut D,
    ) {
        match self.date_time.step(byte) {
            Ok(Progress::Digit(digit)) => port.write_bytes(&[digit]),
            Ok(Progress::Advanced(next)) => {
                port.write_bytes(&[byte]);
                port.write_str("\r\n");
                Self::prompt(port, next);
            }
            Ok(Progress::Completed(value)) => {
                port.write_bytes(&[byte]);
                devices.set(value);
                port.write_str(DATE_TIME_SET);
                info!("clock set to {}", value);
                self.set_mode(SessionMode::Commands);
            }
            Ok(Progress::Inactive) => {
                warn!("date/time mode without an active entry");
                self.set_mode(SessionMode::Commands);
                commands::show_help(port);
            }
            Err(err) => {
                debug!("{}", err);
                Self::reprompt(port, err);
            }
        }
    }

    fn prompt<P: SerialPort>(port: &mut P, field: DateTimeField) {
        if let Some(spec) = field.spec() {
            port.write_str(spec.prompt);
        }
    }

    fn reprompt<P: SerialPort>(port: &mut P, err: InputError) {
        match err {
            InputError::InvalidCharacter { field, .. } => {
                if let Some(spec) = field.spec() {
                    commands::write_line(
                        port,
                        format_args!("\r\nInvalid input. Please try again ({}): ", spec.hint),
                    );
                }
            }
            InputError::OutOfRangeValue { field, .. } => {
                if let Some(spec) = field.spec() {
                    commands::write_line(
                        port,
                        format_args!(
                            "\r\nInvalid {}. Please try again ({}): ",
                            spec.name, spec.hint
                        ),
                    );
                }
            }
            InputError::UnknownCommand(_) | InputError::PreconditionNotMet => {}
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
