use alarm_console::SerialPort;
use rp_pico::hal::gpio::bank0::{Gpio0, Gpio1};
use rp_pico::hal::gpio::{FunctionUart, Pin, PullDown};
use rp_pico::hal::pac::UART0;
use rp_pico::hal::uart::{Enabled, UartPeripheral};

pub type UartPins = (
    Pin<Gpio0, FunctionUart, PullDown>,
    Pin<Gpio1, FunctionUart, PullDown>,
);

/// UART0 as the console transport.
pub struct UartPort {
    uart: UartPeripheral<Enabled, UART0, UartPins>,
}

impl UartPort {
    pub fn new(uart: UartPeripheral<Enabled, UART0, UartPins>) -> Self {
        Self { uart }
    }
}

impl SerialPort for UartPort {
    fn read_byte(&mut self) -> Option<u8> {
        if !self.uart.uart_is_readable() {
            return None;
        }
        let mut byte = [0u8; 1];
        match self.uart.read_raw(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.uart.write_full_blocking(bytes);
    }
}
