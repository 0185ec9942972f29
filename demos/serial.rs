//! Serves the register configure console over a serial port.
//!
//! Bench setup: pick a port, attach a terminal emulator to the other end
//! (115200 8N1, local echo off) and edit away. Register traffic goes to a
//! simulated BQ24250 so the console protocol can be exercised without
//! hardware; swap [`SimCharger`] for [`bq24250_regedit::charger::Bq24250`]
//! over a real bus to drive the part itself. Ctrl-C in the attached
//! terminal ends the session.

use std::env;
use std::time::Duration;

use bq24250_regedit::access::RegisterAccess;
use bq24250_regedit::editor::RegisterEditor;
use bq24250_regedit::registers::ChargerRegister;
use embedded_io::{Error, ErrorKind, Read};
use inquire::Select;
use serialport::SerialPort;

const BAUD_RATE: u32 = 115200;
/// Short read timeout keeps the poll loop responsive without spinning.
const SERIAL_TIMEOUT_MS: u64 = 50;
/// Ctrl-C from the attached terminal, the stand-in for a power-off event.
const ETX: u8 = 0x03;

/// Register contents of a freshly reset part (4.2 V battery, 500 mA input
/// limit, charge in progress).
const POWER_ON_DEFAULTS: [u8; 7] = [0x50, 0x24, 0x8c, 0x04, 0x02, 0x28, 0x00];

/// In-memory BQ24250 register file standing in for the chip.
struct SimCharger {
    registers: [u8; 7],
}

impl SimCharger {
    fn new() -> Self {
        Self {
            registers: POWER_ON_DEFAULTS,
        }
    }
}

impl RegisterAccess for SimCharger {
    type Error = core::convert::Infallible;

    fn read_register(&mut self, register: ChargerRegister) -> Result<u8, Self::Error> {
        Ok(self.registers[u8::from(register) as usize])
    }

    fn write_register(&mut self, register: ChargerRegister, value: u8) -> Result<(), Self::Error> {
        // The RESET bit restores defaults and reads back clear, like the part.
        if register == ChargerRegister::Control && value & 0x80 != 0 {
            self.registers = POWER_ON_DEFAULTS;
            return Ok(());
        }
        self.registers[u8::from(register) as usize] = value;
        Ok(())
    }
}

/// Adapts a [`serialport::SerialPort`] to the [`embedded_io`] traits the
/// editor expects.
struct PortWrapper(Box<dyn SerialPort>);

#[derive(Debug)]
struct IoError(std::io::Error);

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl Error for IoError {
    fn kind(&self) -> ErrorKind {
        // The poll loop only distinguishes "no byte arrived in time".
        match self.0.kind() {
            std::io::ErrorKind::TimedOut => ErrorKind::TimedOut,
            std::io::ErrorKind::Interrupted => ErrorKind::Interrupted,
            _ => ErrorKind::Other,
        }
    }
}

impl embedded_io::ErrorType for PortWrapper {
    type Error = IoError;
}

impl embedded_io::Read for PortWrapper {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        std::io::Read::read(&mut self.0, buf).map_err(IoError)
    }
}

impl embedded_io::Write for PortWrapper {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        std::io::Write::write(&mut self.0, buf).map_err(IoError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        std::io::Write::flush(&mut self.0).map_err(IoError)
    }
}

fn main() {
    // Get serial port from command line arg or interactive selection
    let port_name = env::args().nth(1).unwrap_or_else(|| {
        let ports = serialport::available_ports().expect("Failed to enumerate serial ports");

        if ports.is_empty() {
            eprintln!("No serial ports found!");
            std::process::exit(1);
        }

        let port_names: Vec<String> = ports.iter().map(|p| p.port_name.clone()).collect();

        Select::new("Select a serial port:", port_names)
            .prompt()
            .expect("Failed to select port")
    });

    println!("Serving the register console on {}", port_name);
    println!(
        "Attach a terminal emulator at {} 8N1; Ctrl-C there ends the session.",
        BAUD_RATE
    );

    let port = serialport::new(&port_name, BAUD_RATE)
        .timeout(Duration::from_millis(SERIAL_TIMEOUT_MS))
        .open()
        .expect("Failed to open serial port");

    let mut editor = RegisterEditor::new(PortWrapper(port), SimCharger::new());
    editor.show_menu().expect("Failed to write to serial port");

    let mut key = [0u8; 1];
    loop {
        match editor.console_mut().read(&mut key) {
            Ok(0) => continue,
            Ok(_) => {
                if key[0] == ETX {
                    break;
                }
                // The console stays silent on register and decode failures;
                // note them host-side instead.
                if let Err(err) = editor.handle_key(key[0]) {
                    eprintln!("keystroke dropped: {}", err);
                }
            }
            Err(err) if err.kind() == ErrorKind::TimedOut => continue,
            Err(err) => {
                eprintln!("serial port error: {}", err);
                break;
            }
        }
    }

    editor.terminate().expect("Failed to write to serial port");
    println!("Session closed.");
}
