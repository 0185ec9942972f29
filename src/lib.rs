//! This crate provides an interactive register configure tool for the TI BQ24250 battery charger.
//!
//! An operator on a character terminal picks one of the part's seven
//! registers by number, types a two digit hex value and confirms with
//! carriage return; the tool writes the byte over I2C and reads it back for
//! verification. A session looks like so:
//!
//! ```text
//! * BQ24250 Register configure tool *
//! Select register 1 to 7: 3
//! REG3: value=0x8c [10001100]
//! > a5
//! Register set finished.
//! REG3: value=0xa5 [10100101]
//! ```
//!
//! The editing core ([`editor::RegisterEditor`]) is a state machine fed one
//! keystroke at a time from whatever loop owns the terminal: carriage return
//! selects, commits or aborts, backspace steps one digit back, and anything
//! unexpected is ignored. Output goes to any [`embedded_io::Write`];
//! register traffic goes through the [`access::RegisterAccess`] capability,
//! normally the bundled [`charger::Bq24250`] I2C driver.
//!
//! It supports `no_std` environments by use of the `no_std` feature flag.
//!
//! The terminal attached to the console side should be configured like so:
//! * Local echo: off (the tool echoes accepted keys itself)
//! * Newline handling: send CR
//!
//! See `demos/serial.rs` for a host-side bench setup serving the console
//! over a serial port.

#![cfg_attr(feature = "no_std", no_std)]

pub mod access;
pub mod charger;
pub mod codec;
pub mod editor;
pub mod error;
pub mod registers;
pub mod types;

#[cfg(test)]
mod mock_bus;
#[cfg(test)]
mod mock_console;
