//! Byte/text conversions for the operator console.
//!
//! Register values travel as two hex digit characters inbound and a
//! hex + binary rendering outbound. All functions here are pure; the editor
//! owns sequencing and decides when a character is allowed to reach the
//! decoder.

use core::fmt::Write;

use thiserror::Error;

/// A character reached the nibble decoder without being a hex digit.
///
/// The editor only stores characters that passed [`is_hex_digit`], so this
/// surfacing means a caller bypassed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("not a hexadecimal digit: 0x{0:02x}")]
pub struct InvalidDigit(pub u8);

/// Render a byte as two lowercase hex digits, zero padded.
pub fn byte_to_hex(value: u8) -> heapless::String<2> {
    let mut out = heapless::String::new();
    let _ = write!(out, "{:02x}", value);
    out
}

/// Render a byte as eight `'0'`/`'1'` characters, most significant bit first.
pub fn byte_to_binary(value: u8) -> heapless::String<8> {
    let mut out = heapless::String::new();
    let _ = write!(out, "{:08b}", value);
    out
}

/// True for `0-9`, `a-f` and `A-F`.
pub fn is_hex_digit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

/// Decode one hex digit character to its 0-15 value.
pub fn hex_digit_value(c: u8) -> Result<u8, InvalidDigit> {
    match (c as char).to_digit(16) {
        Some(value) => Ok(value as u8),
        None => Err(InvalidDigit(c)),
    }
}
