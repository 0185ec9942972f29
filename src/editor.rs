//! The keystroke-driven register editor.
//!
//! One [`RegisterEditor`] is one interactive session: the hosting loop polls
//! the terminal for bytes and feeds them in one at a time; the editor echoes,
//! prompts and performs register traffic through its capability. The cycle is
//!
//! 1. menu: pick a register by number 1-7,
//! 2. value entry: two hex digits, high nibble first, backspace to step back,
//! 3. confirm: carriage return writes the byte and reads it back for display.
//!
//! Anything unexpected is silently ignored and failed register traffic
//! silently aborts the step with all entered digits kept, so a glitchy line
//! never corrupts an edit. The keystroke handler still reports those
//! swallowed failures as errors for hosts that want to log them.

use core::fmt::Write;

use crate::{
    access::RegisterAccess,
    codec,
    error::{Error, Result},
    registers::ChargerRegister,
};

const CR: u8 = b'\r';
const BACKSPACE: u8 = 0x08;

/// The sequence a terminal renders as erasing one character.
const ERASE: &[u8] = &[0x08, b' ', 0x08];

const BANNER: &str = "\r\n* BQ24250 Register configure tool *\r\n";
const SELECT_PROMPT: &str = "Select register 1 to 7: ";
const SET_FINISHED: &str = "Register set finished.\r\n";
const TERMINATED: &str = "Program terminated.\r\n";

/// Where a session is in the select/type/confirm cycle.
///
/// Digit-entry variants carry everything accumulated so far, so stepping
/// backward structurally discards the later digit, and a full pending value
/// only exists in [`Confirm`](Self::Confirm).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// Before the first menu display or after termination. Keystrokes are
    /// discarded.
    Idle,
    /// Menu shown, waiting for a register number 1-7.
    SelectRegister,
    /// Register chosen, waiting for the high nibble character.
    HighNibble { register: ChargerRegister },
    /// High nibble stored, waiting for the low nibble character.
    LowNibble { register: ChargerRegister, high: u8 },
    /// Both nibbles stored, waiting for carriage return or backspace.
    Confirm {
        register: ChargerRegister,
        high: u8,
        low: u8,
    },
}

/// An interactive editing session over a console transport `W` and a
/// register capability `R`.
///
/// The editor owns the write side of the conversation; input bytes are
/// handed in by whatever loop owns the read side (which may borrow the same
/// transport through [`console_mut`](Self::console_mut)).
pub struct RegisterEditor<W, R> {
    console: W,
    charger: R,
    state: EditState,
}

impl<W: embedded_io::Write, R: RegisterAccess> RegisterEditor<W, R> {
    /// Create a session in [`EditState::Idle`]. Nothing is printed until
    /// [`show_menu`](Self::show_menu) starts the conversation.
    pub fn new(console: W, charger: R) -> Self {
        Self {
            console,
            charger,
            state: EditState::Idle,
        }
    }

    /// Current position in the editing cycle.
    pub fn state(&self) -> EditState {
        self.state
    }

    /// The owned console, for hosts polling keystrokes from the same
    /// transport.
    pub fn console_mut(&mut self) -> &mut W {
        &mut self.console
    }

    /// Hand back the console and the register capability.
    pub fn release(self) -> (W, R) {
        (self.console, self.charger)
    }

    /// Print the menu banner and the select prompt, then wait for a
    /// selection.
    ///
    /// This is also the redisplay path after every finished or aborted edit,
    /// so a host may call it at any point to abandon the current entry.
    pub fn show_menu(&mut self) -> Result<(), W::Error, R::Error> {
        self.write_str(BANNER)?;
        self.write_str(SELECT_PROMPT)?;
        self.state = EditState::SelectRegister;
        Ok(())
    }

    /// Feed one keystroke.
    ///
    /// Errors report what the silent abort swallowed; state transitions
    /// never depend on the caller looking at them.
    pub fn handle_key(&mut self, key: u8) -> Result<(), W::Error, R::Error> {
        match self.state {
            EditState::Idle => Ok(()),
            EditState::SelectRegister => self.on_select(key),
            EditState::HighNibble { register } => self.on_high_nibble(key, register),
            EditState::LowNibble { register, high } => self.on_low_nibble(key, register, high),
            EditState::Confirm {
                register,
                high,
                low,
            } => self.on_confirm(key, register, high, low),
        }
    }

    /// Print the final termination message and go quiet.
    ///
    /// For the hosting loop's shutdown path. Afterwards every keystroke is
    /// discarded until [`show_menu`](Self::show_menu) starts a new
    /// conversation.
    pub fn terminate(&mut self) -> Result<(), W::Error, R::Error> {
        self.write_str(TERMINATED)?;
        self.state = EditState::Idle;
        Ok(())
    }

    fn on_select(&mut self, key: u8) -> Result<(), W::Error, R::Error> {
        match key {
            CR => self.show_menu(),
            b'1'..=b'7' => {
                let Some(register) = ChargerRegister::from_index(key - b'0') else {
                    return Ok(());
                };
                self.echo(key)?;
                self.write_str("\r\n")?;
                let value = self
                    .charger
                    .read_register(register)
                    .map_err(Error::RegisterRead)?;
                self.write_value_line(register, value, true)?;
                self.state = EditState::HighNibble { register };
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn on_high_nibble(
        &mut self,
        key: u8,
        register: ChargerRegister,
    ) -> Result<(), W::Error, R::Error> {
        match key {
            // Abort the edit, back to the menu.
            CR => {
                self.write_str("\r\n")?;
                self.show_menu()
            }
            _ if codec::is_hex_digit(key) => {
                self.echo(key)?;
                self.state = EditState::LowNibble {
                    register,
                    high: key,
                };
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn on_low_nibble(
        &mut self,
        key: u8,
        register: ChargerRegister,
        high: u8,
    ) -> Result<(), W::Error, R::Error> {
        match key {
            BACKSPACE => {
                self.write_bytes(ERASE)?;
                self.state = EditState::HighNibble { register };
                Ok(())
            }
            _ if codec::is_hex_digit(key) => {
                self.echo(key)?;
                self.state = EditState::Confirm {
                    register,
                    high,
                    low: key,
                };
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn on_confirm(
        &mut self,
        key: u8,
        register: ChargerRegister,
        high: u8,
        low: u8,
    ) -> Result<(), W::Error, R::Error> {
        match key {
            CR => self.commit(register, high, low),
            BACKSPACE => {
                self.write_bytes(ERASE)?;
                self.state = EditState::LowNibble { register, high };
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Write the pending value, then read it back so the operator sees what
    /// the part actually kept. Every fallible step before [`show_menu`]
    /// leaves the state untouched, so a failed commit can be retried or
    /// backed out of.
    ///
    /// [`show_menu`]: Self::show_menu
    fn commit(
        &mut self,
        register: ChargerRegister,
        high: u8,
        low: u8,
    ) -> Result<(), W::Error, R::Error> {
        self.write_str("\r\n")?;
        let low = codec::hex_digit_value(low)?;
        let high = codec::hex_digit_value(high)?;
        let value = (high << 4) | low;
        self.charger
            .write_register(register, value)
            .map_err(Error::RegisterWrite)?;
        self.write_str(SET_FINISHED)?;
        let written = self
            .charger
            .read_register(register)
            .map_err(Error::RegisterRead)?;
        self.write_value_line(register, written, false)?;
        self.show_menu()
    }

    /// Print `REG<n>: value=0x<hex> [<binary>]` and optionally the entry
    /// prompt on the next line.
    fn write_value_line(
        &mut self,
        register: ChargerRegister,
        value: u8,
        prompt: bool,
    ) -> Result<(), W::Error, R::Error> {
        let mut line: heapless::String<40> = heapless::String::new();
        let _ = write!(
            line,
            "REG{}: value=0x{} [{}]\r\n",
            register.index(),
            codec::byte_to_hex(value),
            codec::byte_to_binary(value)
        );
        if prompt {
            let _ = line.push_str("> ");
        }
        self.write_str(&line)
    }

    fn echo(&mut self, key: u8) -> Result<(), W::Error, R::Error> {
        self.write_bytes(&[key])
    }

    fn write_str(&mut self, text: &str) -> Result<(), W::Error, R::Error> {
        self.write_bytes(text.as_bytes())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), W::Error, R::Error> {
        self.console.write_all(bytes).map_err(Error::Console)
    }
}
