//! Error types for the register editor and charger driver.

use thiserror::Error;

use crate::codec;

pub type Result<T, C, B> = core::result::Result<T, Error<C, B>>;

/// Everything that can go wrong while driving the editor.
///
/// `C` is the console transport's error type and `B` the register access
/// capability's. The state machine never changes course based on these being
/// observed; they exist so a hosting loop can log what the operator console
/// deliberately stays silent about.
#[derive(Error, Debug)]
pub enum Error<C, B> {
    /// The console transport rejected an output write.
    #[error("console write failed")]
    Console(C),
    /// A stored digit character failed to decode during commit.
    #[error(transparent)]
    InvalidDigit(codec::InvalidDigit),
    /// The capability declined a register read.
    #[error("register read failed")]
    RegisterRead(B),
    /// The capability declined a register write. The pending value is kept.
    #[error("register write failed")]
    RegisterWrite(B),
}

impl<C, B> From<codec::InvalidDigit> for Error<C, B> {
    fn from(err: codec::InvalidDigit) -> Self {
        Error::InvalidDigit(err)
    }
}
