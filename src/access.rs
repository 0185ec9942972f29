//! The register access capability the editor dispatches through.

use crate::registers::ChargerRegister;

/// Byte-level access to the charger's register file.
///
/// The editor treats implementations as opaque: it neither knows nor cares
/// how a register maps onto bus transactions. [`Bq24250`] implements this
/// over I2C; tests substitute instrumented fakes.
///
/// [`Bq24250`]: crate::charger::Bq24250
pub trait RegisterAccess {
    type Error;

    /// Read the current register contents.
    fn read_register(&mut self, register: ChargerRegister) -> Result<u8, Self::Error>;

    /// Replace the register contents.
    fn write_register(&mut self, register: ChargerRegister, value: u8) -> Result<(), Self::Error>;
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for &mut T {
    type Error = T::Error;

    fn read_register(&mut self, register: ChargerRegister) -> Result<u8, Self::Error> {
        T::read_register(self, register)
    }

    fn write_register(&mut self, register: ChargerRegister, value: u8) -> Result<(), Self::Error> {
        T::write_register(self, register, value)
    }
}
