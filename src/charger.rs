//! I2C driver for the TI BQ24250 battery charger.

use embedded_hal::i2c::I2c;

use crate::{
    access::RegisterAccess,
    registers::ChargerRegister,
    types::{ChargeControl, ChargeState, ChargerStatus, FaultCode, InputCurrentLimit},
};

/// Seven-bit I2C address of the BQ24250.
pub const DEFAULT_ADDRESS: u8 = 0x6a;

/// BQ24250 driver over any [`embedded_hal::i2c::I2c`] bus.
///
/// Registers are one byte each, addressed through the part's register
/// pointer: a write carries `[register, value]`, a read sets the pointer
/// then reads the byte back.
pub struct Bq24250<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Bq24250<I2C> {
    /// Create a driver using the part's fixed address (0x6a).
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a driver on a non-default address, e.g. behind a translator.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Hand the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Read one register.
    pub fn read_register(&mut self, register: ChargerRegister) -> Result<u8, I2C::Error> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register.into()], &mut value)?;
        Ok(value[0])
    }

    /// Write one register.
    pub fn write_register(
        &mut self,
        register: ChargerRegister,
        value: u8,
    ) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[register.into(), value])
    }

    /// Read and unpack REG1.
    pub fn status(&mut self) -> Result<ChargerStatus, I2C::Error> {
        let raw = self.read_register(ChargerRegister::Status)?;
        Ok(ChargerStatus::from_bytes([raw]))
    }

    /// Report the charge cycle state.
    pub fn charge_state(&mut self) -> Result<ChargeState, I2C::Error> {
        let status = self.status()?;
        Ok(ChargeState::from_code(status.stat()))
    }

    /// Report the latched fault, if any.
    pub fn fault(&mut self) -> Result<FaultCode, I2C::Error> {
        let status = self.status()?;
        Ok(FaultCode::from_code(status.fault()))
    }

    /// Stop the I2C watchdog from resetting the part.
    ///
    /// With the watchdog enabled an expiry sets WD_FAULT and restores
    /// default register values; an interactive session wants it off.
    pub fn disable_watchdog(&mut self) -> Result<(), I2C::Error> {
        let status = self.status()?;
        let updated = status.with_wd_en(false);
        self.write_register(ChargerRegister::Status, updated.into_bytes()[0])
    }

    /// Enable or disable charging via the CE bit.
    pub fn set_charge_enabled(&mut self, enabled: bool) -> Result<(), I2C::Error> {
        let control = self.control()?;
        let updated = control.with_ce_disable(!enabled);
        self.write_register(ChargerRegister::Control, updated.into_bytes()[0])
    }

    /// Enter or leave high impedance mode.
    pub fn set_high_impedance(&mut self, enabled: bool) -> Result<(), I2C::Error> {
        let control = self.control()?;
        let updated = control.with_hz_mode(enabled);
        self.write_register(ChargerRegister::Control, updated.into_bytes()[0])
    }

    /// Select the input current limit.
    pub fn set_input_current_limit(
        &mut self,
        limit: InputCurrentLimit,
    ) -> Result<(), I2C::Error> {
        let control = self.control()?;
        let updated = control.with_in_ilim(limit as u8);
        self.write_register(ChargerRegister::Control, updated.into_bytes()[0])
    }

    /// Restore the part's default register values. RESET reads back clear.
    pub fn reset(&mut self) -> Result<(), I2C::Error> {
        let control = self.control()?;
        let updated = control.with_reset(true);
        self.write_register(ChargerRegister::Control, updated.into_bytes()[0])
    }

    fn control(&mut self) -> Result<ChargeControl, I2C::Error> {
        let raw = self.read_register(ChargerRegister::Control)?;
        Ok(ChargeControl::from_bytes([raw]))
    }
}

impl<I2C: I2c> RegisterAccess for Bq24250<I2C> {
    type Error = I2C::Error;

    fn read_register(&mut self, register: ChargerRegister) -> Result<u8, Self::Error> {
        self.read_register(register)
    }

    fn write_register(&mut self, register: ChargerRegister, value: u8) -> Result<(), Self::Error> {
        self.write_register(register, value)
    }
}
