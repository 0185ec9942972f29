//! Mock I2C bus used for testing the charger driver end of the editor.
//!
//! Behaves like a BQ24250 register file behind the part's register pointer
//! and logs every register byte moved, so tests can assert on transaction
//! order as well as contents.

use embedded_hal::i2c::{
    self, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation, SevenBitAddress,
};

/// Register count of the emulated part, addresses 0x00-0x06.
const REGISTER_COUNT: usize = 7;

/// One logged register access. Multi-byte transfers log one entry per byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    Read(u8),
    Write(u8, u8),
}

pub struct MockBus {
    /// The emulated register file.
    registers: [u8; REGISTER_COUNT],
    /// The device address the bus answers on.
    device_address: u8,
    /// The part's register pointer, set by the first written byte.
    pointer: u8,
    /// Every register byte read or written, in bus order.
    ops: heapless::Vec<BusOp, 64>,
    /// Whether register writes should fail. Pointer-only writes still
    /// succeed, so reads keep working while writes fail.
    should_error_on_write: bool,
    /// Whether register reads should fail.
    should_error_on_read: bool,
}

/// Error type for the mock bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBusError {
    /// Transaction addressed to a different device.
    AddressNack,
    /// Register pointer outside the part's register file.
    InvalidRegister,
    /// The operation log filled up.
    LogOverflow,
    /// Simulated error for testing read/write failure handling.
    SimulatedError,
}

impl i2c::Error for MockBusError {
    fn kind(&self) -> ErrorKind {
        match self {
            MockBusError::AddressNack => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
            MockBusError::InvalidRegister => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data),
            MockBusError::LogOverflow => ErrorKind::Other,
            MockBusError::SimulatedError => ErrorKind::Other,
        }
    }
}

impl ErrorType for MockBus {
    type Error = MockBusError;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.device_address {
            return Err(MockBusError::AddressNack);
        }
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => self.handle_write(bytes)?,
                Operation::Read(buffer) => self.handle_read(buffer)?,
            }
        }
        Ok(())
    }
}

impl MockBus {
    pub fn new(device_address: u8) -> Self {
        Self {
            registers: [0; REGISTER_COUNT],
            device_address,
            pointer: 0,
            ops: heapless::Vec::new(),
            should_error_on_write: false,
            should_error_on_read: false,
        }
    }

    /// Preload a register, bypassing the bus and the log.
    pub fn set_register(&mut self, address: u8, value: u8) {
        self.registers[address as usize] = value;
    }

    /// Current register contents, bypassing the bus and the log.
    pub fn register(&self, address: u8) -> u8 {
        self.registers[address as usize]
    }

    /// Every register byte moved so far, in bus order. Failed operations
    /// are not logged.
    pub fn ops(&self) -> &[BusOp] {
        &self.ops
    }

    /// Forget the logged operations.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Make register writes fail with [`MockBusError::SimulatedError`].
    pub fn set_write_error(&mut self, should_error: bool) {
        self.should_error_on_write = should_error;
    }

    /// Make register reads fail with [`MockBusError::SimulatedError`].
    pub fn set_read_error(&mut self, should_error: bool) {
        self.should_error_on_read = should_error;
    }

    fn handle_write(&mut self, bytes: &[u8]) -> Result<(), MockBusError> {
        let Some((&register, values)) = bytes.split_first() else {
            return Ok(());
        };
        self.pointer = register;
        if values.is_empty() {
            return Ok(());
        }
        if self.should_error_on_write {
            return Err(MockBusError::SimulatedError);
        }
        for &value in values {
            self.check_pointer()?;
            self.registers[self.pointer as usize] = value;
            self.log(BusOp::Write(self.pointer, value))?;
            self.pointer += 1;
        }
        Ok(())
    }

    fn handle_read(&mut self, buffer: &mut [u8]) -> Result<(), MockBusError> {
        if self.should_error_on_read {
            return Err(MockBusError::SimulatedError);
        }
        for slot in buffer.iter_mut() {
            self.check_pointer()?;
            *slot = self.registers[self.pointer as usize];
            self.log(BusOp::Read(self.pointer))?;
            self.pointer += 1;
        }
        Ok(())
    }

    fn check_pointer(&self) -> Result<(), MockBusError> {
        if (self.pointer as usize) < REGISTER_COUNT {
            Ok(())
        } else {
            Err(MockBusError::InvalidRegister)
        }
    }

    fn log(&mut self, op: BusOp) -> Result<(), MockBusError> {
        self.ops.push(op).map_err(|_| MockBusError::LogOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: u8 = 0x6a;

    #[test]
    fn write_then_read_round_trips() {
        let mut bus = MockBus::new(ADDRESS);
        bus.write(ADDRESS, &[0x03, 0xa5]).unwrap();

        let mut value = [0u8; 1];
        bus.write_read(ADDRESS, &[0x03], &mut value).unwrap();
        assert_eq!(value, [0xa5]);
        assert_eq!(bus.ops(), &[BusOp::Write(0x03, 0xa5), BusOp::Read(0x03)]);
    }

    #[test]
    fn wrong_device_address_nacks() {
        let mut bus = MockBus::new(ADDRESS);
        let result = bus.write(0x0b, &[0x00, 0x12]);
        assert!(matches!(result, Err(MockBusError::AddressNack)));
        assert!(bus.ops().is_empty());
    }

    #[test]
    fn pointer_past_the_register_file_is_rejected() {
        let mut bus = MockBus::new(ADDRESS);
        let mut value = [0u8; 1];
        let result = bus.write_read(ADDRESS, &[0x07], &mut value);
        assert!(matches!(result, Err(MockBusError::InvalidRegister)));
    }

    #[test]
    fn write_error_leaves_reads_working() {
        let mut bus = MockBus::new(ADDRESS);
        bus.set_register(0x01, 0x24);
        bus.set_write_error(true);

        let result = bus.write(ADDRESS, &[0x01, 0x00]);
        assert!(matches!(result, Err(MockBusError::SimulatedError)));
        assert!(bus.ops().is_empty());

        let mut value = [0u8; 1];
        bus.write_read(ADDRESS, &[0x01], &mut value).unwrap();
        assert_eq!(value, [0x24]);
    }

    #[test]
    fn sequential_reads_advance_the_pointer() {
        let mut bus = MockBus::new(ADDRESS);
        bus.set_register(0x00, 0x11);
        bus.set_register(0x01, 0x22);

        let mut values = [0u8; 2];
        bus.write_read(ADDRESS, &[0x00], &mut values).unwrap();
        assert_eq!(values, [0x11, 0x22]);
        assert_eq!(bus.ops(), &[BusOp::Read(0x00), BusOp::Read(0x01)]);
    }

    #[test]
    fn clear_ops_keeps_register_contents() {
        let mut bus = MockBus::new(ADDRESS);
        bus.write(ADDRESS, &[0x05, 0x28]).unwrap();
        bus.clear_ops();
        assert!(bus.ops().is_empty());
        assert_eq!(bus.register(0x05), 0x28);
    }
}
