//! Mock console transport used for testing the editor's output.

/// An [`embedded_io::Write`] sink that records everything for assertions.
///
/// The editor never reads from its console (the hosting loop owns the read
/// side), so unlike a full serial mock this only captures output.
pub struct MockConsole {
    /// Bytes written to the console so far.
    output: heapless::Vec<u8, 512>,
    /// Whether writes should fail with a simulated error.
    should_error_on_write: bool,
}

/// Error type for the mock console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockConsoleError {
    /// The capture buffer filled up.
    BufferOverflow,
    /// Simulated error for testing write failure handling.
    SimulatedError,
}

impl core::fmt::Display for MockConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MockConsoleError::BufferOverflow => write!(f, "capture buffer overflow"),
            MockConsoleError::SimulatedError => write!(f, "simulated write error"),
        }
    }
}

impl core::error::Error for MockConsoleError {}

impl embedded_io::Error for MockConsoleError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            MockConsoleError::BufferOverflow => embedded_io::ErrorKind::OutOfMemory,
            MockConsoleError::SimulatedError => embedded_io::ErrorKind::Other,
        }
    }
}

impl embedded_io::ErrorType for MockConsole {
    type Error = MockConsoleError;
}

impl embedded_io::Write for MockConsole {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.should_error_on_write {
            return Err(MockConsoleError::SimulatedError);
        }
        self.output
            .extend_from_slice(buf)
            .map_err(|_| MockConsoleError::BufferOverflow)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl MockConsole {
    pub fn new() -> Self {
        Self {
            output: heapless::Vec::new(),
            should_error_on_write: false,
        }
    }

    /// Everything written since construction or the last [`clear`](Self::clear).
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Forget the captured output.
    pub fn clear(&mut self) {
        self.output.clear();
    }

    /// Make every write fail with [`MockConsoleError::SimulatedError`].
    pub fn set_write_error(&mut self, should_error: bool) {
        self.should_error_on_write = should_error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::Write;

    #[test]
    fn captures_written_bytes_in_order() {
        let mut console = MockConsole::new();
        console.write_all(b"REG1").unwrap();
        console.write_all(b": ").unwrap();
        assert_eq!(console.output(), b"REG1: ");
    }

    #[test]
    fn clear_forgets_previous_output() {
        let mut console = MockConsole::new();
        console.write_all(b"menu").unwrap();
        console.clear();
        assert!(console.output().is_empty());

        console.write_all(b"> ").unwrap();
        assert_eq!(console.output(), b"> ");
    }

    #[test]
    fn write_error_flag_fails_writes() {
        let mut console = MockConsole::new();
        console.set_write_error(true);
        assert_eq!(
            console.write_all(b"x"),
            Err(MockConsoleError::SimulatedError)
        );
        assert!(console.output().is_empty());

        console.set_write_error(false);
        console.write_all(b"x").unwrap();
        assert_eq!(console.output(), b"x");
    }
}
