//! UART serial console abstractions
//!
//! The console is polled from the main loop, so reads never wait: they
//! hand back whatever byte is already buffered.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been queued or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Write text followed by a line terminator
    fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write_blocking(text.as_bytes())?;
        self.write_blocking(b"\r\n")
    }
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Take one received byte if one is buffered
    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Capture {
        out: [u8; 16],
        len: usize,
    }

    impl UartTx for Capture {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            let end = self.len + data.len();
            self.out.get_mut(self.len..end).ok_or(())?.copy_from_slice(data);
            self.len = end;
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_line_terminates() {
        let mut port = Capture { out: [0; 16], len: 0 };
        port.write_line("ok").unwrap();
        assert_eq!(&port.out[..port.len], b"ok\r\n");
        assert_eq!(port.write_line("this line is too long"), Err(()));
    }
}
