//! Buffered UART console
//!
//! Adapts any `embedded-io` reader and writer pair to the console
//! traits from `irrigo-hal`. On the RP2040 this wraps the two halves of
//! a `BufferedUart`.

use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io::{Read, ReadReady, Write};
use irrigo_hal::{UartRx, UartTx};

/// Serial console over a reader and a writer
pub struct SerialConsole<R, W> {
    rx: R,
    tx: W,
}

impl<R, W> SerialConsole<R, W> {
    /// Create a console from its two halves
    pub fn new(rx: R, tx: W) -> Self {
        Self { rx, tx }
    }
}

impl<R: Read + ReadReady, W> UartRx for SerialConsole<R, W> {
    type Error = R::Error;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.rx.read_ready()? {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        match self.rx.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}

impl<R, W: Write> UartTx for SerialConsole<R, W> {
    type Error = W::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.flush()
    }
}

/// Console on a buffered RP2040 UART
pub type BufferedConsole = SerialConsole<BufferedUartRx, BufferedUartTx>;
