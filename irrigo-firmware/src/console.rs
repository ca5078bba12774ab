//! Serial console session
//!
//! Drains received bytes into the line assembler, routes each complete
//! line through the command table, and writes the reply back one line
//! at a time.

use defmt::*;

use irrigo_core::controller::{ConsoleRouter, Controller};
use irrigo_core::traits::Board;
use irrigo_hal_rp2040::{UartRx, UartTx};
use irrigo_protocol::{Dispatch, LineBuffer, LineError, Reply};

/// Console state between polls
pub struct ConsoleSession<U> {
    port: U,
    lines: LineBuffer,
    reply: Reply,
}

impl<U: UartRx + UartTx> ConsoleSession<U> {
    /// Create a session on a serial port
    pub fn new(port: U) -> Self {
        Self {
            port,
            lines: LineBuffer::new(),
            reply: Reply::new(),
        }
    }

    /// Handle every byte received since the last poll
    pub fn poll<B: Board>(&mut self, router: &ConsoleRouter<B>, controller: &mut Controller<B>) {
        loop {
            let byte = match self.port.try_read_byte() {
                Ok(Some(byte)) => byte,
                Ok(None) => break,
                Err(_) => {
                    warn!("Console read error");
                    self.lines.reset();
                    break;
                }
            };

            match self.lines.feed(byte) {
                Ok(Some(line)) => self.execute(router, controller, &line),
                Ok(None) => {}
                Err(e) => self.reject(e),
            }
        }
    }

    fn execute<B: Board>(
        &mut self,
        router: &ConsoleRouter<B>,
        controller: &mut Controller<B>,
        line: &str,
    ) {
        debug!("Command: {}", line);

        self.reply.clear();
        match router.dispatch(controller, line, &mut self.reply) {
            Dispatch::Handled => {}
            Dispatch::Unrecognized => debug!("Unrecognized command"),
            Dispatch::Empty => return,
        }
        if self.reply.is_truncated() {
            warn!("Reply truncated");
        }
        self.send_reply();
    }

    fn reject(&mut self, error: LineError) {
        debug!("Rejected line: {:?}", error);

        self.reply.clear();
        self.reply.line(match error {
            LineError::Overflow => "line too long",
            LineError::InvalidUtf8 => "invalid text",
        });
        self.send_reply();
    }

    fn send_reply(&mut self) {
        for line in self.reply.as_str().lines() {
            if self.port.write_line(line).is_err() {
                warn!("Console write error");
                return;
            }
        }
    }
}
