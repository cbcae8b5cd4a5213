// src/util/io/serial.rs
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_serial::{SerialPortBuilderExt, SerialStream};

use crate::error::{HmtlError, Result};
use crate::log_info;
use crate::util::io::transport::LineTransport;

/// Baud rate the module's configuration mode listens at
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Serial port link to a module (USB or RS232 adapter)
pub struct SerialTransport {
    port_path: String,
    reader: BufReader<SerialStream>,
}

impl SerialTransport {
    pub fn open(port_path: &str, baud_rate: u32, timeout: Duration) -> Result<Self> {
        log_info!("Opening serial port {} at {} baud", port_path, baud_rate);

        let port = tokio_serial::new(port_path, baud_rate)
            .timeout(timeout)
            .open_native_async()
            .map_err(|e| HmtlError::Connection(format!("{}: {}", port_path, e)))?;

        Ok(Self {
            port_path: port_path.to_string(),
            reader: BufReader::new(port),
        })
    }
}

impl LineTransport for SerialTransport {
    async fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let read = self.reader.read_until(b'\n', &mut line).await?;
        if read == 0 {
            return Ok(None);
        }

        while matches!(line.last(), Some(b'\n') | Some(b'\r')) {
            line.pop();
        }
        Ok(Some(line))
    }

    async fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let port = self.reader.get_mut();
        port.write_all(data).await?;
        port.flush().await?;
        Ok(())
    }
}

impl std::fmt::Debug for SerialTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialTransport")
            .field("port_path", &self.port_path)
            .field("reader", &"<SerialStream>")
            .finish()
    }
}
