// src/util/io/transport.rs
//! Transport capability the session drives: line reads and raw writes

use crate::error::Result;

/// A byte-stream link to a module.
///
/// Implementations block (asynchronously) until a full line arrives; the
/// session bounds each read with its own deadline.
#[allow(async_fn_in_trait)]
pub trait LineTransport {
    /// Next `'\n'`-terminated line without the terminator, or `None` at end of stream
    async fn read_line(&mut self) -> Result<Option<Vec<u8>>>;

    /// Write every byte and flush
    async fn write_all(&mut self, data: &[u8]) -> Result<()>;
}
