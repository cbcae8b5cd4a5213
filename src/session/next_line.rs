use crate::{
    error::{HmtlError, Result},
    log_debug, log_error,
    session::{Session, SessionState},
    util::io::LineTransport,
};

impl<T: LineTransport> Session<T> {
    /// Read one line within the session's deadline.
    ///
    /// Returns `None` for a line that is not valid UTF-8. A deadline miss or end
    /// of stream closes the session.
    pub(super) async fn next_line(&mut self, waiting_for: &str) -> Result<Option<String>> {
        let timeout = self.config.timeout;
        let transport = self
            .transport
            .as_mut()
            .ok_or_else(|| HmtlError::Connection("no transport attached".to_string()))?;

        let line = match tokio::time::timeout(timeout, transport.read_line()).await {
            Ok(Ok(Some(line))) => line,
            Ok(Ok(None)) | Err(_) => {
                self.state = SessionState::Closed;
                log_error!("Receive returned empty, timed out waiting for '{}'", waiting_for);
                return Err(HmtlError::ProtocolTimeout {
                    waiting_for: waiting_for.to_string(),
                });
            }
            Ok(Err(e)) => {
                self.state = SessionState::Closed;
                return Err(e);
            }
        };

        match String::from_utf8(line) {
            Ok(text) => {
                let text = text.trim().to_string();
                log_debug!("  - received '{}'", text);
                Ok(Some(text))
            }
            Err(e) => {
                log_debug!("  - received raw {:02x?}", e.as_bytes());
                Ok(None)
            }
        }
    }
}
