use crate::{
    error::{HmtlError, Result},
    log_debug, log_info, log_warn,
    protocol::{ACK_TOKEN, FAIL_TOKEN, TERMINATOR},
    session::{Session, SessionState},
    util::io::LineTransport,
};

impl<T: LineTransport> Session<T> {
    /// One request/acknowledge round trip.
    ///
    /// With `relay` set, free-form lines the device prints before acknowledging
    /// are logged at info level instead of debug.
    pub(super) async fn exchange(&mut self, data: &[u8], label: &str, relay: bool) -> Result<()> {
        match self.state {
            SessionState::Ready | SessionState::Failed => {}
            state => {
                return Err(HmtlError::InvalidState {
                    state: state.to_string(),
                    action: format!("send '{}'", label),
                })
            }
        }

        if self.config.dry_run {
            log_debug!("Dry run: '{}' acknowledged without sending", label);
            return Ok(());
        }

        let transport = self
            .transport
            .as_mut()
            .ok_or_else(|| HmtlError::Connection("no transport attached".to_string()))?;

        let mut frame = Vec::with_capacity(data.len() + 1);
        frame.extend_from_slice(data);
        frame.push(TERMINATOR);

        if let Err(e) = transport.write_all(&frame).await {
            self.state = SessionState::Closed;
            return Err(e);
        }
        self.state = SessionState::AwaitingAck;

        loop {
            match self.next_line(ACK_TOKEN).await? {
                Some(line) if line == ACK_TOKEN => {
                    self.state = SessionState::Ready;
                    return Ok(());
                }
                Some(line) if line == FAIL_TOKEN => {
                    self.state = SessionState::Failed;
                    log_warn!("Configuration command '{}' failed", label);
                    return Err(HmtlError::ProtocolFail {
                        command: label.to_string(),
                    });
                }
                Some(line) if relay => log_info!("{}", line),
                Some(line) => log_debug!("Ignoring '{}' while waiting for ack", line),
                None => {}
            }
        }
    }
}
