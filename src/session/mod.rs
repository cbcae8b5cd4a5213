//! Transport Session - drives the ready/ack/fail handshake with a module
//!
//! ```text
//!  Connecting --"ready"--> Ready --send--> AwaitingAck --"ok"---> Ready
//!                                              |
//!                                              +----"fail"-> Failed --send--> AwaitingAck
//!  (timeout, end of stream, or a rejected transfer step) --> Closed
//! ```

mod close;
mod connect;
mod exchange;
mod next_line;
mod send_address;
mod send_command;
mod send_configuration;
mod wait_for_ready;

use std::time::Duration;

use crate::util::io::DEFAULT_BAUD_RATE;

/// What to do when the device rejects an individual output record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFailurePolicy {
    /// Stop the transfer and return the failure
    #[default]
    Abort,
    /// Log the failure, note it in the report, and send the remaining records
    Continue,
}

/// Everything that shapes a session, fixed at construction
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Serial device path; unused in dry-run mode
    pub device: Option<String>,
    pub baud_rate: u32,
    /// Deadline for each line read from the device
    pub timeout: Duration,
    pub dry_run: bool,
    pub record_failure_policy: RecordFailurePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            device: None,
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: Duration::from_secs(10),
            dry_run: false,
            record_failure_policy: RecordFailurePolicy::Abort,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connecting,
    Ready,
    AwaitingAck,
    /// The last command or output record was rejected; the link is idle and usable
    Failed,
    /// The link timed out, closed, or a transfer was aborted; nothing more can be sent
    Closed,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Connecting => "connecting",
            SessionState::Ready => "ready",
            SessionState::AwaitingAck => "awaiting ack",
            SessionState::Failed => "failed",
            SessionState::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Outcome of a configuration transfer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferReport {
    /// Records acknowledged by the device, header included
    pub records_sent: usize,
    /// Indices of outputs the device rejected (only with `RecordFailurePolicy::Continue`)
    pub failed_outputs: Vec<usize>,
}

/// Owns the link to one module for the duration of a transfer
#[derive(Debug)]
pub struct Session<T> {
    config: SessionConfig,
    transport: Option<T>,
    state: SessionState,
}

impl<T> Session<T> {
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }

    /// Give back the transport, closing the session
    pub fn into_transport(self) -> Option<T> {
        self.transport
    }
}
