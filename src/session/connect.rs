use crate::{
    error::{HmtlError, Result},
    log_info,
    session::{Session, SessionConfig, SessionState},
    util::io::{LineTransport, SerialTransport},
};

impl<T: LineTransport> Session<T> {
    /// Take ownership of an open link and wait for the module's ready signal.
    ///
    /// In dry-run mode the handshake is skipped and the transport is never touched.
    pub async fn connect(transport: T, config: SessionConfig) -> Result<Self> {
        let mut session = Self {
            config,
            transport: Some(transport),
            state: SessionState::Connecting,
        };

        if session.config.dry_run {
            session.state = SessionState::Ready;
            return Ok(session);
        }

        session.wait_for_ready().await?;
        Ok(session)
    }

    /// A session with no device attached; every send is acknowledged immediately
    pub fn dry_run(mut config: SessionConfig) -> Self {
        config.dry_run = true;
        log_info!("Dry run: no device I/O will be performed");

        Self {
            config,
            transport: None,
            state: SessionState::Ready,
        }
    }
}

impl Session<SerialTransport> {
    /// Open the configured serial device (unless dry-running) and connect
    pub async fn open(config: SessionConfig) -> Result<Self> {
        if config.dry_run {
            return Ok(Self::dry_run(config));
        }

        let device = config
            .device
            .clone()
            .ok_or_else(|| HmtlError::Connection("no serial device specified".to_string()))?;

        let transport = SerialTransport::open(&device, config.baud_rate, config.timeout)?;
        Self::connect(transport, config).await
    }
}
