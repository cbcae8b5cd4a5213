use crate::{
    error::Result,
    log_debug, log_info,
    protocol::READY_TOKEN,
    session::{Session, SessionState},
    util::io::LineTransport,
};

impl<T: LineTransport> Session<T> {
    /// Skip device chatter until the module announces it is ready for commands
    pub(super) async fn wait_for_ready(&mut self) -> Result<()> {
        log_info!("***** Waiting for ready from module *****");

        loop {
            match self.next_line(READY_TOKEN).await? {
                Some(line) if line == READY_TOKEN => {
                    self.state = SessionState::Ready;
                    log_info!("Module is ready");
                    return Ok(());
                }
                Some(line) => log_debug!("Ignoring '{}' before ready", line),
                None => {}
            }
        }
    }
}
