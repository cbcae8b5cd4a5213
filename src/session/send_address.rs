use crate::{
    error::Result,
    log_info,
    protocol::{encode_address, Command, RecordType},
    session::Session,
    util::io::LineTransport,
};

impl<T: LineTransport> Session<T> {
    /// Change only the module address, keeping the rest of its stored configuration.
    ///
    /// Any rejected step closes the session.
    pub async fn send_address(&mut self, address: u64) -> Result<()> {
        log_info!("***** Setting address to {} *****", address);

        let record = encode_address(address)?;

        let result = self.send_command(Command::Read).await;
        self.close_on_error(result)?;
        let result = self.send_command(Command::Start).await;
        self.close_on_error(result)?;
        let result = self.send_record(RecordType::Header, &record).await;
        self.close_on_error(result)?;
        let result = self.send_command(Command::End).await;
        self.close_on_error(result)
    }
}
