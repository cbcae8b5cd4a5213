use crate::{
    error::Result,
    log_info,
    protocol::{Command, RecordType},
    session::Session,
    util::{io::LineTransport, string::to_hex},
};

impl<T: LineTransport> Session<T> {
    /// Send a text command
    pub async fn send_command(&mut self, command: Command) -> Result<()> {
        log_info!("send_command: {}", command);
        self.exchange(command.token().as_bytes(), command.token(), false).await
    }

    /// Send a binary configuration record
    pub async fn send_record(&mut self, record_type: RecordType, record: &[u8]) -> Result<()> {
        log_info!("send_config:  {:<10} {}", record_type.name(), to_hex(record));
        self.exchange(record, record_type.name(), false).await
    }

    /// Load the module's stored configuration
    pub async fn read_config(&mut self) -> Result<()> {
        self.send_command(Command::Read).await
    }

    /// Have the module print its current configuration; its output is relayed to the log
    pub async fn print_config(&mut self) -> Result<()> {
        log_info!("send_command: {}", Command::Print);
        self.exchange(Command::Print.token().as_bytes(), Command::Print.token(), true)
            .await
    }

    /// Persist the module's current configuration to EEPROM
    pub async fn write_config(&mut self) -> Result<()> {
        self.send_command(Command::Write).await
    }
}
